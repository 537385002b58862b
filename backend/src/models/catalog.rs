//! Static FFCS slot catalog.
//!
//! Maps every slot name of the institutional grid to the ordered list of
//! concrete occurrences it expands to. Theory slots usually meet on two days,
//! tutorial (`T*`) and extension (`V*`) slots on one, and every lab slot
//! (`L1`..`L60`) covers a single lab period.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::slot::{Day, SlotKind, SlotOccurrence};

/// Theory period headers, morning then afternoon.
pub const THEORY_TIME_RANGES: [&str; 10] = [
    "08:00 to 08:50",
    "09:00 to 09:50",
    "10:00 to 10:50",
    "11:00 to 11:50",
    "12:00 to 12:50",
    "14:00 to 14:50",
    "15:00 to 15:50",
    "16:00 to 16:50",
    "17:00 to 17:50",
    "18:00 to 18:50",
];

/// Lab period headers, morning then afternoon.
pub const LAB_TIME_RANGES: [&str; 12] = [
    "08:00 to 08:50",
    "08:51 to 09:40",
    "09:51 to 10:40",
    "10:41 to 11:30",
    "11:40 to 12:30",
    "12:31 to 13:20",
    "14:00 to 14:50",
    "14:51 to 15:40",
    "15:51 to 16:40",
    "16:41 to 17:30",
    "17:40 to 18:30",
    "18:31 to 19:20",
];

/// Theory slots as `(name, [(day, index into THEORY_TIME_RANGES)])`.
const THEORY_SLOTS: &[(&str, &[(Day, usize)])] = &[
    ("A1", &[(Day::Mon, 0)]),
    ("F1", &[(Day::Mon, 1), (Day::Wed, 1)]),
    ("D1", &[(Day::Mon, 2), (Day::Thu, 0)]),
    ("TB1", &[(Day::Mon, 3)]),
    ("TG1", &[(Day::Mon, 4)]),
    ("A2", &[(Day::Mon, 5), (Day::Wed, 6)]),
    ("F2", &[(Day::Mon, 6), (Day::Wed, 7)]),
    ("D2", &[(Day::Mon, 7), (Day::Thu, 5)]),
    ("TB2", &[(Day::Mon, 8)]),
    ("TG2", &[(Day::Mon, 9)]),
    ("B1", &[(Day::Tue, 0), (Day::Thu, 1)]),
    ("G1", &[(Day::Tue, 1), (Day::Thu, 2)]),
    ("E1", &[(Day::Tue, 2), (Day::Fri, 0)]),
    ("TC1", &[(Day::Tue, 3)]),
    ("TAA1", &[(Day::Tue, 4)]),
    ("B2", &[(Day::Tue, 5), (Day::Thu, 6)]),
    ("G2", &[(Day::Tue, 6), (Day::Thu, 7)]),
    ("E2", &[(Day::Tue, 7), (Day::Fri, 5)]),
    ("TC2", &[(Day::Tue, 8)]),
    ("TAA2", &[(Day::Tue, 9)]),
    ("C1", &[(Day::Wed, 0), (Day::Fri, 1)]),
    ("V1", &[(Day::Wed, 2)]),
    ("V2", &[(Day::Wed, 3)]),
    ("TE1", &[(Day::Wed, 4)]),
    ("C2", &[(Day::Wed, 5), (Day::Fri, 6)]),
    ("TD2", &[(Day::Wed, 8)]),
    ("TBB2", &[(Day::Wed, 9)]),
    ("TCC1", &[(Day::Thu, 3)]),
    ("V3", &[(Day::Thu, 4)]),
    ("TE2", &[(Day::Thu, 8)]),
    ("TCC2", &[(Day::Thu, 9)]),
    ("TA1", &[(Day::Fri, 2)]),
    ("TF1", &[(Day::Fri, 3)]),
    ("TD1", &[(Day::Fri, 4)]),
    ("TA2", &[(Day::Fri, 7)]),
    ("TF2", &[(Day::Fri, 8)]),
    ("TDD2", &[(Day::Fri, 9)]),
];

/// Lab numbering per day: `(day, first morning lab, first afternoon lab)`.
///
/// Morning labs occupy lab periods 0..6 and afternoon labs 6..12, one
/// consecutive number per period.
const LAB_BLOCKS: &[(Day, u32, u32)] = &[
    (Day::Mon, 1, 31),
    (Day::Tue, 7, 37),
    (Day::Wed, 13, 43),
    (Day::Thu, 19, 49),
    (Day::Fri, 25, 55),
];

const LAB_PERIODS_PER_HALF: usize = 6;

/// Read-only slot name → occurrences table.
#[derive(Debug, Clone, Default)]
pub struct SlotCatalog {
    entries: BTreeMap<String, Vec<SlotOccurrence>>,
}

impl SlotCatalog {
    /// The institution's standard catalog, built once per process.
    pub fn standard() -> &'static SlotCatalog {
        static STANDARD: OnceLock<SlotCatalog> = OnceLock::new();
        STANDARD.get_or_init(Self::build_standard)
    }

    /// Build a catalog from arbitrary occurrences, grouped by slot name in
    /// input order.
    pub fn from_occurrences(occurrences: impl IntoIterator<Item = SlotOccurrence>) -> Self {
        let mut entries: BTreeMap<String, Vec<SlotOccurrence>> = BTreeMap::new();
        for occurrence in occurrences {
            entries
                .entry(occurrence.slot_name.clone())
                .or_default()
                .push(occurrence);
        }
        Self { entries }
    }

    fn build_standard() -> Self {
        let theory = THEORY_SLOTS.iter().flat_map(|(name, cells)| {
            cells.iter().map(move |(day, period)| {
                SlotOccurrence::new(*name, *day, THEORY_TIME_RANGES[*period], SlotKind::Theory)
            })
        });

        let labs = LAB_BLOCKS.iter().flat_map(|(day, morning, afternoon)| {
            let halves = [(*morning, 0), (*afternoon, LAB_PERIODS_PER_HALF)];
            halves.into_iter().flat_map(move |(first, offset)| {
                (0..LAB_PERIODS_PER_HALF).map(move |i| {
                    SlotOccurrence::new(
                        format!("L{}", first + i as u32),
                        *day,
                        LAB_TIME_RANGES[offset + i],
                        SlotKind::Lab,
                    )
                })
            })
        });

        Self::from_occurrences(theory.chain(labs))
    }

    /// Occurrences for an (already uppercased) slot name.
    pub fn lookup(&self, slot_name: &str) -> Option<&[SlotOccurrence]> {
        self.entries.get(slot_name).map(Vec::as_slice)
    }

    pub fn contains(&self, slot_name: &str) -> bool {
        self.entries.contains_key(slot_name)
    }

    /// Kind carried by the catalog entry, if the name is known.
    pub fn kind_of(&self, slot_name: &str) -> Option<SlotKind> {
        self.lookup(slot_name)
            .and_then(|occurrences| occurrences.first())
            .map(|o| o.kind)
    }

    /// All slot names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SlotOccurrence])> {
        self.entries
            .iter()
            .map(|(name, occurrences)| (name.as_str(), occurrences.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
