use serde::{Deserialize, Serialize};

use crate::api::{SlotKind, SlotOccurrence};
use crate::models::{GridColumn, GridTopology, SlotCatalog, TopologyRow};

/// One catalog entry with its expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotInfo {
    pub name: String,
    pub kind: SlotKind,
    pub occurrences: Vec<SlotOccurrence>,
}

impl SlotInfo {
    /// Look up user input: trimmed and uppercased before matching.
    pub fn lookup(catalog: &SlotCatalog, raw_name: &str) -> Option<Self> {
        let name = raw_name.trim().to_uppercase();
        let occurrences = catalog.lookup(&name)?;
        let kind = occurrences.first()?.kind;
        Some(Self {
            name,
            kind,
            occurrences: occurrences.to_vec(),
        })
    }

    /// Every catalog entry, sorted by name.
    pub fn all(catalog: &SlotCatalog) -> Vec<Self> {
        catalog
            .iter()
            .filter_map(|(name, occurrences)| {
                occurrences.first().map(|first| Self {
                    name: name.to_string(),
                    kind: first.kind,
                    occurrences: occurrences.to_vec(),
                })
            })
            .collect()
    }
}

/// Static grid description for clients that render the table themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyData {
    pub theory_headers: Vec<String>,
    pub lab_headers: Vec<String>,
    pub columns: Vec<GridColumn>,
    pub lunch_column: usize,
    pub rows: Vec<TopologyRow>,
}

impl From<&GridTopology> for TopologyData {
    fn from(topology: &GridTopology) -> Self {
        Self {
            theory_headers: topology
                .theory_headers()
                .into_iter()
                .map(str::to_string)
                .collect(),
            lab_headers: topology
                .lab_headers()
                .into_iter()
                .map(str::to_string)
                .collect(),
            columns: topology.columns().to_vec(),
            lunch_column: topology.lunch_column(),
            rows: topology.rows().to_vec(),
        }
    }
}

pub const LIST_SLOTS: &str = "list_slots";
pub const GET_SLOT: &str = "get_slot";
pub const GET_TOPOLOGY: &str = "get_topology";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_normalises_input() {
        let info = SlotInfo::lookup(SlotCatalog::standard(), " ta1 ").unwrap();
        assert_eq!(info.name, "TA1");
        assert_eq!(info.kind, SlotKind::Theory);
        assert_eq!(info.occurrences.len(), 1);
        assert!(SlotInfo::lookup(SlotCatalog::standard(), "zz9").is_none());
    }

    #[test]
    fn test_all_covers_catalog() {
        let catalog = SlotCatalog::standard();
        let all = SlotInfo::all(catalog);
        assert_eq!(all.len(), catalog.len());
        assert!(all.windows(2).all(|w| w[0].name < w[1].name));
    }

    #[test]
    fn test_topology_data_from_standard_grid() {
        let data = TopologyData::from(GridTopology::standard());
        assert_eq!(data.theory_headers.len(), 10);
        assert_eq!(data.lab_headers.len(), 12);
        assert_eq!(data.lunch_column, 6);
        assert_eq!(data.rows.len(), 5);
        assert_eq!(data.rows[0].cells[0].label, "A1/L1");
    }
}
