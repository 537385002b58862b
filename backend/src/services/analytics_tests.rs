#[cfg(test)]
mod tests {
    use crate::api::{Course, CourseId, Day, NewCourse};
    use crate::models::{CourseDraft, SlotCatalog};
    use crate::services::analytics::summarize_workload;

    fn course(id: i64, subject: &str, combo: &str) -> Course {
        CourseDraft::resolve(&NewCourse::new(subject, combo), SlotCatalog::standard())
            .unwrap()
            .into_course(CourseId::new(id))
    }

    #[test]
    fn test_empty_registry() {
        let summary = summarize_workload(&[]);

        assert_eq!(summary.total_courses, 0);
        assert_eq!(summary.total_slot_names, 0);
        assert_eq!(summary.theory_count, 0);
        assert_eq!(summary.lab_count, 0);
        assert_eq!(summary.total_weekly_hours, 0);
        assert_eq!(summary.theory_share, 0.0);
        assert_eq!(summary.lab_share, 0.0);
        assert!(summary.theory_share.is_finite());
        assert_eq!(summary.daily_histogram.len(), 5);
        assert!(summary.daily_histogram.values().all(|v| *v == 0));
        assert_eq!(summary.peak_daily_load, 1);
    }

    #[test]
    fn test_counts_and_histogram() {
        // B1: TUE+THU theory, TB1: MON theory, L7: TUE lab, A1: MON theory
        let courses = vec![course(1, "Compilers", "B1+TB1+L7"), course(2, "AI", "A1")];
        let summary = summarize_workload(&courses);

        assert_eq!(summary.total_courses, 2);
        assert_eq!(summary.total_slot_names, 4);
        assert_eq!(summary.theory_count, 4);
        assert_eq!(summary.lab_count, 1);
        assert_eq!(summary.total_weekly_hours, 5);
        assert!((summary.theory_share - 0.8).abs() < 1e-9);
        assert!((summary.lab_share - 0.2).abs() < 1e-9);

        assert_eq!(summary.daily_histogram[&Day::Mon], 2);
        assert_eq!(summary.daily_histogram[&Day::Tue], 2);
        assert_eq!(summary.daily_histogram[&Day::Wed], 0);
        assert_eq!(summary.daily_histogram[&Day::Thu], 1);
        assert_eq!(summary.daily_histogram[&Day::Fri], 0);
        assert_eq!(summary.peak_daily_load, 2);
    }

    #[test]
    fn test_slot_names_are_not_deduplicated_across_courses() {
        let courses = vec![course(1, "One", "A1"), course(2, "Two", "A1")];
        let summary = summarize_workload(&courses);
        assert_eq!(summary.total_slot_names, 2);
        assert_eq!(summary.theory_count, 2);
        assert_eq!(summary.daily_histogram[&Day::Mon], 2);
    }

    #[test]
    fn test_lab_only_registry() {
        let summary = summarize_workload(&[course(1, "Lab", "L1+L2+L31")]);
        assert_eq!(summary.theory_count, 0);
        assert_eq!(summary.lab_count, 3);
        assert_eq!(summary.lab_share, 1.0);
        assert_eq!(summary.theory_share, 0.0);
        assert_eq!(summary.peak_daily_load, 3);
    }

    #[test]
    fn test_histogram_sums_to_occurrences() {
        let courses = vec![
            course(1, "Compilers", "B1+G1+L8+L9"),
            course(2, "Networks", "C2+E2+L55"),
        ];
        let summary = summarize_workload(&courses);
        let histogram_total: usize = summary.daily_histogram.values().sum();
        let occurrences: usize = courses.iter().map(|c| c.slots.len()).sum();
        assert_eq!(histogram_total, occurrences);
        assert_eq!(histogram_total, summary.total_weekly_hours);
    }
}
