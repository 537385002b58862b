//! End-to-end registry flows through the service layer, against both stores.

#![cfg(all(feature = "local-repo", feature = "json-repo"))]

mod support;

use std::sync::Arc;

use ffcs_planner::api::{CellCategory, CourseId, Day, NewCourse, NewTask, ValidationError};
use ffcs_planner::db::{
    services, FullRepository, JsonFileRepository, JsonStoreConfig, LocalRepository, ServiceError,
};
use ffcs_planner::models::{GridTopology, SlotCatalog};

async fn json_repo(dir: &tempfile::TempDir) -> Arc<dyn FullRepository> {
    let config = JsonStoreConfig::new(dir.path().join("ffcs-data.json"));
    Arc::new(JsonFileRepository::open(config).await.unwrap())
}

async fn planner_session(repo: &dyn FullRepository) {
    let catalog = SlotCatalog::standard();
    let topology = GridTopology::standard();

    // catalog lookup
    let a1 = catalog.lookup("A1").unwrap();
    assert_eq!(a1.len(), 1);
    assert_eq!(a1[0].day, Day::Mon);
    assert_eq!(a1[0].time_range, "08:00 to 08:50");

    // add
    let courses = services::add_course(
        repo,
        catalog,
        &NewCourse::new("AI", "A1").with_professor("Dr. X"),
    )
    .await
    .unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].slots.len(), 1);
    assert_eq!(courses[0].professor, "Dr. X");

    // projection
    let timetable = services::get_timetable(repo, topology).await.unwrap();
    let monday = timetable.rows.iter().find(|r| r.day == Day::Mon).unwrap();
    let first = &monday.cells[0];
    assert_eq!(first.theory_name.as_deref(), Some("A1"));
    assert!(first.theory_active);
    assert!(!first.lab_active);
    assert_eq!(first.category, CellCategory::Theory);
    // subject differs from the slot name, so it is shown
    assert_eq!(first.theory_subject.as_deref(), Some("AI"));

    // rejected add leaves everything in place
    let err = services::add_course(repo, catalog, &NewCourse::new("Bad", "a1+zz9+yy1"))
        .await
        .unwrap_err();
    match err {
        ServiceError::Validation(ValidationError::UnknownSlots(names)) => {
            assert_eq!(names, vec!["ZZ9".to_string(), "YY1".to_string()])
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(services::list_courses(repo).await.unwrap(), courses);

    // lab course
    let courses = services::add_course(repo, catalog, &NewCourse::new("AI Lab", "L1+L2"))
        .await
        .unwrap();
    assert_eq!(courses.len(), 2);
    let timetable = services::get_timetable(repo, topology).await.unwrap();
    let monday = timetable.rows.iter().find(|r| r.day == Day::Mon).unwrap();
    assert_eq!(monday.cells[0].category, CellCategory::Both);
    assert_eq!(monday.cells[1].category, CellCategory::Lab);

    // analytics
    let summary = services::get_analytics(repo).await.unwrap();
    assert_eq!(summary.total_courses, 2);
    assert_eq!(summary.total_slot_names, 3);
    assert_eq!(summary.theory_count, 1);
    assert_eq!(summary.lab_count, 2);
    assert_eq!(summary.daily_histogram[&Day::Mon], 3);
    assert_eq!(summary.peak_daily_load, 3);

    // delete: unknown id then real id
    let before = services::list_courses(repo).await.unwrap();
    let after = services::delete_course(repo, CourseId::new(42)).await.unwrap();
    assert_eq!(before, after);
    let after = services::delete_course(repo, before[0].id).await.unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].subject, "AI Lab");

    // tasks are independent of the registry
    let task = services::add_task(repo, &NewTask::new("A1+TA1", "Dr. Y"))
        .await
        .unwrap();
    assert_eq!(services::clear_courses(repo).await.unwrap(), 1);
    assert_eq!(services::list_tasks(repo).await.unwrap(), vec![task]);

    let summary = services::get_analytics(repo).await.unwrap();
    assert_eq!(summary.total_courses, 0);
    assert_eq!(summary.theory_share, 0.0);
}

#[tokio::test]
async fn test_planner_session_in_memory() {
    let repo = LocalRepository::new();
    planner_session(&repo).await;
}

#[tokio::test]
async fn test_planner_session_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let repo = json_repo(&dir).await;
    planner_session(repo.as_ref()).await;
}

#[tokio::test]
async fn test_json_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = SlotCatalog::standard();

    let stored = {
        let repo = json_repo(&dir).await;
        services::add_course(repo.as_ref(), catalog, &NewCourse::new("Compilers", "B1+L7"))
            .await
            .unwrap();
        services::add_task(repo.as_ref(), &NewTask::new("C1", "Dr. Z"))
            .await
            .unwrap();
        services::list_courses(repo.as_ref()).await.unwrap()
    };

    let repo = json_repo(&dir).await;
    assert_eq!(services::list_courses(repo.as_ref()).await.unwrap(), stored);
    assert_eq!(services::list_tasks(repo.as_ref()).await.unwrap().len(), 1);

    let first = services::get_timetable(repo.as_ref(), GridTopology::standard())
        .await
        .unwrap();
    let second = services::get_timetable(repo.as_ref(), GridTopology::standard())
        .await
        .unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_concurrent_adds_get_distinct_ids() {
    let repo: Arc<dyn FullRepository> = Arc::new(LocalRepository::new());
    let mut handles = Vec::new();
    for i in 0..20 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            let request = NewCourse::new(format!("Course {}", i), "A1");
            services::add_course(repo.as_ref(), SlotCatalog::standard(), &request)
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let courses = services::list_courses(repo.as_ref()).await.unwrap();
    assert_eq!(courses.len(), 20);
    let mut ids: Vec<i64> = courses.iter().map(|c| c.id.value()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[test]
fn test_fixture_helper_matches_catalog() {
    let c = support::course(1, "Physics", "C1+L13");
    assert_eq!(c.slots.len(), 3);
}
