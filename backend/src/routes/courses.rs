use serde::{Deserialize, Serialize};

use crate::api::Course;

/// Registry snapshot returned by list/add/delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseListData {
    pub courses: Vec<Course>,
    pub total: usize,
}

impl From<Vec<Course>> for CourseListData {
    fn from(courses: Vec<Course>) -> Self {
        let total = courses.len();
        Self { courses, total }
    }
}

pub const LIST_COURSES: &str = "list_courses";
pub const POST_COURSE: &str = "add_course";
pub const DELETE_COURSE: &str = "delete_course";
pub const CLEAR_COURSES: &str = "clear_courses";
