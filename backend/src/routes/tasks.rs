use serde::{Deserialize, Serialize};

use crate::api::Task;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListData {
    pub tasks: Vec<Task>,
    pub total: usize,
}

impl From<Vec<Task>> for TaskListData {
    fn from(tasks: Vec<Task>) -> Self {
        let total = tasks.len();
        Self { tasks, total }
    }
}

pub const LIST_TASKS: &str = "list_tasks";
pub const POST_TASK: &str = "add_task";
pub const PUT_TASK: &str = "update_task";
pub const DELETE_TASK: &str = "delete_task";
