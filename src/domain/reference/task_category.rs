use serde::{Deserialize, Serialize};

/// Completed and pending task counts for one category of work.
///
/// `total` is always `completed + pending`; it is derived on construction and
/// on deserialization, never taken from input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TaskCategoryCounts")]
pub struct TaskCategory {
    category: String,
    completed: u32,
    pending: u32,
    total: u32,
}

#[derive(Deserialize)]
struct TaskCategoryCounts {
    category: String,
    #[serde(default)]
    completed: u32,
    #[serde(default)]
    pending: u32,
}

impl From<TaskCategoryCounts> for TaskCategory {
    fn from(counts: TaskCategoryCounts) -> Self {
        TaskCategory::new(counts.category, counts.completed, counts.pending)
    }
}

impl TaskCategory {
    pub fn new(category: impl Into<String>, completed: u32, pending: u32) -> Self {
        Self {
            category: category.into(),
            completed,
            pending,
            total: completed.saturating_add(pending),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn pending(&self) -> u32 {
        self.pending
    }

    pub fn total(&self) -> u32 {
        self.total
    }
}
