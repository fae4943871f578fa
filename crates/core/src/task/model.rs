//! Task model definitions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Priority {
    /// Sort rank used by the priority view: high = 3, medium = 2, low = 1
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

/// Task category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Shopping,
    Health,
}

impl Default for Category {
    fn default() -> Self {
        Self::Work
    }
}

/// A task in the collection
///
/// Field names serialize in camelCase (`dueDate`) so the persisted blob uses
/// the same spelling the frontend does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub category: Category,
}

/// Input for `TaskStore::add`: everything a task carries except the id and
/// the completion flag, which the store assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub category: Category,
}

impl TaskDraft {
    /// Create a draft with the required fields
    pub fn new(name: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            due_date,
            priority: Priority::default(),
            category: Category::default(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_draft_defaults() {
        let draft = TaskDraft::new("Write report", due());
        assert_eq!(draft.name, "Write report");
        assert_eq!(draft.description, "");
        assert_eq!(draft.priority, Priority::Medium);
        assert_eq!(draft.category, Category::Work);
    }

    #[test]
    fn test_draft_builders() {
        let draft = TaskDraft::new("Buy milk", due())
            .with_description("Two liters")
            .with_priority(Priority::Low)
            .with_category(Category::Shopping);

        assert_eq!(draft.description, "Two liters");
        assert_eq!(draft.priority, Priority::Low);
        assert_eq!(draft.category, Category::Shopping);
    }

    #[test]
    fn test_priority_rank() {
        assert_eq!(Priority::High.rank(), 3);
        assert_eq!(Priority::Medium.rank(), 2);
        assert_eq!(Priority::Low.rank(), 1);
    }

    #[test]
    fn test_task_wire_format() {
        let task = Task {
            id: "task-1".to_string(),
            name: "Buy milk".to_string(),
            description: String::new(),
            due_date: due(),
            priority: Priority::Low,
            completed: false,
            category: Category::Shopping,
        };

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["dueDate"], "2024-01-01");
        assert_eq!(value["priority"], "low");
        assert_eq!(value["category"], "shopping");
        assert_eq!(value["completed"], false);
    }

    #[test]
    fn test_task_parses_blob_fields() {
        let json = r#"{
            "id": "task-1700000000000-abcd1234",
            "name": "Buy milk",
            "description": "Two liters",
            "dueDate": "2024-01-01",
            "priority": "high",
            "completed": true,
            "category": "shopping"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.name, "Buy milk");
        assert_eq!(task.due_date, due());
        assert_eq!(task.priority, Priority::High);
        assert!(task.completed);
        assert_eq!(task.category, Category::Shopping);
    }

    #[test]
    fn test_task_defaults_for_missing_fields() {
        let json = r#"{"id": "t1", "name": "Bare", "dueDate": "2024-01-01"}"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.description, "");
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.completed);
        assert_eq!(task.category, Category::Work);
    }

    #[test]
    fn test_task_round_trip() {
        let task = Task {
            id: "task-2".to_string(),
            name: "Stretch".to_string(),
            description: "Ten minutes".to_string(),
            due_date: due(),
            priority: Priority::High,
            completed: true,
            category: Category::Health,
        };

        let json = serde_json::to_string(&task).unwrap();
        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, task);
    }
}
