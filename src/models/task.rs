use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub icon: String,
}

impl Category {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// A to-do item. Belongs to exactly one category through `category_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub is_completed: bool,
    pub category_id: Uuid,
}

impl Task {
    pub fn new(title: impl Into<String>, category_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            is_completed: false,
            category_id,
        }
    }
}
