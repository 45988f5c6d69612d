//! Categorized to-do list.

use std::collections::BTreeSet;

use thiserror::Error;
use uuid::Uuid;

use crate::config::{OrphanPolicyKind, TasksConfig};
use crate::models::{Category, Task};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Task title must not be empty")]
    EmptyTitle,

    #[error("Category not found")]
    UnknownCategory,

    #[error("Task not found")]
    UnknownTask,

    #[error("Category still has {tasks} task(s)")]
    CategoryInUse { tasks: usize },

    #[error("Cannot reassign tasks to '{0}'")]
    ReassignTarget(String),
}

/// What deleting a category does to the tasks that reference it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrphanPolicy {
    /// Refuse while the category has tasks.
    #[default]
    Block,
    /// Delete the tasks with the category.
    Cascade,
    /// Move the tasks to another category.
    Reassign { to: Uuid },
}

/// Owns categories and tasks. Tasks are linked to categories by id only.
#[derive(Debug, Default)]
pub struct TaskBoard {
    categories: Vec<Category>,
    tasks: Vec<Task>,
    policy: OrphanPolicy,
}

impl TaskBoard {
    pub fn new(policy: OrphanPolicy) -> Self {
        Self {
            categories: Vec::new(),
            tasks: Vec::new(),
            policy,
        }
    }

    /// Board with the Work / Personal / Shopping sample lists.
    pub fn with_sample_data(policy: OrphanPolicy) -> Self {
        let mut board = Self::new(policy);
        let work = board.add_category("Work", "💼");
        let personal = board.add_category("Personal", "🏠");
        let shopping = board.add_category("Shopping", "🛒");

        let samples = [
            (work, "Finish SwiftUI project", false),
            (work, "Prepare presentation", true),
            (personal, "Buy groceries", false),
            (personal, "Call mom", false),
            (shopping, "New shoes", false),
        ];
        for (category_id, title, done) in samples {
            let mut task = Task::new(title, category_id);
            task.is_completed = done;
            board.tasks.push(task);
        }
        board
    }

    /// Sample board with the policy from configuration.
    ///
    /// `reassign` names its target category; the name is resolved to an id
    /// here and must exist.
    pub fn from_config(config: &TasksConfig) -> Result<Self, TaskError> {
        let mut board = Self::with_sample_data(OrphanPolicy::Block);
        let policy = match config.orphan_policy {
            OrphanPolicyKind::Block => OrphanPolicy::Block,
            OrphanPolicyKind::Cascade => OrphanPolicy::Cascade,
            OrphanPolicyKind::Reassign => {
                let name = config.reassign_to.clone().unwrap_or_default();
                let target = board
                    .categories
                    .iter()
                    .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
                    .ok_or(TaskError::ReassignTarget(name))?;
                OrphanPolicy::Reassign { to: target.id }
            }
        };
        board.policy = policy;
        Ok(board)
    }

    pub fn policy(&self) -> OrphanPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: OrphanPolicy) {
        self.policy = policy;
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn add_category(&mut self, name: impl Into<String>, icon: impl Into<String>) -> Uuid {
        let category = Category::new(name, icon);
        let id = category.id;
        self.categories.push(category);
        id
    }

    /// Tasks of one category in insertion order.
    pub fn tasks_for(&self, category_id: Uuid) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.category_id == category_id)
            .collect()
    }

    pub fn add_task(&mut self, category_id: Uuid, title: &str) -> Result<Uuid, TaskError> {
        if title.trim().is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        if self.category(category_id).is_none() {
            return Err(TaskError::UnknownCategory);
        }
        let task = Task::new(title, category_id);
        let id = task.id;
        self.tasks.push(task);
        Ok(id)
    }

    /// Flip completion; returns the new value.
    pub fn toggle_task(&mut self, task_id: Uuid) -> Result<bool, TaskError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(TaskError::UnknownTask)?;
        task.is_completed = !task.is_completed;
        Ok(task.is_completed)
    }

    /// Delete tasks by position within `category_id`'s list.
    ///
    /// Positions refer to the list before removal; out-of-range ones are
    /// ignored. Returns how many tasks were removed.
    pub fn delete_tasks(&mut self, category_id: Uuid, positions: &[usize]) -> usize {
        let positions: BTreeSet<usize> = positions.iter().copied().collect();
        let doomed: BTreeSet<Uuid> = self
            .tasks_for(category_id)
            .iter()
            .enumerate()
            .filter(|(index, _)| positions.contains(index))
            .map(|(_, task)| task.id)
            .collect();

        self.tasks.retain(|t| !doomed.contains(&t.id));
        doomed.len()
    }

    /// Delete a category, applying the orphan policy to its tasks.
    ///
    /// On error nothing is changed.
    pub fn delete_category(&mut self, id: Uuid) -> Result<Category, TaskError> {
        let index = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(TaskError::UnknownCategory)?;
        let orphans = self.tasks.iter().filter(|t| t.category_id == id).count();

        if orphans > 0 {
            match self.policy {
                OrphanPolicy::Block => return Err(TaskError::CategoryInUse { tasks: orphans }),
                OrphanPolicy::Cascade => self.tasks.retain(|t| t.category_id != id),
                OrphanPolicy::Reassign { to } => {
                    let target = self
                        .category(to)
                        .filter(|c| c.id != id)
                        .ok_or_else(|| TaskError::ReassignTarget(to.to_string()))?;
                    let target_id = target.id;
                    for task in self.tasks.iter_mut().filter(|t| t.category_id == id) {
                        task.category_id = target_id;
                    }
                }
            }
        }

        let removed = self.categories.remove(index);
        tracing::debug!(category = %removed.name, orphans, policy = ?self.policy, "Category deleted");
        Ok(removed)
    }
}
