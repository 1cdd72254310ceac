// ============================================================================
// Task Board Core - Board View
// File: crates/taskboard-core/src/domain/board.rs
// Description: Per-project board grouped into four fixed buckets
// ============================================================================

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use taskboard_shared::constants::{
    BUCKET_DONE, BUCKET_HOT_FIX, BUCKET_IN_PROGRESS, BUCKET_TO_DO, MAX_PRIORITY, MIN_PRIORITY,
};

use super::{Project, TaskAssignment, TaskDetail};

/// Board column a task is displayed in, chosen from its status name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    ToDo,
    InProgress,
    HotFix,
    Done,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [Bucket::ToDo, Bucket::InProgress, Bucket::HotFix, Bucket::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::ToDo => BUCKET_TO_DO,
            Bucket::InProgress => BUCKET_IN_PROGRESS,
            Bucket::HotFix => BUCKET_HOT_FIX,
            Bucket::Done => BUCKET_DONE,
        }
    }

    /// Statuses outside the four bucket names land in "To Do".
    pub fn from_status_name(name: &str) -> Self {
        match name {
            BUCKET_IN_PROGRESS => Bucket::InProgress,
            BUCKET_HOT_FIX => Bucket::HotFix,
            BUCKET_DONE => Bucket::Done,
            _ => Bucket::ToDo,
        }
    }
}

/// Task as rendered on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCard {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub priority: i32,
    pub category: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub due_at: Option<DateTime<Utc>>,
    pub assignees: Vec<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardColumns {
    #[serde(rename = "To Do")]
    pub to_do: Vec<TaskCard>,
    #[serde(rename = "In Progress")]
    pub in_progress: Vec<TaskCard>,
    #[serde(rename = "Hot Fix")]
    pub hot_fix: Vec<TaskCard>,
    #[serde(rename = "Done")]
    pub done: Vec<TaskCard>,
}

impl BoardColumns {
    pub fn bucket(&self, bucket: Bucket) -> &[TaskCard] {
        match bucket {
            Bucket::ToDo => &self.to_do,
            Bucket::InProgress => &self.in_progress,
            Bucket::HotFix => &self.hot_fix,
            Bucket::Done => &self.done,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<TaskCard> {
        match bucket {
            Bucket::ToDo => &mut self.to_do,
            Bucket::InProgress => &mut self.in_progress,
            Bucket::HotFix => &mut self.hot_fix,
            Bucket::Done => &mut self.done,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Bucket, &[TaskCard])> {
        Bucket::ALL.into_iter().map(move |b| (b, self.bucket(b)))
    }

    pub fn len(&self) -> usize {
        self.iter().map(|(_, cards)| cards.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
    #[serde(rename = "To Do")]
    pub to_do: usize,
    #[serde(rename = "In Progress")]
    pub in_progress: usize,
    #[serde(rename = "Hot Fix")]
    pub hot_fix: usize,
    #[serde(rename = "Done")]
    pub done: usize,
}

impl BucketCounts {
    pub fn get(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::ToDo => self.to_do,
            Bucket::InProgress => self.in_progress,
            Bucket::HotFix => self.hot_fix,
            Bucket::Done => self.done,
        }
    }

    fn increment(&mut self, bucket: Bucket) {
        match bucket {
            Bucket::ToDo => self.to_do += 1,
            Bucket::InProgress => self.in_progress += 1,
            Bucket::HotFix => self.hot_fix += 1,
            Bucket::Done => self.done += 1,
        }
    }

    pub fn total(&self) -> usize {
        Bucket::ALL.iter().map(|b| self.get(*b)).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSummary {
    pub total_tasks: usize,
    pub by_bucket: BucketCounts,
    /// Keys "1".."5"; priorities outside that range are not counted here.
    pub by_priority: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub project: Project,
    pub categories: BoardColumns,
    pub summary: BoardSummary,
}

impl Board {
    pub fn build(project: Project, tasks: Vec<TaskDetail>, assignments: &[TaskAssignment]) -> Self {
        let mut assignees: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for a in assignments {
            assignees.entry(a.task_id).or_default().push(a.user_id);
        }

        let mut by_priority: BTreeMap<String, usize> =
            (MIN_PRIORITY..=MAX_PRIORITY).map(|p| (p.to_string(), 0)).collect();
        let mut by_bucket = BucketCounts::default();
        let mut columns = BoardColumns::default();
        let total_tasks = tasks.len();

        for detail in tasks {
            let bucket = Bucket::from_status_name(&detail.status_name);
            by_bucket.increment(bucket);
            if let Some(count) = by_priority.get_mut(&detail.task.priority.to_string()) {
                *count += 1;
            }

            let task = detail.task;
            columns.bucket_mut(bucket).push(TaskCard {
                id: task.id,
                assignees: assignees.remove(&task.id).unwrap_or_default(),
                title: task.title,
                description: task.description,
                priority: task.priority,
                category: detail.category_name,
                status: detail.status_name,
                created_at: task.created_at,
                due_at: task.due_at,
            });
        }

        Self {
            project,
            categories: columns,
            summary: BoardSummary {
                total_tasks,
                by_bucket,
                by_priority,
            },
        }
    }
}
