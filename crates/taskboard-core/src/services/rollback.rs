//! Compensating rollback for multi-row writes.
//!
//! Each forward step pushes the delete that reverses it; on failure the log
//! replays those deletes newest-first. Rollback failures are logged and do
//! not mask the error that triggered the rollback.

use tracing::{error, warn};
use uuid::Uuid;

use crate::domain::TaskAssignment;
use crate::repositories::Repositories;

#[derive(Debug)]
pub(crate) enum Undo {
    DeleteGroup(Uuid),
    DeleteProject(Uuid),
    DeleteCategory(Uuid),
    DeleteStatus(Uuid),
    DeleteTask(Uuid),
    DeleteTaskAssignments(Uuid),
    /// Put back an assignment set that a replacement removed.
    RestoreTaskAssignments { task_id: Uuid, user_ids: Vec<Uuid> },
}

pub(crate) struct RollbackLog<'a> {
    repos: &'a Repositories,
    steps: Vec<Undo>,
}

impl<'a> RollbackLog<'a> {
    pub(crate) fn new(repos: &'a Repositories) -> Self {
        Self { repos, steps: Vec::new() }
    }

    pub(crate) fn record(&mut self, undo: Undo) {
        self.steps.push(undo);
    }

    pub(crate) async fn rollback(self) {
        if self.steps.is_empty() {
            return;
        }
        warn!("Rolling back {} step(s)", self.steps.len());
        for step in self.steps.into_iter().rev() {
            if let Err(e) = Self::undo(self.repos, &step).await {
                error!("Rollback step {:?} failed: {}", step, e);
            }
        }
    }

    async fn undo(repos: &Repositories, step: &Undo) -> Result<(), crate::error::DomainError> {
        match step {
            Undo::DeleteGroup(id) => repos.groups.delete(id).await.map(|_| ()),
            Undo::DeleteProject(id) => repos.projects.delete(id).await.map(|_| ()),
            Undo::DeleteCategory(id) => repos.categories.delete(id).await.map(|_| ()),
            Undo::DeleteStatus(id) => repos.statuses.delete(id).await.map(|_| ()),
            Undo::DeleteTask(id) => repos.tasks.delete(id).await.map(|_| ()),
            Undo::DeleteTaskAssignments(task_id) => {
                repos.assignments.delete_by_task(task_id).await.map(|_| ())
            }
            Undo::RestoreTaskAssignments { task_id, user_ids } => {
                repos.assignments.delete_by_task(task_id).await?;
                for user_id in user_ids {
                    repos
                        .assignments
                        .create(&TaskAssignment::new(*task_id, *user_id))
                        .await?;
                }
                Ok(())
            }
        }
    }
}
