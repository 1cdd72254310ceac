//! Board view of a project: tasks bucketed by status with summary counts.

use tracing::debug;
use uuid::Uuid;

use crate::domain::Board;
use crate::error::DomainError;
use crate::repositories::Repositories;
use crate::services::OwnershipResolver;

pub struct BoardService {
    repos: Repositories,
    ownership: OwnershipResolver,
}

impl BoardService {
    pub fn new(repos: Repositories) -> Self {
        let ownership = OwnershipResolver::new(repos.clone());
        Self { repos, ownership }
    }

    pub async fn get_board(&self, requester_id: &Uuid, project_id: &Uuid) -> Result<Board, DomainError> {
        let project = self.ownership.project(requester_id, project_id).await?;

        let tasks = self.repos.tasks.list_details_by_project(project_id).await?;
        let assignments = self.repos.assignments.list_by_project(project_id).await?;
        debug!("Building board for project {} from {} task(s)", project_id, tasks.len());

        Ok(Board::build(project, tasks, &assignments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bucket, Project, Task, TaskAssignment, TaskDetail};
    use crate::services::test_support::MockRepos;

    #[tokio::test]
    async fn test_board_places_tasks_and_assignees() {
        let owner = Uuid::new_v4();
        let project = Project::new(Uuid::new_v4(), "Roadmap".into(), owner).unwrap();
        let project_id = project.id;
        let task = Task::new(project_id, Uuid::new_v4(), Uuid::new_v4(), "Design API".into(), None, 2, None)
            .unwrap();
        let task_id = task.id;
        let assignee = Uuid::new_v4();

        let mut mocks = MockRepos::default();
        mocks.projects.expect_find_by_id().returning(move |_| Ok(Some(project.clone())));
        mocks.tasks.expect_list_details_by_project().returning(move |_| {
            Ok(vec![TaskDetail {
                task: task.clone(),
                category_name: "To Do".into(),
                status_name: "Open".into(),
            }])
        });
        mocks
            .assignments
            .expect_list_by_project()
            .returning(move |_| Ok(vec![TaskAssignment::new(task_id, assignee)]));

        let service = BoardService::new(mocks.build());
        let board = service.get_board(&owner, &project_id).await.unwrap();

        let to_do = board.categories.bucket(Bucket::ToDo);
        assert_eq!(to_do.len(), 1);
        assert_eq!(to_do[0].assignees, vec![assignee]);
        assert_eq!(board.summary.total_tasks, 1);
        assert_eq!(board.summary.by_priority["2"], 1);
    }

    #[tokio::test]
    async fn test_board_of_foreign_project_is_forbidden() {
        let project = Project::new(Uuid::new_v4(), "Roadmap".into(), Uuid::new_v4()).unwrap();
        let project_id = project.id;

        let mut mocks = MockRepos::default();
        mocks.projects.expect_find_by_id().returning(move |_| Ok(Some(project.clone())));
        mocks.tasks.expect_list_details_by_project().never();

        let service = BoardService::new(mocks.build());
        let err = service.get_board(&Uuid::new_v4(), &project_id).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
    }
}
