//! Mock-backed repositories for service unit tests.

use std::sync::Arc;

use crate::repositories::{
    MockAssignmentRepository, MockCategoryRepository, MockGroupRepository, MockProjectRepository,
    MockStatusRepository, MockTaskRepository, MockUserRepository, Repositories,
};

#[derive(Default)]
pub(crate) struct MockRepos {
    pub users: MockUserRepository,
    pub groups: MockGroupRepository,
    pub projects: MockProjectRepository,
    pub categories: MockCategoryRepository,
    pub statuses: MockStatusRepository,
    pub tasks: MockTaskRepository,
    pub assignments: MockAssignmentRepository,
}

impl MockRepos {
    pub fn build(self) -> Repositories {
        Repositories {
            users: Arc::new(self.users),
            groups: Arc::new(self.groups),
            projects: Arc::new(self.projects),
            categories: Arc::new(self.categories),
            statuses: Arc::new(self.statuses),
            tasks: Arc::new(self.tasks),
            assignments: Arc::new(self.assignments),
        }
    }
}
