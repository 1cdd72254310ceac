//! Shared application state handed to every handler.

use std::sync::Arc;

use taskboard_core::repositories::Repositories;
use taskboard_core::services::{
    AuthPolicy, AuthService, BoardService, CategoryService, GroupService, ProjectService,
    StatusService, TaskService, UserService,
};
use taskboard_security::JwtService;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub users: Arc<UserService>,
    pub groups: Arc<GroupService>,
    pub projects: Arc<ProjectService>,
    pub categories: Arc<CategoryService>,
    pub statuses: Arc<StatusService>,
    pub tasks: Arc<TaskService>,
    pub board: Arc<BoardService>,
}

impl AppState {
    pub fn new(repos: Repositories, jwt: Arc<JwtService>, policy: AuthPolicy) -> Self {
        Self {
            auth: Arc::new(AuthService::new(repos.users.clone(), jwt, policy.clone())),
            users: Arc::new(UserService::new(repos.clone(), policy)),
            groups: Arc::new(GroupService::new(repos.clone())),
            projects: Arc::new(ProjectService::new(repos.clone())),
            categories: Arc::new(CategoryService::new(repos.clone())),
            statuses: Arc::new(StatusService::new(repos.clone())),
            tasks: Arc::new(TaskService::new(repos.clone())),
            board: Arc::new(BoardService::new(repos)),
        }
    }
}
