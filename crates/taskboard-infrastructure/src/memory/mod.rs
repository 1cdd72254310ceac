// ============================================================================
// Task Board Infrastructure - In-Memory Record Store
// File: crates/taskboard-infrastructure/src/memory/mod.rs
// Description: Process-local tables behind one lock; backs tests and the
//              `memory` database backend
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::info;
use uuid::Uuid;

use taskboard_core::domain::{Category, Group, Project, Status, Task, TaskAssignment, TaskDetail, User};
use taskboard_core::error::DomainError;
use taskboard_core::repositories::{
    AssignmentRepository, CategoryRepository, GroupRepository, ProjectRepository, Repositories,
    StatusRepository, TaskRepository, UserRepository,
};

/// Rows kept in insertion order.
#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    groups: Vec<Group>,
    projects: Vec<Project>,
    categories: Vec<Category>,
    statuses: Vec<Status>,
    tasks: Vec<Task>,
    assignments: Vec<TaskAssignment>,
}

impl Tables {
    fn task_ids_of(&self, project_id: &Uuid) -> Vec<Uuid> {
        self.tasks
            .iter()
            .filter(|t| t.project_id == *project_id)
            .map(|t| t.id)
            .collect()
    }
}

/// Thread-safe in-memory store implementing every repository trait.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

fn remove_where<T>(rows: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> u64 {
    let before = rows.len();
    rows.retain(|row| !pred(row));
    (before - rows.len()) as u64
}

fn sorted_by_creation(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    tasks
}

impl MemoryStore {
    pub fn new() -> Self {
        info!("Initializing in-memory record store");
        Self::default()
    }

    /// Bundles one shared store as every repository.
    pub fn repositories(self: &Arc<Self>) -> Repositories {
        Repositories {
            users: self.clone(),
            groups: self.clone(),
            projects: self.clone(),
            categories: self.clone(),
            statuses: self.clone(),
            tasks: self.clone(),
            assignments: self.clone(),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.tables.read().users.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let email = email.to_lowercase();
        Ok(self
            .tables
            .read()
            .users
            .iter()
            .find(|u| u.email.to_lowercase() == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.tables.read().users.clone())
    }

    async fn create(&self, user: &User) -> Result<User, DomainError> {
        let mut tables = self.tables.write();
        let email = user.email.to_lowercase();
        if tables.users.iter().any(|u| u.email.to_lowercase() == email) {
            return Err(DomainError::EmailAlreadyExists(user.email.clone()));
        }
        tables.users.push(user.clone());
        Ok(user.clone())
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut tables = self.tables.write();
        let email = user.email.to_lowercase();
        if tables
            .users
            .iter()
            .any(|u| u.id != user.id && u.email.to_lowercase() == email)
        {
            return Err(DomainError::EmailAlreadyExists(user.email.clone()));
        }
        let row = tables
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(DomainError::UserNotFound(user.id))?;
        row.name = user.name.clone();
        row.email = user.email.clone();
        row.password_hash = user.password_hash.clone();
        row.is_admin = user.is_admin;
        Ok(row.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError> {
        Ok(remove_where(&mut self.tables.write().users, |u| u.id == *id))
    }
}

#[async_trait]
impl GroupRepository for MemoryStore {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Group>, DomainError> {
        Ok(self.tables.read().groups.iter().find(|g| g.id == *id).cloned())
    }

    async fn list_by_creator(&self, user_id: &Uuid) -> Result<Vec<Group>, DomainError> {
        Ok(self
            .tables
            .read()
            .groups
            .iter()
            .filter(|g| g.creator_user_id == *user_id)
            .cloned()
            .collect())
    }

    async fn count_by_creator(&self, user_id: &Uuid) -> Result<u64, DomainError> {
        Ok(self
            .tables
            .read()
            .groups
            .iter()
            .filter(|g| g.creator_user_id == *user_id)
            .count() as u64)
    }

    async fn create(&self, group: &Group) -> Result<Group, DomainError> {
        self.tables.write().groups.push(group.clone());
        Ok(group.clone())
    }

    async fn update(&self, group: &Group) -> Result<Group, DomainError> {
        let mut tables = self.tables.write();
        let row = tables
            .groups
            .iter_mut()
            .find(|g| g.id == group.id)
            .ok_or(DomainError::GroupNotFound(group.id))?;
        row.name = group.name.clone();
        Ok(row.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError> {
        Ok(remove_where(&mut self.tables.write().groups, |g| g.id == *id))
    }
}

#[async_trait]
impl ProjectRepository for MemoryStore {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Project>, DomainError> {
        Ok(self.tables.read().projects.iter().find(|p| p.id == *id).cloned())
    }

    async fn list_by_creator(&self, user_id: &Uuid) -> Result<Vec<Project>, DomainError> {
        Ok(self
            .tables
            .read()
            .projects
            .iter()
            .filter(|p| p.creator_user_id == *user_id)
            .cloned()
            .collect())
    }

    async fn count_by_creator(&self, user_id: &Uuid) -> Result<u64, DomainError> {
        Ok(self
            .tables
            .read()
            .projects
            .iter()
            .filter(|p| p.creator_user_id == *user_id)
            .count() as u64)
    }

    async fn count_by_group(&self, group_id: &Uuid) -> Result<u64, DomainError> {
        Ok(self
            .tables
            .read()
            .projects
            .iter()
            .filter(|p| p.group_id == *group_id)
            .count() as u64)
    }

    async fn create(&self, project: &Project) -> Result<Project, DomainError> {
        self.tables.write().projects.push(project.clone());
        Ok(project.clone())
    }

    async fn update(&self, project: &Project) -> Result<Project, DomainError> {
        let mut tables = self.tables.write();
        let row = tables
            .projects
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or(DomainError::ProjectNotFound(project.id))?;
        row.name = project.name.clone();
        Ok(row.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError> {
        Ok(remove_where(&mut self.tables.write().projects, |p| p.id == *id))
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Category>, DomainError> {
        Ok(self.tables.read().categories.iter().find(|c| c.id == *id).cloned())
    }

    async fn find_by_name(&self, project_id: &Uuid, name: &str) -> Result<Option<Category>, DomainError> {
        Ok(self
            .tables
            .read()
            .categories
            .iter()
            .find(|c| c.project_id == *project_id && c.name == name)
            .cloned())
    }

    async fn list_by_project(&self, project_id: &Uuid) -> Result<Vec<Category>, DomainError> {
        let mut categories: Vec<Category> = self
            .tables
            .read()
            .categories
            .iter()
            .filter(|c| c.project_id == *project_id)
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn create(&self, category: &Category) -> Result<Category, DomainError> {
        let mut tables = self.tables.write();
        if tables
            .categories
            .iter()
            .any(|c| c.project_id == category.project_id && c.name == category.name)
        {
            return Err(DomainError::CategoryNameAlreadyExists {
                project_id: category.project_id,
                name: category.name.clone(),
            });
        }
        tables.categories.push(category.clone());
        Ok(category.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError> {
        Ok(remove_where(&mut self.tables.write().categories, |c| c.id == *id))
    }

    async fn delete_by_project(&self, project_id: &Uuid) -> Result<u64, DomainError> {
        Ok(remove_where(&mut self.tables.write().categories, |c| {
            c.project_id == *project_id
        }))
    }
}

#[async_trait]
impl StatusRepository for MemoryStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Status>, DomainError> {
        Ok(self.tables.read().statuses.iter().find(|s| s.name == name).cloned())
    }

    async fn list(&self) -> Result<Vec<Status>, DomainError> {
        let mut statuses = self.tables.read().statuses.clone();
        statuses.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(statuses)
    }

    async fn create(&self, status: &Status) -> Result<Status, DomainError> {
        let mut tables = self.tables.write();
        if tables.statuses.iter().any(|s| s.name == status.name) {
            return Err(DomainError::StatusNameAlreadyExists(status.name.clone()));
        }
        tables.statuses.push(status.clone());
        Ok(status.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError> {
        Ok(remove_where(&mut self.tables.write().statuses, |s| s.id == *id))
    }
}

#[async_trait]
impl TaskRepository for MemoryStore {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Task>, DomainError> {
        Ok(self.tables.read().tasks.iter().find(|t| t.id == *id).cloned())
    }

    async fn list_by_project(&self, project_id: &Uuid) -> Result<Vec<Task>, DomainError> {
        let tasks = self
            .tables
            .read()
            .tasks
            .iter()
            .filter(|t| t.project_id == *project_id)
            .cloned()
            .collect();
        Ok(sorted_by_creation(tasks))
    }

    async fn list_details_by_project(&self, project_id: &Uuid) -> Result<Vec<TaskDetail>, DomainError> {
        let tables = self.tables.read();
        let tasks = sorted_by_creation(
            tables
                .tasks
                .iter()
                .filter(|t| t.project_id == *project_id)
                .cloned()
                .collect(),
        );

        let mut details = Vec::with_capacity(tasks.len());
        for task in tasks {
            let category_name = tables
                .categories
                .iter()
                .find(|c| c.id == task.category_id)
                .map(|c| c.name.clone())
                .ok_or(DomainError::CategoryNotFound(task.category_id))?;
            let status_name = tables
                .statuses
                .iter()
                .find(|s| s.id == task.status_id)
                .map(|s| s.name.clone())
                .ok_or_else(|| DomainError::InternalError(format!("status {} missing", task.status_id)))?;
            details.push(TaskDetail { task, category_name, status_name });
        }
        Ok(details)
    }

    async fn count_by_category(&self, category_id: &Uuid) -> Result<u64, DomainError> {
        Ok(self
            .tables
            .read()
            .tasks
            .iter()
            .filter(|t| t.category_id == *category_id)
            .count() as u64)
    }

    async fn create(&self, task: &Task) -> Result<Task, DomainError> {
        self.tables.write().tasks.push(task.clone());
        Ok(task.clone())
    }

    async fn update(&self, task: &Task) -> Result<Task, DomainError> {
        let mut tables = self.tables.write();
        let row = tables
            .tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or(DomainError::TaskNotFound(task.id))?;
        row.category_id = task.category_id;
        row.status_id = task.status_id;
        row.title = task.title.clone();
        row.description = task.description.clone();
        row.priority = task.priority;
        row.due_at = task.due_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError> {
        Ok(remove_where(&mut self.tables.write().tasks, |t| t.id == *id))
    }

    async fn delete_by_project(&self, project_id: &Uuid) -> Result<u64, DomainError> {
        Ok(remove_where(&mut self.tables.write().tasks, |t| t.project_id == *project_id))
    }
}

#[async_trait]
impl AssignmentRepository for MemoryStore {
    async fn create(&self, assignment: &TaskAssignment) -> Result<TaskAssignment, DomainError> {
        let mut tables = self.tables.write();
        if !tables.assignments.contains(assignment) {
            tables.assignments.push(*assignment);
        }
        Ok(*assignment)
    }

    async fn list_by_task(&self, task_id: &Uuid) -> Result<Vec<TaskAssignment>, DomainError> {
        Ok(self
            .tables
            .read()
            .assignments
            .iter()
            .filter(|a| a.task_id == *task_id)
            .copied()
            .collect())
    }

    async fn list_by_project(&self, project_id: &Uuid) -> Result<Vec<TaskAssignment>, DomainError> {
        let tables = self.tables.read();
        let task_ids = tables.task_ids_of(project_id);
        Ok(tables
            .assignments
            .iter()
            .filter(|a| task_ids.contains(&a.task_id))
            .copied()
            .collect())
    }

    async fn delete_by_task(&self, task_id: &Uuid) -> Result<u64, DomainError> {
        Ok(remove_where(&mut self.tables.write().assignments, |a| a.task_id == *task_id))
    }

    async fn delete_by_user(&self, user_id: &Uuid) -> Result<u64, DomainError> {
        Ok(remove_where(&mut self.tables.write().assignments, |a| a.user_id == *user_id))
    }

    async fn delete_by_project(&self, project_id: &Uuid) -> Result<u64, DomainError> {
        let mut tables = self.tables.write();
        let task_ids = tables.task_ids_of(project_id);
        Ok(remove_where(&mut tables.assignments, |a| task_ids.contains(&a.task_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_email_lookup_ignores_case() {
        let store = MemoryStore::new();
        let user = User::new("Ana Ruiz".into(), "ana@x.com".into(), "hash".into(), false).unwrap();
        UserRepository::create(&store, &user).await.unwrap();

        let found = store.find_by_email("ANA@X.com").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));
    }

    #[tokio::test]
    async fn test_unique_names_are_enforced() {
        let store = MemoryStore::new();
        let project_id = Uuid::new_v4();

        CategoryRepository::create(&store, &Category::new(project_id, "Backlog".into()).unwrap())
            .await
            .unwrap();
        let err = CategoryRepository::create(&store, &Category::new(project_id, "Backlog".into()).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::CategoryNameAlreadyExists { .. }));

        // Same name under another project is fine.
        CategoryRepository::create(&store, &Category::new(Uuid::new_v4(), "Backlog".into()).unwrap())
            .await
            .unwrap();

        StatusRepository::create(&store, &Status::new("Open".into()).unwrap()).await.unwrap();
        let err = StatusRepository::create(&store, &Status::new("Open".into()).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::StatusNameAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_categories_list_by_name() {
        let store = MemoryStore::new();
        let project_id = Uuid::new_v4();
        for name in ["To Do", "In Progress", "Hot Fix", "Done"] {
            CategoryRepository::create(&store, &Category::new(project_id, name.into()).unwrap())
                .await
                .unwrap();
        }

        let names: Vec<String> = CategoryRepository::list_by_project(&store, &project_id)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Done", "Hot Fix", "In Progress", "To Do"]);
    }

    #[tokio::test]
    async fn test_status_delete_frees_name() {
        let store = MemoryStore::new();
        let open = Status::new("Open".into()).unwrap();
        StatusRepository::create(&store, &open).await.unwrap();

        assert_eq!(StatusRepository::delete(&store, &open.id).await.unwrap(), 1);
        assert!(StatusRepository::find_by_name(&store, "Open").await.unwrap().is_none());
        StatusRepository::create(&store, &Status::new("Open".into()).unwrap()).await.unwrap();
    }

    #[tokio::test]
    async fn test_project_scoped_assignment_delete() {
        let store = MemoryStore::new();
        let project_id = Uuid::new_v4();
        let task = Task::new(project_id, Uuid::new_v4(), Uuid::new_v4(), "Design API".into(), None, 3, None)
            .unwrap();
        let other = Task::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), "Write docs".into(), None, 3, None)
            .unwrap();
        TaskRepository::create(&store, &task).await.unwrap();
        TaskRepository::create(&store, &other).await.unwrap();

        let user = Uuid::new_v4();
        AssignmentRepository::create(&store, &TaskAssignment::new(task.id, user)).await.unwrap();
        AssignmentRepository::create(&store, &TaskAssignment::new(task.id, user)).await.unwrap();
        AssignmentRepository::create(&store, &TaskAssignment::new(other.id, user)).await.unwrap();

        assert_eq!(AssignmentRepository::list_by_project(&store, &project_id).await.unwrap().len(), 1);
        assert_eq!(AssignmentRepository::delete_by_project(&store, &project_id).await.unwrap(), 1);
        assert_eq!(store.list_by_task(&other.id).await.unwrap().len(), 1);
    }
}
