//! Service-level tests against the in-memory record store.

use std::sync::Arc;

use taskboard_core::domain::{Bucket, User};
use taskboard_core::error::DomainError;
use taskboard_core::repositories::Repositories;
use taskboard_core::services::{
    AuthPolicy, AuthService, BoardService, CategoryService, GroupService, NewTask, ProjectService,
    TaskPatch, TaskService, UserService,
};
use taskboard_infrastructure::MemoryStore;
use taskboard_security::JwtService;
use uuid::Uuid;

fn repos() -> Repositories {
    Arc::new(MemoryStore::new()).repositories()
}

fn policy() -> AuthPolicy {
    AuthPolicy {
        admin_emails: vec!["root@x.com".into()],
        min_password_length: 6,
    }
}

async fn user(repos: &Repositories, name: &str, email: &str) -> User {
    let user = User::new(name.into(), email.into(), "hash".into(), false).unwrap();
    repos.users.create(&user).await.unwrap()
}

fn task(project_id: Uuid, title: &str, status: &str, priority: i32, assignees: Vec<Uuid>) -> NewTask {
    NewTask {
        project_id,
        title: title.into(),
        description: None,
        category_name: "To Do".into(),
        status_name: status.into(),
        priority: Some(priority),
        due_at: None,
        assignee_ids: assignees,
    }
}

#[tokio::test]
async fn scenario_register_login_bootstrap_and_board() {
    let repos = repos();
    let jwt = Arc::new(JwtService::new("integration-secret", 86_400));
    let auth = AuthService::new(repos.users.clone(), jwt, policy());

    let ana = auth.register("Ana Ruiz", "ana@x.com", "secret1").await.unwrap();
    let login = auth.login("ana@x.com", "secret1").await.unwrap();
    assert_eq!(auth.authenticate(&login.access_token).unwrap(), ana.id);

    let projects = ProjectService::new(repos.clone());
    let created = projects.create_project(&ana.id, "Roadmap", None).await.unwrap();
    assert_eq!(created.categories.len(), 4);

    let tasks = TaskService::new(repos.clone());
    tasks
        .create_task(&ana.id, task(created.project.id, "Design API", "Open", 2, vec![]))
        .await
        .unwrap();

    let board = BoardService::new(repos.clone())
        .get_board(&ana.id, &created.project.id)
        .await
        .unwrap();
    let to_do = board.categories.bucket(Bucket::ToDo);
    assert_eq!(to_do.len(), 1);
    assert_eq!(to_do[0].title, "Design API");
    assert_eq!(to_do[0].status, "Open");
    assert_eq!(board.summary.by_priority["2"], 1);
    assert_eq!(board.summary.total_tasks, 1);
}

#[tokio::test]
async fn lookup_or_create_reuses_category_and_status() {
    let repos = repos();
    let owner = user(&repos, "Ana Ruiz", "ana@x.com").await;
    let project = ProjectService::new(repos.clone())
        .create_project(&owner.id, "Roadmap", None)
        .await
        .unwrap()
        .project;
    let other = ProjectService::new(repos.clone())
        .create_project(&owner.id, "Website", None)
        .await
        .unwrap()
        .project;

    let tasks = TaskService::new(repos.clone());
    let first = tasks
        .create_task(&owner.id, task(project.id, "Design API", "Review", 3, vec![]))
        .await
        .unwrap();
    let second = tasks
        .create_task(&owner.id, task(project.id, "Write docs", "Review", 3, vec![]))
        .await
        .unwrap();
    let third = tasks
        .create_task(&owner.id, task(other.id, "Landing page", "Review", 3, vec![]))
        .await
        .unwrap();

    assert_eq!(first.task.category_id, second.task.category_id);
    assert_ne!(first.task.category_id, third.task.category_id);
    assert_eq!(first.task.status_id, third.task.status_id);

    assert_eq!(repos.categories.list_by_project(&project.id).await.unwrap().len(), 4);
    assert_eq!(repos.statuses.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn assignment_replacement_leaves_only_new_set() {
    let repos = repos();
    let owner = user(&repos, "Ana Ruiz", "ana@x.com").await;
    let u1 = user(&repos, "Bea Soto", "bea@x.com").await;
    let u2 = user(&repos, "Carl Diaz", "carl@x.com").await;
    let u3 = user(&repos, "Dani Vela", "dani@x.com").await;

    let project = ProjectService::new(repos.clone())
        .create_project(&owner.id, "Roadmap", None)
        .await
        .unwrap()
        .project;
    let tasks = TaskService::new(repos.clone());
    let created = tasks
        .create_task(&owner.id, task(project.id, "Design API", "Open", 2, vec![u1.id, u2.id]))
        .await
        .unwrap();

    let patch = TaskPatch {
        assignee_ids: Some(vec![u3.id]),
        ..Default::default()
    };
    let updated = tasks.update_task(&owner.id, &created.task.id, patch).await.unwrap();
    assert_eq!(updated.assignees, vec![u3.id]);

    let stored: Vec<Uuid> = repos
        .assignments
        .list_by_task(&created.task.id)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.user_id)
        .collect();
    assert_eq!(stored, vec![u3.id]);

    // An unknown user leaves the current set untouched.
    let patch = TaskPatch {
        assignee_ids: Some(vec![Uuid::new_v4()]),
        ..Default::default()
    };
    let err = tasks.update_task(&owner.id, &created.task.id, patch).await.unwrap_err();
    assert!(matches!(err, DomainError::UserNotFound(_)));
    assert_eq!(repos.assignments.list_by_task(&created.task.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn board_counts_are_consistent() {
    let repos = repos();
    let owner = user(&repos, "Ana Ruiz", "ana@x.com").await;
    let project = ProjectService::new(repos.clone())
        .create_project(&owner.id, "Roadmap", None)
        .await
        .unwrap()
        .project;

    let tasks = TaskService::new(repos.clone());
    for (title, status, priority) in [
        ("Design API", "Open", 1),
        ("Fix login", "Hot Fix", 5),
        ("Ship v1", "Done", 3),
        ("Refactor", "In Progress", 3),
        ("Triage", "Blocked", 2),
    ] {
        tasks
            .create_task(&owner.id, task(project.id, title, status, priority, vec![]))
            .await
            .unwrap();
    }

    let board = BoardService::new(repos.clone())
        .get_board(&owner.id, &project.id)
        .await
        .unwrap();
    let bucket_total: usize = Bucket::ALL.iter().map(|b| board.summary.by_bucket.get(*b)).sum();
    assert_eq!(bucket_total, board.summary.total_tasks);
    assert_eq!(board.categories.len(), board.summary.total_tasks);
    assert_eq!(board.summary.total_tasks, 5);
    // "Open" and "Blocked" fall back to To Do.
    assert_eq!(board.summary.by_bucket.get(Bucket::ToDo), 2);
    assert_eq!(board.summary.by_priority["3"], 2);
}

#[tokio::test]
async fn other_users_are_forbidden_everywhere() {
    let repos = repos();
    let owner = user(&repos, "Ana Ruiz", "ana@x.com").await;
    let intruder = user(&repos, "Eve Mora", "eve@x.com").await;

    let projects = ProjectService::new(repos.clone());
    let created = projects.create_project(&owner.id, "Roadmap", None).await.unwrap();
    let project_id = created.project.id;
    let group_id = created.project.group_id;
    let tasks = TaskService::new(repos.clone());
    let design = tasks
        .create_task(&owner.id, task(project_id, "Design API", "Open", 2, vec![]))
        .await
        .unwrap();

    let forbidden = |r: Result<_, DomainError>| matches!(r, Err(DomainError::Forbidden(_)));

    assert!(forbidden(projects.get_project(&intruder.id, &project_id).await.map(|_| ())));
    assert!(forbidden(projects.rename_project(&intruder.id, &project_id, "Mine").await.map(|_| ())));
    assert!(forbidden(projects.delete_project(&intruder.id, &project_id).await));
    assert!(forbidden(
        projects.create_project(&intruder.id, "Sneaky", Some(group_id)).await.map(|_| ())
    ));
    assert!(forbidden(
        tasks
            .create_task(&intruder.id, task(project_id, "Sneaky", "Open", 2, vec![]))
            .await
            .map(|_| ())
    ));
    assert!(forbidden(tasks.delete_task(&intruder.id, &design.task.id).await));
    assert!(forbidden(tasks.list_tasks(&intruder.id, &project_id).await.map(|_| ())));
    assert!(forbidden(
        BoardService::new(repos.clone())
            .get_board(&intruder.id, &project_id)
            .await
            .map(|_| ())
    ));
    assert!(forbidden(
        CategoryService::new(repos.clone())
            .delete_category(&intruder.id, &created.categories[0].id)
            .await
    ));
    assert!(forbidden(GroupService::new(repos.clone()).delete_group(&intruder.id, &group_id).await));

    // Nothing changed.
    assert_eq!(tasks.list_tasks(&owner.id, &project_id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn project_delete_cascades_and_frees_group() {
    let repos = repos();
    let owner = user(&repos, "Ana Ruiz", "ana@x.com").await;
    let worker = user(&repos, "Bea Soto", "bea@x.com").await;

    let projects = ProjectService::new(repos.clone());
    let groups = GroupService::new(repos.clone());
    let created = projects.create_project(&owner.id, "Roadmap", None).await.unwrap();
    let project_id = created.project.id;
    TaskService::new(repos.clone())
        .create_task(&owner.id, task(project_id, "Design API", "Open", 2, vec![worker.id]))
        .await
        .unwrap();

    let err = groups.delete_group(&owner.id, &created.project.group_id).await.unwrap_err();
    assert!(matches!(err, DomainError::GroupInUse(_)));

    projects.delete_project(&owner.id, &project_id).await.unwrap();
    assert!(repos.projects.find_by_id(&project_id).await.unwrap().is_none());
    assert!(repos.tasks.list_by_project(&project_id).await.unwrap().is_empty());
    assert!(repos.categories.list_by_project(&project_id).await.unwrap().is_empty());
    assert!(repos.assignments.list_by_project(&project_id).await.unwrap().is_empty());

    groups.delete_group(&owner.id, &created.project.group_id).await.unwrap();
}

#[tokio::test]
async fn category_in_use_cannot_be_deleted() {
    let repos = repos();
    let owner = user(&repos, "Ana Ruiz", "ana@x.com").await;
    let created = ProjectService::new(repos.clone())
        .create_project(&owner.id, "Roadmap", None)
        .await
        .unwrap();
    let categories = CategoryService::new(repos.clone());

    let dup = categories
        .create_category(&owner.id, &created.project.id, "Done")
        .await
        .unwrap_err();
    assert!(matches!(dup, DomainError::CategoryNameAlreadyExists { .. }));

    TaskService::new(repos.clone())
        .create_task(&owner.id, task(created.project.id, "Design API", "Open", 2, vec![]))
        .await
        .unwrap();
    let to_do = &created.categories[0];
    let err = categories.delete_category(&owner.id, &to_do.id).await.unwrap_err();
    assert!(matches!(err, DomainError::CategoryInUse(_)));

    categories.delete_category(&owner.id, &created.categories[3].id).await.unwrap();
    assert_eq!(
        categories.list_categories(&owner.id, &created.project.id).await.unwrap().len(),
        3
    );
}

#[tokio::test]
async fn admin_cannot_delete_project_owner() {
    let repos = repos();
    let admin = {
        let user = User::new("Root Admin".into(), "root@x.com".into(), "hash".into(), true).unwrap();
        repos.users.create(&user).await.unwrap()
    };
    let owner = user(&repos, "Ana Ruiz", "ana@x.com").await;
    let idle = user(&repos, "Bea Soto", "bea@x.com").await;
    ProjectService::new(repos.clone())
        .create_project(&owner.id, "Roadmap", None)
        .await
        .unwrap();

    let users = UserService::new(repos.clone(), policy());
    let err = users.admin_delete(&admin.id, &owner.id).await.unwrap_err();
    assert!(matches!(err, DomainError::UserInUse(_)));

    users.admin_delete(&admin.id, &idle.id).await.unwrap();
    assert_eq!(users.list_users(&admin.id).await.unwrap().len(), 2);

    let err = users.list_users(&owner.id).await.unwrap_err();
    assert!(matches!(err, DomainError::AdminRequired));
}
