//! Authorization behavior at the repository boundary.

use super::helpers::{repo, service_over};
use rstest::rstest;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Caller, TaskAccessError, TaskPatch, UserId},
    ports::TaskRepositoryError,
    services::{CreateTaskRequest, TaskBoardError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn non_admin_system_listing_is_refused_before_any_query(repo: InMemoryTaskRepository) {
    let service = service_over(&repo);
    let alice = Caller::user(UserId::new());
    let mallory = Caller::user(UserId::new());

    service
        .create(&alice, CreateTaskRequest::new("Confidential plan"))
        .await
        .expect("task creation should succeed");

    let result = service.list_all(&mallory).await;
    assert!(matches!(
        result,
        Err(TaskBoardError::Access(TaskAccessError::AdminRequired(uid))) if uid == mallory.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admin_may_delete_a_foreign_task_but_not_edit_it(repo: InMemoryTaskRepository) {
    let service = service_over(&repo);
    let alice = Caller::user(UserId::new());
    let admin = Caller::admin(UserId::new());

    let created = service
        .create(&alice, CreateTaskRequest::new("Stale entry"))
        .await
        .expect("task creation should succeed");

    let edit = service
        .update(&admin, created.id(), TaskPatch::new().with_title("Renamed"))
        .await;
    assert!(matches!(
        edit,
        Err(TaskBoardError::Repository(TaskRepositoryError::NotFound(_)))
    ));

    service
        .delete(&admin, created.id())
        .await
        .expect("admin delete should succeed");
    let alices_view = service
        .list_for_owner(&alice)
        .await
        .expect("listing should succeed");
    assert!(alices_view.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_delete_distinguishes_gone_from_succeeded(repo: InMemoryTaskRepository) {
    let service = service_over(&repo);
    let alice = Caller::user(UserId::new());

    let created = service
        .create(&alice, CreateTaskRequest::new("Disposable"))
        .await
        .expect("task creation should succeed");

    service
        .delete(&alice, created.id())
        .await
        .expect("first delete should succeed");
    let second = service.delete(&alice, created.id()).await;
    assert!(matches!(
        second,
        Err(TaskBoardError::Repository(TaskRepositoryError::NotFound(id))) if id == created.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn foreign_mutations_fail_and_leave_the_record_intact(repo: InMemoryTaskRepository) {
    let service = service_over(&repo);
    let alice = Caller::user(UserId::new());
    let bob = Caller::user(UserId::new());

    let created = service
        .create(&alice, CreateTaskRequest::new("Alice's notes"))
        .await
        .expect("task creation should succeed");

    let delete_attempt = service.delete(&bob, created.id()).await;
    assert!(matches!(
        delete_attempt,
        Err(TaskBoardError::Repository(TaskRepositoryError::NotFound(_)))
    ));

    let update_attempt = service
        .update(&bob, created.id(), TaskPatch::new().with_title("Bob's now"))
        .await;
    assert!(matches!(
        update_attempt,
        Err(TaskBoardError::Repository(TaskRepositoryError::NotFound(_)))
    ));

    let alices_view = service
        .list_for_owner(&alice)
        .await
        .expect("listing should succeed");
    assert_eq!(alices_view, vec![created]);
}
