//! End-to-end task board flows over the in-memory repository.

use super::helpers::{repo, service_over};
use rstest::rstest;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Caller, TaskDomainError, TaskPriority, TaskStatus, UserId},
    services::{CreateTaskRequest, TaskBoardError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_visible_to_its_owner_and_to_admins_only(repo: InMemoryTaskRepository) {
    let service = service_over(&repo);
    let alice = Caller::user(UserId::new());
    let bob = Caller::user(UserId::new());
    let admin = Caller::admin(UserId::new());

    let created = service
        .create(
            &alice,
            CreateTaskRequest::new("Write report").with_priority(TaskPriority::High),
        )
        .await
        .expect("task creation should succeed");

    let alices_view = service
        .list_for_owner(&alice)
        .await
        .expect("owner listing should succeed");
    assert_eq!(alices_view.len(), 1);
    let task = alices_view.first().expect("one task listed");
    assert_eq!(task.title().as_str(), "Write report");
    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(task.priority(), TaskPriority::High);
    assert_eq!(task.owner(), alice.id());

    let bobs_view = service
        .list_for_owner(&bob)
        .await
        .expect("owner listing should succeed");
    assert!(bobs_view.is_empty());

    let admins_view = service
        .list_all(&admin)
        .await
        .expect("admin listing should succeed");
    assert_eq!(admins_view, vec![created]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_title_leaves_the_whole_store_empty(repo: InMemoryTaskRepository) {
    let service = service_over(&repo);
    let alice = Caller::user(UserId::new());
    let admin = Caller::admin(UserId::new());

    let result = service.create(&alice, CreateTaskRequest::new("")).await;
    assert!(matches!(
        result,
        Err(TaskBoardError::Domain(TaskDomainError::EmptyTitle))
    ));

    let all = service
        .list_all(&admin)
        .await
        .expect("admin listing should succeed");
    assert!(all.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_listing_is_a_valid_result(repo: InMemoryTaskRepository) {
    let service = service_over(&repo);
    let newcomer = Caller::user(UserId::new());

    let listed = service
        .list_for_owner(&newcomer)
        .await
        .expect("listing should succeed");
    assert!(listed.is_empty());
}
