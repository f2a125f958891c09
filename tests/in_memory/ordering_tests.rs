//! Listing order: newest first, reconstructed from stored timestamps.

use super::helpers::{repo, service_over, task_created_ago};
use chrono::Duration;
use rstest::rstest;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Caller, UserId},
    ports::TaskRepository,
    services::CreateTaskRequest,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_are_strictly_descending_by_creation_time(
    repo: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    let service = service_over(&repo);
    let owner = UserId::new();
    let caller = Caller::user(owner);

    // Seeded out of insertion order on purpose.
    for (title, age) in [
        ("Oldest", Duration::seconds(30)),
        ("Newest", Duration::seconds(10)),
        ("Middle", Duration::seconds(20)),
    ] {
        let task = task_created_ago(owner, title, age)?;
        repo.insert(&task).await?;
    }

    let listed = service.list_for_owner(&caller).await?;
    let titles: Vec<&str> = listed.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
    for window in listed.windows(2) {
        if let [newer, older] = window {
            assert!(newer.created_at() > older.created_at());
        }
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_task_created_a_second_later_lists_first(
    repo: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    let service = service_over(&repo);
    let owner = UserId::new();
    let caller = Caller::user(owner);

    let first = task_created_ago(owner, "First", Duration::seconds(1))?;
    repo.insert(&first).await?;
    let second = service
        .create(&caller, CreateTaskRequest::new("Second"))
        .await?;

    let listed = service.list_for_owner(&caller).await?;
    assert_eq!(
        listed.iter().map(|task| task.id()).collect::<Vec<_>>(),
        vec![second.id(), first.id()]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admin_listing_uses_the_same_order_across_owners(
    repo: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    let service = service_over(&repo);
    let admin = Caller::admin(UserId::new());

    let foreign = task_created_ago(UserId::new(), "Foreign and older", Duration::seconds(45))?;
    repo.insert(&foreign).await?;
    let own = task_created_ago(UserId::new(), "Recent", Duration::seconds(5))?;
    repo.insert(&own).await?;

    let listed = service.list_all(&admin).await?;
    let titles: Vec<&str> = listed.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(titles, vec!["Recent", "Foreign and older"]);
    Ok(())
}
