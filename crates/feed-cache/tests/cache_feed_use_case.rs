//! Saving a feed: delete first, insert only after a successful delete

mod common;

use std::sync::Arc;

use common::*;
use feed_cache::{
    testing::{FeedStoreSpy, ReceivedMessage},
    CacheError, LocalFeedLoader,
};

fn make_sut() -> (LocalFeedLoader, Arc<FeedStoreSpy>) {
    let store = Arc::new(FeedStoreSpy::new());
    let loader = LocalFeedLoader::new(store.clone(), fixed_now);
    (loader, store)
}

#[tokio::test]
async fn test_init_does_not_message_store() {
    let (_loader, store) = make_sut();

    assert!(store.received_messages().is_empty());
}

#[tokio::test]
async fn test_save_requests_cache_deletion() {
    let (loader, store) = make_sut();

    let _ = loader.save(&unique_image_feed().0).await;

    assert_eq!(store.received_messages()[0], ReceivedMessage::DeleteCachedFeed);
}

#[tokio::test]
async fn test_save_does_not_insert_on_deletion_error() {
    let (loader, store) = make_sut();
    store.stub_deletion_error(ANY_ERROR);

    let _ = loader.save(&unique_image_feed().0).await;

    assert_eq!(store.received_messages(), vec![ReceivedMessage::DeleteCachedFeed]);
}

#[tokio::test]
async fn test_save_inserts_with_timestamp_after_successful_deletion() {
    let (loader, store) = make_sut();
    let (feed, local_feed) = unique_image_feed();

    loader.save(&feed).await.unwrap();

    assert_eq!(
        store.received_messages(),
        vec![
            ReceivedMessage::DeleteCachedFeed,
            ReceivedMessage::Insert(local_feed, fixed_now()),
        ]
    );
}

#[tokio::test]
async fn test_save_fails_on_deletion_error() {
    let (loader, store) = make_sut();
    store.stub_deletion_error(ANY_ERROR);

    let result = loader.save(&unique_image_feed().0).await;

    assert!(matches!(result, Err(CacheError::Store { message }) if message == ANY_ERROR));
}

#[tokio::test]
async fn test_save_fails_on_insertion_error() {
    let (loader, store) = make_sut();
    store.stub_insertion_error("insertion error");

    let result = loader.save(&unique_image_feed().0).await;

    assert!(matches!(result, Err(CacheError::Store { message }) if message == "insertion error"));
}

#[tokio::test]
async fn test_save_succeeds_on_successful_insertion() {
    let (loader, _store) = make_sut();

    assert!(loader.save(&unique_image_feed().0).await.is_ok());
}

#[tokio::test]
async fn test_save_of_empty_feed_still_replaces_cache() {
    let (loader, store) = make_sut();

    loader.save(&[]).await.unwrap();

    assert_eq!(
        store.received_messages(),
        vec![
            ReceivedMessage::DeleteCachedFeed,
            ReceivedMessage::Insert(Vec::new(), fixed_now()),
        ]
    );
}

#[tokio::test]
async fn test_save_delivers_nothing_after_loader_is_dropped_during_deletion() {
    let (loader, store) = make_sut();
    let release = store.hold_next_operation();
    let captured = Arc::new(std::sync::Mutex::new(Vec::new()));

    let task = {
        let captured = captured.clone();
        tokio::spawn(async move {
            let result = loader.save(&unique_image_feed().0).await;
            captured.lock().unwrap().push(result.is_ok());
        })
    };
    while store.received_messages().is_empty() {
        tokio::task::yield_now().await;
    }

    task.abort();
    let _ = release.send(());
    assert!(task.await.unwrap_err().is_cancelled());

    assert!(captured.lock().unwrap().is_empty());
    assert_eq!(store.received_messages(), vec![ReceivedMessage::DeleteCachedFeed]);
}

#[tokio::test]
async fn test_save_delivers_nothing_after_loader_is_dropped_during_insertion() {
    let (loader, store) = make_sut();
    let captured = Arc::new(std::sync::Mutex::new(Vec::new()));
    let (feed, local_feed) = unique_image_feed();

    let release_deletion = store.hold_next_operation();

    let task = {
        let captured = captured.clone();
        tokio::spawn(async move {
            let result = loader.save(&feed).await;
            captured.lock().unwrap().push(result.is_ok());
        })
    };
    while store.received_messages().is_empty() {
        tokio::task::yield_now().await;
    }

    // The task only resumes at the next yield, so the insert picks up this hold.
    let release = store.hold_next_operation();
    let _ = release_deletion.send(());
    while store.received_messages().len() < 2 {
        tokio::task::yield_now().await;
    }

    task.abort();
    let _ = release.send(());
    assert!(task.await.unwrap_err().is_cancelled());

    assert!(captured.lock().unwrap().is_empty());
    assert_eq!(
        store.received_messages(),
        vec![
            ReceivedMessage::DeleteCachedFeed,
            ReceivedMessage::Insert(local_feed, fixed_now()),
        ]
    );
}
