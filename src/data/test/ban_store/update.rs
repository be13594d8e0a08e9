use std::sync::Arc;

use super::*;

/// Tests inserting a ban through update.
///
/// Expected: Ok with the record persisted to disk
#[tokio::test]
async fn persists_inserted_record() -> Result<(), crate::error::AppError> {
    let bans_file = TempBansFile::missing();
    let store = BanStore::new(bans_file.path());

    store
        .update(|bans| bans.insert("123".to_string(), record("spam")))
        .await?;

    let on_disk = bans_file.read_json();
    assert_eq!(on_disk["123"]["reason"], "spam");
    assert_eq!(on_disk["123"]["banned_by"], "moderator (100)");

    Ok(())
}

/// Tests that update passes the closure's return value through.
///
/// Expected: Ok with the previously stored record
#[tokio::test]
async fn returns_closure_result() -> Result<(), crate::error::AppError> {
    let bans_file = TempBansFile::missing();
    let store = BanStore::new(bans_file.path());
    store
        .update(|bans| bans.insert("123".to_string(), record("spam")))
        .await?;

    let previous = store.update(|bans| bans.shift_remove("123")).await?;

    assert_eq!(previous, Some(record("spam")));
    assert!(store.load().await.is_empty());

    Ok(())
}

/// Tests removing a user that is not banned.
///
/// Expected: Ok(None) with the existing list unchanged
#[tokio::test]
async fn removing_unknown_user_keeps_list() -> Result<(), crate::error::AppError> {
    let bans_file = TempBansFile::missing();
    let store = BanStore::new(bans_file.path());
    store
        .update(|bans| bans.insert("123".to_string(), record("spam")))
        .await?;
    let before = bans_file.read();

    let previous = store.update(|bans| bans.shift_remove("999")).await?;

    assert_eq!(previous, None);
    assert_eq!(bans_file.read(), before);

    Ok(())
}

/// Tests that update starts from a clean list when the file is corrupt.
///
/// Expected: Ok with only the new record on disk
#[tokio::test]
async fn recovers_from_corrupt_file() -> Result<(), crate::error::AppError> {
    let bans_file = TempBansFile::with_contents("not json at all");
    let store = BanStore::new(bans_file.path());

    store
        .update(|bans| bans.insert("123".to_string(), record("spam")))
        .await?;

    let bans = store.load().await;
    assert_eq!(bans.len(), 1);
    assert!(bans.contains_key("123"));

    Ok(())
}

/// Tests concurrent updates against the same store.
///
/// Verifies that overlapping read-modify-write cycles are serialized so no
/// insert is lost.
///
/// Expected: every inserted user present afterwards
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_updates_are_not_lost() -> Result<(), crate::error::AppError> {
    let bans_file = TempBansFile::missing();
    let store = Arc::new(BanStore::new(bans_file.path()));

    let mut handles = Vec::new();
    for user_id in 0..20u64 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .update(|bans| bans.insert(user_id.to_string(), record("spam")))
                .await
        }));
    }
    for handle in handles {
        handle.await.expect("update task panicked")?;
    }

    let bans = store.load().await;
    assert_eq!(bans.len(), 20);

    Ok(())
}
