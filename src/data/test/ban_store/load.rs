use super::*;

/// Tests loading when the ban list file does not exist.
///
/// Verifies that the store creates the file with an empty list.
///
/// Expected: empty list and a file containing `{}`
#[tokio::test]
async fn creates_missing_file() {
    let bans_file = TempBansFile::missing();
    let store = BanStore::new(bans_file.path());

    let bans = store.load().await;

    assert!(bans.is_empty());
    assert!(bans_file.exists());
    assert_eq!(bans_file.read(), "{}");
}

/// Tests loading a file holding valid bans.
///
/// Expected: all records returned keyed by user ID
#[tokio::test]
async fn reads_existing_bans() {
    let bans_file = TempBansFile::with_contents(
        r#"{
    "123": {
        "reason": "spam",
        "banned_by": "moderator (100)",
        "time": "2024-05-01T12:00:00Z"
    }
}"#,
    );
    let store = BanStore::new(bans_file.path());

    let bans = store.load().await;

    assert_eq!(bans.len(), 1);
    assert_eq!(bans.get("123"), Some(&record("spam")));
}

/// Tests loading a file written with naive timestamps.
///
/// Verifies that lists written before timestamps carried an offset are still
/// readable and are not reset.
///
/// Expected: record parsed, file left untouched
#[tokio::test]
async fn reads_naive_timestamps() {
    let contents = r#"{"123": {"reason": "spam", "banned_by": "moderator (100)", "time": "2024-05-01T12:00:00"}}"#;
    let bans_file = TempBansFile::with_contents(contents);
    let store = BanStore::new(bans_file.path());

    let bans = store.load().await;

    assert_eq!(bans.get("123"), Some(&record("spam")));
    assert_eq!(bans_file.read(), contents);
}

/// Tests loading a truncated JSON file.
///
/// Verifies that corrupt content is replaced with an empty list and that the
/// next load succeeds without resetting again.
///
/// Expected: empty list on both loads and a file containing `{}`
#[tokio::test]
async fn resets_malformed_file() {
    let bans_file = TempBansFile::with_contents(r#"{"123": {"reason": "sp"#);
    let store = BanStore::new(bans_file.path());

    let bans = store.load().await;

    assert!(bans.is_empty());
    assert_eq!(bans_file.read(), "{}");

    let bans = store.load().await;
    assert!(bans.is_empty());
    assert_eq!(bans_file.read(), "{}");
}

/// Tests loading a file holding bytes that are not UTF-8.
///
/// Expected: empty list and a file containing `{}`
#[tokio::test]
async fn resets_binary_file() {
    let bans_file = TempBansFile::with_contents(b"\xff\xfe\x00\x81");
    let store = BanStore::new(bans_file.path());

    let bans = store.load().await;

    assert!(bans.is_empty());
    assert_eq!(bans_file.read(), "{}");
}

/// Tests loading an empty or whitespace-only file.
///
/// Expected: empty list and a file containing `{}`
#[tokio::test]
async fn resets_blank_file() {
    let bans_file = TempBansFile::with_contents("  \n");
    let store = BanStore::new(bans_file.path());

    let bans = store.load().await;

    assert!(bans.is_empty());
    assert_eq!(bans_file.read(), "{}");
}

/// Tests loading valid JSON of the wrong shape.
///
/// Expected: empty list and a file containing `{}`
#[tokio::test]
async fn resets_unexpected_structure() {
    let bans_file = TempBansFile::with_contents(r#"["123", "456"]"#);
    let store = BanStore::new(bans_file.path());

    let bans = store.load().await;

    assert!(bans.is_empty());
    assert_eq!(bans_file.read(), "{}");
}

/// Tests loading when the ban list path is a directory.
///
/// Verifies that loading never fails even when the reset cannot be written.
///
/// Expected: empty list
#[tokio::test]
async fn unreadable_path_yields_empty_list() {
    let bans_file = TempBansFile::missing();
    std::fs::create_dir(bans_file.path()).unwrap();
    let store = BanStore::new(bans_file.path());

    let bans = store.load().await;

    assert!(bans.is_empty());
}

/// Tests loading a list where one record does not match the expected shape.
///
/// Verifies that only the broken record is skipped and the rest of the list
/// survives without the file being reset.
///
/// Expected: valid records loaded, file left untouched
#[tokio::test]
async fn skips_malformed_records() {
    let contents = r#"{
    "1": {"reason": "spam", "banned_by": "moderator (100)", "time": "2024-05-01T12:00:00Z"},
    "2": {"reason": "raid", "time": "2024-05-01T12:00:00Z"},
    "3": {"reason": "raid", "banned_by": "moderator (100)", "time": "yesterday"},
    "4": "banned",
    "5": {"reason": "scam", "banned_by": "moderator (100)", "time": "2024-05-01T12:00:00"}
}"#;
    let bans_file = TempBansFile::with_contents(contents);
    let store = BanStore::new(bans_file.path());

    let bans = store.load().await;

    let keys: Vec<&str> = bans.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["1", "5"]);
    assert_eq!(bans["5"].reason, "scam");
    assert_eq!(bans_file.read(), contents);
}
