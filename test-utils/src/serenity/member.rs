//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

use super::user::user_json;

/// Guild ID assigned to members created by this factory.
pub const TEST_MEMBER_GUILD_ID: u64 = 900000000000000000;

/// Creates a test Serenity Member holding the given roles.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Username
/// - `role_ids` - Role IDs assigned to the member, may be empty
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::member::create_test_member;
///
/// let staff = create_test_member(1, "moderator", &[42]);
/// assert_eq!(staff.roles.len(), 1);
/// ```
pub fn create_test_member(user_id: u64, name: &str, role_ids: &[u64]) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "user": user_json(user_id, name),
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": null,
        "communication_disabled_until": null,
        "guild_id": TEST_MEMBER_GUILD_ID.to_string(),
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
