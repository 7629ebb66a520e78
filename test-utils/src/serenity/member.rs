//! Test factory for Serenity guild `Member` objects.

use serenity::all::Member;

/// Creates a guild member with the given nickname and role ids.
///
/// # Arguments
/// - `guild_id` - Guild the member belongs to
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account username, also used as the global display name
/// - `nick` - Optional guild nickname, which takes precedence for display
/// - `roles` - Role ids held by the member
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(
    guild_id: u64,
    user_id: u64,
    username: &str,
    nick: Option<&str>,
    roles: &[u64],
) -> Member {
    let roles: Vec<String> = roles.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": {
            "id": user_id.to_string(),
            "username": username,
            "discriminator": "0",
            "global_name": username,
            "avatar": null,
            "bot": false,
            "public_flags": 0
        },
        "nick": nick,
        "avatar": null,
        "roles": roles,
        "joined_at": "2024-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "communication_disabled_until": null
    }))
    .expect("Failed to deserialize test member")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nickname_takes_precedence_for_display() {
        let member = create_test_member(1, 2, "alice", Some("Ally"), &[10, 20]);

        assert_eq!(member.user.id.get(), 2);
        assert_eq!(member.display_name(), "Ally");
        assert_eq!(member.roles.len(), 2);
    }
}
