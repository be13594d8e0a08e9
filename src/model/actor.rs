//! Users taking part in a moderation command.

use serenity::all::{Member, RoleId, User, UserId};

/// Identity of a Discord user as shown in reports.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: UserId,
    /// Username, or `name#discriminator` for legacy accounts.
    pub tag: String,
    /// Avatar URL, falling back to Discord's default avatar.
    pub avatar_url: String,
}

impl UserSummary {
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }

    /// `name (id)` form stored as `banned_by` in the ban list.
    pub fn display_with_id(&self) -> String {
        format!("{} ({})", self.tag, self.id)
    }
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            tag: user.tag(),
            avatar_url: user.face(),
        }
    }
}

/// User invoking a command.
///
/// Commands sent from a guild carry the member's roles; commands sent in a
/// direct message only identify the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Actor {
    Member { user: UserSummary, roles: Vec<RoleId> },
    User { user: UserSummary },
}

impl Actor {
    pub fn user(&self) -> &UserSummary {
        match self {
            Self::Member { user, .. } | Self::User { user } => user,
        }
    }
}

impl From<&Member> for Actor {
    fn from(member: &Member) -> Self {
        Self::Member {
            user: UserSummary::from(&member.user),
            roles: member.roles.clone(),
        }
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self::User {
            user: UserSummary::from(user),
        }
    }
}
