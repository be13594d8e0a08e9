use serenity::all::RoleId;

use crate::model::actor::Actor;

/// Message shown to users who may not run moderation commands.
pub const PERMISSION_DENIED_MESSAGE: &str = "❌ You don't have permission to use this command.";

/// Staff role check guarding global moderation commands.
#[derive(Debug, Clone, Copy)]
pub struct PermissionGuard {
    staff_role_id: RoleId,
}

impl PermissionGuard {
    pub fn new(staff_role_id: RoleId) -> Self {
        Self { staff_role_id }
    }

    /// Returns true only for guild members holding the staff role.
    ///
    /// Users invoking a command outside of a guild have no roles and are never
    /// authorized.
    pub fn is_authorized(&self, actor: &Actor) -> bool {
        match actor {
            Actor::Member { roles, .. } => roles.contains(&self.staff_role_id),
            Actor::User { .. } => false,
        }
    }
}
