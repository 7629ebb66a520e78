use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    Admin,
    /// Admins, or the user whose Discord id is given.
    SelfOrAdmin(u64),
}

/// Resolves the session's user and checks permissions.
///
/// Every guarded endpoint requires a logged-in user that exists in the database;
/// an empty permission list checks exactly that.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// # Returns
    /// - `Ok(User)` - Logged-in user satisfying every permission
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to an unknown user
    /// - `Err(AuthError::AccessDenied)` - A permission is not met
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_discord_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "attempted an admin-only action".to_string(),
                        )
                        .into());
                    }
                }
                Permission::SelfOrAdmin(owner_id) => {
                    if !user.admin && user.discord_id != *owner_id {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("attempted to access resources of user {}", owner_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
