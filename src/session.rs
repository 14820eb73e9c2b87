use crate::error::{GalleryError, GalleryResult};
use crate::users::{User, UserDirectory};
use tracing::info;

/// The logged-in user, if any.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<String>,
}

impl Session {
    /// Log in by email. Mock auth: any password is accepted, so none is taken.
    pub fn login(&mut self, users: &UserDirectory, email: &str) -> GalleryResult<String> {
        let user = users
            .find_by_email(email)
            .ok_or_else(|| GalleryError::InvalidCredentials(email.to_string()))?;
        info!(id = %user.id, "logged in");
        self.current = Some(user.id.clone());
        Ok(user.id.clone())
    }

    pub fn logout(&mut self) {
        if let Some(id) = self.current.take() {
            info!(%id, "logged out");
        }
    }

    /// Register a new account and log it in.
    pub fn register(
        &mut self,
        users: &mut UserDirectory,
        name: &str,
        email: &str,
    ) -> GalleryResult<String> {
        let id = users.register(name, email)?;
        self.current = Some(id.clone());
        Ok(id)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_user_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Current user id, or `NotAuthenticated`.
    pub fn require(&self) -> GalleryResult<&str> {
        self.current_user_id().ok_or(GalleryError::NotAuthenticated)
    }

    pub fn current_user<'a>(&self, users: &'a UserDirectory) -> Option<&'a User> {
        self.current.as_deref().and_then(|id| users.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::tests::test_user;

    fn directory() -> UserDirectory {
        UserDirectory::from_seed(vec![test_user("user1", "alex@example.com")])
    }

    #[test]
    fn test_login_logout() {
        let users = directory();
        let mut session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.require(), Err(GalleryError::NotAuthenticated));

        assert_eq!(session.login(&users, "alex@example.com").unwrap(), "user1");
        assert!(session.is_authenticated());
        assert_eq!(session.current_user(&users).map(|u| u.id.as_str()), Some("user1"));

        session.logout();
        assert!(session.current_user_id().is_none());
    }

    #[test]
    fn test_login_unknown_email() {
        let users = directory();
        let mut session = Session::default();
        assert!(matches!(
            session.login(&users, "nobody@example.com"),
            Err(GalleryError::InvalidCredentials(_))
        ));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_register_logs_in() {
        let mut users = directory();
        let mut session = Session::default();
        let id = session.register(&mut users, "Jo", "jo@example.com").unwrap();
        assert_eq!(session.current_user_id(), Some(id.as_str()));
    }

    #[test]
    fn test_failed_register_keeps_session() {
        let mut users = directory();
        let mut session = Session::default();
        session.login(&users, "alex@example.com").unwrap();
        assert!(session.register(&mut users, "Dup", "alex@example.com").is_err());
        assert_eq!(session.current_user_id(), Some("user1"));
    }
}
