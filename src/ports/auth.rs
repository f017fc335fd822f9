use crate::domain::User;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Resolve an access token to the user it belongs to.
    async fn authenticate(&self, access_token: &str) -> Option<User>;
}
