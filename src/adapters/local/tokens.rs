use crate::domain::User;
use crate::ports::Authenticator;
use async_trait::async_trait;
use std::collections::HashMap;

/// Access tokens issued out of band, mapped to user ids.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenAuthenticator {
    tokens: HashMap<String, String>,
}

impl StaticTokenAuthenticator {
    pub fn new<I, T, U>(tokens: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
        T: Into<String>,
        U: Into<String>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|(token, user_id)| (token.into(), user_id.into()))
                .collect(),
        }
    }
}

#[async_trait]
impl Authenticator for StaticTokenAuthenticator {
    async fn authenticate(&self, access_token: &str) -> Option<User> {
        if access_token.is_empty() {
            return None;
        }
        self.tokens.get(access_token).map(User::new)
    }
}
