//! Identity Gate: resolves the caller's authenticated subject id.
//!
//! Authentication itself happens upstream; the auth proxy forwards the verified
//! subject in the header named by `Config::identity_header`. A missing or blank
//! header means the caller is anonymous.

use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;
use crate::store::Store;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller(Option<String>);

impl Caller {
    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn subject(subject_id: impl Into<String>) -> Self {
        let subject_id = subject_id.into();
        if subject_id.trim().is_empty() {
            Self(None)
        } else {
            Self(Some(subject_id))
        }
    }

    pub fn current_identity(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Every entry point calls this before touching the store or the LLM.
    pub fn require(&self) -> Result<&str, AppError> {
        self.current_identity().ok_or(AppError::Unauthorized)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(parts
            .headers
            .get(state.config.identity_header.as_str())
            .and_then(|v| v.to_str().ok())
            .map(|v| Caller::subject(v.trim()))
            .unwrap_or_else(Caller::anonymous))
    }
}

/// Identity check followed by the user lookup shared by every flow.
pub async fn resolve_user(caller: &Caller, store: &dyn Store) -> Result<User, AppError> {
    let subject_id = caller.require()?;
    store
        .find_user_by_subject(subject_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStore;
    use crate::testing::user;

    #[test]
    fn test_blank_subject_is_anonymous() {
        assert_eq!(Caller::subject("   "), Caller::anonymous());
        assert!(Caller::subject("").require().is_err());
    }

    #[test]
    fn test_require_returns_subject() {
        assert_eq!(Caller::subject("user_2abc").require().unwrap(), "user_2abc");
    }

    #[tokio::test]
    async fn test_resolve_user_anonymous_never_hits_store() {
        let store = MockStore::new();
        let err = resolve_user(&Caller::anonymous(), &store).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[tokio::test]
    async fn test_resolve_user_missing_is_not_found() {
        let mut store = MockStore::new();
        store
            .expect_find_user_by_subject()
            .withf(|subject| subject == "user_2abc")
            .times(1)
            .returning(|_| Ok(None));

        let err = resolve_user(&Caller::subject("user_2abc"), &store)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_resolve_user_read_failure_is_persistence_error() {
        let mut store = MockStore::new();
        store
            .expect_find_user_by_subject()
            .returning(|_| Err(sqlx::Error::PoolTimedOut));

        let err = resolve_user(&Caller::subject("user_2abc"), &store)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Persistence(_)));
    }

    #[tokio::test]
    async fn test_resolve_user_found() {
        let mut store = MockStore::new();
        let expected = user(Some("finance-banking"), &[]);
        let returned = expected.clone();
        store
            .expect_find_user_by_subject()
            .returning(move |_| Ok(Some(returned.clone())));

        let found = resolve_user(&Caller::subject("user_2abc"), &store)
            .await
            .unwrap();
        assert_eq!(found, expected);
    }
}
