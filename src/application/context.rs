//! Request Context
//!
//! Per-request state populated once by session resolution and passed
//! explicitly into every use case.

use crate::domain::models::user::{User, UserId};

/// The authenticated caller of the current request
#[derive(Debug, Clone)]
pub struct RequestContext {
    user: User,
}

impl RequestContext {
    #[must_use]
    pub fn new(user: User) -> Self {
        Self { user }
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub fn user_id(&self) -> &UserId {
        self.user.id()
    }
}
