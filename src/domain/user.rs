//! User domain entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
///
/// Note: the password travels and is stored in plain form. This mirrors
/// the wire contract of the service and is a documented weakness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, assigned at creation and never mutated
    #[schema(example = 1)]
    pub id: i64,
    /// Given name
    #[schema(example = "Max")]
    pub firstname: String,
    /// Family name
    #[schema(example = "Mustermann")]
    pub lastname: String,
    /// Email address
    #[schema(example = "max.mustermann@example.com")]
    pub email: String,
    /// Date of birth
    #[schema(example = "2000-01-01")]
    pub birthday: NaiveDate,
    /// Password (plain text)
    #[schema(example = "password123")]
    pub password: String,
}

impl User {
    /// Overwrite every mutable field with the draft's values.
    ///
    /// The id is immutable and stays untouched.
    pub fn apply(&mut self, draft: UserDraft) {
        self.firstname = draft.firstname;
        self.lastname = draft.lastname;
        self.email = draft.email;
        self.birthday = draft.birthday;
        self.password = draft.password;
    }
}

/// A user record without an identity, as submitted by clients.
///
/// Used for both create (id assigned by the store) and update
/// (id taken from the request path).
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub birthday: NaiveDate,
    pub password: String,
}
