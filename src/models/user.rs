//! User document model for storage and API.

use serde::{Deserialize, Serialize};

use crate::models::ExerciseRecord;

/// User document stored in the `users` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    /// 24-hex identifier (also used as document ID)
    pub id: String,
    /// Display name, not unique
    pub username: String,
    /// Exercise entries in insertion order
    #[serde(default)]
    pub exercises: Vec<ExerciseRecord>,
}

impl UserDocument {
    pub fn new(id: String, username: String) -> Self {
        Self {
            id,
            username,
            exercises: Vec::new(),
        }
    }
}

/// `{username, _id}` pair returned by the user endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<&UserDocument> for UserSummary {
    fn from(user: &UserDocument) -> Self {
        Self {
            username: user.username.clone(),
            id: user.id.clone(),
        }
    }
}
