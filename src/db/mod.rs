//! Database layer (Firestore, or in-memory for development).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::config::{Config, ConfigError, StorageBackend};
use crate::error::AppError;
use crate::models::{ExerciseRecord, UserDocument};

/// Collection names as constants.
pub mod collections {
    /// One document per user, exercises embedded.
    pub const USERS: &str = "users";
}

/// Store handle that delegates to the configured backend.
#[derive(Clone)]
pub enum Database {
    Firestore(FirestoreDb),
    Memory(MemoryDb),
}

impl Database {
    /// Open the backend selected by the configuration.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        match config.storage_backend {
            StorageBackend::Firestore => {
                let project_id = config.gcp_project_id.as_deref().ok_or_else(|| {
                    AppError::Internal(ConfigError::Missing("GCP_PROJECT_ID").into())
                })?;
                Ok(Self::Firestore(FirestoreDb::new(project_id).await?))
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory store; data will not survive a restart");
                Ok(Self::Memory(MemoryDb::new()))
            }
        }
    }

    /// Short name of the active backend, for logs.
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Firestore(_) => "firestore",
            Self::Memory(_) => "memory",
        }
    }

    pub async fn insert_user(&self, user: &UserDocument) -> Result<(), AppError> {
        match self {
            Self::Firestore(db) => db.insert_user(user).await,
            Self::Memory(db) => db.insert_user(user).await,
        }
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Option<UserDocument>, AppError> {
        match self {
            Self::Firestore(db) => db.get_user(user_id).await,
            Self::Memory(db) => db.get_user(user_id).await,
        }
    }

    pub async fn list_users(&self) -> Result<Vec<UserDocument>, AppError> {
        match self {
            Self::Firestore(db) => db.list_users().await,
            Self::Memory(db) => db.list_users().await,
        }
    }

    /// Append-if-exists. `None` means the user does not exist.
    pub async fn append_exercise(
        &self,
        user_id: &str,
        exercise: &ExerciseRecord,
    ) -> Result<Option<UserDocument>, AppError> {
        match self {
            Self::Firestore(db) => db.append_exercise(user_id, exercise).await,
            Self::Memory(db) => db.append_exercise(user_id, exercise).await,
        }
    }

    /// Release the store handle at shutdown.
    pub async fn close(self) {
        let backend = self.backend_info();
        if let Self::Memory(db) = &self {
            tracing::info!(users = db.len(), "Discarding in-memory store");
        }
        drop(self);
        tracing::info!(backend, "Database closed");
    }
}
