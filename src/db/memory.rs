// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process document store for local development and tests.

use crate::error::AppError;
use crate::models::{ExerciseRecord, UserDocument};
use dashmap::DashMap;
use std::sync::Arc;

/// Users keyed by id. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryDb {
    users: Arc<DashMap<String, UserDocument>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_user(&self, user: &UserDocument) -> Result<(), AppError> {
        self.users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Option<UserDocument>, AppError> {
        Ok(self.users.get(user_id).map(|entry| entry.value().clone()))
    }

    /// List every user, ordered by id.
    pub async fn list_users(&self) -> Result<Vec<UserDocument>, AppError> {
        let mut users: Vec<UserDocument> = self
            .users
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(users)
    }

    /// Append under the entry's write lock; `None` if the user is absent.
    pub async fn append_exercise(
        &self,
        user_id: &str,
        exercise: &ExerciseRecord,
    ) -> Result<Option<UserDocument>, AppError> {
        Ok(self.users.get_mut(user_id).map(|mut entry| {
            entry.exercises.push(exercise.clone());
            entry.value().clone()
        }))
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn exercise(id: &str, day: u32) -> ExerciseRecord {
        ExerciseRecord {
            id: id.to_string(),
            description: format!("exercise {id}"),
            duration: 10.0,
            date: NaiveDate::from_ymd_opt(2023, 1, day).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_append_to_missing_user_is_none() {
        let db = MemoryDb::new();
        let result = db
            .append_exercise("0123456789abcdef01234567", &exercise("a", 1))
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(db.is_empty());
    }

    #[tokio::test]
    async fn test_append_keeps_insertion_order() {
        let db = MemoryDb::new();
        let user = UserDocument::new("aaaaaaaaaaaaaaaaaaaaaaaa".into(), "alice".into());
        db.insert_user(&user).await.unwrap();

        db.append_exercise(&user.id, &exercise("a", 9)).await.unwrap();
        let updated = db
            .append_exercise(&user.id, &exercise("b", 2))
            .await
            .unwrap()
            .unwrap();

        let ids: Vec<&str> = updated.exercises.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(db.get_user(&user.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let db = MemoryDb::new();
        let user = UserDocument::new("bbbbbbbbbbbbbbbbbbbbbbbb".into(), "bob".into());
        db.insert_user(&user).await.unwrap();

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let db = db.clone();
                let user_id = user.id.clone();
                tokio::spawn(async move {
                    db.append_exercise(&user_id, &exercise(&i.to_string(), 1))
                        .await
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let stored = db.get_user(&user.id).await.unwrap().unwrap();
        assert_eq!(stored.exercises.len(), 50);
    }

    #[tokio::test]
    async fn test_list_users_sorted_by_id() {
        let db = MemoryDb::new();
        for (id, name) in [("c", "carol"), ("a", "alice"), ("b", "bob")] {
            db.insert_user(&UserDocument::new(id.repeat(24), name.into()))
                .await
                .unwrap();
        }
        let names: Vec<String> = db
            .list_users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, ["alice", "bob", "carol"]);
        assert_eq!(db.len(), 3);
    }
}
