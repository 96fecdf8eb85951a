//! Storage seam used by handlers: Postgres in production, memory in tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

use super::{repositories as repo, DbPool};
use crate::error::AppResult;
use crate::models::{MarkerRow, NewUser, UserMarkerEvent, UserRow, UserWithMarkers};

#[async_trait]
pub trait Store: Send + Sync {
    /// Every active user with their marker events, oldest event first.
    async fn active_users_with_markers(&self) -> AppResult<Vec<UserWithMarkers>>;

    async fn active_user_with_markers(&self, id: i32) -> AppResult<Option<UserWithMarkers>>;

    /// Case-insensitive match among active users.
    async fn find_active_user_by_email(&self, email: &str) -> AppResult<Option<UserRow>>;

    /// Fails with `AppError::Conflict` when an active user already owns the email.
    async fn create_user(&self, user: NewUser) -> AppResult<UserRow>;

    async fn create_marker(&self, key: &str, letter: &str) -> AppResult<MarkerRow>;

    async fn find_marker(&self, key: &str) -> AppResult<Option<MarkerRow>>;

    async fn list_markers(&self) -> AppResult<Vec<MarkerRow>>;

    async fn record_marker(&self, user_id: i32, marker_id: i32, at: DateTime<Utc>) -> AppResult<()>;
}

/// Attach events to their users, keeping user order and event order.
pub fn group_markers(users: Vec<UserRow>, events: Vec<UserMarkerEvent>) -> Vec<UserWithMarkers> {
    let mut by_user: HashMap<i32, Vec<UserMarkerEvent>> = HashMap::new();
    for e in events {
        by_user.entry(e.user_id).or_default().push(e);
    }
    users
        .into_iter()
        .map(|user| {
            let markers = by_user.remove(&user.id).unwrap_or_default();
            UserWithMarkers { user, markers }
        })
        .collect()
}

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn active_users_with_markers(&self) -> AppResult<Vec<UserWithMarkers>> {
        let users = repo::users_list_active(&self.pool).await?;
        let events = repo::user_markers_of_active_users(&self.pool).await?;
        Ok(group_markers(users, events))
    }

    async fn active_user_with_markers(&self, id: i32) -> AppResult<Option<UserWithMarkers>> {
        let Some(user) = repo::user_get_active_by_id(&self.pool, id).await? else {
            return Ok(None);
        };
        let markers = repo::user_markers_by_user(&self.pool, id).await?;
        Ok(Some(UserWithMarkers { user, markers }))
    }

    async fn find_active_user_by_email(&self, email: &str) -> AppResult<Option<UserRow>> {
        repo::user_find_active_by_email(&self.pool, email).await
    }

    async fn create_user(&self, user: NewUser) -> AppResult<UserRow> {
        repo::user_create(&self.pool, &user).await
    }

    async fn create_marker(&self, key: &str, letter: &str) -> AppResult<MarkerRow> {
        repo::marker_create(&self.pool, key, letter).await
    }

    async fn find_marker(&self, key: &str) -> AppResult<Option<MarkerRow>> {
        repo::marker_find_by_key(&self.pool, key).await
    }

    async fn list_markers(&self) -> AppResult<Vec<MarkerRow>> {
        repo::markers_list(&self.pool).await
    }

    async fn record_marker(&self, user_id: i32, marker_id: i32, at: DateTime<Utc>) -> AppResult<()> {
        repo::user_marker_insert(&self.pool, user_id, marker_id, at).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn user(id: i32) -> UserRow {
        UserRow {
            id,
            first_name: format!("F{id}"),
            last_name: format!("L{id}"),
            email: format!("u{id}@example.com"),
            registration_date: Utc::now(),
            is_active: true,
            token: String::new(),
        }
    }

    fn event(user_id: i32, key: &str, at: DateTime<Utc>) -> UserMarkerEvent {
        UserMarkerEvent {
            user_id,
            marker_key: key.to_string(),
            letter: key.to_uppercase(),
            date_time: at,
        }
    }

    #[test]
    fn group_markers_keeps_orders_and_empty_users() {
        let t = Utc::now();
        let grouped = group_markers(
            vec![user(1), user(2), user(3)],
            vec![
                event(3, "a", t),
                event(1, "b", t + Duration::seconds(1)),
                event(3, "c", t + Duration::seconds(2)),
                event(9, "orphan", t),
            ],
        );
        let ids: Vec<i32> = grouped.iter().map(|u| u.user.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(grouped[0].markers.len(), 1);
        assert!(grouped[1].markers.is_empty());
        let keys: Vec<&str> = grouped[2].markers.iter().map(|m| m.marker_key.as_str()).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }
}
