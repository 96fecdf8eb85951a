//! In-process `Store` for tests and local runs without Postgres.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::store::{group_markers, Store};
use crate::error::{AppError, AppResult};
use crate::models::{MarkerRow, NewUser, UserMarkerEvent, UserRow, UserWithMarkers};

#[derive(Default)]
struct Inner {
    users: Vec<UserRow>,
    markers: Vec<MarkerRow>,
    /// (user_id, marker_id, at), insertion order
    user_markers: Vec<(i32, i32, DateTime<Utc>)>,
}

/// Case-insensitive match, Unicode-aware like Postgres `lower()`.
fn same_email(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl Inner {
    fn events_for(&self, pred: impl Fn(i32) -> bool) -> Vec<UserMarkerEvent> {
        let mut events: Vec<UserMarkerEvent> = self
            .user_markers
            .iter()
            .filter(|(user_id, _, _)| pred(*user_id))
            .filter_map(|(user_id, marker_id, at)| {
                self.markers.iter().find(|m| m.id == *marker_id).map(|m| UserMarkerEvent {
                    user_id: *user_id,
                    marker_key: m.key.clone(),
                    letter: m.value.clone(),
                    date_time: *at,
                })
            })
            .collect();
        events.sort_by_key(|e| e.date_time);
        events
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a user inactive; returns false if no such user.
    pub async fn deactivate_user(&self, id: i32) -> bool {
        let mut inner = self.inner.write().await;
        match inner.users.iter_mut().find(|u| u.id == id) {
            Some(u) => {
                u.is_active = false;
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn active_users_with_markers(&self) -> AppResult<Vec<UserWithMarkers>> {
        let inner = self.inner.read().await;
        let users: Vec<UserRow> = inner.users.iter().filter(|u| u.is_active).cloned().collect();
        let events = inner.events_for(|id| users.iter().any(|u| u.id == id));
        Ok(group_markers(users, events))
    }

    async fn active_user_with_markers(&self, id: i32) -> AppResult<Option<UserWithMarkers>> {
        let inner = self.inner.read().await;
        let Some(user) = inner.users.iter().find(|u| u.id == id && u.is_active).cloned() else {
            return Ok(None);
        };
        let markers = inner.events_for(|uid| uid == id);
        Ok(Some(UserWithMarkers { user, markers }))
    }

    async fn find_active_user_by_email(&self, email: &str) -> AppResult<Option<UserRow>> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .iter()
            .find(|u| u.is_active && same_email(&u.email, email))
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> AppResult<UserRow> {
        let mut inner = self.inner.write().await;
        if inner
            .users
            .iter()
            .any(|u| u.is_active && same_email(&u.email, &user.email))
        {
            return Err(AppError::Conflict(format!("'{}' already exists", user.email)));
        }
        let row = UserRow {
            id: inner.users.len() as i32 + 1,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            registration_date: user.registration_date,
            is_active: true,
            token: user.token,
        };
        inner.users.push(row.clone());
        Ok(row)
    }

    async fn create_marker(&self, key: &str, letter: &str) -> AppResult<MarkerRow> {
        let mut inner = self.inner.write().await;
        if inner.markers.iter().any(|m| m.key == key) {
            return Err(AppError::Conflict(format!("Marker '{}' already exists", key)));
        }
        let row = MarkerRow {
            id: inner.markers.len() as i32 + 1,
            key: key.to_string(),
            value: letter.to_string(),
        };
        inner.markers.push(row.clone());
        Ok(row)
    }

    async fn find_marker(&self, key: &str) -> AppResult<Option<MarkerRow>> {
        let inner = self.inner.read().await;
        Ok(inner.markers.iter().find(|m| m.key == key).cloned())
    }

    async fn list_markers(&self) -> AppResult<Vec<MarkerRow>> {
        let inner = self.inner.read().await;
        let mut rows = inner.markers.clone();
        rows.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(rows)
    }

    async fn record_marker(&self, user_id: i32, marker_id: i32, at: DateTime<Utc>) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.user_markers.push((user_id, marker_id, at));
        Ok(())
    }
}
