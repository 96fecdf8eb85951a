//! Repositories: users, markers, user_markers.

use crate::error::{AppError, AppResult};
use crate::models::{MarkerRow, NewUser, UserMarkerEvent, UserRow};
use chrono::{DateTime, Utc};

use super::DbPool;

// ---- User ----

const USER_COLUMNS: &str =
    "id, first_name, last_name, email, registration_date, is_active, token";

pub async fn user_create(pool: &DbPool, user: &NewUser) -> AppResult<UserRow> {
    let row = sqlx::query_as::<_, UserRow>(&format!(
        r#"
        INSERT INTO users (first_name, last_name, email, registration_date, is_active, token)
        VALUES ($1, $2, $3, $4, TRUE, $5)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.email)
    .bind(user.registration_date)
    .bind(&user.token)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Conflict(format!("'{}' already exists", user.email))
        }
        other => AppError::Db(other),
    })?;
    Ok(row)
}

/// Case-insensitive lookup among active users.
pub async fn user_find_active_by_email(pool: &DbPool, email: &str) -> AppResult<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE is_active AND lower(email) = lower($1)"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn user_get_active_by_id(pool: &DbPool, id: i32) -> AppResult<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE is_active AND id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn users_list_active(pool: &DbPool) -> AppResult<Vec<UserRow>> {
    let rows = sqlx::query_as::<_, UserRow>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE is_active ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

// ---- Markers ----

pub async fn marker_create(pool: &DbPool, key: &str, letter: &str) -> AppResult<MarkerRow> {
    let row = sqlx::query_as::<_, MarkerRow>(
        r#"
        INSERT INTO markers (key, value)
        VALUES ($1, $2)
        ON CONFLICT (key) DO NOTHING
        RETURNING id, key, value
        "#,
    )
    .bind(key)
    .bind(letter)
    .fetch_optional(pool)
    .await?;
    row.ok_or_else(|| AppError::Conflict(format!("Marker '{}' already exists", key)))
}

pub async fn marker_find_by_key(pool: &DbPool, key: &str) -> AppResult<Option<MarkerRow>> {
    let row = sqlx::query_as::<_, MarkerRow>("SELECT id, key, value FROM markers WHERE key = $1")
        .bind(key)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn markers_list(pool: &DbPool) -> AppResult<Vec<MarkerRow>> {
    let rows = sqlx::query_as::<_, MarkerRow>("SELECT id, key, value FROM markers ORDER BY key")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

// ---- User markers ----

pub async fn user_marker_insert(
    pool: &DbPool,
    user_id: i32,
    marker_id: i32,
    at: DateTime<Utc>,
) -> AppResult<()> {
    sqlx::query("INSERT INTO user_markers (user_id, marker_id, date_time) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(marker_id)
        .bind(at)
        .execute(pool)
        .await?;
    Ok(())
}

/// Marker events of every active user, oldest first.
pub async fn user_markers_of_active_users(pool: &DbPool) -> AppResult<Vec<UserMarkerEvent>> {
    let rows = sqlx::query_as::<_, UserMarkerEvent>(
        r#"
        SELECT um.user_id, m.key AS marker_key, m.value AS letter, um.date_time
        FROM user_markers um
        JOIN markers m ON m.id = um.marker_id
        JOIN users u ON u.id = um.user_id
        WHERE u.is_active
        ORDER BY um.date_time, um.id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn user_markers_by_user(pool: &DbPool, user_id: i32) -> AppResult<Vec<UserMarkerEvent>> {
    let rows = sqlx::query_as::<_, UserMarkerEvent>(
        r#"
        SELECT um.user_id, m.key AS marker_key, m.value AS letter, um.date_time
        FROM user_markers um
        JOIN markers m ON m.id = um.marker_id
        WHERE um.user_id = $1
        ORDER BY um.date_time, um.id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
