//! User rows and the registration request/response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::marker::UserMarkerEvent;

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub registration_date: DateTime<Utc>,
    pub is_active: bool,
    pub token: String,
}

impl UserRow {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields for a new, active user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub registration_date: DateTime<Utc>,
    pub token: String,
}

/// An active user with all recorded marker events, oldest first.
#[derive(Debug, Clone)]
pub struct UserWithMarkers {
    pub user: UserRow,
    pub markers: Vec<UserMarkerEvent>,
}

/// Body of `POST /api/user`. Missing fields deserialize as empty so the
/// required-field check can report them by name.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(default, alias = "firstname", alias = "FirstName")]
    #[validate(length(max = 255))]
    pub first_name: String,
    #[serde(default, alias = "lastname", alias = "LastName")]
    #[validate(length(max = 255))]
    pub last_name: String,
    #[serde(default, alias = "Email")]
    #[validate(length(max = 255))]
    pub email: String,
}

impl UserRequest {
    /// Trim surrounding whitespace from every field.
    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedUser {
    pub id: i32,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accepts_front_end_casing() {
        let req: UserRequest = serde_json::from_str(
            r#"{"firstname":"Ada","lastName":"Lovelace","email":"ada@example.com"}"#,
        )
        .unwrap();
        assert_eq!(req.first_name, "Ada");
        assert_eq!(req.last_name, "Lovelace");
        assert_eq!(req.email, "ada@example.com");
    }

    #[test]
    fn request_missing_fields_default_to_empty() {
        let req: UserRequest = serde_json::from_str(r#"{"firstName":"Ada"}"#).unwrap();
        assert_eq!(req.first_name, "Ada");
        assert!(req.last_name.is_empty());
        assert!(req.email.is_empty());
    }

    #[test]
    fn normalized_trims_every_field() {
        let req = UserRequest {
            first_name: " Ada ".into(),
            last_name: "\tLovelace".into(),
            email: " ada@example.com \n".into(),
        }
        .normalized();
        assert_eq!(req.first_name, "Ada");
        assert_eq!(req.last_name, "Lovelace");
        assert_eq!(req.email, "ada@example.com");
    }

    #[test]
    fn display_name_joins_first_and_last() {
        let user = UserRow {
            id: 1,
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@example.com".into(),
            registration_date: Utc::now(),
            is_active: true,
            token: String::new(),
        };
        assert_eq!(user.display_name(), "Grace Hopper");
    }
}
