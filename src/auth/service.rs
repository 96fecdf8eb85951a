//! Registration field checks.

use crate::error::{AppError, AppResult};
use crate::models::UserRequest;
use validator::{Validate, ValidateEmail};

pub struct AuthAppService;

impl AuthAppService {
    /// Fails with `"<field> is required"` when `value` is blank.
    pub fn check_required(field: &str, value: &str) -> AppResult<()> {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{} is required", field)));
        }
        Ok(())
    }

    pub fn validate_email(email: &str) -> AppResult<()> {
        if !email.validate_email() {
            return Err(AppError::Validation("Invalid email".to_string()));
        }
        Ok(())
    }

    /// Required fields first (Email, First Name, Last Name), then format and length.
    /// Expects a request already passed through `UserRequest::normalized`.
    pub fn validate_registration(req: &UserRequest) -> AppResult<()> {
        Self::check_required("Email", &req.email)?;
        Self::check_required("First Name", &req.first_name)?;
        Self::check_required("Last Name", &req.last_name)?;
        Self::validate_email(&req.email)?;
        req.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(())
    }
}
