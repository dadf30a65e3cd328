use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{required_text, Validate};
use crate::errors::ValidationError;

pub const USER_COLLECTION: &str = "user";
pub const MAX_USER_AGE: i64 = 120;

/// User account shape. No route reads or writes users yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub name: String,
    pub email: String,
    pub address: String,
    /// Age in years
    pub age: Option<i64>,
    pub is_active: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub age: Option<i64>,
    pub is_active: Option<bool>,
}

impl Validate for User {
    type Payload = UserPayload;

    fn validate(payload: UserPayload) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        let name = required_text(&mut errors, "name", payload.name, 0);
        let email = required_text(&mut errors, "email", payload.email, 0);
        let address = required_text(&mut errors, "address", payload.address, 0);

        if let Some(age) = payload.age {
            if !(0..=MAX_USER_AGE).contains(&age) {
                errors.add("age", format!("must be between 0 and {}", MAX_USER_AGE));
            }
        }

        errors.into_result()?;

        Ok(User {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            address: address.unwrap_or_default(),
            age: payload.age,
            is_active: payload.is_active.unwrap_or(true),
        })
    }
}
