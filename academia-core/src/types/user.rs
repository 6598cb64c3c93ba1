//! User-related type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account state as stored by the backend
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserState {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl UserState {
    /// All states in display order
    pub fn all() -> &'static [UserState] {
        &[UserState::Active, UserState::Inactive, UserState::Suspended]
    }

    /// Wire value (`ACTIVE`, `INACTIVE`, `SUSPENDED`)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Suspended => "SUSPENDED",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Activo",
            Self::Inactive => "Inactivo",
            Self::Suspended => "Suspendido",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Suspended,
            Self::Suspended => Self::Active,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Active => Self::Suspended,
            Self::Inactive => Self::Active,
            Self::Suspended => Self::Inactive,
        }
    }
}

const fn default_role_id() -> i64 {
    1
}

/// User record as returned by `GET /users`
///
/// Owned by the remote API; the front-end only reads it and submits partial updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub state: UserState,
    #[serde(default = "default_role_id")]
    pub role_id: i64,
}

/// Body of `POST /users`
#[derive(Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    pub role_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<UserState>,
}

impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .field("email", &self.email)
            .field("firstname", &self.firstname)
            .field("lastname", &self.lastname)
            .field("role_id", &self.role_id)
            .field("state", &self.state)
            .finish()
    }
}

/// Partial update sent with `PATCH /users/{id}`
///
/// `roles` replaces the numeric `roleId` of the record; `password` is absent
/// when the admin left it blank ("keep current").
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct UpdateUserRequest {
    /// Target record; part of the path, never of the body
    #[serde(skip)]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<UserState>,
    pub roles: Vec<String>,
}

impl fmt::Debug for UpdateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateUserRequest")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("firstname", &self.firstname)
            .field("lastname", &self.lastname)
            .field("state", &self.state)
            .field("roles", &self.roles)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_camel_case_with_defaults() {
        let json = r#"{"id": 7, "username": "alonso", "email": null, "roleId": 3, "state": "SUSPENDED"}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.role_id, 3);
        assert_eq!(user.state, UserState::Suspended);
        assert_eq!(user.email, None);
        assert_eq!(user.firstname, None);

        let minimal: UserRecord = serde_json::from_str(r#"{"id": 1, "username": "x"}"#).unwrap();
        assert_eq!(minimal.role_id, 1);
        assert_eq!(minimal.state, UserState::Active);
    }

    #[test]
    fn create_request_omits_absent_optionals() {
        let request = CreateUserRequest {
            username: "jperez".to_string(),
            password: "secret".to_string(),
            email: Some("j@school.com".to_string()),
            firstname: None,
            lastname: None,
            role_id: 2,
            state: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["roleId"], 2);
        assert_eq!(json["email"], "j@school.com");
        assert!(json.get("firstname").is_none());
        assert!(json.get("state").is_none());
    }

    #[test]
    fn update_request_never_serializes_id() {
        let request = UpdateUserRequest {
            id: 12,
            username: Some("ana".to_string()),
            email: None,
            password: None,
            firstname: None,
            lastname: None,
            state: Some(UserState::Inactive),
            roles: vec!["docente".to_string()],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["state"], "INACTIVE");
        assert_eq!(json["roles"], serde_json::json!(["docente"]));
    }

    #[test]
    fn debug_redacts_passwords() {
        let request = CreateUserRequest {
            username: "u".to_string(),
            password: "hunter22".to_string(),
            email: None,
            firstname: None,
            lastname: None,
            role_id: 1,
            state: None,
        };
        assert!(!format!("{request:?}").contains("hunter22"));
    }

    #[test]
    fn state_cycles() {
        for state in UserState::all() {
            assert_eq!(state.next().prev(), *state);
        }
    }
}
