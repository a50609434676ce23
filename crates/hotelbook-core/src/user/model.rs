//! User domain models.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role; anything the service sends besides `admin` is a plain user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// Lenient parse used for the value kept in the session store.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::User
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// `"<first> <last>"`, trimmed when either part is missing.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Answer of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateTime<Utc>>,
}

impl Default for RegisterRequest {
    /// Blank form with the date of birth preset to 1990-01-01.
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1)
                .map(|date| date.and_time(NaiveTime::MIN).and_utc()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_parsing() {
        let admin: Role = serde_json::from_value(json!("admin")).unwrap();
        assert_eq!(admin, Role::Admin);
        let other: Role = serde_json::from_value(json!("manager")).unwrap();
        assert_eq!(other, Role::User);
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse(""), Role::User);
    }

    #[test]
    fn test_user_without_role_defaults_to_user() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "email": "ana@example.com",
            "first_name": "Ana",
            "last_name": "Paz"
        }))
        .unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.display_name(), "Ana Paz");
    }

    #[test]
    fn test_register_default_birth_date() {
        let json = serde_json::to_value(RegisterRequest::default()).unwrap();
        assert_eq!(json["date_of_birth"], "1990-01-01T00:00:00Z");
    }
}
