use serde::{Deserialize, Serialize};

use crate::models::{AnalyticsSummary, FormattedSummary, Role, User};

// -- JWT Claims --

/// Session token claims. `sub` is the username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub exp: usize,
}

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    /// Generated from the role prefix when omitted.
    #[serde(default)]
    pub employee_id: Option<String>,
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: UserResponse,
    pub token: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub token: String,
}

// -- Users --

/// Account view without the password.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub full_name: String,
    pub employee_id: String,
    pub role: Role,
    pub suspended: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            employee_id: user.employee_id.clone(),
            role: user.role,
            suspended: user.suspended,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    pub full_name: String,
    pub employee_id: String,
    pub role: Role,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub suspended: Option<bool>,
}

// -- Activity --

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub entries: Vec<String>,
}

// -- Ledgers --

#[derive(Debug, Serialize)]
pub struct RowCreated {
    pub index: usize,
}

// -- Analytics --

#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub date: Option<String>,
    pub summary: AnalyticsSummary,
    pub formatted: FormattedSummary,
}
