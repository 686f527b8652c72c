//! Line codec for `users.txt`.
//!
//! Layout: `username|password|fullName|employeeId|role|suspended`. Fields are
//! not escaped, so a `|` inside any value shifts every later column and the
//! row no longer reads back as written. Older files carry only the first five
//! columns; those rows load as not suspended.

use barangay_types::models::{Role, User};

pub const FIELD_SEPARATOR: char = '|';

/// Minimum column count for a row to be usable.
const REQUIRED_FIELDS: usize = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UserLineError {
    #[error("expected at least 5 fields, found {0}")]
    TooFewFields(usize),
    #[error(transparent)]
    UnknownRole(#[from] barangay_types::models::UnknownRole),
}

pub fn parse_user_line(line: &str) -> Result<User, UserLineError> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if parts.len() < REQUIRED_FIELDS {
        return Err(UserLineError::TooFewFields(parts.len()));
    }

    let role: Role = parts[4].parse()?;
    let suspended = parts
        .get(5)
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"));

    Ok(User {
        username: parts[0].to_string(),
        password: parts[1].to_string(),
        full_name: parts[2].to_string(),
        employee_id: parts[3].to_string(),
        role,
        suspended,
    })
}

pub fn format_user_line(user: &User) -> String {
    [
        user.username.as_str(),
        user.password.as_str(),
        user.full_name.as_str(),
        user.employee_id.as_str(),
        user.role.as_str(),
        if user.suspended { "true" } else { "false" },
    ]
    .join("|")
}
