//! Signup normalization and role tags.

use crate::error::CoreError;

pub const ROLE_CITIZEN: &str = "CITIZEN";
pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_OFFICER: &str = "OFFICER";

/// Domain appended to auto-generated signup emails. The generated address
/// satisfies the NOT NULL + UNIQUE email constraint even though the signup
/// form never asks for an email.
pub const EMAIL_DOMAIN: &str = "resolveit.local";

/// A signup payload with the account rules applied: trimmed credentials,
/// defaulted name, email, and role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Normalize raw signup fields.
///
/// Username and password are trimmed and must be non-empty afterwards.
/// Name defaults to the username, email to `{username}@resolveit.local`,
/// and role to `CITIZEN` when blank.
pub fn normalize_signup(
    username: Option<&str>,
    password: Option<&str>,
    name: Option<&str>,
    email: Option<&str>,
    role: Option<&str>,
) -> Result<NewAccount, CoreError> {
    let username = username.unwrap_or("").trim().to_string();
    let password = password.unwrap_or("").trim().to_string();

    if username.is_empty() || password.is_empty() {
        return Err(CoreError::Validation(
            "username and password are required".into(),
        ));
    }

    let name = non_blank(name).unwrap_or(&username).to_string();
    let email = non_blank(email)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{username}@{EMAIL_DOMAIN}"));
    let role = non_blank(role).unwrap_or(ROLE_CITIZEN).to_string();

    Ok(NewAccount {
        name,
        username,
        email,
        password,
        role,
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
