use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub type UserId = i64;

/// Shortest phone number accepted at sign-up
pub const MIN_PHONE_LEN: usize = 8;
pub const PASSWORD_MISMATCH: &str = "Fjalëkalimet nuk përputhen!";

/// An account as listed in the admin users page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub username: String,
    pub email: Option<String>,
    pub roles: Vec<String>,
    pub enabled: bool,
}

impl UserAccount {
    pub fn is_admin(&self) -> bool {
        has_admin_role(&self.roles)
    }
}

/// Identity attached to an authenticated session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub email: Option<String>,
    pub roles: Vec<String>,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        has_admin_role(&self.roles)
    }
}

/// Sign-up form as submitted by the client
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Registration {
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    pub username: String,
    pub email: String,
    #[serde(alias = "phoneNumber")]
    pub phone_number: String,
    pub password: String,
    #[serde(alias = "confirmPassword")]
    pub confirm_password: String,
}

impl Registration {
    pub fn validate(&self) -> AppResult<()> {
        for (field, value) in [
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
            ("Username", &self.username),
            ("Email", &self.email),
            ("Phone number", &self.phone_number),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::BadRequest(format!("{} is required", field)));
            }
        }
        if !self.email.contains('@') {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }
        if self.phone_number.trim().chars().count() < MIN_PHONE_LEN {
            return Err(AppError::BadRequest(
                "Numri i telefonit është i shkurtër".to_string(),
            ));
        }
        if self.password.is_empty() {
            return Err(AppError::BadRequest("Password is required".to_string()));
        }
        check_confirmation(&self.password, &self.confirm_password)
    }
}

/// Personal details shown on the profile page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub username: String,
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    #[serde(alias = "phoneNumber")]
    pub phone_number: String,
}

impl Profile {
    pub fn validate(&self) -> AppResult<()> {
        if self.username.trim().is_empty() {
            return Err(AppError::BadRequest("Username is required".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PasswordChange {
    #[serde(alias = "currentPassword")]
    pub current_password: String,
    #[serde(alias = "newPassword")]
    pub new_password: String,
    #[serde(alias = "confirmPassword")]
    pub confirm_password: String,
}

impl PasswordChange {
    pub fn validate(&self) -> AppResult<()> {
        check_confirmation(&self.new_password, &self.confirm_password)?;
        if self.current_password.is_empty() || self.new_password.is_empty() {
            return Err(AppError::BadRequest("Password is required".to_string()));
        }
        Ok(())
    }
}

fn check_confirmation(password: &str, confirmation: &str) -> AppResult<()> {
    if password != confirmation {
        return Err(AppError::BadRequest(PASSWORD_MISMATCH.to_string()));
    }
    Ok(())
}

/// `ADMIN` or `ROLE_ADMIN`, in any letter case
pub fn has_admin_role<S: AsRef<str>>(roles: &[S]) -> bool {
    roles.iter().any(|role| {
        let role = role.as_ref().trim();
        role.eq_ignore_ascii_case("ADMIN") || role.eq_ignore_ascii_case("ROLE_ADMIN")
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default, alias = "totalProperties")]
    pub total_properties: u64,
    #[serde(default)]
    pub appointments: u64,
    #[serde(default)]
    pub users: u64,
}
