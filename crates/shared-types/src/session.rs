use serde::{Deserialize, Serialize};

use crate::AppError;

/// Role sent with every login from this dashboard.
pub const ADMIN_ROLE: &str = "Admin";

/// Notice shown when the confirmation field does not match.
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Profile of the signed-in admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl AdminProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Response body of `GET /user/admin/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminProfileResponse {
    pub user: AdminProfile,
}

/// Authentication state shared by every view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub is_authenticated: bool,
    pub admin: Option<AdminProfile>,
}

impl Session {
    /// Mark the session as signed in. The profile may arrive later.
    pub fn sign_in(&mut self, admin: Option<AdminProfile>) {
        self.is_authenticated = true;
        if admin.is_some() {
            self.admin = admin;
        }
    }

    pub fn set_admin(&mut self, admin: AdminProfile) {
        self.admin = Some(admin);
    }

    pub fn clear(&mut self) {
        *self = Session::default();
    }

    /// Name shown in the dashboard greeting, if the profile is known.
    pub fn greeting_name(&self) -> Option<String> {
        self.admin.as_ref().map(AdminProfile::full_name)
    }
}

/// Request body of `POST /user/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Values typed into the login form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl LoginForm {
    /// Check the form locally and build the request to send.
    ///
    /// A mismatched confirmation is rejected before any request is made.
    pub fn validate(&self) -> Result<LoginRequest, AppError> {
        if self.password != self.confirm_password {
            return Err(AppError::validation(PASSWORD_MISMATCH));
        }
        Ok(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            role: ADMIN_ROLE.to_string(),
        })
    }
}
