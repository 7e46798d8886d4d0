use dioxus::prelude::*;
use shared_types::{AdminProfile, Session};

/// Global authentication state.
///
/// `checking` stays true until the startup session check settles; guards
/// hold their decision until then.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Session>,
    pub checking: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::default()),
            checking: Signal::new(true),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated
    }

    pub fn is_checking(&self) -> bool {
        *self.checking.read()
    }

    pub fn admin_name(&self) -> Option<String> {
        self.session.read().greeting_name()
    }

    pub fn sign_in(&mut self, admin: Option<AdminProfile>) {
        self.session.write().sign_in(admin);
    }

    pub fn set_admin(&mut self, admin: AdminProfile) {
        self.session.write().set_admin(admin);
    }

    pub fn clear_auth(&mut self) {
        self.session.write().clear();
    }

    pub fn finish_session_check(&mut self) {
        self.checking.set(false);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Outcome of a route guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Session state not known yet.
    Pending,
    Granted,
    Denied,
}

/// Access to routes that need a signed-in admin.
pub fn member_access(checking: bool, authenticated: bool) -> Access {
    match (checking, authenticated) {
        (_, true) => Access::Granted,
        (true, false) => Access::Pending,
        (false, false) => Access::Denied,
    }
}

/// Access to routes only shown to signed-out visitors (the login form).
pub fn guest_access(checking: bool, authenticated: bool) -> Access {
    match (checking, authenticated) {
        (_, true) => Access::Denied,
        (true, false) => Access::Pending,
        (false, false) => Access::Granted,
    }
}
