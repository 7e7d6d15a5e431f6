//! Navigation guards, evaluated once per navigation attempt.
use leptos::logging::log;

use crate::config::LOGIN_PATH;
use crate::models::user::{Role, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Any signed-in user.
    Authenticated,
    /// A signed-in user holding exactly this role.
    Role(Role),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Denied { redirect_to: &'static str },
}

impl Access {
    pub fn is_allowed(self) -> bool {
        self == Access::Allowed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessControl {
    requirement: Requirement,
    redirect_to: &'static str,
}

impl AccessControl {
    pub const fn role(role: Role) -> Self {
        Self {
            requirement: Requirement::Role(role),
            redirect_to: LOGIN_PATH,
        }
    }

    pub const fn authenticated() -> Self {
        Self {
            requirement: Requirement::Authenticated,
            redirect_to: LOGIN_PATH,
        }
    }

    pub fn check(&self, current: Option<&User>) -> Access {
        let allowed = match (current, self.requirement) {
            (Some(_), Requirement::Authenticated) => true,
            (Some(user), Requirement::Role(role)) => user.role == role,
            (None, _) => false,
        };
        if allowed {
            return Access::Allowed;
        }

        log!(
            "[GUARD] {:?} denied for {}, redirecting to {}",
            self.requirement,
            current.map_or("anonymous visitor", |user| user.email.as_str()),
            self.redirect_to
        );
        Access::Denied {
            redirect_to: self.redirect_to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUPER_ADMIN_ONLY: AccessControl = AccessControl::role(Role::SuperAdmin);

    #[test]
    fn only_the_exact_role_is_allowed() {
        let root = User::new(1, "root@turf.in", Role::SuperAdmin);
        assert_eq!(SUPER_ADMIN_ONLY.check(Some(&root)), Access::Allowed);

        for role in [Role::User, Role::Admin] {
            let user = User::new(2, "someone@turf.in", role);
            assert_eq!(
                SUPER_ADMIN_ONLY.check(Some(&user)),
                Access::Denied { redirect_to: LOGIN_PATH }
            );
        }
    }

    #[test]
    fn anonymous_visitors_go_to_login() {
        assert_eq!(
            SUPER_ADMIN_ONLY.check(None),
            Access::Denied { redirect_to: "/login" }
        );
        assert!(!AccessControl::authenticated().check(None).is_allowed());
    }

    #[test]
    fn authenticated_accepts_any_role() {
        let guard = AccessControl::authenticated();
        for role in [Role::User, Role::Admin, Role::SuperAdmin] {
            assert!(guard.check(Some(&User::new(3, "x@turf.in", role))).is_allowed());
        }
    }
}
