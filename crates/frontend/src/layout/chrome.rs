//! Which public chrome (navbar, footer) a path gets.

/// Sign-in flow pages rendered without public chrome
pub const AUTH_ONLY_PATHS: [&str; 6] = [
    "/login",
    "/register",
    "/complete-profile",
    "/forgot-password",
    "/forgot-password/verify-otp",
    "/reset-password",
];

pub const ADMIN_PREFIX: &str = "/admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeVisibility {
    pub navbar: bool,
    pub footer: bool,
}

fn normalise(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

pub fn is_auth_only(path: &str) -> bool {
    AUTH_ONLY_PATHS.contains(&normalise(path))
}

pub fn is_admin(path: &str) -> bool {
    let path = normalise(path);
    path == ADMIN_PREFIX
        || path
            .strip_prefix(ADMIN_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'))
}

pub fn chrome_for(path: &str) -> ChromeVisibility {
    let show = !(is_auth_only(path) || is_admin(path));
    ChromeVisibility {
        navbar: show,
        footer: show,
    }
}
