//! Lucky draw admin gate
//!
//! A plain comparison against configured credentials. This keeps the draw
//! screen away from casual visitors at the desk; it is not authentication.

use std::time::Duration;

use super::settings::AdminSettings;

/// Pause before the result of a login attempt is shown
pub const LOGIN_DELAY: Duration = Duration::from_secs(1);

pub const WELCOME: &str = "Welcome to EVReady 2026 Lucky Draw!";
pub const INVALID_CREDENTIALS: &str = "Invalid Credentials";
pub const LOGGED_OUT: &str = "Logged out successfully";

/// Whether `email`/`pin` match the configured admin
///
/// Unconfigured (empty) credentials never match. The email is compared
/// without surrounding whitespace; the PIN must match exactly.
pub fn check_credentials(admin: &AdminSettings, email: &str, pin: &str) -> bool {
    if admin.email.is_empty() || admin.pin.is_empty() {
        tracing::warn!("Admin login attempted but no credentials are configured");
        return false;
    }
    let ok = email.trim() == admin.email && pin == admin.pin;
    if !ok {
        tracing::info!("Admin login rejected");
    }
    ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AdminSettings {
        AdminSettings {
            email: "admin@evready.in".into(),
            pin: "2026".into(),
        }
    }

    #[test]
    fn matching_credentials() {
        assert!(check_credentials(&admin(), "admin@evready.in", "2026"));
        assert!(check_credentials(&admin(), " admin@evready.in ", "2026"));
    }

    #[test]
    fn wrong_credentials() {
        assert!(!check_credentials(&admin(), "admin@evready.in", "2025"));
        assert!(!check_credentials(&admin(), "other@evready.in", "2026"));
        assert!(!check_credentials(&admin(), "admin@evready.in", " 2026"));
        assert!(!check_credentials(&admin(), "", ""));
    }

    #[test]
    fn unconfigured_never_matches() {
        let empty = AdminSettings::default();
        assert!(!check_credentials(&empty, "", ""));
        assert!(!check_credentials(&empty, "admin@evready.in", "2026"));
    }
}
