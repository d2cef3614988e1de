/**
 * Account Handler Types
 *
 * Request/response types for the account endpoints, plus the pure
 * validation helpers they share. Validation runs before any mutation
 * and collects every violation instead of failing on the first one,
 * so clients get the full field list in one round trip.
 */

use serde::{Deserialize, Serialize};

use crate::error::FieldViolation;

/// Minimum password length accepted at signup
pub const MIN_PASSWORD_LEN: usize = 4;

/// Signup request body (PUT /auth/signup)
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
    /// User's display name
    pub name: String,
}

/// Signup response
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,
    pub user_id: String,
}

/// Login request body (POST /auth/login)
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// JWT session token (1-hour expiry)
    pub token: String,
    pub user_id: String,
}

/// Status read response (GET /auth/getStatus)
#[derive(Serialize, Debug)]
pub struct StatusResponse {
    pub status: String,
}

/// Status update request body (PATCH /auth/updateStatus)
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Status update response
#[derive(Serialize, Debug)]
pub struct UpdateStatusResponse {
    pub message: String,
    pub status: String,
}

/// Normalize an email for storage and lookup (trim + lowercase)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Basic email shape check: non-empty local part and a dotted domain
pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Validate signup fields (everything except email uniqueness, which
/// needs a storage lookup and happens at the handler)
pub fn validate_signup(request: &SignupRequest) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if !is_valid_email(&normalize_email(&request.email)) {
        violations.push(FieldViolation::new("email", "Please enter a valid email."));
    }

    if request.password.trim().len() < MIN_PASSWORD_LEN {
        violations.push(FieldViolation::new(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters."),
        ));
    }

    if request.name.trim().is_empty() {
        violations.push(FieldViolation::new("name", "Name must not be empty."));
    }

    violations
}

/// Validate login fields
pub fn validate_login(request: &LoginRequest) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if !is_valid_email(&normalize_email(&request.email)) {
        violations.push(FieldViolation::new("email", "Please enter a valid email."));
    }

    violations
}

/// Validate a status update
pub fn validate_status(status: &str) -> Vec<FieldViolation> {
    if status.trim().is_empty() {
        vec![FieldViolation::new("status", "Status must not be empty.")]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  User@Example.COM "), "user@example.com");
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("user.name@sub.example.org"));
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.com"));
    }

    #[test]
    fn test_validate_signup_collects_all_violations() {
        let request = SignupRequest {
            email: "not-an-email".to_string(),
            password: "abc".to_string(),
            name: "   ".to_string(),
        };

        let violations = validate_signup(&request);
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "password", "name"]);
    }

    #[test]
    fn test_validate_signup_accepts_minimum_password() {
        // "pass" is exactly the minimum length.
        let request = SignupRequest {
            email: "a@x.com".to_string(),
            password: "pass".to_string(),
            name: "A".to_string(),
        };

        assert!(validate_signup(&request).is_empty());
    }

    #[test]
    fn test_validate_signup_trims_password() {
        let request = SignupRequest {
            email: "a@x.com".to_string(),
            password: "  ab  ".to_string(),
            name: "A".to_string(),
        };

        let violations = validate_signup(&request);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "password");
    }

    #[test]
    fn test_validate_login() {
        let bad = LoginRequest {
            email: "nope".to_string(),
            password: "whatever".to_string(),
        };
        assert_eq!(validate_login(&bad).len(), 1);

        let good = LoginRequest {
            email: "a@x.com".to_string(),
            password: "whatever".to_string(),
        };
        assert!(validate_login(&good).is_empty());
    }

    #[test]
    fn test_validate_status() {
        assert_eq!(validate_status("  ").len(), 1);
        assert!(validate_status("feeling fine").is_empty());
    }
}
