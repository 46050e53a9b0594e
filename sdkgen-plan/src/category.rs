//! Error category inference.
//!
//! The generated error enum and the error-handling guide both group errors by
//! category, and both read it from here.

use std::fmt;

/// Broad family an SDK error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorCategory {
    Authentication,
    Validation,
    Network,
    RateLimit,
    Server,
    Other,
}

/// Substring rules, tested in order; the first hit wins.
const RULES: &[(ErrorCategory, &[&str])] = &[
    (
        ErrorCategory::Authentication,
        &["auth", "permission", "unauthori", "forbidden", "credential"],
    ),
    (ErrorCategory::Validation, &["valid", "malformed", "bad_request"]),
    (ErrorCategory::Network, &["network", "connection", "timeout", "dns"]),
    (
        ErrorCategory::RateLimit,
        &["rate_limit", "ratelimit", "rate-limit", "throttl", "too_many", "limit"],
    ),
    (ErrorCategory::Server, &["server", "internal", "unavailable"]),
];

impl ErrorCategory {
    /// All categories in documentation order.
    pub const ALL: [ErrorCategory; 6] = [
        ErrorCategory::Authentication,
        ErrorCategory::Validation,
        ErrorCategory::Network,
        ErrorCategory::RateLimit,
        ErrorCategory::Server,
        ErrorCategory::Other,
    ];

    /// Infer a category from an error's type name by substring match.
    pub fn infer(type_name: &str) -> ErrorCategory {
        let lower = type_name.to_lowercase();
        RULES
            .iter()
            .find(|(_, needles)| needles.iter().any(|n| lower.contains(n)))
            .map(|(category, _)| *category)
            .unwrap_or(ErrorCategory::Other)
    }

    /// Infer from the code first, falling back to a declared category string.
    pub fn resolve(code: &str, declared: &str) -> ErrorCategory {
        match Self::infer(code) {
            ErrorCategory::Other => Self::infer(declared),
            category => category,
        }
    }

    /// Heading used in the error-handling guide.
    pub fn heading(&self) -> &'static str {
        match self {
            ErrorCategory::Authentication => "Authentication & Authorization",
            ErrorCategory::Validation => "Validation Errors",
            ErrorCategory::Network => "Network Errors",
            ErrorCategory::RateLimit => "Rate Limiting",
            ErrorCategory::Server => "Server Errors",
            ErrorCategory::Other => "Other Errors",
        }
    }

    /// Member name in the generated `ErrorCategory` enum.
    pub fn variant_name(&self) -> &'static str {
        match self {
            ErrorCategory::Authentication => "Authentication",
            ErrorCategory::Validation => "Validation",
            ErrorCategory::Network => "Network",
            ErrorCategory::RateLimit => "RateLimit",
            ErrorCategory::Server => "Server",
            ErrorCategory::Other => "Other",
        }
    }

    /// Whether retrying the same request can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorCategory::Network | ErrorCategory::RateLimit | ErrorCategory::Server
        )
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCategory::Authentication => "authentication",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Network => "network",
            ErrorCategory::RateLimit => "rate_limit",
            ErrorCategory::Server => "server",
            ErrorCategory::Other => "other",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_examples() {
        assert_eq!(
            ErrorCategory::infer("validation_failed"),
            ErrorCategory::Validation
        );
        assert_eq!(
            ErrorCategory::infer("auth_expired"),
            ErrorCategory::Authentication
        );
        assert_eq!(
            ErrorCategory::infer("CONNECTION_RESET"),
            ErrorCategory::Network
        );
        assert_eq!(
            ErrorCategory::infer("rate_limit_exceeded"),
            ErrorCategory::RateLimit
        );
        assert_eq!(
            ErrorCategory::infer("internal_error"),
            ErrorCategory::Server
        );
        assert_eq!(ErrorCategory::infer("not_found"), ErrorCategory::Other);
    }

    #[test]
    fn test_authentication_wins_over_validation() {
        assert_eq!(
            ErrorCategory::infer("invalid_auth_token"),
            ErrorCategory::Authentication
        );
    }

    #[test]
    fn test_generate_is_not_rate_limiting() {
        assert_eq!(
            ErrorCategory::infer("generate_failed"),
            ErrorCategory::Other
        );
    }

    #[test]
    fn test_resolve_falls_back_to_declared() {
        assert_eq!(
            ErrorCategory::resolve("E1042", "server"),
            ErrorCategory::Server
        );
        assert_eq!(
            ErrorCategory::resolve("timeout", "validation"),
            ErrorCategory::Network
        );
        assert_eq!(ErrorCategory::resolve("E1", ""), ErrorCategory::Other);
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCategory::RateLimit.to_string(), "rate_limit");
        assert_eq!(ErrorCategory::Authentication.to_string(), "authentication");
    }
}
