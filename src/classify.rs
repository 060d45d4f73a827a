//! Diagnostic classification against fixed static tables.
//!
//! Two pure functions: `categorize` maps a TS error code to a readable
//! category name, `is_backend_related` flags diagnostics that likely
//! concern API/auth/service-layer code. Both tables are compile-time
//! constants; there is deliberately no way to extend them at runtime.

/// Known error codes mapped to human-readable categories.
const CATEGORIES: &[(&str, &str)] = &[
    ("TS2307", "Module not found"),
    ("TS2339", "Property does not exist"),
    ("TS2345", "Type mismatch"),
    ("TS2304", "Cannot find name"),
    ("TS2322", "Type assignment error"),
    ("TS2554", "Expected arguments mismatch"),
    ("TS2353", "Unknown property in object literal"),
    ("TS2341", "Property is private"),
    ("TS2349", "Expression not callable"),
    ("TS2698", "Spread types error"),
    ("TS2724", "No exported member"),
    ("TS2551", "Property name typo"),
    ("TS2552", "Cannot find name (suggestion provided)"),
    ("TS2559", "Type has no properties in common"),
    ("TS1345", "Void expression cannot be tested"),
    ("TS2786", "Cannot be used as JSX component"),
    ("TS2607", "JSX element class error"),
];

/// Message keywords hinting at backend/API involvement.
///
/// Matching is raw case-sensitive substring containment. A keyword that
/// happens to occur inside a longer word still counts; that is the
/// documented heuristic, not a defect.
const BACKEND_KEYWORDS: &[&str] = &[
    "api",
    "API",
    "service",
    "Service",
    "auth",
    "Auth",
    "websocket",
    "WebSocket",
    "fetch",
    "request",
    "response",
    "endpoint",
    "login",
    "LoginResponse",
    "mfaRequired",
    "token",
    "credential",
    "aws",
    "AWS",
    "cognito",
    "Cognito",
    "dynamodb",
    "s3",
    "analytics",
    "Analytics",
];

/// Path fragments that place a file in backend territory.
const BACKEND_PATHS: &[&str] = &[
    "api/",
    "services/",
    "utils/api",
    "utils/auth",
    "integration/",
    "websocket",
    "security/",
];

/// Map an error code to its category, defaulting to `"Other"`.
///
/// `message` is accepted for signature symmetry with
/// [`is_backend_related`] but does not participate in the lookup.
pub fn categorize(code: &str, _message: &str) -> String {
    CATEGORIES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, cat)| (*cat).to_string())
        .unwrap_or_else(|| "Other".to_string())
}

/// True when either the file path or the message matches the backend
/// heuristic tables.
pub fn is_backend_related(file: &str, message: &str) -> bool {
    BACKEND_PATHS.iter().any(|p| file.contains(p))
        || BACKEND_KEYWORDS.iter().any(|k| message.contains(k))
}
