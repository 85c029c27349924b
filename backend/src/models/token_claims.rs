use serde::{Deserialize, Serialize};

/// Claims carried by an admin session token. `exp` and `iat` are unix
/// timestamps in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}
