mod clock;
mod error;
mod guard;
mod issuer;
mod keys;

pub use clock::{Clock, SystemClock};
pub use error::AuthError;
pub use guard::{require_auth, AccessGuard};
pub use issuer::{TokenIssuer, TOKEN_TTL_SECS};
pub use keys::SigningKeys;

#[cfg(any(test, feature = "testing"))]
pub use clock::testing;
