//! Auth-domain payloads: redacted secrets, token responses, and userinfo claims.

pub mod claims;
pub mod secret;
pub mod token;

pub use claims::*;
pub use secret::*;
pub use token::*;
