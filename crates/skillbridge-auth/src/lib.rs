//! # skillbridge-auth
//!
//! Bearer token handling for the SkillBridge activity feed.
//!
//! Only verification is needed at request time. The encoder exists for
//! development tooling and tests; credential login lives elsewhere.

pub mod jwt;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
