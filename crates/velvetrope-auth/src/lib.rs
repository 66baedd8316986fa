//! Credential primitives for the Velvet Rope services.
//!
//! Provides the signed session-token codec, the auth-cookie builders, and
//! Argon2 password hashing. All secrets are passed in by the caller — this
//! crate never reads the environment.

pub mod cookie;
pub mod password;
pub mod token;
