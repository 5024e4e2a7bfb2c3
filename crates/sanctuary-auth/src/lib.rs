//! # sanctuary-auth
//!
//! Bearer-token verification for Ellie's Sanctuary.
//!
//! Tokens are issued by the external identity provider; this crate only
//! verifies them against the shared signing secret and exposes the typed
//! claims. Credential handling and token issuance live outside this
//! application.

pub mod claims;
pub mod verifier;

pub use claims::Claims;
pub use verifier::TokenVerifier;
