//! `ges-auth`: session identity and role gating for the GES gateway.
//!
//! This crate is intentionally decoupled from HTTP and storage: it turns a
//! bearer token into best-effort display claims and decides which navigation
//! entries a role may see. The issuing backend remains the authority for
//! real authorization; nothing in here is a security check.

pub mod claims;
pub mod nav;
pub mod roles;
pub mod token;

pub use claims::SessionClaims;
pub use nav::{NavEntry, NavSection, navigation};
pub use roles::{Role, UnknownRole};
pub use token::decode_claims;
