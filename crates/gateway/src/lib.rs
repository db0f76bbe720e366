//! `ges-gateway`: HTTP gateway for the GES restaurant inventory system.
//!
//! Bridges a browser's cookie-held session to the inventory backend's
//! bearer-token API: auth endpoints translate between the two credential
//! schemes, resource endpoints relay requests and responses unchanged, and
//! `/api/nav` renders the role-gated navigation for the current session.

pub mod app;
pub mod backend;
pub mod config;
pub mod session;
