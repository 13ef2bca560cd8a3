//! # itech-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API (`/products/`, `/services/` and their `/{id}` forms)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and faults into JSON responses
//! - Apply the cross-origin policy and request tracing
//!
//! ## Dependency rule
//! Depends on `itech-app` (for port traits and services) and `itech-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
