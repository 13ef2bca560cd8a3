//! # itech-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ProductRepository` — row-level CRUD for products
//!   - `ServiceRepository` — row-level CRUD for services
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ProductService` — create, list, get, replace, delete
//!   - `ServiceService` — the same five verbs for services
//! - Turn storage row counts into domain outcomes (`NotFound`)
//!
//! ## Dependency rule
//! Depends on `itech-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
