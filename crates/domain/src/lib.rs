//! # itech-domain
//!
//! Pure domain model for the itech catalogue backend.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Products** (goods with a category and buying/selling prices)
//! - Define **Services** (billable work with a description and a price)
//! - Enforce field-level invariants before anything reaches storage
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod product;
pub mod service;
