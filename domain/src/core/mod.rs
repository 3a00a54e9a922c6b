//! Core domain concepts shared across all subdomains.
//!
//! - [`country::Country`] — the catalog of countries whose flags can be shown
//! - [`error::DomainError`] — domain-level errors

pub mod country;
pub mod error;
