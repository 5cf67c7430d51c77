//! URL handling module for Sitegrazer
//!
//! This module provides URL normalization (the dedupe key used for
//! exactly-once visitation) and host extraction for the same-domain
//! scope check.

mod domain;
mod normalize;

pub use domain::extract_host;
pub use normalize::normalize_url;
