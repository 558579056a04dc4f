//! Utility functions shared across layers.
//!
//! - [`alias_generator`] - Random alias generation and alias validation
//! - [`target_url`] - Target URL validation
//! - [`db_error`] - Database error classification

pub mod alias_generator;
pub mod db_error;
pub mod target_url;
