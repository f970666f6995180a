//! Widget state modules.
//!
//! DESIGN
//! ======
//! All input validation lives here as pure functions of (previous state, new
//! input, config) so the over-limit and keyboard rules can be unit-tested
//! without a DOM. The components only move values between these functions and
//! the field element.

pub mod composer;
