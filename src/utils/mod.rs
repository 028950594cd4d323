//! Utility functions for clock formatting and text presentation.
//!
//! - [`clock_format`] - 12-hour clock formatting and its inverse
//! - [`title_case`] - City name display casing

pub mod clock_format;
pub mod title_case;
