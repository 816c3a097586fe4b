//! UI components.

pub mod navbar;
