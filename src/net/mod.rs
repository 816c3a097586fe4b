//! Network layer: REST client and wire types for the user service.

pub mod api;
pub mod types;
