//! Small browser utilities.

pub mod cookie;
