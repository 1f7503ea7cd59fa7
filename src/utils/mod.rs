//! Small shared helpers.

pub mod cookie;
