//! Platform-facing helpers shared by the components.

pub mod platform;
