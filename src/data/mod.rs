//! Remote data access and wire models.

pub mod client;
pub mod markers;
pub mod measurement;
