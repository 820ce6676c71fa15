//! Core data models for the hood registry.

pub mod gateway;
pub mod geometry;
pub mod hood;

pub use gateway::Gateway;
pub use geometry::{Point, PointParseError, Ring};
pub use hood::{Hood, RadioSettings};
