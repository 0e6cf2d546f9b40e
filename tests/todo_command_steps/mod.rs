//! Step definitions for to-do command BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
