//! To-do item command handling for Tarefa.
//!
//! This module implements the four to-do list commands: creating an item,
//! renaming it, and marking it done or undone. Every command is validated
//! before any repository interaction; an invalid command is rejected
//! without touching storage. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Command data carriers in [`commands`]
//! - Validation rules in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod commands;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
