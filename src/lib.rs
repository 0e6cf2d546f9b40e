//! Tarefa: command-handling core for a personal to-do list.
//!
//! This crate provides the command layer of a to-do list application:
//! creating items, renaming them, and marking them done or undone, with
//! validation happening before any persistence call.
//!
//! # Architecture
//!
//! Tarefa follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`todo`]: To-do item commands, validation, and persistence

pub mod todo;
