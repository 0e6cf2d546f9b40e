//! Unit tests for the to-do command module.
