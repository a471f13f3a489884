//! Unit tests for the command module.
