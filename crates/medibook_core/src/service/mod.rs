//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate parsing and command execution into one entry point.
//! - Keep CLI layers decoupled from parser and repository details.

pub mod command_service;
