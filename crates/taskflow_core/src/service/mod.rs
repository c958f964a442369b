//! Core use-case services.
//!
//! # Responsibility
//! - Own the in-memory task collection and apply user intents to it.
//! - Keep callers decoupled from storage details.

pub mod command;
pub mod task_registry;
