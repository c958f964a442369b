//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the task record and its wire shape.
//! - Define the display filter and theme preference value types.
//!
//! # Invariants
//! - Every task carries a non-blank `TaskId` and non-blank content.
//! - `created_at` is stamped once and never rewritten.

pub mod filter;
pub mod task;
pub mod theme;
