//! Error types and result aliases for cohort-reindent.
//!
//! This module defines the error handling infrastructure:
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used throughout the crate
//!
//! A missing section is not an error; it is reported through
//! [`FixOutcome::NotFound`](crate::process::FixOutcome::NotFound).

use anyhow::Result as AnyhowResult;

pub type Result<T> = AnyhowResult<T>;
