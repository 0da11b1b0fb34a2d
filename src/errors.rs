// ABOUTME: Error types for the plan and progress engine
// ABOUTME: Distinguishes invalid input, missing preconditions, and storage failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Engine Error Types
//!
//! Failures in this crate fall into three categories:
//!
//! - **Invalid input** — rejected at the boundary with a user-facing message,
//!   engine state untouched (`InvalidInput`, `InvalidHabitTarget`).
//! - **Missing preconditions** — an operation was requested before its inputs
//!   exist, surfaced as guidance rather than a crash (`NoPrimaryGoal`).
//! - **Storage** — serialization or I/O failures from a [`Store`](crate::store::Store)
//!   backend on save. Loads never fail; absent or malformed data substitutes the
//!   caller's default.
//!
//! Stale references (a deleted habit goal, a date outside the plan window) are
//! deliberately NOT errors: they arise from stale UI state and are silent no-ops.

use thiserror::Error;

/// Errors produced by engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// User-supplied input failed validation; state is unchanged.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A habit goal target must be a positive number.
    #[error("habit goal target must be positive, got {0}")]
    InvalidHabitTarget(f64),

    /// A plan cannot be built or started without an active primary goal.
    #[error("set a primary goal before generating a plan")]
    NoPrimaryGoal,

    /// Persisting state through the store failed.
    #[error("storage error for key '{key}': {source}")]
    Storage {
        /// Storage key being written.
        key: String,
        /// Underlying failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Serializing a value for persistence failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = EngineError> = std::result::Result<T, E>;

impl EngineError {
    /// Build a storage error for a given key.
    pub fn storage(
        key: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Storage {
            key: key.into(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        let err = EngineError::NoPrimaryGoal;
        assert_eq!(
            err.to_string(),
            "set a primary goal before generating a plan"
        );

        let err = EngineError::InvalidHabitTarget(-2.0);
        assert!(err.to_string().contains("-2"));
    }
}
