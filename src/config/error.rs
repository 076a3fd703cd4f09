// ABOUTME: Configuration error types for VDOT engine validation
// ABOUTME: Defines error variants for invalid ranges, misordered multipliers and bad weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for engine validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range, or two bounds in the wrong order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Weight outside `(0, 1]`
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
