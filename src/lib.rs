// ABOUTME: Main library entry point for the VDOT fitness estimation engine
// ABOUTME: Converts race results and training runs into VDOT, training paces and race predictions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # VDOT Engine
//!
//! Fitness estimation and pace calibration based on Jack Daniels' VDOT methodology.
//!
//! ## Features
//!
//! - **Race estimation**: a single race result snapped to the nearest reference anchor
//! - **History estimation**: recency- and effort-weighted VDOT over logged training runs
//! - **Training paces**: easy, marathon, threshold, interval and repetition paces
//! - **Race prediction**: predicted times at any distance and at the standard distances
//! - **Target projection**: bounded future VDOT by experience tier
//!
//! ## Architecture
//!
//! - **Models**: `Vdot`, `RaceResult`, `TrainingRun`, `ExperienceTier`
//! - **Intelligence**: the engine and its components over an explicit reference table
//! - **Config**: tunable heuristics with validation
//! - **Errors**: unified `AppError` with error codes
//! - **Logging**: `tracing-subscriber` setup for host processes and test binaries
//!
//! The engine performs no I/O, persistence or network access. Storage, formatting for
//! end users and localization belong to the caller.

/// Tunable heuristics and their validation
pub mod config;

/// Physiological constants and heuristic defaults
pub mod constants;

/// Unified error handling with error codes
pub mod errors;

/// VDOT engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Core value types
pub mod models;
