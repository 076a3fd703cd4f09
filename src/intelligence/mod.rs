// ABOUTME: Fitness intelligence module hosting the VDOT estimation and pace calibration engine
// ABOUTME: Re-exports the engine facade and its value types for path-based access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Running fitness analysis. All computation is synchronous and side-effect free;
//! callers supply observations and receive scalars and structs back.

/// VDOT estimation, training paces, race prediction and target projection
pub mod vdot;

pub use vdot::{
    EquivalentTimes, PaceSet, RaceCategory, ReferenceEntry, ReferenceTable, TrainingZone,
    VdotEngine,
};
