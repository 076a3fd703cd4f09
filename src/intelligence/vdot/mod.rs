// ABOUTME: VDOT engine facade composing estimation, pace derivation, prediction and projection
// ABOUTME: Binds one reference table and one validated configuration for all operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # VDOT Engine
//!
//! Pure functions over an explicitly passed [`ReferenceTable`]:
//!
//! - **Estimation**: race result or weighted training history to VDOT
//! - **Paces**: VDOT to easy / marathon / threshold / interval / repetition paces
//! - **Prediction**: VDOT to race times at any distance
//! - **Projection**: VDOT and experience tier to a future target
//!
//! # Example
//!
//! ```rust
//! use vdot_engine::intelligence::vdot::VdotEngine;
//! use vdot_engine::models::{ExperienceTier, RaceResult};
//!
//! let engine = VdotEngine::default();
//! let race = RaceResult::new(3.1, 1200.0)?; // 5K in 20:00
//! let vdot = engine.vdot_from_race(&race)?;
//! let paces = engine.paces(vdot);
//! let target = engine.suggest_target(vdot, ExperienceTier::Intermediate);
//! assert!(paces.repetition < paces.easy);
//! assert!(target >= vdot);
//! # Ok::<(), vdot_engine::errors::AppError>(())
//! ```

/// VDOT estimation from races and training history
pub mod estimator;
/// Training paces derived from VDOT
pub mod paces;
/// Race time prediction
pub mod prediction;
/// Future VDOT targets
pub mod projection;
/// Reference anchors
pub mod reference_table;

pub use estimator::VdotEstimator;
pub use paces::{PaceCalculator, PaceSet, TrainingZone};
pub use prediction::{format_pace, format_time, EquivalentTimes, RacePredictor};
pub use projection::TargetProjector;
pub use reference_table::{RaceCategory, ReferenceEntry, ReferenceTable};

use crate::config::VdotConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{ExperienceTier, RaceResult, TrainingRun, Vdot};
use chrono::NaiveDate;
use serde_json::json;
use tracing::debug;

/// Entry point for every VDOT operation
///
/// Holds a borrowed reference table and a validated configuration; it has no mutable
/// state and can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct VdotEngine<'t> {
    table: &'t ReferenceTable,
    config: VdotConfig,
}

impl Default for VdotEngine<'static> {
    fn default() -> Self {
        Self {
            table: ReferenceTable::standard(),
            config: VdotConfig::default(),
        }
    }
}

impl<'t> VdotEngine<'t> {
    /// Create an engine over a table with custom heuristics
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ErrorCode::ConfigInvalid` if the configuration fails validation,
    /// or if the multipliers applied to any anchor's mile pace round to training paces
    /// that are not strictly ordered
    pub fn new(table: &'t ReferenceTable, config: VdotConfig) -> AppResult<Self> {
        config.validate()?;
        ensure_distinct_paces(table, &config)?;
        debug!(
            anchors = table.entries().len(),
            lowest_vdot = table.lowest().vdot,
            highest_vdot = table.highest().vdot,
            "VDOT engine configured"
        );
        Ok(Self { table, config })
    }

    /// Reference table in use
    #[must_use]
    pub const fn table(&self) -> &'t ReferenceTable {
        self.table
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &VdotConfig {
        &self.config
    }

    /// Estimator bound to this engine's table and weighting
    #[must_use]
    pub const fn estimator(&self) -> VdotEstimator<'_> {
        VdotEstimator::new(self.table, &self.config.history)
    }

    /// Pace calculator bound to this engine's table and multipliers
    #[must_use]
    pub const fn pace_calculator(&self) -> PaceCalculator<'_> {
        PaceCalculator::new(self.table, &self.config.paces)
    }

    /// Race predictor bound to this engine's paces and bands
    #[must_use]
    pub const fn predictor(&self) -> RacePredictor<'_> {
        RacePredictor::new(self.pace_calculator(), &self.config.prediction)
    }

    /// Target projector bound to this engine's improvement rates
    #[must_use]
    pub const fn projector(&self) -> TargetProjector<'_> {
        TargetProjector::new(&self.config.projection)
    }

    /// VDOT from a single race result
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if distance or time is non-positive
    pub fn vdot_from_race(&self, race: &RaceResult) -> AppResult<Vdot> {
        self.estimator().vdot_from_race(race)
    }

    /// Weighted VDOT from training history, with recency measured from `as_of`
    #[must_use]
    pub fn vdot_from_history(&self, runs: &[TrainingRun], as_of: NaiveDate) -> Vdot {
        self.estimator().vdot_from_history(runs, as_of)
    }

    /// Training paces for a VDOT
    #[must_use]
    pub fn paces(&self, vdot: Vdot) -> PaceSet {
        self.pace_calculator().paces(vdot)
    }

    /// Predicted race time in seconds over a positive distance in miles
    #[must_use]
    pub fn predict_time(&self, vdot: Vdot, distance_miles: f64) -> f64 {
        self.predictor().predict_time(vdot, distance_miles)
    }

    /// Predicted times at the standard race distances
    #[must_use]
    pub fn equivalent_times(&self, vdot: Vdot) -> EquivalentTimes {
        self.predictor().equivalent_times(vdot)
    }

    /// Target VDOT after the configured default number of weeks
    #[must_use]
    pub fn suggest_target(&self, current: Vdot, tier: ExperienceTier) -> Vdot {
        self.projector().suggest_target(current, tier)
    }

    /// Target VDOT after `weeks` weeks
    #[must_use]
    pub fn suggest_target_over(&self, current: Vdot, tier: ExperienceTier, weeks: u32) -> Vdot {
        self.projector().suggest_target_over(current, tier, weeks)
    }
}

/// Rounding can merge adjacent zones when anchor mile paces are very short
fn ensure_distinct_paces(table: &ReferenceTable, config: &VdotConfig) -> AppResult<()> {
    let calculator = PaceCalculator::new(table, &config.paces);

    for entry in table.entries() {
        let paces = calculator.paces_for_mile_pace(entry.mile_pace_seconds);
        if !paces.is_strictly_ordered() {
            return Err(AppError::config(format!(
                "Pace multipliers produce overlapping training paces at VDOT {}",
                entry.vdot
            ))
            .with_details(json!({ "vdot": entry.vdot, "paces": paces })));
        }
    }

    Ok(())
}
