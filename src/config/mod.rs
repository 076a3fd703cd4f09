// ABOUTME: Tunable heuristics for VDOT estimation, pace derivation, prediction and projection
// ABOUTME: Serde-loadable configuration whose defaults are the engine's documented constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Engine Configuration
//!
//! The engine reads no environment variables. Hosts that want to tune the heuristics
//! deserialize a [`VdotConfig`] from their own configuration source and hand it to
//! [`crate::intelligence::vdot::VdotEngine::new`], which validates it.

/// Configuration validation errors
pub mod error;

pub use error::ConfigError;

use crate::constants::{history, improvement_rates, pace_multipliers, prediction_bands};
use serde::{Deserialize, Serialize};

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VdotConfig {
    /// Training history weighting
    pub history: HistoryWeightingConfig,
    /// Training pace multipliers
    pub paces: PaceMultipliers,
    /// Race prediction distance bands
    pub prediction: PredictionBands,
    /// Target projection heuristic
    pub projection: ProjectionConfig,
}

/// How training runs are filtered and weighted when estimating from history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryWeightingConfig {
    /// Days over which recency weight decays linearly to its floor
    pub recency_window_days: f64,
    /// Floor of the recency weight
    pub min_recency_weight: f64,
    /// Effort weight for runs without a perceived effort rating
    pub default_effort_weight: f64,
    /// Runs longer than this are excluded
    pub max_run_distance_miles: f64,
}

impl Default for HistoryWeightingConfig {
    fn default() -> Self {
        Self {
            recency_window_days: history::RECENCY_WINDOW_DAYS,
            min_recency_weight: history::MIN_RECENCY_WEIGHT,
            default_effort_weight: history::DEFAULT_EFFORT_WEIGHT,
            max_run_distance_miles: history::MAX_RUN_DISTANCE_MILES,
        }
    }
}

/// Multipliers applied to the reference mile race pace for each training zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaceMultipliers {
    /// Easy pace multiplier
    pub easy: f64,
    /// Marathon pace multiplier
    pub marathon: f64,
    /// Threshold pace multiplier
    pub threshold: f64,
    /// Interval pace multiplier
    pub interval: f64,
    /// Repetition pace multiplier
    pub repetition: f64,
}

impl Default for PaceMultipliers {
    fn default() -> Self {
        Self {
            easy: pace_multipliers::EASY,
            marathon: pace_multipliers::MARATHON,
            threshold: pace_multipliers::THRESHOLD,
            interval: pace_multipliers::INTERVAL,
            repetition: pace_multipliers::REPETITION,
        }
    }
}

/// Upper distance bounds (miles) selecting the pace used for race prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionBands {
    /// Repetition pace up to this distance
    pub repetition_max_miles: f64,
    /// Interval pace up to this distance
    pub interval_max_miles: f64,
    /// Threshold pace up to this distance, marathon pace beyond
    pub threshold_max_miles: f64,
}

impl Default for PredictionBands {
    fn default() -> Self {
        Self {
            repetition_max_miles: prediction_bands::REPETITION_MAX_MILES,
            interval_max_miles: prediction_bands::INTERVAL_MAX_MILES,
            threshold_max_miles: prediction_bands::THRESHOLD_MAX_MILES,
        }
    }
}

/// Weekly improvement rates by experience tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Beginner VDOT points per week
    pub beginner_rate: f64,
    /// Intermediate VDOT points per week
    pub intermediate_rate: f64,
    /// Advanced VDOT points per week
    pub advanced_rate: f64,
    /// Horizon used by `suggest_target`
    pub default_weeks: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            beginner_rate: improvement_rates::BEGINNER,
            intermediate_rate: improvement_rates::INTERMEDIATE,
            advanced_rate: improvement_rates::ADVANCED,
            default_weeks: improvement_rates::DEFAULT_WEEKS,
        }
    }
}

impl VdotConfig {
    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_history()?;
        self.validate_paces()?;
        self.validate_prediction()?;
        self.validate_projection()
    }

    fn validate_history(&self) -> Result<(), ConfigError> {
        let history = &self.history;

        if !is_positive(history.recency_window_days) {
            return Err(ConfigError::ValueOutOfRange(
                "recency_window_days must be positive",
            ));
        }
        if !is_unit_weight(history.min_recency_weight) {
            return Err(ConfigError::InvalidWeights(
                "min_recency_weight must be in (0, 1]",
            ));
        }
        if !is_unit_weight(history.default_effort_weight) {
            return Err(ConfigError::InvalidWeights(
                "default_effort_weight must be in (0, 1]",
            ));
        }
        if !is_positive(history.max_run_distance_miles) {
            return Err(ConfigError::ValueOutOfRange(
                "max_run_distance_miles must be positive",
            ));
        }

        Ok(())
    }

    fn validate_paces(&self) -> Result<(), ConfigError> {
        let paces = &self.paces;

        let all_finite = [
            paces.easy,
            paces.marathon,
            paces.threshold,
            paces.interval,
            paces.repetition,
        ]
        .iter()
        .all(|multiplier| multiplier.is_finite());

        if !all_finite || !is_positive(paces.repetition) {
            return Err(ConfigError::ValueOutOfRange(
                "Pace multipliers must be positive",
            ));
        }

        // Faster zones must stay numerically smaller (seconds per mile)
        if paces.repetition >= paces.interval
            || paces.interval >= paces.threshold
            || paces.threshold >= paces.marathon
            || paces.marathon >= paces.easy
        {
            return Err(ConfigError::InvalidRange(
                "Pace multipliers must ascend: repetition < interval < threshold < marathon < easy",
            ));
        }

        Ok(())
    }

    fn validate_prediction(&self) -> Result<(), ConfigError> {
        let bands = &self.prediction;

        let all_finite = [
            bands.repetition_max_miles,
            bands.interval_max_miles,
            bands.threshold_max_miles,
        ]
        .iter()
        .all(|bound| bound.is_finite());

        if !all_finite || !is_positive(bands.repetition_max_miles) {
            return Err(ConfigError::ValueOutOfRange(
                "Prediction bands must be positive",
            ));
        }
        if bands.repetition_max_miles >= bands.interval_max_miles
            || bands.interval_max_miles >= bands.threshold_max_miles
        {
            return Err(ConfigError::InvalidRange(
                "Prediction bands must ascend: repetition < interval < threshold",
            ));
        }

        Ok(())
    }

    fn validate_projection(&self) -> Result<(), ConfigError> {
        let projection = &self.projection;

        // Negative rates would let a projected target fall below the current VDOT
        let rates = [
            projection.beginner_rate,
            projection.intermediate_rate,
            projection.advanced_rate,
        ];
        if rates.iter().any(|rate| !rate.is_finite() || *rate < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Improvement rates must not be negative",
            ));
        }

        Ok(())
    }
}

/// False for NaN
fn is_positive(value: f64) -> bool {
    value > 0.0
}

fn is_unit_weight(value: f64) -> bool {
    value > 0.0 && value <= 1.0
}
