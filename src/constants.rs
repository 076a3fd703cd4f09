// ABOUTME: Physiological constants and heuristic defaults for VDOT estimation and pace calibration
// ABOUTME: Organized by concern: VDOT bounds, race categories, history weighting, paces, prediction, projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded defaults for the VDOT engine. Every tunable value here is mirrored by a
//! field in [`crate::config::VdotConfig`], whose `Default` is built from these constants.

/// VDOT domain bounds and cold-start value
pub mod vdot {
    /// Lowest VDOT any operation returns
    pub const VDOT_MIN: u8 = 20;
    /// Highest VDOT any operation returns
    pub const VDOT_MAX: u8 = 85;
    /// VDOT assumed when there is no usable training data (new users)
    pub const DEFAULT_VDOT: u8 = 35;
}

/// Distances used to pick reference categories and normalize reference times
pub mod distances {
    /// Races up to this distance are compared against mile race pace
    pub const MILE_CATEGORY_MAX_MILES: f64 = 1.2;
    /// Races up to this distance are compared against 5K race pace
    pub const FIVE_K_CATEGORY_MAX_MILES: f64 = 3.5;
    /// 5K reference times are divided by this to get seconds per mile
    pub const FIVE_K_MILES: f64 = 3.1;
    /// 10K reference times are divided by this to get seconds per mile
    pub const TEN_K_MILES: f64 = 6.2;
    /// One mile
    pub const MILE: f64 = 1.0;
    /// Half marathon, as reported in equivalent times
    pub const HALF_MARATHON_MILES: f64 = 13.1;
    /// Marathon, as reported in equivalent times
    pub const MARATHON_MILES: f64 = 26.2;
}

/// Training history weighting
pub mod history {
    /// Linear recency decay reaches its floor after this many days
    pub const RECENCY_WINDOW_DAYS: f64 = 90.0;
    /// Recency weight never drops below this
    pub const MIN_RECENCY_WEIGHT: f64 = 0.1;
    /// Effort weight for runs without a perceived effort rating
    pub const DEFAULT_EFFORT_WEIGHT: f64 = 0.8;
    /// Perceived effort scale maximum (effort weight = effort / scale)
    pub const EFFORT_SCALE: f64 = 10.0;
    /// Lowest accepted perceived effort rating
    pub const MIN_PERCEIVED_EFFORT: u8 = 1;
    /// Highest accepted perceived effort rating
    pub const MAX_PERCEIVED_EFFORT: u8 = 10;
    /// Logged runs longer than this are treated as extraction noise
    pub const MAX_RUN_DISTANCE_MILES: f64 = 26.2;
}

/// Training pace multipliers applied to the reference mile race pace
pub mod pace_multipliers {
    /// Easy / recovery running
    pub const EASY: f64 = 1.25;
    /// Marathon race pace
    pub const MARATHON: f64 = 1.12;
    /// Lactate threshold (tempo) pace
    pub const THRESHOLD: f64 = 1.08;
    /// VO2max interval pace
    pub const INTERVAL: f64 = 0.98;
    /// Short repetition pace
    pub const REPETITION: f64 = 0.92;
}

/// Distance bands selecting which training pace approximates race pace
pub mod prediction_bands {
    /// Up to this distance, race pace ~ repetition pace
    pub const REPETITION_MAX_MILES: f64 = 1.5;
    /// Up to this distance, race pace ~ interval pace
    pub const INTERVAL_MAX_MILES: f64 = 5.0;
    /// Up to this distance, race pace ~ threshold pace; beyond it, marathon pace
    pub const THRESHOLD_MAX_MILES: f64 = 15.0;
}

/// Improvement-rate heuristic for target projection (VDOT points per week)
///
/// These encode a coaching policy (gains slow down with experience), not a measured law.
pub mod improvement_rates {
    /// Beginner weekly VDOT gain
    pub const BEGINNER: f64 = 0.8;
    /// Intermediate weekly VDOT gain
    pub const INTERMEDIATE: f64 = 0.5;
    /// Advanced weekly VDOT gain
    pub const ADVANCED: f64 = 0.3;
    /// Projection horizon when the caller does not give one
    pub const DEFAULT_WEEKS: u32 = 12;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by [`crate::logging::LoggingConfig`]
    pub const VDOT_ENGINE: &str = "vdot-engine";
}
