// ABOUTME: Race time prediction from VDOT by applying a distance-appropriate training pace
// ABOUTME: Also renders predicted times and paces as clock strings for display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::paces::{PaceCalculator, PaceSet, TrainingZone};
use crate::config::PredictionBands;
use crate::constants::distances::{
    FIVE_K_MILES, HALF_MARATHON_MILES, MARATHON_MILES, MILE, TEN_K_MILES,
};
use crate::models::Vdot;
use serde::{Deserialize, Serialize};

/// Predicted finishing times (seconds) at the standard race distances
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquivalentTimes {
    /// 1 mile
    pub mile: f64,
    /// 5K (3.1 miles)
    pub five_k: f64,
    /// 10K (6.2 miles)
    pub ten_k: f64,
    /// Half marathon (13.1 miles)
    pub half_marathon: f64,
    /// Marathon (26.2 miles)
    pub marathon: f64,
}

/// Predicts race times from training paces
#[derive(Debug, Clone, Copy)]
pub struct RacePredictor<'a> {
    paces: PaceCalculator<'a>,
    bands: &'a PredictionBands,
}

impl<'a> RacePredictor<'a> {
    /// Create a predictor from a pace calculator and distance bands
    #[must_use]
    pub const fn new(paces: PaceCalculator<'a>, bands: &'a PredictionBands) -> Self {
        Self { paces, bands }
    }

    /// Training zone whose pace approximates race pace over this distance
    #[must_use]
    pub fn zone_for_distance(&self, distance_miles: f64) -> TrainingZone {
        if distance_miles <= self.bands.repetition_max_miles {
            TrainingZone::Repetition
        } else if distance_miles <= self.bands.interval_max_miles {
            TrainingZone::Interval
        } else if distance_miles <= self.bands.threshold_max_miles {
            TrainingZone::Threshold
        } else {
            TrainingZone::Marathon
        }
    }

    /// Predicted time in whole seconds
    ///
    /// `distance_miles` must be positive; it is not validated here.
    #[must_use]
    pub fn predict_time(&self, vdot: Vdot, distance_miles: f64) -> f64 {
        let paces = self.paces.paces(vdot);
        self.predict_with(&paces, distance_miles)
    }

    /// Predicted times at 1 mile, 5K, 10K, half marathon and marathon
    #[must_use]
    pub fn equivalent_times(&self, vdot: Vdot) -> EquivalentTimes {
        EquivalentTimes {
            mile: self.predict_time(vdot, MILE),
            five_k: self.predict_time(vdot, FIVE_K_MILES),
            ten_k: self.predict_time(vdot, TEN_K_MILES),
            half_marathon: self.predict_time(vdot, HALF_MARATHON_MILES),
            marathon: self.predict_time(vdot, MARATHON_MILES),
        }
    }

    fn predict_with(&self, paces: &PaceSet, distance_miles: f64) -> f64 {
        let pace = paces.pace_for(self.zone_for_distance(distance_miles));
        (distance_miles * pace).round()
    }
}

/// Format seconds as `h:mm:ss`, or `m:ss` under an hour
#[must_use]
pub fn format_time(seconds: f64) -> String {
    let total_seconds = seconds.max(0.0).round() as u32;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Format a pace in seconds per mile as `m:ss/mi`
#[must_use]
pub fn format_pace(seconds_per_mile: f64) -> String {
    if !seconds_per_mile.is_finite() || seconds_per_mile <= 0.0 {
        return "N/A".to_owned();
    }
    format!("{}/mi", format_time(seconds_per_mile))
}
