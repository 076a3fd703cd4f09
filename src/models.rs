// ABOUTME: Core value types for VDOT estimation: the bounded VDOT scalar and performance observations
// ABOUTME: Defines Vdot, RaceResult, TrainingRun and ExperienceTier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Value types exchanged with collaborators. Observations come in as [`RaceResult`]
//! (a single user-reported race) or [`TrainingRun`] (history already scoped to a user and
//! lookback window); fitness goes out as a [`Vdot`].
//!
//! ## Design Principles
//!
//! - **Bounded**: a `Vdot` cannot hold a value outside `[20, 85]`
//! - **Serializable**: all models round-trip through serde for the caller's own storage
//! - **Copy**: every model is a small value type with no shared state

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::constants::vdot::{DEFAULT_VDOT, VDOT_MAX, VDOT_MIN};
use crate::errors::{AppError, AppResult};

/// Running fitness scalar (Jack Daniels' VDOT), always within `[20, 85]`
///
/// Every constructor clamps, and deserialization clamps as well, so values coming back
/// from a collaborator's storage are brought into range rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Vdot(u8);

impl Vdot {
    /// Lowest representable VDOT
    pub const MIN: Self = Self(VDOT_MIN);

    /// Highest representable VDOT
    pub const MAX: Self = Self(VDOT_MAX);

    /// Cold-start VDOT for users without usable data
    pub const DEFAULT: Self = Self(DEFAULT_VDOT);

    /// Create a VDOT, clamping into `[VDOT_MIN, VDOT_MAX]`
    #[must_use]
    pub const fn new(value: u8) -> Self {
        if value < VDOT_MIN {
            Self::MIN
        } else if value > VDOT_MAX {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Round a fractional VDOT to the nearest integer and clamp it
    ///
    /// NaN maps to [`Vdot::MIN`].
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        let clamped = value
            .round()
            .clamp(f64::from(VDOT_MIN), f64::from(VDOT_MAX));
        Self(clamped as u8)
    }

    /// Integer value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Value as `f64` for arithmetic
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for Vdot {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for Vdot {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Vdot> for u8 {
    fn from(vdot: Vdot) -> Self {
        vdot.0
    }
}

impl Display for Vdot {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// A single race (or race-effort) result reported by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    /// Race distance in miles
    pub distance_miles: f64,
    /// Finishing time in seconds
    pub time_seconds: f64,
}

impl RaceResult {
    /// Create a validated race result
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if distance or time is non-positive or not finite
    pub fn new(distance_miles: f64, time_seconds: f64) -> AppResult<Self> {
        let race = Self {
            distance_miles,
            time_seconds,
        };
        race.validate()?;
        Ok(race)
    }

    /// Check that distance and time are positive, finite values
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` naming the offending field
    pub fn validate(&self) -> AppResult<()> {
        if !is_positive_finite(self.distance_miles) {
            return Err(AppError::invalid_input(format!(
                "Distance must be positive, got {} miles",
                self.distance_miles
            ))
            .with_details(self.details()));
        }

        if !is_positive_finite(self.time_seconds) {
            return Err(AppError::invalid_input(format!(
                "Time must be positive, got {} seconds",
                self.time_seconds
            ))
            .with_details(self.details()));
        }

        Ok(())
    }

    // NaN and infinities serialize as JSON null
    fn details(&self) -> serde_json::Value {
        json!({
            "distance_miles": self.distance_miles,
            "time_seconds": self.time_seconds,
        })
    }

    /// Average pace in seconds per mile
    #[must_use]
    pub fn pace_seconds_per_mile(&self) -> f64 {
        self.time_seconds / self.distance_miles
    }
}

/// A logged training run, as extracted upstream from chat messages
///
/// Fields are not validated on construction: implausible runs are excluded during
/// history estimation instead of being rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingRun {
    /// Distance in miles
    pub distance_miles: f64,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Self-reported effort on a 1-10 scale
    #[serde(default)]
    pub perceived_effort: Option<u8>,
    /// Calendar date of the run
    pub date: NaiveDate,
}

impl TrainingRun {
    /// Create a run without a perceived effort rating
    #[must_use]
    pub const fn new(distance_miles: f64, duration_seconds: f64, date: NaiveDate) -> Self {
        Self {
            distance_miles,
            duration_seconds,
            perceived_effort: None,
            date,
        }
    }

    /// Attach a perceived effort rating
    #[must_use]
    pub const fn with_perceived_effort(mut self, effort: u8) -> Self {
        self.perceived_effort = Some(effort);
        self
    }

    /// View this run as a race effort over the same distance and duration
    #[must_use]
    pub const fn as_race(&self) -> RaceResult {
        RaceResult {
            distance_miles: self.distance_miles,
            time_seconds: self.duration_seconds,
        }
    }
}

/// Runner experience, bounding how quickly VDOT is expected to improve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceTier {
    /// New to structured training
    Beginner,
    /// Consistent training history
    Intermediate,
    /// Years of structured training, close to potential
    Advanced,
}

impl ExperienceTier {
    /// Lowercase name as used by collaborators
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl Display for ExperienceTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_input(format!(
                "Unknown experience tier: '{other}'. Valid options: beginner, intermediate, advanced"
            ))),
        }
    }
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_vdot_new_clamps() {
        assert_eq!(Vdot::new(5), Vdot::MIN);
        assert_eq!(Vdot::new(200), Vdot::MAX);
        assert_eq!(Vdot::new(50).value(), 50);
    }

    #[test]
    fn test_vdot_from_f64_rounds_and_clamps() {
        assert_eq!(Vdot::from_f64(48.6).value(), 49);
        assert_eq!(Vdot::from_f64(-3.0), Vdot::MIN);
        assert_eq!(Vdot::from_f64(1_000.0), Vdot::MAX);
        assert_eq!(Vdot::from_f64(f64::NAN), Vdot::MIN);
    }

    #[test]
    fn test_vdot_deserialization_clamps() {
        let vdot: Vdot = serde_json::from_str("99").unwrap();
        assert_eq!(vdot, Vdot::MAX);
        assert_eq!(serde_json::to_string(&Vdot::new(42)).unwrap(), "42");
    }

    #[test]
    fn test_race_result_rejects_non_positive_fields() {
        let zero_distance = RaceResult::new(0.0, 1500.0).unwrap_err();
        assert_eq!(zero_distance.code, ErrorCode::InvalidInput);

        let zero_time = RaceResult::new(5.0, 0.0).unwrap_err();
        assert_eq!(zero_time.code, ErrorCode::InvalidInput);
        assert_eq!(zero_time.context.details["distance_miles"], 5.0);
        assert_eq!(zero_time.context.details["time_seconds"], 0.0);

        assert!(RaceResult::new(f64::NAN, 1500.0).is_err());
        assert!(RaceResult::new(3.1, f64::INFINITY).is_err());
    }

    #[test]
    fn test_race_pace() {
        let race = RaceResult::new(3.1, 1240.0).unwrap();
        assert!((race.pace_seconds_per_mile() - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_training_run_deserializes_without_effort() {
        let run: TrainingRun = serde_json::from_str(
            r#"{"distance_miles": 4.0, "duration_seconds": 2100.0, "date": "2025-03-14"}"#,
        )
        .unwrap();

        assert_eq!(run.perceived_effort, None);
        assert_eq!(run.date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    }

    #[test]
    fn test_experience_tier_parsing() {
        assert_eq!(
            "Beginner".parse::<ExperienceTier>().unwrap(),
            ExperienceTier::Beginner
        );
        assert_eq!(
            " advanced ".parse::<ExperienceTier>().unwrap(),
            ExperienceTier::Advanced
        );

        let error = "elite".parse::<ExperienceTier>().unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert!(error.message.contains("elite"));
    }
}
