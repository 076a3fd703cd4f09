// ABOUTME: VDOT estimation from a single race result or a recency- and effort-weighted run history
// ABOUTME: Rejects invalid races outright but silently filters implausible training runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::reference_table::{RaceCategory, ReferenceTable};
use crate::config::HistoryWeightingConfig;
use crate::constants::history::{EFFORT_SCALE, MAX_PERCEIVED_EFFORT, MIN_PERCEIVED_EFFORT};
use crate::errors::AppResult;
use crate::models::{RaceResult, TrainingRun, Vdot};
use chrono::NaiveDate;
use tracing::{debug, trace};

/// Estimates VDOT from observed performances against a reference table
#[derive(Debug, Clone, Copy)]
pub struct VdotEstimator<'a> {
    table: &'a ReferenceTable,
    weighting: &'a HistoryWeightingConfig,
}

impl<'a> VdotEstimator<'a> {
    /// Create an estimator over the given table and weighting heuristics
    #[must_use]
    pub const fn new(table: &'a ReferenceTable, weighting: &'a HistoryWeightingConfig) -> Self {
        Self { table, weighting }
    }

    /// VDOT of the reference anchor whose race pace is closest to this race
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if distance or time is non-positive
    pub fn vdot_from_race(&self, race: &RaceResult) -> AppResult<Vdot> {
        race.validate()?;

        let pace = race.pace_seconds_per_mile();
        let category = RaceCategory::for_distance(race.distance_miles);
        let entry = self.table.nearest_entry(pace, category);

        trace!(
            distance_miles = race.distance_miles,
            pace_seconds_per_mile = pace,
            category = ?category,
            vdot = entry.vdot,
            "Matched race to reference entry"
        );

        Ok(Vdot::new(entry.vdot))
    }

    /// Weighted VDOT over a training history, as of the given date
    ///
    /// Each usable run contributes its race-equivalent VDOT, weighted by
    /// `recency * effort`. Recency decays linearly to a floor over the configured
    /// window; effort is `perceived_effort / 10`, or a default for unrated runs.
    /// Returns [`Vdot::DEFAULT`] when no run is usable. With a validated configuration every
    /// used run has a positive weight, so the zero-total-weight fallback is a guard only.
    #[must_use]
    pub fn vdot_from_history(&self, runs: &[TrainingRun], as_of: NaiveDate) -> Vdot {
        if runs.is_empty() {
            debug!("No training runs supplied, using default VDOT");
            return Vdot::DEFAULT;
        }

        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        let mut used_runs = 0_usize;

        for run in runs.iter().filter(|run| self.is_plausible(run)) {
            let vdot = match self.vdot_from_race(&run.as_race()) {
                Ok(vdot) => vdot,
                Err(e) => {
                    debug!(
                        run_date = %run.date,
                        error = %e,
                        "Skipping training run that cannot be rated"
                    );
                    continue;
                }
            };

            let weight =
                self.recency_weight(run.date, as_of) * self.effort_weight(run.perceived_effort);
            trace!(
                run_date = %run.date,
                vdot = vdot.value(),
                weight,
                "Weighted training run"
            );

            weighted_sum = vdot.as_f64().mul_add(weight, weighted_sum);
            total_weight += weight;
            used_runs += 1;
        }

        if used_runs == 0 || total_weight <= 0.0 {
            debug!(
                supplied_runs = runs.len(),
                used_runs, "No usable training runs, using default VDOT"
            );
            return Vdot::DEFAULT;
        }

        let estimate = Vdot::from_f64(weighted_sum / total_weight);
        debug!(
            supplied_runs = runs.len(),
            used_runs,
            vdot = estimate.value(),
            "Estimated VDOT from training history"
        );
        estimate
    }

    /// Excludes zero/negative readings and distances beyond the configured maximum
    fn is_plausible(&self, run: &TrainingRun) -> bool {
        let plausible = run.distance_miles > 0.0
            && run.duration_seconds > 0.0
            && run.distance_miles <= self.weighting.max_run_distance_miles;

        if !plausible {
            debug!(
                run_date = %run.date,
                distance_miles = run.distance_miles,
                duration_seconds = run.duration_seconds,
                "Excluding implausible training run"
            );
        }
        plausible
    }

    /// `max(floor, 1 - days_since / window)`; runs dated after `as_of` count as today
    fn recency_weight(&self, run_date: NaiveDate, as_of: NaiveDate) -> f64 {
        let days_since = as_of.signed_duration_since(run_date).num_days().max(0) as f64;
        (1.0 - days_since / self.weighting.recency_window_days)
            .max(self.weighting.min_recency_weight)
    }

    /// Ratings outside 1-10 are treated as missing
    fn effort_weight(&self, perceived_effort: Option<u8>) -> f64 {
        perceived_effort
            .filter(|effort| (MIN_PERCEIVED_EFFORT..=MAX_PERCEIVED_EFFORT).contains(effort))
            .map_or(self.weighting.default_effort_weight, |effort| {
                f64::from(effort) / EFFORT_SCALE
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator_with<'a>(weighting: &'a HistoryWeightingConfig) -> VdotEstimator<'a> {
        VdotEstimator::new(ReferenceTable::standard(), weighting)
    }

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap() + chrono::Duration::days(offset)
    }

    #[test]
    fn test_recency_weight_decays_to_floor() {
        let weighting = HistoryWeightingConfig::default();
        let estimator = estimator_with(&weighting);

        assert!((estimator.recency_weight(day(0), day(0)) - 1.0).abs() < 1e-12);
        assert!((estimator.recency_weight(day(0), day(45)) - 0.5).abs() < 1e-12);
        assert!((estimator.recency_weight(day(0), day(89)) - 0.1).abs() < 1e-12);
        assert!((estimator.recency_weight(day(0), day(400)) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_future_run_weight_is_capped() {
        let weighting = HistoryWeightingConfig::default();
        let estimator = estimator_with(&weighting);

        assert!((estimator.recency_weight(day(10), day(0)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_effort_weight() {
        let weighting = HistoryWeightingConfig::default();
        let estimator = estimator_with(&weighting);

        assert!((estimator.effort_weight(Some(7)) - 0.7).abs() < 1e-12);
        assert!((estimator.effort_weight(None) - 0.8).abs() < 1e-12);
        assert!((estimator.effort_weight(Some(0)) - 0.8).abs() < 1e-12);
        assert!((estimator.effort_weight(Some(11)) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_plausibility_filter() {
        let weighting = HistoryWeightingConfig::default();
        let estimator = estimator_with(&weighting);

        assert!(estimator.is_plausible(&TrainingRun::new(26.2, 10_800.0, day(0))));
        assert!(!estimator.is_plausible(&TrainingRun::new(26.3, 10_800.0, day(0))));
        assert!(!estimator.is_plausible(&TrainingRun::new(0.0, 1_800.0, day(0))));
        assert!(!estimator.is_plausible(&TrainingRun::new(3.0, 0.0, day(0))));
    }
}
