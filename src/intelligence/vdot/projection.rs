// ABOUTME: Future VDOT target projection bounded by an experience-tier improvement rate
// ABOUTME: Rates are a coaching heuristic (gains slow with experience), not a physiological law
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ProjectionConfig;
use crate::models::{ExperienceTier, Vdot};

/// Projects a plausible VDOT target over a training block
#[derive(Debug, Clone, Copy)]
pub struct TargetProjector<'a> {
    config: &'a ProjectionConfig,
}

impl<'a> TargetProjector<'a> {
    /// Create a projector with the given improvement rates
    #[must_use]
    pub const fn new(config: &'a ProjectionConfig) -> Self {
        Self { config }
    }

    /// Expected VDOT gain per week for a tier
    #[must_use]
    pub const fn weekly_rate(&self, tier: ExperienceTier) -> f64 {
        match tier {
            ExperienceTier::Beginner => self.config.beginner_rate,
            ExperienceTier::Intermediate => self.config.intermediate_rate,
            ExperienceTier::Advanced => self.config.advanced_rate,
        }
    }

    /// Target over the configured default horizon
    #[must_use]
    pub fn suggest_target(&self, current: Vdot, tier: ExperienceTier) -> Vdot {
        self.suggest_target_over(current, tier, self.config.default_weeks)
    }

    /// `current + rate * weeks`, capped at `VDOT_MAX` and rounded
    ///
    /// Never below `current`, since rates are non-negative.
    #[must_use]
    pub fn suggest_target_over(&self, current: Vdot, tier: ExperienceTier, weeks: u32) -> Vdot {
        let target = self
            .weekly_rate(tier)
            .mul_add(f64::from(weeks), current.as_f64())
            .min(Vdot::MAX.as_f64());
        Vdot::from_f64(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_rates() {
        let config = ProjectionConfig::default();
        let projector = TargetProjector::new(&config);

        assert!((projector.weekly_rate(ExperienceTier::Beginner) - 0.8).abs() < f64::EPSILON);
        assert!((projector.weekly_rate(ExperienceTier::Intermediate) - 0.5).abs() < f64::EPSILON);
        assert!((projector.weekly_rate(ExperienceTier::Advanced) - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_weeks_keeps_current() {
        let config = ProjectionConfig::default();
        let projector = TargetProjector::new(&config);

        let current = Vdot::new(47);
        assert_eq!(
            projector.suggest_target_over(current, ExperienceTier::Beginner, 0),
            current
        );
    }

    #[test]
    fn test_custom_horizon_from_config() {
        let config = ProjectionConfig {
            default_weeks: 20,
            ..ProjectionConfig::default()
        };
        let projector = TargetProjector::new(&config);

        // 40 + 0.5 * 20
        assert_eq!(
            projector
                .suggest_target(Vdot::new(40), ExperienceTier::Intermediate)
                .value(),
            50
        );
    }
}
