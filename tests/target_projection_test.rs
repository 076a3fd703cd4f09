// ABOUTME: Integration tests for experience-tier VDOT target projection
// ABOUTME: Verifies tier rates, the VDOT ceiling and that targets never regress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::init_test_logging;
use vdot_engine::errors::ErrorCode;
use vdot_engine::intelligence::VdotEngine;
use vdot_engine::models::{ExperienceTier, Vdot};

const TIERS: [ExperienceTier; 3] = [
    ExperienceTier::Beginner,
    ExperienceTier::Intermediate,
    ExperienceTier::Advanced,
];

#[test]
fn test_twelve_week_targets_from_50() {
    init_test_logging();
    let engine = VdotEngine::default();
    let current = Vdot::new(50);

    assert_eq!(
        engine
            .suggest_target_over(current, ExperienceTier::Beginner, 12)
            .value(),
        60
    );
    assert_eq!(
        engine
            .suggest_target_over(current, ExperienceTier::Intermediate, 12)
            .value(),
        56
    );
    assert_eq!(
        engine
            .suggest_target_over(current, ExperienceTier::Advanced, 12)
            .value(),
        54
    );
}

#[test]
fn test_default_horizon_is_twelve_weeks() {
    let engine = VdotEngine::default();

    for tier in TIERS {
        assert_eq!(
            engine.suggest_target(Vdot::new(42), tier),
            engine.suggest_target_over(Vdot::new(42), tier, 12)
        );
    }
}

#[test]
fn test_target_capped_at_85() {
    let engine = VdotEngine::default();

    // 80 + 0.8 * 12 = 89.6
    assert_eq!(
        engine.suggest_target_over(Vdot::new(80), ExperienceTier::Beginner, 12),
        Vdot::MAX
    );
    assert_eq!(
        engine.suggest_target_over(Vdot::MAX, ExperienceTier::Advanced, 52),
        Vdot::MAX
    );
}

#[test]
fn test_target_within_bounds_for_all_inputs() {
    let engine = VdotEngine::default();

    for value in Vdot::MIN.value()..=Vdot::MAX.value() {
        let current = Vdot::new(value);
        for tier in TIERS {
            for weeks in [0, 1, 4, 12, 52] {
                let target = engine.suggest_target_over(current, tier, weeks);
                assert!(target >= current, "{tier} target regressed from {current}");
                assert!(target <= Vdot::MAX);
            }
        }
    }
}

#[test]
fn test_beginners_progress_fastest() {
    let engine = VdotEngine::default();
    let current = Vdot::new(40);

    let beginner = engine.suggest_target_over(current, ExperienceTier::Beginner, 12);
    let intermediate = engine.suggest_target_over(current, ExperienceTier::Intermediate, 12);
    let advanced = engine.suggest_target_over(current, ExperienceTier::Advanced, 12);

    assert!(beginner > intermediate);
    assert!(intermediate > advanced);
}

#[test]
fn test_tier_parsed_from_profile_string() {
    let engine = VdotEngine::default();
    let tier: ExperienceTier = " Intermediate ".parse().unwrap();

    assert_eq!(engine.suggest_target(Vdot::new(50), tier).value(), 56);

    let error = "elite".parse::<ExperienceTier>().unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}
