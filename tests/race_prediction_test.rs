// ABOUTME: Integration tests for race time prediction and equivalent race times
// ABOUTME: Checks distance bands, marathon consistency and display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::init_test_logging;
use vdot_engine::intelligence::vdot::{format_pace, format_time};
use vdot_engine::intelligence::VdotEngine;
use vdot_engine::models::{RaceResult, Vdot};

fn assert_seconds(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < f64::EPSILON,
        "expected {expected} seconds, got {actual}"
    );
}

#[test]
fn test_vdot_50_equivalent_times() {
    init_test_logging();
    let engine = VdotEngine::default();
    let times = engine.equivalent_times(Vdot::new(50));

    // Repetition pace 323
    assert_seconds(times.mile, 323.0);
    // Interval pace 344 * 3.1 = 1066.4
    assert_seconds(times.five_k, 1066.0);
    // Threshold pace 379 * 6.2 = 2349.8
    assert_seconds(times.ten_k, 2350.0);
    // Threshold pace 379 * 13.1 = 4964.9
    assert_seconds(times.half_marathon, 4965.0);
    // Marathon pace 393 * 26.2 = 10296.6
    assert_seconds(times.marathon, 10297.0);
}

#[test]
fn test_marathon_prediction_matches_equivalent_times() {
    let engine = VdotEngine::default();

    for value in Vdot::MIN.value()..=Vdot::MAX.value() {
        let vdot = Vdot::new(value);
        assert_seconds(
            engine.predict_time(vdot, 26.2),
            engine.equivalent_times(vdot).marathon,
        );
    }
}

#[test]
fn test_predictions_increase_with_distance() {
    let engine = VdotEngine::default();

    for value in Vdot::MIN.value()..=Vdot::MAX.value() {
        let times = engine.equivalent_times(Vdot::new(value));
        assert!(times.mile < times.five_k);
        assert!(times.five_k < times.ten_k);
        assert!(times.ten_k < times.half_marathon);
        assert!(times.half_marathon < times.marathon);
    }
}

#[test]
fn test_band_boundaries_are_inclusive() {
    let engine = VdotEngine::default();
    let vdot = Vdot::new(50);
    let paces = engine.paces(vdot);

    assert_seconds(engine.predict_time(vdot, 1.5), (1.5 * paces.repetition).round());
    assert_seconds(engine.predict_time(vdot, 5.0), 5.0 * paces.interval);
    assert_seconds(engine.predict_time(vdot, 15.0), 15.0 * paces.threshold);
    assert_seconds(engine.predict_time(vdot, 15.5), (15.5 * paces.marathon).round());
}

#[test]
fn test_faster_runner_predicted_faster() {
    let engine = VdotEngine::default();
    let slower = engine.equivalent_times(Vdot::new(40));
    let faster = engine.equivalent_times(Vdot::new(60));

    assert!(faster.marathon < slower.marathon);
    assert!(faster.five_k < slower.five_k);
}

#[test]
fn test_race_to_prediction_flow() {
    let engine = VdotEngine::default();
    let race = RaceResult::new(3.1, 1200.0).unwrap();
    let vdot = engine.vdot_from_race(&race).unwrap();

    let marathon = engine.predict_time(vdot, 26.2);
    assert_eq!(format_time(marathon), "2:51:37");
    assert_eq!(format_pace(engine.paces(vdot).easy), "7:19/mi");
}

#[test]
fn test_equivalent_times_serialize() {
    let engine = VdotEngine::default();
    let times = engine.equivalent_times(Vdot::new(50));

    let json = serde_json::to_value(times).unwrap();
    assert_eq!(json["marathon"], serde_json::json!(10297.0));
    assert!(json.get("half_marathon").is_some());
}
