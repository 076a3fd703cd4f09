// ABOUTME: Shared helpers for VDOT engine integration tests
// ABOUTME: Provides quiet test logging and fixture builders for dates and training runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code, missing_docs, clippy::unwrap_used, clippy::expect_used)]

use chrono::{Duration, NaiveDate};
use std::sync::Once;
use vdot_engine::models::TrainingRun;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed reference date so recency weights are reproducible
pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

/// Date `days` before [`as_of`]
pub fn days_ago(days: i64) -> NaiveDate {
    as_of() - Duration::days(days)
}

/// 5K in 20:00, matches the VDOT 50 anchor
pub fn vdot_50_run(date: NaiveDate) -> TrainingRun {
    TrainingRun::new(3.1, 1200.0, date)
}

/// 5K in 27:00, matches the VDOT 35 anchor
pub fn vdot_35_run(date: NaiveDate) -> TrainingRun {
    TrainingRun::new(3.1, 1620.0, date)
}
