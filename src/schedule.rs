// ABOUTME: Schedule generation from a training plan
// ABOUTME: Cycles each muscle group's variants across eight passes into Workout rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout App Project

//! Pass/variant cycling.
//!
//! A schedule is eight passes over the plan. On pass `n` (1-based), every
//! muscle group contributes one row built from variant `(n - 1) % 4`, so the
//! four variants of each group are cycled twice. Rows come out pass-major,
//! groups in plan-document order within a pass.

use crate::constants::schedule::{TOTAL_PASSES, VARIANTS_PER_GROUP};
use crate::formatters::{title_case, workout_body};
use crate::models::{WorkoutPlan, WorkoutRow};
use anyhow::{Context, Result};
use tracing::debug;

/// Variant index selected on a 1-based generation pass.
#[must_use]
pub fn variant_index(pass: usize) -> usize {
    debug_assert!(pass >= 1, "passes are 1-based");
    (pass - 1) % VARIANTS_PER_GROUP
}

/// Generate every `Workout` row for the plan.
///
/// # Errors
///
/// Returns an error if a muscle group has fewer variants than the cycle
/// needs.
pub fn build_schedule(plan: &WorkoutPlan) -> Result<Vec<WorkoutRow>> {
    let mut rows = Vec::with_capacity(TOTAL_PASSES * plan.group_count());

    for pass in 1..=TOTAL_PASSES {
        let index = variant_index(pass);

        for (muscle_group, variants) in &plan.groups {
            let variant = variants.get(index).with_context(|| {
                format!(
                    "muscle group '{muscle_group}' has {} variants, expected {VARIANTS_PER_GROUP}",
                    variants.len()
                )
            })?;

            if let Some(workout) = &variant.workout {
                debug!(pass, group = %muscle_group, workout = %workout, "selected variant");
            }

            rows.push(WorkoutRow {
                title: title_case(muscle_group),
                workout_str: workout_body(&variant.exercises),
            });
        }
    }

    Ok(rows)
}
