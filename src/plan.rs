// ABOUTME: Training plan file loading
// ABOUTME: Reads one JSON document from disk into a WorkoutPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout App Project

//! Training plan loading.
//!
//! The plan is a single JSON document read from a caller-supplied path (by
//! default cwd-relative). Read and parse failures are fatal to the run and
//! propagate with the offending path attached.

use crate::models::WorkoutPlan;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load and parse a training plan file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid plan
/// document.
pub fn load_plan_file(path: &Path) -> Result<WorkoutPlan> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read plan file: {}", path.display()))?;

    let plan: WorkoutPlan = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse plan file: {}", path.display()))?;

    Ok(plan)
}
