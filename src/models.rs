// ABOUTME: Data model for training plans and generated workout rows
// ABOUTME: Serde types mirroring the plan JSON document and the Workout table tuple
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout App Project

//! Training plan and output row types.
//!
//! The plan document is a JSON object mapping muscle-group names to arrays of
//! workout variants. Group order is significant (rows are generated in
//! document order), so the map is an [`IndexMap`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A sets or reps value from the plan document.
///
/// Reps in particular may be a plain count or a description such as `"8-12"`
/// or `"to failure"`; both render verbatim into the workout body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    /// A plain count
    Count(i64),
    /// Free-form text such as a rep range
    Text(String),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One exercise entry within a workout variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name, rendered as the first line of its block
    pub exercise: String,
    /// Sets count
    pub sets: Quantity,
    /// Reps count or description
    pub reps: Quantity,
}

/// One of a muscle group's workout variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutVariant {
    /// Optional display name of the variant (present in the plan document but
    /// not part of the generated row title)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout: Option<String>,
    /// Exercises in presentation order
    pub exercises: Vec<Exercise>,
}

/// A training plan: muscle groups in document order, each with its variants
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutPlan {
    /// Muscle-group name to workout variants, in plan-document order
    pub groups: IndexMap<String, Vec<WorkoutVariant>>,
}

impl WorkoutPlan {
    /// Number of muscle groups in the plan
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Whether the plan has no muscle groups
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// A generated `Workout` row, held only long enough to bind as INSERT
/// parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutRow {
    /// Title derived from the muscle-group name
    pub title: String,
    /// Newline-delimited exercise blocks
    pub workout_str: String,
}
