// ABOUTME: String rendering for generated Workout rows
// ABOUTME: Title casing for muscle-group names and exercise body formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout App Project

//! Rendering of the two text fields of a `Workout` row.

use crate::models::Exercise;

/// Upper-case the first letter of every space-separated word, leaving all
/// other characters untouched.
///
/// This is deliberately not full title-casing: `"aBs"` becomes `"ABs"`, and
/// interior capitalization survives. Empty words (consecutive spaces) pass
/// through unchanged.
#[must_use]
pub fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Render the exercises of one workout variant as the `workout_str` body.
///
/// Each exercise becomes three lines (name, `Sets: <value>`,
/// `Reps: <value>`) followed by a blank line, concatenated in input order.
/// Values are rendered verbatim with no escaping.
#[must_use]
pub fn workout_body(exercises: &[Exercise]) -> String {
    let mut body = String::new();
    for entry in exercises {
        body.push_str(&format!(
            "{}\nSets: {}\nReps: {}\n\n",
            entry.exercise, entry.sets, entry.reps
        ));
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Quantity;

    fn exercise(name: &str, sets: i64, reps: Quantity) -> Exercise {
        Exercise {
            exercise: name.to_string(),
            sets: Quantity::Count(sets),
            reps,
        }
    }

    #[test]
    fn test_title_case_single_word() {
        assert_eq!(title_case("abs"), "Abs");
    }

    #[test]
    fn test_title_case_multiple_words() {
        assert_eq!(title_case("lower back"), "Lower Back");
    }

    #[test]
    fn test_title_case_leaves_interior_characters_alone() {
        assert_eq!(title_case("aBs"), "ABs");
        assert_eq!(title_case("rear DELTS"), "Rear DELTS");
    }

    #[test]
    fn test_title_case_preserves_spacing() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("legs  and glutes"), "Legs  And Glutes");
    }

    #[test]
    fn test_workout_body_single_exercise() {
        let body = workout_body(&[exercise("Squat", 3, Quantity::Count(10))]);
        assert_eq!(body, "Squat\nSets: 3\nReps: 10\n\n");
    }

    #[test]
    fn test_workout_body_concatenates_in_order() {
        let body = workout_body(&[
            exercise("Bench Press", 4, Quantity::Count(8)),
            exercise("Incline Dumbbell Press", 3, Quantity::Text("8-12".to_string())),
        ]);
        assert_eq!(
            body,
            "Bench Press\nSets: 4\nReps: 8\n\nIncline Dumbbell Press\nSets: 3\nReps: 8-12\n\n"
        );
    }

    #[test]
    fn test_workout_body_renders_text_reps_verbatim() {
        let body = workout_body(&[exercise("Plank", 3, Quantity::Text("to failure".to_string()))]);
        assert_eq!(body, "Plank\nSets: 3\nReps: to failure\n\n");
    }

    #[test]
    fn test_workout_body_empty_variant() {
        assert_eq!(workout_body(&[]), "");
    }
}
