// ABOUTME: PostgreSQL access for the workout schedule seeder
// ABOUTME: Single-connection setup, parameterized Workout inserts, one-commit seeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout App Project

//! Database layer.
//!
//! The seeder holds exactly one non-pooled connection for its lifetime. All
//! rows are inserted individually inside a single transaction that commits
//! once after the last insert; if any insert fails the transaction guard is
//! dropped and the database rolls the run back.

use crate::config::DatabaseConfig;
use crate::models::WorkoutRow;
use anyhow::{Context, Result};
use sqlx::postgres::PgExecutor;
use sqlx::{Connection, PgConnection};
use tracing::debug;

/// Open the seeder's single database connection and point unqualified names
/// at the configured schema.
///
/// # Errors
///
/// Returns an error if the server is unreachable, the credentials are
/// rejected, or the search path cannot be set.
pub async fn connect(config: &DatabaseConfig) -> Result<PgConnection> {
    let mut conn = PgConnection::connect(&config.url)
        .await
        .context("failed to connect to database")?;

    // Schema name is validated as a bare identifier by SeederConfig::validate
    sqlx::query(&format!("SET search_path TO {}", config.schema))
        .execute(&mut conn)
        .await
        .with_context(|| format!("failed to set search_path to {}", config.schema))?;

    Ok(conn)
}

/// Insert a single `Workout` row.
///
/// # Errors
///
/// Returns an error if the INSERT is rejected.
pub async fn insert_workout<'e, E>(executor: E, row: &WorkoutRow) -> Result<()>
where
    E: PgExecutor<'e>,
{
    sqlx::query(r#"INSERT INTO "Workout" (title, workout_str) VALUES ($1, $2)"#)
        .bind(&row.title)
        .bind(&row.workout_str)
        .execute(executor)
        .await
        .with_context(|| format!("failed to insert workout '{}'", row.title))?;

    Ok(())
}

/// Insert every row inside one transaction, committing exactly once after
/// the last insert. Returns the number of rows written.
///
/// # Errors
///
/// Returns an error if any insert fails or the transaction cannot be
/// committed; uncommitted inserts are rolled back when the transaction guard
/// drops.
pub async fn seed_workouts(conn: &mut PgConnection, rows: &[WorkoutRow]) -> Result<u64> {
    let mut tx = conn
        .begin()
        .await
        .context("failed to begin seeding transaction")?;

    let mut inserted = 0u64;
    for row in rows {
        insert_workout(&mut *tx, row).await?;
        inserted += 1;
        debug!(title = %row.title, inserted, "inserted workout");
    }

    tx.commit()
        .await
        .context("failed to commit seeded workouts")?;

    Ok(inserted)
}
