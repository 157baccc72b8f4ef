// SPDX-License-Identifier: MIT

//! Application error types shared by all jobs.
//!
//! Configuration and catalog loading have their own error enums next to the
//! code they guard; this type covers everything that happens once a job is
//! talking to the database.

/// Top-level error type for the admin jobs.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Batch of {count} writes exceeds the {limit}-operation limit")]
    BatchTooLarge { count: usize, limit: usize },

    #[error("Prerequisite collection '{0}' is empty; run the seeding steps first")]
    EmptyPrerequisite(String),

    #[error("Services reference category ids with no class mapping: {0}")]
    UnmappedCategories(String),
}

/// Result type alias for job code
pub type Result<T> = std::result::Result<T, AppError>;
