// SPDX-License-Identifier: MIT

//! Salon-Admin: seed and inspection jobs for the salon booking database
//!
//! This crate provides the administrative batch jobs that populate the
//! Firestore collections behind the salon booking app (categories, services,
//! masters, promotions), link masters to the services they can perform, and
//! report what the database currently holds.

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod jobs;
pub mod models;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured JSON logging (GCP-compliant).
///
/// Shared by every job binary.
pub fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("salon_admin=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
