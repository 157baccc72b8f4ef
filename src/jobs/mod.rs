// SPDX-License-Identifier: MIT

//! The administrative jobs: seeding, cross-linking, inspection, and the
//! pipeline that orders them.

pub mod inspect;
pub mod link;
pub mod pipeline;
pub mod seed;

pub use inspect::CollectionReport;
pub use link::LinkSummary;
pub use pipeline::{Job, Step};
