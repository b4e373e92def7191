//! Typo-tolerant filtering and search over a university course catalog.
//!
//! The pipeline is pure functions over plain data: [`catalog`] loads the
//! dataset into an owned store, [`matcher`] supplies normalization and
//! edit-distance matching, [`query`] composes the field predicates and the
//! sort into a result set, and [`render`] writes text cards or JSON.
//! [`state::SearchSession`] wraps the pipeline for interactive use.

pub mod catalog;
pub mod config;
pub mod matcher;
pub mod model;
pub mod query;
pub mod render;
pub mod state;

pub use catalog::{Catalog, CatalogError};
pub use model::Course;
pub use query::{CourseQuery, INITIAL_PREVIEW_LIMIT, SearchOutcome, SortKey, search};
pub use state::SearchSession;
