//! # sleepdash
//!
//! Aggregation engine behind a sleep habits dashboard. A survey CSV (one row
//! per night) is loaded once into an immutable snapshot; ten chart recipes
//! then filter, group and summarise it into plain, serialisable data.
//!
//! ## Features
//!
//! - **Typed records**: numeric and label fields resolved once at load time
//! - **Strict filtering**: a record joins an aggregation only when every
//!   field it needs is present, never defaulted
//! - **Statistics**: mean, sample standard deviation, R-7 quantiles, clamped
//!   IQR fences, least-squares regression
//! - **Canonical orders**: survey scales come out in their natural order
//!
//! ## Modules
//!
//! - [`dataset`]: records, field selectors and the CSV loader
//! - [`aggregate`]: filter, group, order and summarise primitives
//! - [`stats`]: descriptive statistics and regression
//! - [`charts`]: the ten chart recipes
//! - [`engine`]: [`AggregationEngine`] over one loaded dataset
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleepdash::charts::ChartKind;
//! use sleepdash::dataset::DatasetLoader;
//! use sleepdash::AggregationEngine;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() {
//!     let dataset = DatasetLoader::new()
//!         .load_or_empty(Path::new("sleep_data.csv"))
//!         .await;
//!
//!     let engine = AggregationEngine::new(dataset);
//!     let boxes = engine.chart(ChartKind::CaffeineRem);
//!
//!     println!("{} nights in the box plot", boxes.count());
//! }
//! ```

pub mod aggregate;
pub mod charts;
pub mod clock;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod logging;
pub mod report;
pub mod stats;

// Re-export top-level types for convenience
pub use dataset::{
    Dataset, DatasetError, DatasetLoader, DatasetResult, Field, LabelField, LoadOutcome,
    LoadReport, NumericField, SleepRecord,
};

pub use aggregate::{CategoryOrder, GroupSummary, Unlisted};

pub use charts::{ChartData, ChartKind};

pub use engine::AggregationEngine;

pub use logging::init_logging;

pub use stats::{BoxStats, Regression, RegressionError};
