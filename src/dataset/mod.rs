//! Sleep Dataset
//!
//! This module provides the typed in-memory view of the survey file:
//!
//! - **types**: `SleepRecord`, field selectors and the shared `Dataset` snapshot
//! - **loader**: CSV decoding with header-driven column resolution
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use sleepdash::dataset::DatasetLoader;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let outcome = DatasetLoader::new()
//!         .load(Path::new("Combined_Health_and_Labels_Data.csv"))
//!         .await?;
//!
//!     println!("{} records", outcome.dataset.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::{parse_date, DatasetLoader, LoadOutcome, LoadReport, DATE_COLUMN};
pub use types::{Dataset, Field, FieldCoverage, LabelField, NumericField, SleepRecord};
