//! Aggregation Primitives
//!
//! Building blocks shared by every chart recipe:
//!
//! - **filter**: keep records carrying all required fields
//! - **group**: partition records by key, first-occurrence order
//! - **order**: canonical label orders for survey scales
//! - **summary**: per-group count/mean/std-dev and label counts
//! - **bucket**: count-weighted half-hour scatter bins
//! - **compose**: sleep-stage means over one member set
//!
//! # Pipeline
//!
//! ```text
//! Dataset → filter → group → order → summarize → chart data
//! ```

pub mod bucket;
pub mod compose;
pub mod filter;
pub mod group;
pub mod order;
pub mod summary;

pub use bucket::{bucket_counts, Bucket};
pub use compose::{stage_means, StageMeans, SLEEP_STAGES};
pub use filter::filter_records;
pub use group::{group_by, group_by_label, Groups};
pub use order::{CategoryOrder, Unlisted};
pub use summary::{
    count_labels, count_labels_on_scale, numeric_values, summarize, summarize_group,
    GroupSummary, LabelCount,
};
