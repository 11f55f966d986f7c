//! Domain model and view logic for the customer-management screen.
//!
//! Everything here is pure: the frontend components hand it the records they
//! were given and render whatever comes back.

pub mod activity;
pub mod dates;
pub mod display;
pub mod error;
pub mod filters;
pub mod models;
pub mod stats;
pub mod store;

pub use activity::{ActivityEntry, ActivityKind, ACTIVITY_FEED_LIMIT, merge_activities};
pub use display::{DisplayCounters, PreviewSnippet, RealCounters, SummaryOverview, coalesce};
pub use error::{CrmError, CrmResult};
pub use filters::{
    AppliedRange, CustomerQuery, DateFilter, DateFilterState, DateFilterType, SortKey, StageFilter,
};
pub use models::{
    Consultation, Customer, DetailTab, Priority, RecordingContext, Sentiment, Stage, Task,
    VoiceSummary,
};
pub use stats::CustomerStats;
pub use store::{CustomerStore, StoreAction};

#[cfg(test)]
pub(crate) mod fixtures;
