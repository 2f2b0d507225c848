//! Shared data model for Biobank Catalogue Studio.
//!
//! This crate defines the entities exchanged with the catalogue services:
//!
//! - **Catalogue entities** (`catalogue`): datasets, resource references,
//!   data items, and typeahead suggestions
//! - **Search entities** (`search`): structured queries (a document-type tag
//!   plus a rule tree) and search responses
//!
//! Everything here is plain data: serializable, cheap to clone, and free of
//! any I/O. The query constructors in [`search`] are pure functions: the
//! same inputs always produce structurally identical queries.

pub mod catalogue;
pub mod search;

pub use catalogue::{DataItem, Dataset, DatasetCollection, DatasetSummary, ResourceRef, Suggestion};
pub use search::{
    FEATURE_TYPE, Operator, PROTOCOL_TREE_PREFIX, QueryRule, SearchRequest, SearchResponse,
    SortOrder, SortRule,
};
