//! HTTP service handles for Biobank Catalogue Studio.
//!
//! Two explicitly constructed clients, injected into the application at
//! startup rather than living as process-wide singletons:
//!
//! - [`ResourceClient`]: the v1 REST API: dataset listing and dataset
//!   metadata resolution (with the protocol reference expanded)
//! - [`SearchClient`]: the search backend: structured queries and the
//!   best-effort suggestion fetch
//!
//! All calls are async and non-blocking; cancellation is the caller's
//! concern (results for superseded requests are simply ignored upstream).

pub mod error;
pub mod resource;
pub mod search;

pub use error::{ApiError, Result};
pub use resource::ResourceClient;
pub use search::SearchClient;
