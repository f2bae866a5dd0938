//! Pure logic behind the generic list, detail and form views.
//!
//! Nothing here touches the network or the DOM, so the backend, the frontend
//! and tests all share one implementation.

pub mod detail;
pub mod error;
pub mod form;
pub mod list_query;

pub use detail::{humanize, BadgeTone, DetailModel, DetailRow, DisplayValue};
pub use error::{EntityError, ErrorBody, ValidationErrors};
pub use form::{FormMode, FormModel, FormPhase, SubmitBlocked, Submission};
pub use list_query::{filter_options, FilterOption, ListOutcome, ListQuery};
