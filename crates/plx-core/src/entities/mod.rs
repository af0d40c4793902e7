mod history;
mod model;
mod project;
mod query;
mod scraped;
mod status;

pub use history::{HistoryItem, HistoryResponse};
pub use model::{Model, ModelsResponse};
pub use project::{ProjectCreateInput, ProjectCreateResponse, ProjectInfo, ProjectsResponse};
pub use query::{DebateSummary, Evidence, QueryInput, QueryResponse};
pub use scraped::{ScrapedDataResponse, ScrapedFile};
pub use status::ProjectStatus;

/// Variant key for the first knowledge base.
pub const VARIANT_A: &str = "variant_a";
/// Variant key for the second knowledge base.
pub const VARIANT_B: &str = "variant_b";
