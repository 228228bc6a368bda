pub mod consolidate;
pub mod delete;
pub mod ingest;
pub mod normalize;
pub mod submit;

pub use consolidate::{Consolidator, consolidate};
pub use delete::DeleteLogic;
pub use ingest::{IngestLogic, IngestReport};
pub use normalize::{NormalizeOptions, NormalizedRow, Rejection, RejectionReason, normalize};
pub use submit::SubmitLogic;
