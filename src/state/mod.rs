mod bill;
mod extraction;

pub use bill::{BillState, Mutation};
pub use extraction::{load_extraction, ExtractedEntry, ExtractionResult};
