pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{Result, SplitError};
pub use models::{Assignment, Diner, Item};
pub use state::{BillState, Mutation};
