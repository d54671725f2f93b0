pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, SlotPolicy};
pub use error::TavernError;
pub use types::*;
