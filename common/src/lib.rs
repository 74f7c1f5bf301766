pub mod animal;
pub mod config;
pub mod creature;
pub mod error;
pub mod voice;

pub use error::{KennelError, Result};
