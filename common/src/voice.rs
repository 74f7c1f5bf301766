//! # Output Channel
//!
//! A [`Voice`] is where a speaker emits its line. Concrete voices live in
//! `kennel-core`; this crate only holds the contract so the models can
//! depend on it.

use crate::error::Result;

pub trait Voice {
    /// Emits exactly one line. `line` carries no trailing newline.
    fn say(&mut self, line: &str) -> Result<()>;
}
