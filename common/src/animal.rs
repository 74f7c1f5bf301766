//! # Animal Hierarchy
//!
//! A base record ([`Animal`]) and a specialization ([`Dog`]) sharing the
//! [`Speak`] capability.
//!
//! * A `Dog` can only be built from a fully formed `Animal`
//!   (see [`Dog::extend`]), so the base state always exists before the
//!   breed is attached.
//! * Each type implements [`Speak`] on its own. `Dog`'s phrase replaces
//!   `Animal`'s, it never wraps it.

mod base;
mod dog;

pub use base::Animal;
pub use dog::Dog;

use tracing::trace;

use crate::error::Result;
use crate::voice::Voice;

pub trait Speak {
    /// Short name of the variant, used in logs and listings.
    fn kind(&self) -> &'static str;

    /// The line this speaker emits.
    fn phrase(&self) -> String;

    /// Emits [`Speak::phrase`] as a single line on `voice`.
    ///
    /// Takes `&self`: speaking never changes the speaker, so repeated calls
    /// produce the same line.
    fn speak(&self, voice: &mut dyn Voice) -> Result<()> {
        let line = self.phrase();
        trace!(kind = self.kind(), line = %line, "speaking");
        voice.say(&line)
    }
}
