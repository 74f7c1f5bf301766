//! An ordered group of speakers.
//!
//! Members are stored as `Box<dyn Speak>`, so a [`Chorus`] mixes animals and
//! dogs freely and each one is dispatched to its own phrase.

use kennel_common::Result;
use kennel_common::animal::Speak;
use kennel_common::creature::Creature;
use kennel_common::voice::Voice;
use tracing::debug;

pub type Speaker = Box<dyn Speak + Send + Sync>;

#[derive(Default)]
pub struct Chorus {
    members: Vec<Speaker>,
}

impl Chorus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(members: Vec<Speaker>) -> Self {
        Self { members }
    }

    pub fn push(&mut self, speaker: Speaker) {
        self.members.push(speaker);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(dyn Speak + Send + Sync)> {
        self.members.iter().map(|m| m.as_ref())
    }

    /// Makes every member speak once, in insertion order.
    ///
    /// Returns the number of lines emitted. Stops at the first voice error.
    pub fn perform(&self, voice: &mut dyn Voice) -> Result<usize> {
        for (idx, member) in self.members.iter().enumerate() {
            debug!(idx, kind = member.kind(), "dispatching speak");
            member.speak(voice)?;
        }
        Ok(self.members.len())
    }
}

impl Extend<Speaker> for Chorus {
    fn extend<I: IntoIterator<Item = Speaker>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

impl FromIterator<Creature> for Chorus {
    fn from_iter<I: IntoIterator<Item = Creature>>(iter: I) -> Self {
        Self::with(iter.into_iter().map(Creature::summon).collect())
    }
}
