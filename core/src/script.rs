//! The scripted demonstration: two dogs built and made to speak, in order.

use kennel_common::Result;
use kennel_common::animal::Dog;
use kennel_common::voice::Voice;
use tracing::info;

use crate::chorus::{Chorus, Speaker};

const CAST: &[(&str, &str)] = &[("Barkface", "Frenchie"), ("Flam", "Giggadoodle")];

/// One explanatory note printed by `kennel demo --explain`.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub title: &'static str,
    pub body: &'static str,
}

const WALKTHROUGH: &[Step] = &[
    Step {
        title: "Base first",
        body: "Dog::new builds an Animal with the name, then hands it to Dog::extend. \
               A breed can only be attached to an Animal that already exists.",
    },
    Step {
        title: "One capability",
        body: "Animal and Dog each implement Speak. Callers only need a &dyn Speak, \
               whichever creature sits behind it.",
    },
    Step {
        title: "Replace, don't combine",
        body: "Dog's phrase never calls Animal's. Speaking through a Dog always barks, \
               even when it is held as a generic speaker.",
    },
];

pub fn walkthrough() -> &'static [Step] {
    WALKTHROUGH
}

/// The dogs of the demo, in speaking order.
pub fn cast() -> Chorus {
    let mut chorus = Chorus::new();
    chorus.extend(
        CAST.iter()
            .map(|(name, breed)| Box::new(Dog::new(*name, *breed)) as Speaker),
    );
    chorus
}

pub fn run(voice: &mut dyn Voice) -> Result<usize> {
    let chorus = cast();
    info!(members = chorus.len(), "running scripted demo");
    chorus.perform(voice)
}
