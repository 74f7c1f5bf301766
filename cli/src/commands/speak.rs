use kennel_common::{config::Config, creature::Creature};
use kennel_core::{Chorus, StdoutVoice};
use tracing::debug;

use crate::terminal::print;

pub fn speak(creatures: Vec<Creature>, cfg: &Config) -> anyhow::Result<()> {
    let chorus: Chorus = creatures.into_iter().collect();
    debug!(members = chorus.len(), "chorus assembled");

    print::header("speaking", cfg.quiet);
    let spoken = chorus.perform(&mut StdoutVoice)?;
    print::summary(spoken, cfg.quiet);
    Ok(())
}
