use kennel_common::config::Config;
use kennel_core::{StdoutVoice, script};

use crate::{mprint, terminal::print};

pub fn demo(explain: bool, cfg: &Config) -> anyhow::Result<()> {
    if explain {
        print::header("how it works", cfg.quiet);
        for (idx, step) in script::walkthrough().iter().enumerate() {
            print::tree_head(idx, step.title);
            print::print_status(step.body);
        }
        mprint!();
    }

    print::header("scripted demo", cfg.quiet);
    let spoken = script::run(&mut StdoutVoice)?;
    print::summary(spoken, cfg.quiet);
    Ok(())
}
