use kennel_common::animal::{Animal, Dog, Speak};
use kennel_common::config::Config;

use crate::terminal::print;

pub fn info(cfg: &Config) -> anyhow::Result<()> {
    let species: [Box<dyn Speak>; 2] = [
        Box::new(Animal::new("<name>")),
        Box::new(Dog::new("<name>", "<breed>")),
    ];

    print::header("known species", cfg.quiet);

    let key_width = species.iter().map(|s| s.kind().len()).max().unwrap_or(0);
    for speaker in &species {
        print::aligned_line(speaker.kind(), &speaker.phrase(), key_width);
    }
    Ok(())
}
