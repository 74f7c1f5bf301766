pub mod demo;
pub mod info;
pub mod speak;

use clap::{ArgAction, Parser, Subcommand};
use kennel_common::creature::Creature;

#[derive(Parser)]
#[command(name = "kennel")]
#[command(about = "Animals, dogs, and who gets to bark.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Hide decoration; repeat to hide more (-qq)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the scripted demo: two dogs introduce themselves
    #[command(alias = "d")]
    Demo {
        /// Print notes on how the hierarchy works before running
        #[arg(long)]
        explain: bool,
    },
    /// Summon creatures and make them speak, in order
    ///
    /// Each creature is `NAME`, `animal:NAME`, `dog:NAME:BREED` or `dog:NAME`.
    #[command(alias = "s")]
    Speak {
        #[arg(required = true)]
        creatures: Vec<Creature>,
    },
    /// List the known species and how each one speaks
    #[command(alias = "i")]
    Info,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_speak() {
        let cli = CommandLine::try_parse_from(["kennel", "s", "Generic", "dog:Flam:Giggadoodle"])
            .unwrap();
        match cli.command {
            Commands::Speak { creatures } => assert_eq!(
                creatures,
                vec![
                    Creature::Animal { name: "Generic".to_string() },
                    Creature::Dog {
                        name: "Flam".to_string(),
                        breed: "Giggadoodle".to_string(),
                    },
                ]
            ),
            _ => panic!("expected speak command"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = CommandLine::try_parse_from(["kennel", "demo", "--explain", "-qq", "--no-color"])
            .unwrap();
        assert_eq!(cli.quiet, 2);
        assert!(cli.no_color);
        assert!(!cli.no_banner);
        assert!(matches!(cli.command, Commands::Demo { explain: true }));
    }

    #[test]
    fn test_reject_unknown_species() {
        assert!(CommandLine::try_parse_from(["kennel", "speak", "cat:Tom"]).is_err());
    }

    #[test]
    fn test_speak_requires_creature() {
        assert!(CommandLine::try_parse_from(["kennel", "speak"]).is_err());
    }
}
