mod commands;
mod terminal;

use commands::{CommandLine, Commands, demo, info, speak};
use kennel_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_banner: commands.no_banner,
        no_color: commands.no_color,
        quiet: commands.quiet,
    };

    logging::init_logging(&cfg);
    print::banner(&cfg);

    let result = match commands.command {
        Commands::Demo { explain } => demo::demo(explain, &cfg),
        Commands::Speak { creatures } => speak::speak(creatures, &cfg),
        Commands::Info => info::info(&cfg),
    };

    print::end_of_program(cfg.quiet);
    result
}
