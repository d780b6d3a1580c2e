use clap::Parser;

/// Print the latest daily quote for a `!stock <SYMBOL>` command.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Command to run, e.g. "!stock NVDA". Prompts on stdin when omitted.
    pub command: Option<String>,

    /// Keep reading commands from stdin, one per line, until EOF.
    #[arg(short, long, conflicts_with = "command")]
    pub interactive: bool,
}
