mod compile;
pub use compile::CompileCommand;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tablesmith")]
#[command(about = "Compile domain models into a PostgreSQL schema")]
#[command(version)]
pub struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Compile a registry directory into one SQL file per table
    Compile(CompileCommand),
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Compile(cmd) => cmd.run(),
        }
    }
}
