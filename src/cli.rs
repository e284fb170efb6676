use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "knopka")]
#[command(author, version, about = "Telegram bot serving a hierarchical button menu", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (long polling)
    Run,

    /// Fetch the button tree from the backend and print it
    Tree {
        /// Print the nested tree as JSON instead of indented text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
