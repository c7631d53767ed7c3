pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tribune")]
#[command(about = "A terminal reader for the Girondins4Ever feeds", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (the default when no command is given)
    Tui,
    /// Print a feed's current titles and exit
    List {
        /// Feed identifier; "articles" selects the articles feed, anything
        /// else means news
        #[arg(default_value = "news")]
        feed: String,
    },
}
