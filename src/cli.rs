use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "iem-reco")]
#[command(about = "IEM recommendations from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask the backend for recommendations
    Recommend {
        /// Budget range (see `iem-reco options`)
        #[arg(short, long)]
        budget: Option<String>,

        /// Favourite genre
        #[arg(short, long)]
        genre: Option<String>,

        /// Preferred sound character
        #[arg(short, long)]
        sound_character: Option<String>,

        /// Backend origin (overrides config and IEM_RECO_SERVER)
        #[arg(long)]
        server: Option<String>,

        /// Print the raw response envelope as JSON
        #[arg(long)]
        json: bool,

        /// Never prompt for missing fields
        #[arg(long)]
        no_input: bool,
    },

    /// List accepted values for each field
    Options,

    /// Show or edit settings
    Config {
        /// Set the backend origin
        #[arg(long)]
        set_server: Option<String>,

        /// Show settings
        #[arg(long)]
        show: bool,
    },
}
