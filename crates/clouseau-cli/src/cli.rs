use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser, Debug)]
#[clap(
    name = "clou",
    author,
    version,
    about = "Clouseau CLI - LLM Interaction Inspector",
    disable_version_flag = true,
    after_help = "Examples:\n  $ clou chat\n  $ clou session list\n  $ clou search \"query\""
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Option<Commands>,

    #[clap(
        long,
        id = "api-url",
        env = "CLOUSEAU_API_URL",
        global = true,
        help = "Base URL of the Clouseau API server. [default: http://localhost:8000]"
    )]
    pub api_url: Option<String>,

    #[clap(
        long,
        id = "config-file",
        env = "CLOUSEAU_CONFIG_FILE",
        global = true,
        help = "Path to the config file."
    )]
    pub config_file: Option<String>,

    #[clap(
        long,
        id = "context-window",
        global = true,
        help = "Context window size in tokens, used for the context usage indicator."
    )]
    pub context_window: Option<String>,

    #[clap(
        long,
        id = "theme",
        global = true,
        value_parser = ["auto", "light", "dark"],
        help = "Color theme of the viewer."
    )]
    pub theme: Option<String>,

    #[clap(long, global = true, default_value = "info")]
    pub log_level: String,

    #[clap(short = 'v', long = "version", action = clap::ArgAction::Version, help = "Show version")]
    pub version: Option<bool>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive viewer
    Chat {
        /// Session to open on start
        #[clap(id = "session-id")]
        session_id: Option<String>,
    },
    /// Manage sessions
    Session {
        #[clap(value_enum)]
        action: SessionAction,

        #[clap(id = "session-id")]
        session_id: Option<String>,

        /// Skip the confirmation prompt of `delete`
        #[clap(long, short)]
        yes: bool,
    },
    /// Search sessions by name or description
    Search { query: String },
    /// Manage configuration
    Config {
        #[clap(value_enum)]
        action: ConfigAction,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionAction {
    List,
    Show,
    Delete,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    Show,
    Edit,
    Reset,
}
