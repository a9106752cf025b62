use clap::{Args, Parser, Subcommand, ValueEnum};
use todo_core::TaskFilter;

#[derive(Parser)]
#[command(name = "todo", about = "My Todo List, saved in a local slot database", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// SQLite file holding the task snapshot (overrides TODO_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Slot key for the task snapshot (overrides TODO_SLOT_KEY)
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// Absolute directory for rolling log files (overrides TODO_LOG_DIR)
    #[arg(long = "log-dir", global = true)]
    pub log_dir: Option<String>,

    /// trace|debug|info|warn|error (overrides TODO_LOG_LEVEL)
    #[arg(long = "log-level", global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(TextArgs),
    /// List tasks in insertion order
    List(ListArgs),
    /// Toggle a task between active and completed
    Toggle(IdArgs),
    /// Replace a task's text
    Edit(EditArgs),
    /// Delete a task
    Delete(IdArgs),
    /// Show completed/total counts
    Summary,
    /// Print the core version
    Version,
}

#[derive(Args)]
pub struct TextArgs {
    /// Task text (joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct IdArgs {
    /// Task id
    pub id: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task id
    pub id: String,
    /// Replacement text (joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Which tasks to show
    #[arg(long, value_enum, default_value_t = FilterArg::All)]
    pub filter: FilterArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Active,
    Completed,
}

impl From<FilterArg> for TaskFilter {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::All => TaskFilter::All,
            FilterArg::Active => TaskFilter::Active,
            FilterArg::Completed => TaskFilter::Completed,
        }
    }
}
