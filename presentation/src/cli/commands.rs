//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

impl From<qna_domain::OutputFormat> for OutputFormat {
    fn from(format: qna_domain::OutputFormat) -> Self {
        match format {
            qna_domain::OutputFormat::Text => OutputFormat::Text,
            qna_domain::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for qna
#[derive(Parser, Debug)]
#[command(name = "qna")]
#[command(author, version, about = "Question-and-answer board")]
#[command(long_about = r#"
A question-and-answer board with owner-gated soft deletion.

Deleting a question requires that you wrote it and every live answer under
it. Nothing is physically removed: deleted content is flagged and a deletion
history record is kept for each item.

Configuration files are loaded from (in priority order):
1. QNA_* environment variables
2. --config <path>     Explicit config file
3. ./qna.toml          Project-level config
4. ~/.config/qna-board/config.toml   Global config

Example:
  qna user add javajigi secret "Jaesung Park" --email javajigi@slipp.net
  qna question ask --writer javajigi --title "How do lifetimes work?"
  qna question answer 1 --writer javajigi --contents "Read the book"
  qna question delete 1 --user javajigi
  qna history list
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage board members
    #[command(subcommand)]
    User(UserCommand),

    /// Ask, answer, inspect and delete questions
    #[command(subcommand)]
    Question(QuestionCommand),

    /// Inspect the deletion history
    #[command(subcommand)]
    History(HistoryCommand),
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Register a new user
    Add {
        /// Login id
        user_id: String,
        password: String,
        name: String,
        #[arg(long)]
        email: Option<String>,
    },

    /// Change a user's name and email
    Update(UpdateUserArgs),

    /// List registered users
    List,
}

#[derive(Args, Debug)]
pub struct UpdateUserArgs {
    /// Login id of the profile to change
    pub user_id: String,

    /// Login id of the acting user
    #[arg(long = "as", value_name = "USER_ID")]
    pub login_user: String,

    /// Current password of the profile
    #[arg(long)]
    pub password: String,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum QuestionCommand {
    /// Post a new question
    Ask {
        /// Login id of the writer
        #[arg(long)]
        writer: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        contents: String,
    },

    /// Answer a question
    Answer {
        question_id: i64,
        /// Login id of the writer
        #[arg(long)]
        writer: String,
        #[arg(long)]
        contents: String,
    },

    /// List live questions
    List,

    /// Show a question with its answers
    Show { question_id: i64 },

    /// Delete a question and its answers
    Delete {
        question_id: i64,
        /// Login id of the user performing the delete
        #[arg(long)]
        user: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// List deletion history records, oldest first
    List,
}
