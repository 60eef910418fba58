use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use sealnote_core::VERSION;

/// Sealnote - single-file, password-encrypted notes
#[derive(Parser)]
#[command(name = "sealnote")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "SEALNOTE_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_input: bool,
}

/// A note file argument.
#[derive(Args)]
pub struct NoteArgs {
    /// Path to the note file
    #[arg(value_name = "PATH")]
    pub path: String,
}

/// Arguments for commands that set a password hint
#[derive(Args)]
pub struct HintedNoteArgs {
    /// Path to the note file
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Password hint, stored unencrypted (prompted when omitted)
    #[arg(long)]
    pub hint: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new encrypted note
    New(HintedNoteArgs),

    /// Decrypt a note and print its contents
    #[command(visible_alias = "cat")]
    Unlock(NoteArgs),

    /// Replace a note's contents with stdin
    Write(NoteArgs),

    /// Edit a note in your editor
    Edit(NoteArgs),

    /// Change a note's password and hint
    Passwd(HintedNoteArgs),

    /// Print a note's password hint
    Hint(NoteArgs),

    /// Show note file details
    Info(NoteArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
