use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jrn")]
#[command(about = "Categorized, timestamped notes for the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a note to the journal
    #[command(alias = "a")]
    Add {
        /// Words of the note content
        content: Vec<String>,

        /// Category to file the note under
        #[arg(short, long, default_value = "General")]
        category: String,

        /// Display markup style to wrap the note in
        #[arg(short, long)]
        style: Option<String>,
    },

    /// Replace the text of a note (most recent if no id is given)
    Edit {
        /// Id of the note to edit
        id: Option<i64>,
    },

    /// List notes, most recent first
    #[command(alias = "ls")]
    List {
        /// How many notes to show
        quantity: Option<usize>,

        /// Show every note
        #[arg(short, long)]
        all: bool,

        /// Only notes in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Show the page oldest-first
        #[arg(short, long)]
        reverse: bool,
    },

    /// Delete notes by id or range (e.g. 3 5-7 :2 9:)
    #[command(alias = "rm")]
    Delete {
        /// Ids, spans (3-7), or open-ended bounds (:5, 9:)
        criteria: Vec<String>,
    },

    /// Delete every note in the journal
    Erase {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Copy the journal database into its backup directory
    Backup {
        /// Backup filename (default: timestamped)
        #[arg(short, long)]
        filename: Option<String>,
    },

    /// Overwrite the journal database with a backup
    Restore {
        /// Backup filename (default: newest backup)
        #[arg(short, long)]
        filename: Option<String>,
    },

    /// List notes whose content contains a term
    Search {
        /// Term to look for (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,

        /// Only notes in this category
        #[arg(short, long)]
        category: Option<String>,

        /// How many notes to consider
        #[arg(short, long)]
        quantity: Option<usize>,

        /// Consider every note
        #[arg(short, long)]
        all: bool,
    },

    /// List the categories in the journal
    Categories {
        /// Only categories containing this text
        filter: Option<String>,
    },

    /// Switch the active journal, creating it on first use
    Load {
        /// Journal name
        journal: String,
    },
}
