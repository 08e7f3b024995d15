//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "photonotes")]
#[command(about = "Photo notes: pictures with a title and a description", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new photo notes collection
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List notes, newest first
    List {
        /// Show at most this many notes
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Create a note from an image
    Create {
        /// Note title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Note description
        #[arg(short, long, default_value = "")]
        description: String,

        #[command(flatten)]
        image: ImageArgs,
    },

    /// Show one note in detail
    Show {
        /// Note id as shown by `list`
        id: String,
    },

    /// Change the title, description or image of a note
    Edit {
        /// Note id as shown by `list`
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        #[command(flatten)]
        image: ImageArgs,
    },

    /// Delete a note
    Delete {
        /// Note id as shown by `list`
        id: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

/// Where the note's image comes from
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct ImageArgs {
    /// Image file to import into the collection
    #[arg(short, long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Image reference (URL or path) stored as-is
    #[arg(long, value_name = "URI")]
    pub image_uri: Option<String>,
}
