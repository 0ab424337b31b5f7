use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "recipe-box")]
#[command(version, about = "A small catalog of user-submitted recipes")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the SQLite database (overrides RECIPE_BOX_DB)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database and seed it with default recipes if it is empty
    Init,

    /// Serve the catalog over HTTP
    Serve {
        /// Address to bind (overrides RECIPE_BOX_ADDR and PORT)
        #[arg(long)]
        addr: Option<String>,
    },

    /// Print every stored recipe, newest id first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a recipe
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        #[arg(long)]
        description: String,

        /// Free-form preparation time, e.g. "20 min"
        #[arg(long)]
        prep_time: Option<String>,

        /// Number of servings
        #[arg(long)]
        servings: Option<String>,

        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a recipe by id
    Delete {
        /// Recipe id
        id: String,
    },

    /// Delete every recipe
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,

        /// Allow clearing when RECIPE_BOX_ENV=production
        #[arg(long)]
        force: bool,
    },
}
