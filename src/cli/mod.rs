//! CLI module for dancefig
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dancefig - Chain dance steps into figures through shared positions
#[derive(Parser, Debug)]
#[command(name = "dancefig")]
#[command(version)]
#[command(about = "Chain dance steps into figures through shared positions and alternating halves")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Dance to work on (defaults to default_dance in config.json)
    #[arg(short, long, global = true)]
    pub dance: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create .dancefig in the current directory
    Init {
        /// Overwrite an existing config.json
        #[arg(long)]
        force: bool,
    },

    /// Browse the step catalog
    Steps {
        /// Only steps that start from this position
        #[arg(long)]
        from: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report steps that reference missing positions
    Validate {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the current sequence and what can come next
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Choose the start position (empties the sequence)
    Start {
        /// Position ID
        position: String,
    },

    /// Append a step to the sequence
    Add {
        /// Step ID
        step: String,
    },

    /// Remove the last step
    Undo,

    /// Empty the sequence, keeping the start position
    Clear,

    /// Manage saved figures
    Figures {
        #[command(subcommand)]
        command: FiguresCommand,
    },

    /// Print the sequence as shareable text
    Share,
}

#[derive(Subcommand, Debug)]
pub enum FiguresCommand {
    /// List saved figures, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Save the current sequence as a figure
    Save {
        /// Figure name (generated when omitted)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Replace the current sequence with a saved figure
    Load {
        /// Figure ID
        id: String,
    },

    /// Delete a saved figure
    Delete {
        /// Figure ID
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_dance() {
        let cli = Cli::parse_from(["dancefig", "--dance", "bachata", "add", "b1"]);
        assert_eq!(cli.dance.as_deref(), Some("bachata"));
        assert!(matches!(cli.command, Some(Commands::Add { ref step }) if step == "b1"));
    }

    #[test]
    fn test_parse_figures_save() {
        let cli = Cli::parse_from(["dancefig", "figures", "save", "--name", "Loop", "-d", "salsa_la"]);
        assert_eq!(cli.dance.as_deref(), Some("salsa_la"));
        match cli.command {
            Some(Commands::Figures {
                command: FiguresCommand::Save { name },
            }) => assert_eq!(name.as_deref(), Some("Loop")),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
