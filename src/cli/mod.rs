use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roblox-game-list")]
#[command(author, version, about = "Keep a personal list of Roblox games and generate lookup code for it", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip the bootstrap document and use stored games only
    #[arg(long, global = true)]
    pub offline: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List stored games
    List {
        /// Only show games whose name or id contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add a game
    Add {
        /// Game id (place id)
        id: String,

        /// Display name
        name: String,

        /// Player count
        #[arg(short, long)]
        players: Option<u64>,

        /// Genre
        #[arg(short, long)]
        genre: Option<String>,
    },

    /// Delete a game by id
    Delete {
        /// Id of the game to delete
        id: String,
    },

    /// Export the list as a JSON file
    Export {
        /// Output file or directory (defaults to the configured export directory)
        path: Option<PathBuf>,
    },

    /// Import games from a JSON file, skipping ids that already exist
    Import {
        /// JSON file containing an array of games
        path: PathBuf,
    },

    /// Print Lua lookup code for the list
    Code {
        /// Write the code to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove every stored game
    Clear {
        /// Confirm clearing the list
        #[arg(long)]
        yes: bool,
    },

    /// Show status and configuration
    Status,

    /// Launch the GUI
    Gui,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_details() {
        let cli = Cli::parse_from([
            "roblox-game-list",
            "add",
            "920587237",
            "Adopt Me!",
            "--genre",
            "Roleplay",
        ]);
        match cli.command {
            Some(Commands::Add { id, name, genre, players }) => {
                assert_eq!(id, "920587237");
                assert_eq!(name, "Adopt Me!");
                assert_eq!(genre.as_deref(), Some("Roleplay"));
                assert_eq!(players, None);
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_no_command_means_gui() {
        let cli = Cli::parse_from(["roblox-game-list", "--offline"]);
        assert!(cli.command.is_none());
        assert!(cli.offline);
    }
}
