use clap::Parser;
use roblox_game_list::{
    api::{Bootstrap, BootstrapSource},
    cli::{Cli, Commands},
    config::Config,
    games::{GameDetails, GameManager, LoadOrigin},
    storage::{FileStorage, STORAGE_KEY},
    Result,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::debug!("Configuration loaded");

    let storage = FileStorage::new(&config.data_dir)?;

    let bootstrap = match (&config.bootstrap_source, cli.offline) {
        (Some(source), false) => Some(Bootstrap::new(
            BootstrapSource::parse(source),
            Duration::from_secs(config.bootstrap_timeout_secs),
        )?),
        _ => None,
    };

    let mut manager = GameManager::initialize(storage, bootstrap.as_ref()).await;

    // Launch GUI by default if no command is specified
    let Some(command) = cli.command else {
        run_gui(manager, &config);
        return Ok(());
    };

    match command {
        Commands::Gui => run_gui(manager, &config),

        Commands::List { search } => {
            let view = manager.view();
            let rows = view.matching(search.as_deref().unwrap_or(""));

            if rows.is_empty() {
                println!("No games found");
            } else {
                println!("Games ({} of {}):", rows.len(), view.count);
                println!("===========");
                for row in rows {
                    println!("  {} - {} (added {})", row.id, row.name, row.added);
                    if let Some(details) = &row.details {
                        println!("    {}", details);
                    }
                }
            }
        }

        Commands::Add {
            id,
            name,
            players,
            genre,
        } => {
            let details = GameDetails { players, genre };
            match manager.add_detailed(&id, &name, details) {
                Ok(game) => println!("✓ Game \"{}\" added", game.name),
                Err(e) => {
                    eprintln!("Failed to add game: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Delete { id } => {
            let Some(game_id) = manager.resolve_id(&id) else {
                eprintln!("Error: Game id must not be empty");
                std::process::exit(1);
            };

            match manager.delete(&game_id) {
                Ok(Some(game)) => println!("✓ Game \"{}\" deleted", game.name),
                Ok(None) => println!("No game with id {}", game_id),
                Err(e) => {
                    eprintln!("Failed to delete game: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Export { path } => {
            let path = path.unwrap_or_else(|| config.export_dir());
            match manager.export_to_file(&path) {
                Ok(written) => println!("✓ Exported {} game(s) to {:?}", manager.len(), written),
                Err(e) => {
                    eprintln!("Failed to export games: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Import { path } => match manager.import_from_file(&path) {
            Ok(summary) => println!(
                "✓ Imported {} game(s), skipped {} duplicate(s)",
                summary.added, summary.skipped
            ),
            Err(e) => {
                eprintln!("Failed to import games: {}", e);
                std::process::exit(1);
            }
        },

        Commands::Code { output } => {
            let code = manager.generate_lookup_code();
            match output {
                Some(path) => {
                    std::fs::write(&path, &code)?;
                    println!("✓ Lookup code written to {:?}", path);
                }
                None => println!("{}", code),
            }
        }

        Commands::Clear { yes } => {
            if !yes {
                eprintln!("Error: Refusing to clear {} game(s) without --yes", manager.len());
                std::process::exit(1);
            }
            manager.clear()?;
            println!("✓ Game list cleared");
        }

        Commands::Status => {
            println!("Roblox Game List Status");
            println!("=======================");
            println!();
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!("Games: {}", manager.len());
            println!(
                "Loaded from: {}",
                match manager.origin() {
                    LoadOrigin::Bootstrap => "bootstrap document",
                    LoadOrigin::Storage => "storage",
                }
            );
            println!();
            println!("Configuration:");
            println!("  Data Directory: {:?}", config.data_dir);
            println!("  Export Directory: {:?}", config.export_dir());
            println!(
                "  Bootstrap Source: {}",
                config.bootstrap_source.as_deref().unwrap_or("(none)")
            );
            println!("  Bootstrap Timeout: {}s", config.bootstrap_timeout_secs);
            println!("  Log Level: {}", config.log_level);
            println!();

            if let Ok(config_path) = Config::config_path() {
                println!("Config Path: {:?}", config_path);
            }
            println!("Storage File: {:?}", manager.storage().item_path(STORAGE_KEY));
        }
    }

    Ok(())
}

fn run_gui(manager: GameManager<FileStorage>, config: &Config) {
    use roblox_game_list::gui::GameListApp;

    let export_dir = config.export_dir();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Roblox Game List"),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "Roblox Game List",
        native_options,
        Box::new(move |cc| Ok(Box::new(GameListApp::new(cc, manager, export_dir)))),
    ) {
        eprintln!("Failed to run GUI: {}", e);
        std::process::exit(1);
    }
}
