use roblox_game_list::{
    api::{Bootstrap, BootstrapSource},
    config::Config,
    games::{GameId, GameManager, GameRecord, ImportSummary, LoadOrigin, EXPORT_FILE_NAME},
    storage::{FileStorage, Storage, STORAGE_KEY},
    Error,
};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn stored_games(storage: &FileStorage) -> Vec<GameRecord> {
    let contents = storage.get_item(STORAGE_KEY).unwrap().unwrap();
    serde_json::from_str(&contents).unwrap()
}

/// Games survive a restart through file-backed storage
#[test]
fn test_games_persist_across_sessions() {
    let temp_dir = TempDir::new().unwrap();

    {
        let storage = FileStorage::new(temp_dir.path()).unwrap();
        let mut manager = GameManager::open(storage);
        manager.add("920587237", "Adopt Me!").unwrap();
        manager.add("2753915549", "Blox Fruits").unwrap();
        manager.delete(&GameId::Number(920587237)).unwrap();
    }

    let storage = FileStorage::new(temp_dir.path()).unwrap();
    let manager = GameManager::open(storage);
    assert_eq!(manager.len(), 1);
    assert_eq!(manager.games()[0].name, "Blox Fruits");
    assert!(temp_dir.path().join("robloxGames.json").exists());
}

/// Storage always mirrors the in-memory collection after a mutation
#[test]
fn test_storage_mirrors_every_mutation() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = GameManager::open(FileStorage::new(temp_dir.path()).unwrap());

    manager.add("1", "A").unwrap();
    assert_eq!(stored_games(manager.storage()), manager.games());

    manager.add("2", "B").unwrap();
    manager.add("3", "C").unwrap();
    manager.delete(&GameId::Number(1)).unwrap();
    assert_eq!(stored_games(manager.storage()), manager.games());

    manager
        .import_from_document(r#"[{"id": 4, "name": "D", "added": ""}]"#)
        .unwrap();
    assert_eq!(stored_games(manager.storage()), manager.games());
}

/// Export to a directory uses the canonical file name and re-imports as all duplicates
#[test]
fn test_export_import_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = GameManager::open(FileStorage::new(temp_dir.path().join("data")).unwrap());
    manager.add("1", "A").unwrap();
    manager.add("two", "B").unwrap();

    let export_dir = temp_dir.path().join("exports");
    fs::create_dir_all(&export_dir).unwrap();
    let written = manager.export_to_file(&export_dir).unwrap();
    assert_eq!(written, export_dir.join(EXPORT_FILE_NAME));

    let contents = fs::read_to_string(&written).unwrap();
    assert!(contents.starts_with("[\n  {"));

    let summary = manager.import_from_file(&written).unwrap();
    assert_eq!(summary, ImportSummary { added: 0, skipped: 2 });

    // A fresh list picks up everything from the export
    let mut other = GameManager::open(FileStorage::new(temp_dir.path().join("other")).unwrap());
    let summary = other.import_from_file(&written).unwrap();
    assert_eq!(summary, ImportSummary { added: 2, skipped: 0 });
    assert_eq!(other.games(), manager.games());
}

#[test]
fn test_import_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.json");
    fs::write(&path, "[{\"id\": 1,").unwrap();

    let mut manager = GameManager::open(FileStorage::new(temp_dir.path()).unwrap());
    manager.add("9", "Nine").unwrap();

    assert!(matches!(manager.import_from_file(&path), Err(Error::Import(_))));
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_corrupt_storage_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("robloxGames.json"), "{{{").unwrap();

    let mut manager = GameManager::open(FileStorage::new(temp_dir.path()).unwrap());
    assert!(manager.is_empty());

    // The next mutation overwrites the corrupt entry
    manager.add("1", "A").unwrap();
    assert_eq!(stored_games(manager.storage()).len(), 1);
}

/// A reachable bootstrap document replaces stored games and is persisted
#[tokio::test]
async fn test_initialize_from_bootstrap_document() {
    let temp_dir = TempDir::new().unwrap();
    let mut storage = FileStorage::new(temp_dir.path().join("data")).unwrap();
    storage
        .set_item(STORAGE_KEY, r#"[{"id": 99, "name": "Old", "added": ""}]"#)
        .unwrap();

    let bootstrap_path = temp_dir.path().join("games.json");
    fs::write(
        &bootstrap_path,
        r#"[{"id": 1, "name": "A", "added": "2024-01-01 00:00:00", "players": 0, "genre": "Obby"}]"#,
    )
    .unwrap();
    let bootstrap = Bootstrap::new(
        BootstrapSource::Local(bootstrap_path),
        Duration::from_secs(5),
    )
    .unwrap();

    let manager = GameManager::initialize(storage, Some(&bootstrap)).await;
    assert_eq!(manager.origin(), LoadOrigin::Bootstrap);
    assert_eq!(manager.len(), 1);
    assert!(!manager.exists(&GameId::Number(99)));
    assert_eq!(stored_games(manager.storage()), manager.games());
}

/// An unreachable bootstrap document falls back to storage
#[tokio::test]
async fn test_initialize_falls_back_to_storage() {
    let temp_dir = TempDir::new().unwrap();
    let mut storage = FileStorage::new(temp_dir.path()).unwrap();
    storage
        .set_item(STORAGE_KEY, r#"[{"id": 5, "name": "Stored", "added": ""}]"#)
        .unwrap();

    let bootstrap = Bootstrap::new(
        BootstrapSource::parse("http://127.0.0.1:9/games.json"),
        Duration::from_secs(2),
    )
    .unwrap();

    let manager = GameManager::initialize(storage, Some(&bootstrap)).await;
    assert_eq!(manager.origin(), LoadOrigin::Storage);
    assert_eq!(manager.games()[0].name, "Stored");
}

/// A bootstrap server answering 404 leaves the stored games in place
#[tokio::test]
async fn test_initialize_falls_back_on_http_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        socket
            .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
    });

    let temp_dir = TempDir::new().unwrap();
    let mut storage = FileStorage::new(temp_dir.path()).unwrap();
    storage
        .set_item(STORAGE_KEY, r#"[{"id": 5, "name": "Stored", "added": ""}]"#)
        .unwrap();

    let bootstrap = Bootstrap::new(
        BootstrapSource::parse(&format!("http://{}/games.json", addr)),
        Duration::from_secs(5),
    )
    .unwrap();

    let manager = GameManager::initialize(storage, Some(&bootstrap)).await;
    assert_eq!(manager.origin(), LoadOrigin::Storage);
    assert_eq!(manager.len(), 1);
    assert_eq!(manager.games()[0].name, "Stored");
}

#[test]
fn test_lookup_code_follows_collection_order() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = GameManager::open(FileStorage::new(temp_dir.path()).unwrap());
    manager.add("2", "B").unwrap();
    manager.add("1", "A").unwrap();

    let code = manager.generate_lookup_code();
    assert!(code.contains("local GamesDatabase = {\n    [2] = \"B\",\n    [1] = \"A\"\n}"));
}

#[test]
fn test_config_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let config = Config {
        data_dir: temp_dir.path().join("data"),
        bootstrap_source: Some("https://example.com/games.json".to_string()),
        ..Config::default()
    };
    config.save_to(&config_path).unwrap();

    let loaded = Config::load_from(&config_path).unwrap();
    assert_eq!(loaded.data_dir, config.data_dir);
    assert_eq!(loaded.bootstrap_source, config.bootstrap_source);
}
