use super::record::{GameId, GameRecord};

/// One display row of the game list
#[derive(Debug, Clone, PartialEq)]
pub struct GameRow {
    /// Key to hand back to the manager; `id` is only its display text
    pub game_id: GameId,
    pub id: String,
    pub name: String,
    pub added: String,
    pub details: Option<String>,
}

impl From<&GameRecord> for GameRow {
    fn from(game: &GameRecord) -> Self {
        let mut parts = Vec::new();
        if let Some(genre) = game.genre() {
            parts.push(format!("genre: {}", genre));
        }
        if let Some(players) = game.players() {
            parts.push(format!("players: {}", players));
        }

        Self {
            game_id: game.id.clone(),
            id: game.id.to_string(),
            name: game.name.clone(),
            added: game.added(),
            details: if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            },
        }
    }
}

/// Presentation-neutral snapshot of the collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameListView {
    pub rows: Vec<GameRow>,
    pub count: usize,
}

impl GameListView {
    pub fn new(games: &[GameRecord]) -> Self {
        Self {
            rows: games.iter().map(GameRow::from).collect(),
            count: games.len(),
        }
    }

    /// Rows whose name or id contains `query`, ignoring case. An empty query matches everything.
    pub fn matching(&self, query: &str) -> Vec<&GameRow> {
        let query = query.trim().to_lowercase();
        self.rows
            .iter()
            .filter(|row| {
                query.is_empty()
                    || row.name.to_lowercase().contains(&query)
                    || row.id.to_lowercase().contains(&query)
            })
            .collect()
    }
}
