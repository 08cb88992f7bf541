use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Opaque game identifier.
///
/// Stored documents carry ids either as JSON numbers or as strings. All
/// forms compare by their canonical text, so `1` and `"1"` name the same game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameId {
    Number(i64),
    Text(String),
    /// Numbers outside `i64`: large unsigned ids and non-integers
    OtherNumber(Number),
}

impl GameId {
    /// Parse user input. Integers become numeric ids, anything else is kept as text.
    /// Returns `None` for blank input.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Ok(n) = trimmed.parse::<i64>() {
            return Some(GameId::Number(n));
        }
        if let Ok(n) = trimmed.parse::<u64>() {
            return Some(GameId::OtherNumber(Number::from(n)));
        }
        Some(GameId::Text(trimmed.to_string()))
    }

    fn key(&self) -> Cow<'_, str> {
        match self {
            GameId::Number(n) => Cow::Owned(n.to_string()),
            GameId::Text(s) => Cow::Borrowed(s.as_str()),
            GameId::OtherNumber(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl PartialEq for GameId {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for GameId {}

impl Hash for GameId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl From<i64> for GameId {
    fn from(n: i64) -> Self {
        GameId::Number(n)
    }
}

impl From<&str> for GameId {
    fn from(s: &str) -> Self {
        GameId::Text(s.to_string())
    }
}

/// Optional descriptive fields accepted on add
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameDetails {
    pub players: Option<u64>,
    pub genre: Option<String>,
}

/// A game entry. Only `id` and `name` are typed; everything else, `added`
/// included, is kept as raw JSON so any value round-trips untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub name: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl GameRecord {
    pub fn new(id: GameId, name: impl Into<String>, added: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("added".to_string(), Value::String(added.into()));

        Self {
            id,
            name: name.into(),
            fields,
        }
    }

    pub fn with_details(mut self, details: GameDetails) -> Self {
        if let Some(players) = details.players {
            self.fields.insert("players".to_string(), Value::from(players));
        }
        if let Some(genre) = details.genre {
            self.fields.insert("genre".to_string(), Value::String(genre));
        }
        self
    }

    /// Creation timestamp as text, empty when absent or null
    pub fn added(&self) -> String {
        self.field_text("added").unwrap_or_default()
    }

    pub fn players(&self) -> Option<String> {
        self.field_text("players")
    }

    pub fn genre(&self) -> Option<String> {
        self.field_text("genre")
    }

    /// Display text of a stored field. Strings are returned as-is, null counts as absent.
    pub fn field_text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
