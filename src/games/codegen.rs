//! Lua lookup-table generation.

use super::record::{GameId, GameRecord};

const UNKNOWN_GAME: &str = "Unknown game";

/// Render the collection as a Lua table keyed by id plus two accessor functions.
///
/// Entries keep collection order and every entry but the last ends with a comma.
pub fn generate_lookup_code(games: &[GameRecord]) -> String {
    let mut code = String::from("-- Auto-generated code\n");
    code.push_str("local GamesDatabase = {\n");

    for (index, game) in games.iter().enumerate() {
        code.push_str(&format!(
            "    [{}] = {}",
            lua_key(&game.id),
            lua_string(&game.name)
        ));
        if index + 1 < games.len() {
            code.push(',');
        }
        code.push('\n');
    }

    code.push_str("}\n\n");
    code.push_str("function CheckGame(gameId)\n");
    code.push_str("    return GamesDatabase[gameId] ~= nil\n");
    code.push_str("end\n\n");
    code.push_str("function GetGameName(gameId)\n");
    code.push_str(&format!(
        "    return GamesDatabase[gameId] or {}\n",
        lua_string(UNKNOWN_GAME)
    ));
    code.push_str("end");

    code
}

fn lua_key(id: &GameId) -> String {
    match id {
        GameId::Number(n) => n.to_string(),
        GameId::Text(s) => lua_string(s),
        GameId::OtherNumber(n) => n.to_string(),
    }
}

fn lua_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
