use std::collections::HashMap;
use serde_json;
use tracing::warn;

pub const IRREGULAR_VERBS_JSON: &str = include_str!("../data/irregular_verbs.json");
pub const IRREGULAR_PLURALS_JSON: &str = include_str!("../data/irregular_plurals.json");

pub fn load_irregular_verbs() -> HashMap<String, String> {
    parse_table("irregular verb", IRREGULAR_VERBS_JSON)
}

pub fn load_irregular_plurals() -> HashMap<String, String> {
    parse_table("irregular plural", IRREGULAR_PLURALS_JSON)
}

fn parse_table(name: &str, data: &str) -> HashMap<String, String> {
    serde_json::from_str(data).unwrap_or_else(|e| {
        warn!("embedded {} table is malformed, using an empty table: {}", name, e);
        HashMap::new()
    })
}
