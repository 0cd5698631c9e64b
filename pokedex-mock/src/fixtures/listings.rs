use serde_json::{Value, json};

use super::{BASE_URL, creature_ref};

/// Total reported by every fixture listing page.
pub const TOTAL_COUNT: u64 = 1302;

fn entry(name: &str, id: u32) -> Value {
    json!({ "name": name, "url": creature_ref(id) })
}

fn page(offset: u64, limit: u32, results: Vec<Value>) -> (String, Value) {
    let next = format!("{BASE_URL}?offset={}&limit={limit}", offset + u64::from(limit));
    (
        format!("{BASE_URL}?offset={offset}&limit={limit}"),
        json!({ "count": TOTAL_COUNT, "next": next, "previous": null, "results": results }),
    )
}

pub(super) fn documents() -> Vec<(String, Value)> {
    vec![
        page(
            0,
            3,
            vec![entry("bulbasaur", 1), entry("ivysaur", 2), entry("venusaur", 3)],
        ),
        page(
            3,
            3,
            vec![
                Value::Null,
                json!({ "name": "missingno", "url": "" }),
                json!({ "name": "glitch" }),
            ],
        ),
        page(
            6,
            3,
            vec![
                entry("ditto", 132),
                json!({ "name": "missingno", "url": "" }),
                entry("eevee", 133),
            ],
        ),
    ]
}
