use serde_json::{Value, json};

use super::{chain_url, species_url};

fn link(id: u32, evolves_to: Vec<Value>) -> Value {
    json!({
        "is_baby": false,
        "species": { "name": id.to_string(), "url": species_url(id) },
        "evolution_details": [],
        "evolves_to": evolves_to
    })
}

fn chain(id: u32, root: Value) -> (String, Value) {
    (chain_url(id), json!({ "id": id, "baby_trigger_item": null, "chain": root }))
}

pub(super) fn documents() -> Vec<(String, Value)> {
    vec![
        chain(1, link(1, vec![link(2, vec![link(3, vec![])])])),
        chain(66, link(132, vec![])),
        chain(
            67,
            link(133, vec![link(134, vec![]), link(135, vec![]), link(136, vec![])]),
        ),
        chain(
            135,
            link(
                265,
                vec![
                    link(266, vec![link(267, vec![])]),
                    link(268, vec![link(269, vec![])]),
                ],
            ),
        ),
    ]
}
