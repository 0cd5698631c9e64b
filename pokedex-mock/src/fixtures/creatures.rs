use serde_json::{Value, json};

use super::localized::{ability_name, type_name};
use super::{BASE_URL, ability_url, species_url, type_url};

const SPRITES: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

struct Creature {
    id: u32,
    name: &'static str,
    weight: u32,
    height: u32,
    front: bool,
    dream: bool,
    types: &'static [u32],
    abilities: &'static [u32],
}

const CREATURES: &[Creature] = &[
    Creature { id: 1, name: "bulbasaur", weight: 69, height: 7, front: true, dream: true, types: &[12, 4], abilities: &[65, 34] },
    Creature { id: 2, name: "ivysaur", weight: 130, height: 10, front: true, dream: true, types: &[12, 4], abilities: &[65, 34] },
    Creature { id: 3, name: "venusaur", weight: 1000, height: 20, front: true, dream: false, types: &[12, 4], abilities: &[65, 34] },
    Creature { id: 132, name: "ditto", weight: 40, height: 3, front: false, dream: false, types: &[1], abilities: &[7] },
    Creature { id: 133, name: "eevee", weight: 65, height: 3, front: true, dream: true, types: &[1], abilities: &[50, 91] },
    Creature { id: 134, name: "vaporeon", weight: 290, height: 10, front: true, dream: true, types: &[11], abilities: &[11] },
    Creature { id: 135, name: "jolteon", weight: 245, height: 8, front: true, dream: true, types: &[13], abilities: &[10] },
    Creature { id: 136, name: "flareon", weight: 250, height: 9, front: true, dream: true, types: &[10], abilities: &[18] },
    Creature { id: 265, name: "wurmple", weight: 36, height: 3, front: true, dream: true, types: &[7], abilities: &[19] },
    Creature { id: 266, name: "silcoon", weight: 100, height: 6, front: true, dream: true, types: &[7], abilities: &[61] },
    Creature { id: 267, name: "beautifly", weight: 284, height: 10, front: true, dream: true, types: &[7], abilities: &[68] },
    Creature { id: 268, name: "cascoon", weight: 115, height: 7, front: true, dream: true, types: &[7], abilities: &[61] },
    Creature { id: 269, name: "dustox", weight: 316, height: 12, front: true, dream: true, types: &[7, 4], abilities: &[19] },
];

/// List image served for `id`.
#[must_use]
pub fn front_image(id: u32) -> String {
    format!("{SPRITES}/{id}.png")
}

/// Detail image served for `id`.
#[must_use]
pub fn dream_image(id: u32) -> String {
    format!("{SPRITES}/other/dream-world/{id}.svg")
}

fn document(c: &Creature) -> Value {
    let types: Vec<Value> = c
        .types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({ "slot": i + 1, "type": { "name": type_name(*t), "url": type_url(*t) } }))
        .collect();
    let abilities: Vec<Value> = c
        .abilities
        .iter()
        .enumerate()
        .map(|(i, a)| {
            json!({
                "slot": i + 1,
                "is_hidden": false,
                "ability": { "name": ability_name(*a), "url": ability_url(*a) }
            })
        })
        .collect();
    let dream = if c.dream {
        Value::String(dream_image(c.id))
    } else {
        Value::Null
    };
    let sprites = if c.front {
        json!({
            "front_default": front_image(c.id),
            "back_default": null,
            "other": {
                "dream_world": {
                    "front_default": dream
                }
            }
        })
    } else {
        json!({ "front_default": null, "other": { "dream_world": { "front_default": null } } })
    };
    json!({
        "id": c.id,
        "name": c.name,
        "weight": c.weight,
        "height": c.height,
        "sprites": sprites,
        "types": types,
        "abilities": abilities,
        "species": { "name": c.name, "url": species_url(c.id) }
    })
}

pub(super) fn documents() -> Vec<(String, Value)> {
    CREATURES
        .iter()
        .map(|c| (format!("{BASE_URL}/{}", c.id), document(c)))
        .collect()
}
