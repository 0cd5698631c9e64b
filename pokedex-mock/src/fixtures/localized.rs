use serde_json::{Value, json};

use super::{ability_url, lang, type_url};

/// `(id, name, [(language, localized name)])`
pub(super) const TYPES: &[(u32, &str, &[(&str, &str)])] = &[
    (1, "normal", &[("es", "Normal"), ("en", "Normal"), ("fr", "Normal")]),
    (4, "poison", &[("ja", "どく"), ("es", "Veneno"), ("en", "Poison")]),
    (7, "bug", &[("en", "Bug"), ("fr", "Insecte")]),
    (10, "fire", &[("es", "Fuego"), ("en", "Fire")]),
    (11, "water", &[("es", "Agua"), ("en", "Water")]),
    (12, "grass", &[("ja", "くさ"), ("es", "Planta"), ("en", "Grass"), ("fr", "Plante")]),
    (13, "electric", &[("es", "Eléctrico"), ("en", "Electric")]),
];

/// `(id, name, [(language, flavor text)])`
pub(super) const ABILITIES: &[(u32, &str, &[(&str, &str)])] = &[
    (
        7,
        "limber",
        &[
            ("es", ""),
            ("en", "Prevents paralysis."),
            ("es", "Evita la parálisis."),
        ],
    ),
    (10, "volt-absorb", &[("es", "Recupera PS si le alcanza un ataque eléctrico."), ("en", "Restores HP if hit by an Electric-type move.")]),
    (11, "water-absorb", &[("es", "Recupera PS si le alcanza un ataque de agua."), ("en", "Restores HP if hit by a Water-type move.")]),
    (18, "flash-fire", &[("es", "Potencia su poder si le alcanza un ataque de fuego."), ("en", "Powers up if hit by a Fire-type move.")]),
    (19, "shield-dust", &[("en", "Blocks the added effects of attacks taken.")]),
    (34, "chlorophyll", &[("es", "Sube la Velocidad con sol intenso."), ("en", "Boosts Speed in harsh sunlight.")]),
    (50, "run-away", &[("es", "Facilita la huida de Pokémon salvajes."), ("en", "Enables a sure getaway from wild Pokémon.")]),
    (61, "shed-skin", &[("es", "Puede curar sus problemas de estado."), ("en", "May heal its own status conditions.")]),
    (65, "overgrow", &[("es", "Potencia los ataques de tipo Planta en un apuro."), ("en", "Powers up Grass-type moves in a pinch.")]),
    (68, "swarm", &[("es", "Potencia los ataques de tipo Bicho en un apuro."), ("en", "Powers up Bug-type moves in a pinch.")]),
    (91, "adaptability", &[("es", "Potencia los ataques de su mismo tipo."), ("en", "Powers up moves of the same type.")]),
];

pub(super) fn type_name(id: u32) -> &'static str {
    TYPES
        .iter()
        .find(|(t, _, _)| *t == id)
        .map_or("unknown", |(_, name, _)| name)
}

pub(super) fn ability_name(id: u32) -> &'static str {
    ABILITIES
        .iter()
        .find(|(a, _, _)| *a == id)
        .map_or("unknown", |(_, name, _)| name)
}

pub(super) fn documents() -> Vec<(String, Value)> {
    let types = TYPES.iter().map(|(id, name, names)| {
        let names: Vec<Value> = names
            .iter()
            .map(|(tag, text)| json!({ "language": lang(tag), "name": text }))
            .collect();
        (type_url(*id), json!({ "id": id, "name": name, "names": names }))
    });
    let abilities = ABILITIES.iter().map(|(id, name, entries)| {
        let entries: Vec<Value> = entries
            .iter()
            .map(|(tag, text)| {
                json!({
                    "flavor_text": text,
                    "language": lang(tag),
                    "version_group": { "name": "sword-shield" }
                })
            })
            .collect();
        (
            ability_url(*id),
            json!({ "id": id, "name": name, "flavor_text_entries": entries }),
        )
    });
    types.chain(abilities).collect()
}
