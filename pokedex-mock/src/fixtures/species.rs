use serde_json::{Value, json};

use super::{chain_url, lang, species_url};

/// `(species id, chain id, [(language, flavor text)])`
const SPECIES: &[(u32, u32, &[(&str, &str)])] = &[
    (1, 1, &[("en", "A strange seed was planted on its back at birth."), ("es", "Una rara semilla le fue plantada en el lomo al nacer.")]),
    (2, 1, &[("es", "Cuando le crece bastante el bulbo del lomo, pierde la capacidad de erguirse."), ("en", "When the bulb on its back grows large, it appears to lose the ability to stand.")]),
    (3, 1, &[("es", "La planta florece cuando absorbe energía solar."), ("en", "The plant blooms when it is absorbing solar energy.")]),
    (132, 66, &[("en", "It can freely recombine its own cellular structure.")]),
    (133, 67, &[("es", "Su código genético es irregular."), ("en", "Its genetic code is irregular.")]),
    (134, 67, &[("es", "Vive cerca del agua."), ("en", "Lives close to water.")]),
    (135, 67, &[("es", "Acumula iones negativos en la atmósfera."), ("en", "It accumulates negative ions in the atmosphere.")]),
    (136, 67, &[("es", "Almacena calor en su cuerpo."), ("en", "It stores heat in its body.")]),
    (265, 135, &[("es", "Vive entre la hierba y en bosques."), ("en", "It lives amid tall grass and in forests.")]),
    (266, 135, &[("es", "Espera la evolución envuelto en seda."), ("en", "It waits for evolution wrapped in silk.")]),
    (267, 135, &[("es", "Sus alas son preciosas."), ("en", "Its colorful wings are beautiful.")]),
    (268, 135, &[("es", "No olvida el dolor que sufrió."), ("en", "It never forgets any attack it endured.")]),
    (269, 135, &[("es", "Esparce un polvo tóxico."), ("en", "It scatters toxic dust.")]),
];

pub(super) fn documents() -> Vec<(String, Value)> {
    SPECIES
        .iter()
        .map(|(id, chain, texts)| {
            let entries: Vec<Value> = texts
                .iter()
                .map(|(tag, text)| {
                    json!({ "flavor_text": text, "language": lang(tag), "version": { "name": "red" } })
                })
                .collect();
            (
                species_url(*id),
                json!({
                    "id": id,
                    "evolution_chain": { "url": chain_url(*chain) },
                    "flavor_text_entries": entries
                }),
            )
        })
        .collect()
}
