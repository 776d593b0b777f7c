#![allow(dead_code)]

use articula_consult::Catalog;
use serde_json::{Value, json};

/// A small dataset with the quirks seen in the published file: padding, sentinels,
/// a duplicated four-tuple and a record with an empty program.
#[must_use]
pub fn dataset() -> Value {
    json!([
        {
            "region": "Zona Este",
            "departamento": "Maipú",
            "escuela": "Escuela N°1",
            "orientacion": "Electrónica",
            "resultado": {
                "ies": "IES 9-012",
                "tecnicatura": "Tecnicatura en Electrónica",
                "direccion": "Calle Falsa 123",
                "web": "https://ies.example",
                "color": "text-yellow-500",
                "icono": "Cpu"
            }
        },
        {
            "region": "Zona Este",
            "departamento": "Maipú",
            "escuela": "Escuela N°1",
            "orientacion": "Informática",
            "resultado": { "ies": "IES 9-012", "tecnicatura": "Tecnicatura en Desarrollo de Software", "icono": "Code" }
        },
        {
            "region": "Zona Este",
            "departamento": "Maipú",
            "escuela": "Escuela N°1",
            "orientacion": "Informática",
            "resultado": { "ies": "IES 9-015", "tecnicatura": "Tecnicatura en Redes", "web": "N/D" }
        },
        {
            "region": " Zona Este ",
            "departamento": "Junín",
            "escuela": "Escuela N°7",
            "orientacion": "Enología",
            "resultado": { "ies": "IES 9-018", "tecnicatura": "Tecnicatura en Enología", "icono": "Wine" }
        },
        {
            "region": "Zona Sur",
            "departamento": "San Rafael",
            "escuela": "Escuela N°4",
            "orientacion": "Química",
            "resultado": { "ies": "IES 9-011", "tecnicatura": "" }
        },
        {
            "region": "Zona Norte",
            "departamento": "Las Heras",
            "escuela": "N/D",
            "orientacion": "Construcciones",
            "resultado": { "ies": "IES 9-020", "tecnicatura": "Tecnicatura en Obras" }
        },
        {
            "region": "Zona Centro",
            "departamento": "Capital",
            "escuela": "Escuela N°9",
            "orientacion": "Minería",
            "resultado": { "ies": "IES 9-001", "tecnicatura": "Tecnicatura en Minería", "icono": "Pickaxe" }
        }
    ])
}

/// # Panics
/// * If the fixture dataset stops being a valid array.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::build(&dataset()).expect("fixture dataset must load")
}
