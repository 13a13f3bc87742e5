use serde::{Deserialize, Serialize};

/// Opción de ubicación (estado) del selector
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct LocationOption {
    pub name: String,
    #[serde(rename = "isoCode")]
    pub iso_code: String,
}

/// Estado con sus ciudades tal como viene en el dataset empaquetado
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StateRecord {
    pub name: String,
    #[serde(rename = "isoCode")]
    pub iso_code: String,
    pub cities: Vec<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CountryDataset {
    pub country: String,
    pub states: Vec<StateRecord>,
}
