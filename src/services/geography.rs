// ============================================================================
// GEOGRAPHY - Dataset estático de estados y ciudades (India)
// ============================================================================
// Consultas síncronas sobre un JSON empaquetado en el binario
// ============================================================================

use crate::models::{CountryDataset, LocationOption, StateRecord};

const DATASET_JSON: &str = include_str!("../../assets/geography/in.json");

lazy_static::lazy_static! {
    static ref DATASET: CountryDataset = load_dataset();
}

fn load_dataset() -> CountryDataset {
    match serde_json::from_str::<CountryDataset>(DATASET_JSON) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("❌ [GEO] Dataset de geografía inválido: {}", e);
            CountryDataset {
                country: "IN".to_string(),
                states: Vec::new(),
            }
        }
    }
}

/// Estados disponibles para el selector
pub fn states() -> Vec<LocationOption> {
    DATASET
        .states
        .iter()
        .map(|s| LocationOption {
            name: s.name.clone(),
            iso_code: s.iso_code.clone(),
        })
        .collect()
}

fn find_state(predicate: impl Fn(&StateRecord) -> bool) -> Option<&'static StateRecord> {
    DATASET.states.iter().find(|s| predicate(s))
}

/// Ciudades de un estado por código ISO (vacío si no existe)
pub fn cities_of_state(iso_code: &str) -> Vec<String> {
    find_state(|s| s.iso_code == iso_code)
        .map(|s| s.cities.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_loads() {
        assert_eq!(DATASET.country, "IN");
        assert_eq!(states().len(), 36);
    }

    #[test]
    fn test_state_lookup_and_cities() {
        let state = states().into_iter().find(|s| s.name == "Maharashtra").unwrap();
        assert_eq!(state.iso_code, "MH");
        let cities = cities_of_state(&state.iso_code);
        assert!(cities.contains(&"Pune".to_string()));
        assert!(!cities.contains(&"Jaipur".to_string()));
    }

    #[test]
    fn test_unknown_state() {
        assert!(!states().iter().any(|s| s.name == "Atlantis"));
        assert!(cities_of_state("ZZ").is_empty());
    }

    #[test]
    fn test_iso_codes_are_unique() {
        let mut codes: Vec<String> = states().into_iter().map(|s| s.iso_code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 36);
    }
}
