use super::*;
use serde_json::json;

#[test]
fn city_state_country_composes_full_triple() {
    let address = json!({"city": "Indore", "state": "MP", "country": "India"});
    let resolved = compose_location(&address).unwrap();
    assert_eq!(resolved.city, "Indore");
    assert_eq!(resolved.full_location, "Indore, MP, India");
}

#[test]
fn country_only_yields_none() {
    let address = json!({"country": "India"});
    assert!(compose_location(&address).is_none());
}

#[test]
fn empty_address_yields_none() {
    assert!(compose_location(&json!({})).is_none());
}

#[test]
fn town_substitutes_for_city() {
    let address = json!({"town": "Mhow", "state": "Madhya Pradesh", "country": "India"});
    let resolved = compose_location(&address).unwrap();
    assert_eq!(resolved.city, "Mhow");
    assert_eq!(resolved.full_location, "Mhow, Madhya Pradesh, India");
}

#[test]
fn village_and_county_fallbacks_apply_in_order() {
    let village = json!({"village": "Kothi", "county": "Satna", "country": "India"});
    assert_eq!(compose_location(&village).unwrap().city, "Kothi");

    let county = json!({"county": "Satna", "country": "India"});
    assert_eq!(compose_location(&county).unwrap().city, "Satna");
}

#[test]
fn region_substitutes_for_state() {
    let address = json!({"city": "Bergamo", "region": "Lombardy", "country": "Italy"});
    assert_eq!(compose_location(&address).unwrap().full_location, "Bergamo, Lombardy, Italy");
}

#[test]
fn missing_state_drops_middle_component() {
    let address = json!({"city": "Singapore", "country": "Singapore"});
    assert_eq!(compose_location(&address).unwrap().full_location, "Singapore, Singapore");
}

#[test]
fn missing_country_yields_bare_city() {
    let address = json!({"city": "Atlantis", "state": "Deep"});
    assert_eq!(compose_location(&address).unwrap().full_location, "Atlantis");
}

#[test]
fn empty_strings_are_treated_as_absent() {
    let address = json!({"city": "", "town": "Mhow", "country": "India"});
    assert_eq!(compose_location(&address).unwrap().city, "Mhow");
}
