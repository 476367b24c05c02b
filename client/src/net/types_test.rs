use super::*;

#[test]
fn chat_message_constructors_set_roles() {
    assert_eq!(ChatMessage::user("hi").role, "user");
    assert_eq!(ChatMessage::assistant("hello").role, "assistant");
}

#[test]
fn parsed_query_reads_the_type_field() {
    let parsed: ParsedQuery =
        serde_json::from_str(r#"{"type": "restaurant", "query": "vegan restaurants", "popularity": 70}"#)
            .expect("valid parse payload");
    assert_eq!(parsed.kind, "restaurant");
    assert_eq!(parsed.query, "vegan restaurants");
    assert_eq!(parsed.popularity, 70);
}

#[test]
fn place_tolerates_sparse_entities() {
    let place: Place = serde_json::from_str(r#"{"name": "Rajwada Palace"}"#).expect("sparse entity");
    assert_eq!(place.name.as_deref(), Some("Rajwada Palace"));
    assert!(place.description.is_none());
    assert!(place.categories.is_empty());
    assert!(place.location.is_none());
}

#[test]
fn geocoded_location_reads_camel_case() {
    let loc: GeocodedLocation =
        serde_json::from_str(r#"{"city": "Indore", "fullLocation": "Indore, Madhya Pradesh, India"}"#)
            .expect("geocode payload");
    assert_eq!(loc.city.as_deref(), Some("Indore"));
    assert_eq!(loc.full_location.as_deref(), Some("Indore, Madhya Pradesh, India"));
}
