use super::*;

#[test]
fn coordinates_round_to_two_places() {
    assert_eq!(format_coordinates(22.7196, 75.8577), "Lat: 22.72, Lng: 75.86");
    assert_eq!(format_coordinates(-33.8688, 151.2093), "Lat: -33.87, Lng: 151.21");
}

#[test]
fn place_keywords_trigger_search() {
    assert!(is_search_query("find me a good restaurant"));
    assert!(is_search_query("any rooftop BARS nearby?"));
    assert!(is_search_query("where can I eat tonight"));
    assert!(is_search_query("shopping malls around here"));
}

#[test]
fn conversation_stays_in_chat() {
    assert!(!is_search_query("tell me about the city's history"));
    assert!(!is_search_query("how is the weather in July?"));
    assert!(!is_search_query(""));
}

#[test]
fn short_transcripts_window_whole() {
    let turns = vec![1, 2, 3];
    assert_eq!(window_history(&turns), &[1, 2, 3]);
    assert_eq!(window_history::<i32>(&[]), &[] as &[i32]);
}

#[test]
fn long_transcripts_keep_the_tail() {
    let turns: Vec<i32> = (0..9).collect();
    assert_eq!(window_history(&turns), &[4, 5, 6, 7, 8]);
}

#[test]
fn popularity_becomes_a_fraction() {
    assert!((popularity_fraction(50) - 0.5).abs() < f64::EPSILON);
    assert!((popularity_fraction(1) - 0.01).abs() < f64::EPSILON);
    assert!((popularity_fraction(100) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn short_descriptions_pass_through() {
    assert_eq!(truncate_description("Historic palace", 150), "Historic palace");
}

#[test]
fn long_descriptions_are_trimmed_with_ellipsis() {
    let long = "x".repeat(200);
    let trimmed = truncate_description(&long, 150);
    assert_eq!(trimmed.chars().count(), 153);
    assert!(trimmed.ends_with("..."));
}

#[test]
fn truncation_respects_char_boundaries() {
    let text = "नमस्ते ".repeat(40);
    let trimmed = truncate_description(&text, 150);
    assert!(trimmed.ends_with("..."));
}
