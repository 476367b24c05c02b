use super::*;

#[test]
fn plain_kinds_become_the_place_entity() {
    assert_eq!(search_entity_type("restaurant"), "urn:entity:place");
    assert_eq!(search_entity_type("attraction"), "urn:entity:place");
    assert_eq!(search_entity_type(""), "urn:entity:place");
}

#[test]
fn urn_kinds_pass_through() {
    assert_eq!(search_entity_type("urn:entity:place"), "urn:entity:place");
    assert_eq!(search_entity_type("urn:entity:movie"), "urn:entity:movie");
}

#[test]
fn geocode_endpoint_embeds_coordinates() {
    assert_eq!(
        geocode_endpoint(22.7196, 75.8577),
        "/api/location/geocode?latitude=22.7196&longitude=75.8577"
    );
}

#[cfg(not(feature = "csr"))]
#[test]
fn run_search_errors_outside_the_browser() {
    use std::future::Future;
    use std::task::{Context, Poll, Waker};

    // The native stub fails at the parse stage, so the future resolves on
    // its first poll without an executor.
    let future = std::pin::pin!(run_search("vegan restaurants", "Indore"));
    let mut cx = Context::from_waker(Waker::noop());
    match future.poll(&mut cx) {
        Poll::Ready(result) => assert!(result.is_err()),
        Poll::Pending => panic!("native stub should resolve immediately"),
    }
}
