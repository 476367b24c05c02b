//! Browser geolocation wrapped as a single async call.
//!
//! DESIGN
//! ======
//! The Geolocation API is callback-based; this module bridges it to a
//! oneshot channel so pages can `await` a position. Accuracy is relaxed and
//! cached positions up to ten minutes old are accepted, trading precision
//! for fewer permission timeouts on city-scale lookups.

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::closure::Closure;

pub const UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported by this browser.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// User-facing message for a `PositionError` code.
#[must_use]
pub fn position_error_message(code: u16) -> &'static str {
    match code {
        1 => "Location access denied by user.",
        2 => "Location information is unavailable.",
        3 => "Location request timed out.",
        _ => "An unknown error occurred while getting location.",
    }
}

/// Resolve the device position once.
///
/// # Errors
///
/// Returns a user-facing message when geolocation is unsupported, denied,
/// unavailable, or times out.
#[cfg(feature = "csr")]
pub async fn current_position() -> Result<GeoPosition, String> {
    let window = web_sys::window().ok_or_else(|| UNSUPPORTED_MESSAGE.to_owned())?;
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|_| UNSUPPORTED_MESSAGE.to_owned())?;

    let (tx, rx) = futures::channel::oneshot::channel::<Result<GeoPosition, String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let tx_success = tx.clone();
    let on_success = Closure::once(move |position: web_sys::Position| {
        let coords = position.coords();
        if let Some(tx) = tx_success.borrow_mut().take() {
            let _ = tx.send(Ok(GeoPosition { latitude: coords.latitude(), longitude: coords.longitude() }));
        }
    });

    let on_error = Closure::once(move |error: web_sys::PositionError| {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(Err(position_error_message(error.code()).to_owned()));
        }
    });

    let options = web_sys::PositionOptions::new();
    options.set_enable_high_accuracy(false);
    options.set_timeout(15_000);
    options.set_maximum_age(600_000);

    geolocation
        .get_current_position_with_error_callback_and_options(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
            &options,
        )
        .map_err(|_| UNSUPPORTED_MESSAGE.to_owned())?;

    // The losing callback never fires; leaking both is the cost of handing
    // them to the browser.
    on_success.forget();
    on_error.forget();

    rx.await.unwrap_or_else(|_| Err(UNSUPPORTED_MESSAGE.to_owned()))
}

#[cfg(not(feature = "csr"))]
pub async fn current_position() -> Result<GeoPosition, String> {
    Err(UNSUPPORTED_MESSAGE.to_owned())
}

#[cfg(test)]
#[path = "geolocation_test.rs"]
mod tests;
