//! Browser checks, run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use prediction_page::bindings::{RefreshController, format_date_js};
use prediction_page::page;
use prediction_page::state::{RevealState, WindowScheduler};
use prediction_page::{PageConfig, PageData};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn add_card(class: &str) -> HtmlElement {
    let document = page::document().unwrap();
    let el = document.create_element("div").unwrap();
    el.set_class_name(class);
    document.body().unwrap().append_child(&el).unwrap();
    el.dyn_into::<HtmlElement>().unwrap()
}

#[wasm_bindgen_test]
fn cards_are_hidden_until_revealed() {
    let first = add_card("card test-hidden");
    let second = add_card("card test-hidden");
    let config = PageConfig {
        card_selector: ".test-hidden".to_string(),
        ..PageConfig::default()
    };
    let scheduler = WindowScheduler::new().unwrap();
    let animation = page::animate_cards(&scheduler, &config).unwrap();

    assert_eq!(animation.len(), 2);
    assert_eq!(animation.state(1), Some(RevealState::Unrevealed));
    for card in [&first, &second] {
        assert_eq!(card.style().get_property_value("opacity").unwrap(), "0");
        assert_eq!(card.style().get_property_value("transition").unwrap(), "");
    }
}

#[wasm_bindgen_test]
fn missing_cards_are_fine() {
    let config = PageConfig {
        card_selector: ".nothing-matches-this".to_string(),
        ..PageConfig::default()
    };
    let scheduler = WindowScheduler::new().unwrap();
    assert!(page::animate_cards(&scheduler, &config).unwrap().is_empty());
}

#[wasm_bindgen_test]
fn format_date_accepts_js_values() {
    let date = js_sys::Date::new(&JsValue::from_str("2024-01-15T10:30:00Z"));
    assert_eq!(
        format_date_js(date.into()),
        format_date_js(JsValue::from_str("2024-01-15T10:30:00Z"))
    );
    assert_eq!(format_date_js(JsValue::UNDEFINED), "Invalid Date");
    assert_eq!(format_date_js(JsValue::TRUE), format_date_js(JsValue::from_f64(1.0)));
    assert_eq!(format_date_js(JsValue::FALSE), format_date_js(JsValue::from_f64(0.0)));
    assert_ne!(format_date_js(JsValue::TRUE), "Invalid Date");
}

#[wasm_bindgen_test]
fn refresh_controller_lifecycle() {
    let mut controller = RefreshController::new(None).unwrap();
    assert!(!controller.is_active());
    controller.enable(Some(30.0)).unwrap();
    controller.enable(None).unwrap();
    assert!(controller.is_active());
    assert!(controller.cancel());
    assert!(!controller.is_active());
}

#[wasm_bindgen_test]
fn page_without_data_island_is_empty() {
    assert_eq!(page::load_page_data().unwrap(), PageData::default());
}
