//! JS-facing exports for server-rendered templates that only want the helpers.

use crate::model::DateLike;
use crate::page;
use crate::state::refresh::DEFAULT_REFRESH_SECS;
use crate::state::{AutoRefresh, WindowScheduler};
use crate::util::{clog, format_date, format_percent};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date_js(value: JsValue) -> String {
    format_date(&date_like_from_js(&value))
}

#[wasm_bindgen(js_name = formatPercent)]
pub fn format_percent_js(fraction: f64) -> String {
    format_percent(fraction)
}

/// Reveals the cards currently in the page; returns how many were picked up.
#[wasm_bindgen(js_name = animateCards)]
pub fn animate_cards_js(selector: Option<String>) -> Result<usize, JsValue> {
    let mut config = page::load_config();
    if let Some(selector) = selector {
        config.card_selector = selector;
    }
    let scheduler = WindowScheduler::new()?;
    let animation = page::animate_cards(&scheduler, &config)?;
    Ok(animation.len())
}

// Same coercions `new Date(value)` applies to the common inputs.
fn date_like_from_js(value: &JsValue) -> DateLike {
    if let Some(date) = value.dyn_ref::<js_sys::Date>() {
        return DateLike::Millis(date.get_time());
    }
    if let Some(flag) = value.as_bool() {
        return DateLike::Millis(if flag { 1.0 } else { 0.0 });
    }
    if let Some(ms) = value.as_f64() {
        return DateLike::Millis(ms);
    }
    if let Some(text) = value.as_string() {
        return DateLike::Text(text);
    }
    if value.is_null() {
        return DateLike::Millis(0.0);
    }
    DateLike::Millis(f64::NAN)
}

/// Owns one refresh timer for the page.
#[wasm_bindgen]
pub struct RefreshController {
    inner: AutoRefresh<WindowScheduler>,
}

#[wasm_bindgen]
impl RefreshController {
    #[wasm_bindgen(constructor)]
    pub fn new(on_tick: Option<js_sys::Function>) -> Result<RefreshController, JsValue> {
        let scheduler = Rc::new(WindowScheduler::new()?);
        let inner = AutoRefresh::new(scheduler, move || {
            if let Some(callback) = &on_tick {
                if let Err(err) = callback.call0(&JsValue::NULL) {
                    clog(&format!("refresh callback threw: {err:?}"));
                }
            }
        });
        Ok(RefreshController { inner })
    }

    pub fn enable(&mut self, seconds: Option<f64>) -> Result<(), JsValue> {
        let seconds = seconds.unwrap_or(DEFAULT_REFRESH_SECS);
        self.inner.enable(seconds)?;
        Ok(())
    }

    pub fn cancel(&mut self) -> bool {
        self.inner.cancel()
    }

    #[wasm_bindgen(getter, js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.inner.is_active()
    }
}
