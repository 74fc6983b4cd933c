// Browser-side wiring: config persistence, the embedded page data and the
// entry animation over the live document.
use crate::error::PageError;
use crate::model::{PageConfig, PageData};
use crate::state::{EntryAnimation, EntryAnimator, Scheduler, query_cards};
use crate::util::clog;
use web_sys::Document;

pub const BANNER: &str = "🚀 Predicción-7 - Sistema de Predicción Inteligente";
pub const CONFIG_KEY: &str = "pp_page_config";
/// Id of the `<script type="application/json">` element the server fills.
pub const PAGE_DATA_ID: &str = "page-data";

pub fn log_banner() {
    clog(BANNER);
}

pub fn document() -> Result<Document, PageError> {
    web_sys::window()
        .ok_or(PageError::NoWindow)?
        .document()
        .ok_or(PageError::NoDocument)
}

/// Reads the stored config; anything missing or unreadable yields defaults.
pub fn load_config() -> PageConfig {
    let raw = web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|store| store.get_item(CONFIG_KEY).ok().flatten());
    parse_config(raw.as_deref())
}

pub fn parse_config(raw: Option<&str>) -> PageConfig {
    let Some(raw) = raw else {
        return PageConfig::default();
    };
    match serde_json::from_str(raw) {
        Ok(cfg) => cfg,
        Err(err) => {
            clog(&format!("ignoring stored page config: {err}"));
            PageConfig::default()
        }
    }
}

pub fn save_config(cfg: &PageConfig) -> Result<(), PageError> {
    let window = web_sys::window().ok_or(PageError::NoWindow)?;
    if let Some(store) = window.local_storage()? {
        let s = serde_json::to_string(cfg)?;
        store.set_item(CONFIG_KEY, &s)?;
    }
    Ok(())
}

/// Parses the JSON island; a page without one has no data.
pub fn load_page_data() -> Result<PageData, PageError> {
    let document = document()?;
    let Some(island) = document.get_element_by_id(PAGE_DATA_ID) else {
        return Ok(PageData::default());
    };
    let raw = island.text_content().unwrap_or_default();
    Ok(PageData::from_json(&raw)?)
}

/// Entry point for the reveal animation. Call once the cards are in the DOM.
pub fn animate_cards<S: Scheduler>(
    scheduler: &S,
    config: &PageConfig,
) -> Result<EntryAnimation, PageError> {
    let cards = query_cards(&document()?, &config.card_selector)?;
    EntryAnimator::new(config.stagger_ms).run(scheduler, cards)
}
