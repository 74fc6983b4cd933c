use crate::model::DateLike;
use crate::util::format_date;
use chrono::{DateTime, Utc};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RefreshFooterProps {
    pub auto_refresh: bool,
    pub interval_secs: f64,
    pub last_refresh: Option<DateTime<Utc>>,
}

#[function_component(RefreshFooter)]
pub fn refresh_footer(props: &RefreshFooterProps) -> Html {
    let status = if props.auto_refresh {
        format!("Auto-refresh cada {}s", props.interval_secs)
    } else {
        "Auto-refresh desactivado".to_string()
    };
    html! {<div style="margin-top:16px; display:flex; gap:12px; justify-content:center; font-size:11px; opacity:0.6;">
        <span>{ status }</span>
        if let Some(at) = props.last_refresh {
            <span>{ format!("Actualizado: {}", format_date(&DateLike::from(at))) }</span>
        }
    </div>}
}
