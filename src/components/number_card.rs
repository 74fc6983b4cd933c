use crate::model::{DateLike, RecentNumber};
use crate::util::format_date;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NumberCardProps {
    pub entry: RecentNumber,
}

#[function_component(NumberCard)]
pub fn number_card(props: &NumberCardProps) -> Html {
    let e = &props.entry;
    let when = format_date(&DateLike::from(e.extracted_at.as_str()));
    html! {
        <div class="card" style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; display:flex; align-items:center; gap:12px; font-size:13px;">
            <span style="font-size:20px; font-weight:700; min-width:48px; text-align:center;">{ e.number }</span>
            <span style="flex:1; font-variant-numeric:tabular-nums;">{ when }</span>
            <span style="opacity:0.6;">{ e.source.clone() }</span>
        </div>
    }
}
