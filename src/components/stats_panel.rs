use crate::model::Evaluation;
use crate::util::format_percent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub evaluation: Option<Evaluation>,
    pub recent_count: usize,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let body = match &props.evaluation {
        Some(ev) => html! {
            <>
                <div style={row_style}>
                    <span style={format!("{} color:#3fb950;", icon_style)}>{"🎯"}</span>
                    <span style={format!("{} color:#3fb950;", label_style)}>{"Precisión"}</span>
                    <span style={format!("{} color:#3fb950;", value_style)}>{ format_percent(ev.precision) }</span>
                </div>
                <div style={row_style}>
                    <span style={icon_style}>{"✔"}</span>
                    <span style={label_style}>{"Acertadas"}</span>
                    <span style={value_style}>{ format!("{} / {}", ev.hits, ev.total) }</span>
                </div>
                <div style={row_style}>
                    <span style={icon_style}>{"📅"}</span>
                    <span style={label_style}>{"Periodo"}</span>
                    <span style={value_style}>{ format!("{} días", ev.period_days) }</span>
                </div>
            </>
        },
        None => html! { <div style="opacity:0.7;">{"Sin predicciones evaluadas"}</div> },
    };
    html! {
        <div class="card" style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            { body }
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", icon_style)}>{"🔢"}</span>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Números registrados"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ props.recent_count }</span>
            </div>
        </div>
    }
}
