use crate::model::Prediction;
use crate::util::format_percent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PredictionCardProps {
    pub prediction: Prediction,
}

#[function_component(PredictionCard)]
pub fn prediction_card(props: &PredictionCardProps) -> Html {
    let p = &props.prediction;
    // confidence bar, clamped only for drawing
    let bar_width = (p.confidence.clamp(0.0, 1.0) * 100.0).round();
    html! {
        <div class="card" style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:12px 16px; display:flex; flex-direction:column; gap:6px; min-width:160px;">
            <div style="font-size:28px; font-weight:700; color:#58a6ff; text-align:center;">{ p.number }</div>
            <div style="display:flex; justify-content:space-between; font-size:13px;">
                <span style="opacity:0.8;">{"Confianza"}</span>
                <span style="font-variant-numeric:tabular-nums; font-weight:600;">{ format_percent(p.confidence) }</span>
            </div>
            <div style="height:4px; background:#30363d; border-radius:2px;">
                <div style={format!("height:100%; width:{}%; background:#3fb950; border-radius:2px;", bar_width)}></div>
            </div>
            if !p.method.is_empty() {
                <div style="font-size:11px; opacity:0.6; text-align:center;">{ p.method.clone() }</div>
            }
        </div>
    }
}
