use super::{
    number_card::NumberCard, prediction_card::PredictionCard, refresh_footer::RefreshFooter,
    stats_panel::StatsPanel,
};
use crate::model::PageData;
use crate::page;
use crate::state::{AutoRefresh, WindowScheduler};
use crate::util::clog;
use chrono::{DateTime, Utc};
use std::rc::Rc;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(page::load_config);
    let data = use_state(|| {
        page::load_page_data().unwrap_or_else(|err| {
            clog(&format!("page data unavailable: {err}"));
            PageData::default()
        })
    });
    let last_refresh = use_state(|| None::<DateTime<Utc>>);

    // Reveal the cards once, after the first render put them in the DOM
    {
        let config = (*config).clone();
        use_effect_with((), move |_| {
            let result = WindowScheduler::new().and_then(|s| page::animate_cards(&s, &config));
            match result {
                Ok(animation) => clog(&format!("revealing {} cards", animation.len())),
                Err(err) => clog(&format!("entry animation skipped: {err}")),
            }
            || ()
        });
    }
    // Optional periodic refresh; dropping the controller clears its timer
    {
        let config = (*config).clone();
        let last_refresh = last_refresh.clone();
        let deps = (config.auto_refresh, config.refresh_interval_secs.to_bits());
        use_effect_with(deps, move |_| {
            let mut controller = None;
            if config.auto_refresh {
                match WindowScheduler::new() {
                    Ok(scheduler) => {
                        let mut refresh = AutoRefresh::new(Rc::new(scheduler), move || {
                            last_refresh.set(Some(Utc::now()));
                        });
                        match refresh.enable(config.refresh_interval_secs) {
                            Ok(()) => controller = Some(refresh),
                            Err(err) => clog(&format!("auto-refresh not started: {err}")),
                        }
                    }
                    Err(err) => clog(&format!("auto-refresh not started: {err}")),
                }
            }
            move || drop(controller)
        });
    }

    let predictions = data.predictions.iter().map(|p| {
        html! { <PredictionCard prediction={p.clone()} /> }
    });
    let recent = data.recent.iter().map(|entry| {
        html! { <NumberCard key={entry.id} entry={entry.clone()} /> }
    });

    html! {
        <div id="root" style="max-width:960px; margin:0 auto; padding:24px; display:flex; flex-direction:column; gap:20px; color:#c9d1d9;">
            <h1 style="margin:0; font-size:24px; color:#58a6ff; text-align:center;">{"Predicción-7"}</h1>
            <StatsPanel evaluation={data.evaluation.clone()} recent_count={data.recent.len()} />
            <section>
                <h2 style="font-size:18px; margin:0 0 10px 0;">{"Predicciones"}</h2>
                if data.predictions.is_empty() {
                    <p style="opacity:0.7;">{"Todavía no hay predicciones."}</p>
                } else {
                    <div style="display:flex; flex-wrap:wrap; gap:12px;">{ for predictions }</div>
                }
            </section>
            <section>
                <h2 style="font-size:18px; margin:0 0 10px 0;">{"Números recientes"}</h2>
                <div style="display:flex; flex-direction:column; gap:6px;">{ for recent }</div>
            </section>
            <RefreshFooter
                auto_refresh={config.auto_refresh}
                interval_secs={config.refresh_interval_secs}
                last_refresh={*last_refresh}
            />
        </div>
    }
}
