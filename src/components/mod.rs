pub mod app;
pub mod number_card;
pub mod prediction_card;
pub mod refresh_footer;
pub mod stats_panel;

pub use app::App;
