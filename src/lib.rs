//! Client-side helpers for the Predicción-7 pages: date and percentage
//! formatting, an optional refresh timer and the staggered card entrance.

pub mod bindings;
pub mod components;
pub mod error;
pub mod model;
pub mod page;
pub mod state;
pub mod util;

pub use error::PageError;
pub use model::{DateLike, PageConfig, PageData};
pub use util::{format_date, format_date_in, format_percent};
