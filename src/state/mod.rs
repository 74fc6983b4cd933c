pub mod refresh;
pub mod reveal;
pub mod scheduler;

pub use refresh::AutoRefresh;
pub use reveal::{CardStyle, EntryAnimation, EntryAnimator, RevealState, query_cards};
pub use scheduler::{Scheduler, WindowScheduler};
