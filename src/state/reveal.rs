// Staggered fade/slide-in for the page cards
use super::scheduler::Scheduler;
use crate::error::PageError;
use crate::util::clog;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

const HIDDEN_OPACITY: &str = "0";
const HIDDEN_TRANSFORM: &str = "translateY(20px)";
const REVEAL_TRANSITION: &str = "all 0.5s ease-out";
const SHOWN_OPACITY: &str = "1";
const SHOWN_TRANSFORM: &str = "translateY(0)";

/// Inline style sink for one card.
pub trait CardStyle {
    fn set_style(&self, property: &str, value: &str) -> Result<(), PageError>;
}

impl CardStyle for HtmlElement {
    fn set_style(&self, property: &str, value: &str) -> Result<(), PageError> {
        self.style().set_property(property, value)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Unrevealed,
    Revealed,
}

/// Handle over the cards one animator run picked up.
#[derive(Debug, Default)]
pub struct EntryAnimation {
    states: Vec<Rc<Cell<RevealState>>>,
}

impl EntryAnimation {
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).map(|s| s.get())
    }

    pub fn revealed(&self) -> usize {
        self.states
            .iter()
            .filter(|s| s.get() == RevealState::Revealed)
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.revealed() == self.states.len()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EntryAnimator {
    pub stagger_ms: i32,
}

impl Default for EntryAnimator {
    fn default() -> Self {
        Self { stagger_ms: 100 }
    }
}

impl EntryAnimator {
    pub fn new(stagger_ms: i32) -> Self {
        Self { stagger_ms }
    }

    /// Hides every card now and schedules its reveal at `index * stagger_ms`.
    /// The card set is fixed at call time.
    pub fn run<S, C>(&self, scheduler: &S, cards: Vec<C>) -> Result<EntryAnimation, PageError>
    where
        S: Scheduler,
        C: CardStyle + 'static,
    {
        let mut animation = EntryAnimation::default();
        for (index, card) in cards.into_iter().enumerate() {
            card.set_style("opacity", HIDDEN_OPACITY)?;
            card.set_style("transform", HIDDEN_TRANSFORM)?;
            let state = Rc::new(Cell::new(RevealState::Unrevealed));
            animation.states.push(state.clone());
            let delay_ms = (index as i32).saturating_mul(self.stagger_ms);
            scheduler.set_timeout(
                delay_ms,
                Box::new(move || match reveal(&card) {
                    Ok(()) => state.set(RevealState::Revealed),
                    // stays Unrevealed so the handle never reports it visible
                    Err(err) => clog(&format!("card {index} reveal failed: {err}")),
                }),
            )?;
        }
        Ok(animation)
    }
}

fn reveal(card: &impl CardStyle) -> Result<(), PageError> {
    card.set_style("transition", REVEAL_TRANSITION)?;
    card.set_style("opacity", SHOWN_OPACITY)?;
    card.set_style("transform", SHOWN_TRANSFORM)
}

/// Snapshot of the HTML elements matching `selector`, in document order.
pub fn query_cards(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, PageError> {
    let nodes = document.query_selector_all(selector)?;
    let cards = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();
    Ok(cards)
}
