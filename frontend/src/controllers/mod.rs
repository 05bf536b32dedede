pub mod guess_form;
pub mod hint_reveal;

pub use guess_form::{GuessFormBinding, GuessFormController};
pub use hint_reveal::{HintRevealBinding, HintRevealController};

use gloo_events::{EventListenerOptions, EventListenerPhase};

// Listeners that call prevent_default must not be passive.
fn blocking_listener_options() -> EventListenerOptions {
    EventListenerOptions {
        passive: false,
        phase: EventListenerPhase::Bubble,
    }
}
