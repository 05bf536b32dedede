pub mod api;
pub mod config;
pub mod controllers;
pub mod dialogs;
pub mod dom;
pub mod error;

use std::rc::Rc;

use shared::constants::{FORM_ID, GUESS_LOG_ID, HINTS_ID, UNLOCK_LOG_ID};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement};

use crate::controllers::{GuessFormBinding, GuessFormController, HintRevealBinding, HintRevealController};
use crate::dialogs::{BrowserDialogs, Dialogs};
use crate::error::ClientError;

pub struct PageBindings {
    pub guess_form: GuessFormBinding,
    pub hints: Option<HintRevealBinding>,
}

impl PageBindings {
    pub fn forget(self) {
        self.guess_form.forget();
        if let Some(hints) = self.hints {
            hints.forget();
        }
    }
}

/// Binds the controllers to the page markup. Pages without a guess form are
/// left untouched and yield `Ok(None)`.
pub fn mount(document: &Document, dialogs: Rc<dyn Dialogs>) -> Result<Option<PageBindings>, ClientError> {
    let form = match document.get_element_by_id(FORM_ID) {
        Some(form) => form,
        None => return Ok(None),
    };
    let form = form
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| ClientError::MissingElement(FORM_ID))?;

    let settings = Rc::new(config::page_settings(&form));
    let guesses = dom::require_by_id(document, GUESS_LOG_ID)?;
    let unlocks = dom::require_by_id(document, UNLOCK_LOG_ID)?;

    let guess_form = Rc::new(GuessFormController::new(
        form.clone(),
        guesses,
        unlocks,
        Rc::clone(&settings),
        Rc::clone(&dialogs),
    )?)
    .bind();

    let hints = document.get_element_by_id(HINTS_ID).map(|container| {
        Rc::new(HintRevealController::new(form, container, settings, dialogs)).bind()
    });

    Ok(Some(PageBindings { guess_form, hints }))
}

pub fn run() {
    match mount(&dom::document(), Rc::new(BrowserDialogs)) {
        Ok(Some(bindings)) => {
            log::info!("Puzzle page ready");
            bindings.forget();
        }
        Ok(None) => log::debug!("No guess form on this page"),
        Err(e) => log::error!("Could not set up puzzle page: {}", e),
    }
}
