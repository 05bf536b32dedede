use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Local, Timelike};
use gloo_events::EventListener;
use shared::constants::{GUESS_FAILED_ALERT, GUESS_FIELD, PUZZLE_FIELD};
use shared::page_settings::PageSettings;
use shared::request_phase::RequestTracker;
use shared::shared_guess::{GuessResponse, GuessVerdict};
use shared::validation::{GuessSubmission, Validate};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, FormData, HtmlFormElement};

use super::blocking_listener_options;
use crate::api::{self, Received};
use crate::dialogs::Dialogs;
use crate::dom;
use crate::error::ClientError;

/// Drives the guess form: posts each submission and records the outcome in
/// the guess and unlock logs.
pub struct GuessFormController {
    form: HtmlFormElement,
    guess_field: Element,
    guesses: Element,
    unlocks: Element,
    settings: Rc<PageSettings>,
    dialogs: Rc<dyn Dialogs>,
    requests: RefCell<RequestTracker>,
}

/// Keeps the form listeners attached while alive.
pub struct GuessFormBinding {
    submit: EventListener,
    input: EventListener,
}

impl GuessFormBinding {
    /// Leaves the listeners attached for the rest of the page's life.
    pub fn forget(self) {
        self.submit.forget();
        self.input.forget();
    }
}

impl GuessFormController {
    pub fn new(
        form: HtmlFormElement,
        guesses: Element,
        unlocks: Element,
        settings: Rc<PageSettings>,
        dialogs: Rc<dyn Dialogs>,
    ) -> Result<Self, ClientError> {
        let guess_field =
            dom::field_element(&form, GUESS_FIELD).ok_or(ClientError::MissingField(GUESS_FIELD))?;

        Ok(Self {
            form,
            guess_field,
            guesses,
            unlocks,
            settings,
            dialogs,
            requests: RefCell::new(RequestTracker::default()),
        })
    }

    pub fn bind(self: Rc<Self>) -> GuessFormBinding {
        let controller = Rc::clone(&self);
        let submit = EventListener::new_with_options(
            &self.form,
            "submit",
            blocking_listener_options(),
            move |event| {
                event.prevent_default();
                controller.submit();
            },
        );

        let controller = Rc::clone(&self);
        let input = EventListener::new(&self.form, "input", move |_event| {
            if let Err(e) = dom::clear_marks(&controller.form) {
                log::warn!("Could not clear form state: {}", e);
            }
        });

        GuessFormBinding { submit, input }
    }

    fn submission(&self) -> Result<GuessSubmission, ClientError> {
        let puzzle = dom::field_element(&self.form, PUZZLE_FIELD)
            .and_then(|field| dom::field_value(&field))
            .ok_or(ClientError::MissingField(PUZZLE_FIELD))?;
        let guess = dom::field_value(&self.guess_field).unwrap_or_default();
        Ok(GuessSubmission::new(puzzle, guess))
    }

    fn submit(self: &Rc<Self>) {
        let submission = match self.submission() {
            Ok(submission) => submission,
            Err(e) => {
                self.report(&e);
                return;
            }
        };
        if let Err(errors) = submission.validate() {
            log::debug!("Ignoring incomplete guess submission: {}", errors);
            return;
        }

        let form_data = match FormData::new_with_form(&self.form) {
            Ok(data) => data,
            Err(e) => {
                self.report(&ClientError::from(e));
                return;
            }
        };
        let submitted_at = Local::now();
        log::debug!(
            "Submitting guess {:?} for puzzle {:?}",
            submission.guess,
            submission.puzzle
        );

        dom::set_busy(&self.form, self.requests.borrow_mut().begin());
        let controller = Rc::clone(self);
        spawn_local(async move {
            let result = api::submit_guess(&controller.settings, form_data).await;
            dom::set_busy(&controller.form, controller.requests.borrow_mut().finish());
            controller.handle_response(result, &submitted_at);
        });
    }

    /// Completes one submission: applies the response, or alerts once when
    /// the request failed or the result is not one the page understands.
    pub fn handle_response<T: Timelike>(
        &self,
        result: Result<Received<GuessResponse>, ClientError>,
        submitted_at: &T,
    ) {
        let outcome = result.and_then(|received| self.apply_response(&received, submitted_at));
        if let Err(e) = outcome {
            self.report(&e);
        }
    }

    pub fn apply_response<T: Timelike>(
        &self,
        received: &Received<GuessResponse>,
        submitted_at: &T,
    ) -> Result<(), ClientError> {
        match received.value.verdict(submitted_at) {
            GuessVerdict::Recorded(outcome) => {
                dom::clear_field(&self.guess_field);
                dom::append_log_line(&self.guesses, &outcome.guess_line)?;
                if let Some(mark) = outcome.mark {
                    dom::apply_mark(&self.form, mark)?;
                }
                if let Some(line) = &outcome.unlock_line {
                    dom::append_log_line(&self.unlocks, line)?;
                }
                Ok(())
            }
            GuessVerdict::Unrecognized(result) => Err(ClientError::UnexpectedResult {
                result,
                body: received.body.clone(),
            }),
        }
    }

    fn report(&self, error: &ClientError) {
        log::error!("Guess submission failed: {}", error);
        self.dialogs.alert(GUESS_FAILED_ALERT);
    }
}
