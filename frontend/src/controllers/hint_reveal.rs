use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use shared::constants::{
    HINT_FAILED_ALERT, HINT_INDEX_ATTR, HINT_REVEAL_SELECTOR, HINT_TEXT_SELECTOR, PUZZLE_FIELD,
    UNLOCKED_CLASS,
};
use shared::page_settings::PageSettings;
use shared::request_phase::RequestTracker;
use shared::shared_hint::{confirm_prompt, resolve_hint_index, HintRequest, HintResponse};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlFormElement};

use super::blocking_listener_options;
use crate::api;
use crate::dialogs::Dialogs;
use crate::dom;
use crate::error::ClientError;

struct HintEntry {
    index: usize,
    element: Element,
    control: Element,
    placeholder: Element,
}

pub struct HintRevealController {
    form: HtmlFormElement,
    container: Element,
    entries: Vec<HintEntry>,
    settings: Rc<PageSettings>,
    dialogs: Rc<dyn Dialogs>,
    requests: RefCell<RequestTracker>,
}

pub struct HintRevealBinding {
    listeners: Vec<EventListener>,
}

impl HintRevealBinding {
    pub fn forget(self) {
        self.listeners.into_iter().for_each(EventListener::forget);
    }
}

fn first_match(element: &Element, selector: &str) -> Option<Element> {
    element.query_selector(selector).ok().flatten()
}

impl HintRevealController {
    /// Collects the hint entries under `container`. Entries without a reveal
    /// control have already been revealed and are left alone.
    pub fn new(
        form: HtmlFormElement,
        container: Element,
        settings: Rc<PageSettings>,
        dialogs: Rc<dyn Dialogs>,
    ) -> Self {
        let children = container.children();
        let entries = (0..children.length())
            .filter_map(|position| {
                let element = children.item(position)?;
                let control = first_match(&element, HINT_REVEAL_SELECTOR)
                    .or_else(|| first_match(&element, "button"))?;
                let placeholder =
                    first_match(&element, HINT_TEXT_SELECTOR).unwrap_or_else(|| element.clone());
                let index = resolve_hint_index(
                    element.get_attribute(HINT_INDEX_ATTR).as_deref(),
                    position as usize,
                );
                Some(HintEntry {
                    index,
                    element,
                    control,
                    placeholder,
                })
            })
            .collect::<Vec<_>>();
        log::debug!("Found {} unrevealed hints", entries.len());

        Self {
            form,
            container,
            entries,
            settings,
            dialogs,
            requests: RefCell::new(RequestTracker::default()),
        }
    }

    pub fn bind(self: Rc<Self>) -> HintRevealBinding {
        let listeners = self
            .entries
            .iter()
            .map(|entry| {
                let controller = Rc::clone(&self);
                let index = entry.index;
                EventListener::new_with_options(
                    &entry.control,
                    "click",
                    blocking_listener_options(),
                    move |event| {
                        event.prevent_default();
                        controller.reveal(index);
                    },
                )
            })
            .collect();

        HintRevealBinding { listeners }
    }

    /// Builds the request for hint `index`, or `None` when the player declines
    /// the confirmation prompt.
    pub fn prepare_request(&self, index: usize) -> Result<Option<HintRequest>, ClientError> {
        let puzzle = dom::field_element(&self.form, PUZZLE_FIELD)
            .and_then(|field| dom::field_value(&field))
            .ok_or(ClientError::MissingField(PUZZLE_FIELD))?;

        if self.settings.confirm_hints && !self.dialogs.confirm(&confirm_prompt(index)) {
            return Ok(None);
        }

        Ok(Some(HintRequest {
            puzzle,
            hint_requested: index,
        }))
    }

    fn reveal(self: &Rc<Self>, index: usize) {
        let request = match self.prepare_request(index) {
            Ok(Some(request)) => request,
            Ok(None) => {
                log::debug!("Hint {} not requested", index);
                return;
            }
            Err(e) => {
                self.report(&e);
                return;
            }
        };

        dom::set_busy(&self.container, self.requests.borrow_mut().begin());
        let controller = Rc::clone(self);
        spawn_local(async move {
            let result = api::request_hint(&controller.settings, &request).await;
            dom::set_busy(&controller.container, controller.requests.borrow_mut().finish());
            controller.handle_response(result);
        });
    }

    pub fn handle_response(&self, result: Result<HintResponse, ClientError>) {
        if let Err(e) = result.and_then(|response| self.apply_hint(&response)) {
            self.report(&e);
        }
    }

    /// Shows the revealed text for the hint the server answered for and
    /// removes that hint's reveal control.
    pub fn apply_hint(&self, response: &HintResponse) -> Result<(), ClientError> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.index == response.hint_requested)
            .ok_or(ClientError::UnknownHint(response.hint_requested))?;

        entry.placeholder.set_text_content(Some(response.hint.as_str()));
        entry.element.class_list().add_1(UNLOCKED_CLASS)?;
        entry.control.remove();
        Ok(())
    }

    fn report(&self, error: &ClientError) {
        log::error!("Hint request failed: {}", error);
        self.dialogs.alert(HINT_FAILED_ALERT);
    }
}
