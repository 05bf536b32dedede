#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use poozles_frontend::dialogs::Dialogs;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, Node};

pub const PAGE: &str = r#"
<form id="input">
  <input type="hidden" name="puzzle" value="riddle1">
  <input type="text" name="guess" required>
  <button type="submit">Guess</button>
</form>
<div id="guesses"></div>
<div id="unlocks"></div>
<ol id="hints">
  <li data-hint-index="0"><span data-hint-text>Hint 1</span> <button data-hint-reveal>Reveal</button></li>
  <li data-hint-index="1"><span data-hint-text>Hint 2</span> <button data-hint-reveal>Reveal</button></li>
  <li data-hint-index="2" class="unlocked"><span data-hint-text>Already shown</span></li>
</ol>
"#;

/// A puzzle page appended to the document body, removed again on drop.
pub struct Page {
    pub root: Element,
}

impl Page {
    pub fn new() -> Self {
        Self::with_form_attributes("")
    }

    pub fn with_form_attributes(attributes: &str) -> Self {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(&PAGE.replace(r#"<form id="input">"#, &format!(r#"<form id="input" {}>"#, attributes)));
        document.body().unwrap().append_child(&root).unwrap();
        Self { root }
    }

    pub fn select(&self, selector: &str) -> Element {
        self.root
            .query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("no element for {}", selector))
    }

    pub fn form(&self) -> HtmlFormElement {
        self.select("form").dyn_into().unwrap()
    }

    pub fn guess_input(&self) -> HtmlInputElement {
        self.select("[name=\"guess\"]").dyn_into().unwrap()
    }

    pub fn guesses(&self) -> Element {
        self.select("#guesses")
    }

    pub fn unlocks(&self) -> Element {
        self.select("#unlocks")
    }

    pub fn hints(&self) -> Element {
        self.select("#hints")
    }

    pub fn hint_entry(&self, index: usize) -> Element {
        self.select(&format!("#hints > li[data-hint-index=\"{}\"]", index))
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.root.remove();
    }
}

#[derive(Default)]
pub struct RecordingDialogs {
    pub alerts: RefCell<Vec<String>>,
    pub confirms: RefCell<Vec<String>>,
    pub answer: Cell<bool>,
}

impl RecordingDialogs {
    pub fn answering(answer: bool) -> Self {
        let dialogs = Self::default();
        dialogs.answer.set(answer);
        dialogs
    }
}

impl Dialogs for RecordingDialogs {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.answer.get()
    }
}

/// Text entries of a log container, skipping the `<br>` separators.
pub fn log_lines(container: &Element) -> Vec<String> {
    let nodes = container.child_nodes();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter(|node| node.node_type() == Node::TEXT_NODE)
        .filter_map(|node| node.text_content())
        .collect()
}
