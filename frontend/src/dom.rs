use shared::constants::{CORRECT_CLASS, ERROR_CLASS};
use shared::request_phase::RequestPhase;
use shared::shared_guess::FormMark;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::error::ClientError;

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn require_by_id(document: &Document, id: &'static str) -> Result<Element, ClientError> {
    document
        .get_element_by_id(id)
        .ok_or(ClientError::MissingElement(id))
}

/// Finds a form control by its `name` attribute.
pub fn field_element(form: &Element, name: &str) -> Option<Element> {
    form.query_selector(&format!("[name=\"{}\"]", name))
        .ok()
        .flatten()
}

pub fn field_value(field: &Element) -> Option<String> {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        Some(select.value())
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        Some(area.value())
    } else {
        field.get_attribute("value")
    }
}

pub fn clear_field(field: &Element) {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.set_value("");
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value("");
    }
}

/// Appends one entry to a log container. Entries are text nodes separated by
/// `<br>`, so server-provided text is never parsed as markup.
pub fn append_log_line(container: &Element, line: &str) -> Result<(), ClientError> {
    let document = container.owner_document().unwrap_or_else(document);
    if container.has_child_nodes() {
        let br = document.create_element("br")?;
        container.append_child(&br)?;
    }
    let text = document.create_text_node(line);
    container.append_child(&text)?;
    Ok(())
}

pub fn apply_mark(form: &Element, mark: FormMark) -> Result<(), ClientError> {
    let classes = form.class_list();
    match mark {
        FormMark::Correct => {
            classes.remove_1(ERROR_CLASS)?;
            classes.add_1(CORRECT_CLASS)?;
        }
        FormMark::Error => {
            classes.remove_1(CORRECT_CLASS)?;
            classes.add_1(ERROR_CLASS)?;
        }
    }
    Ok(())
}

pub fn clear_marks(form: &Element) -> Result<(), ClientError> {
    form.class_list().remove_2(ERROR_CLASS, CORRECT_CLASS)?;
    Ok(())
}

pub fn set_busy(element: &Element, phase: RequestPhase) {
    let result = if phase.is_busy() {
        element.set_attribute("aria-busy", "true")
    } else {
        element.remove_attribute("aria-busy")
    };
    if let Err(e) = result {
        log::warn!("Could not update aria-busy: {:?}", e);
    }
}
