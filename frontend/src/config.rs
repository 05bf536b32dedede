use shared::constants::{API_BASE_ATTR, CONFIRM_HINTS_ATTR};
use shared::page_settings::PageSettings;
use web_sys::Element;

/// Reads the page settings carried as data attributes on the guess form.
pub fn page_settings(form: &Element) -> PageSettings {
    let api_base = form.get_attribute(API_BASE_ATTR);
    let confirm_hints = form.get_attribute(CONFIRM_HINTS_ATTR);
    let settings = PageSettings::from_attributes(api_base.as_deref(), confirm_hints.as_deref());
    log::debug!(
        "Page settings: api base {:?}, confirm hints {}",
        settings.api_base_url,
        settings.confirm_hints
    );
    settings
}
