/// Blocking user prompts. Controllers go through this so pages and tests can
/// decide how alerts and confirmations are shown.
pub trait Dialogs {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }

    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }
}
