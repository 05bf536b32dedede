pub const GUESS_ENDPOINT: &str = "/guess";
pub const HINT_ENDPOINT: &str = "/hint";

pub const FORM_ID: &str = "input";
pub const GUESS_LOG_ID: &str = "guesses";
pub const UNLOCK_LOG_ID: &str = "unlocks";
pub const HINTS_ID: &str = "hints";

pub const GUESS_FIELD: &str = "guess";
pub const PUZZLE_FIELD: &str = "puzzle";

pub const CORRECT_CLASS: &str = "correct";
pub const ERROR_CLASS: &str = "error";
pub const UNLOCKED_CLASS: &str = "unlocked";

pub const API_BASE_ATTR: &str = "data-api-base";
pub const CONFIRM_HINTS_ATTR: &str = "data-confirm-hints";
pub const HINT_INDEX_ATTR: &str = "data-hint-index";
pub const HINT_REVEAL_SELECTOR: &str = "[data-hint-reveal]";
pub const HINT_TEXT_SELECTOR: &str = "[data-hint-text]";

pub const UNLOCK_TAG: &str = "[Unlock]";

pub const GUESS_FAILED_ALERT: &str = "Something went wrong while checking your guess. Please try again.";
pub const HINT_FAILED_ALERT: &str = "Something went wrong while fetching that hint. Please try again.";
