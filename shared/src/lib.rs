pub mod constants;
pub mod page_settings;
pub mod request_phase;
pub mod shared_guess;
pub mod shared_hint;
pub mod validation;
