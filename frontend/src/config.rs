use log::Level;

/// DOM id of the contact form element.
pub const FORM_ID: &str = "contactForm";

/// Name (and DOM id) of the field that gets the phone input mask.
pub const PHONE_FIELD: &str = "phone";

/// Simulated network latency between submit and the success panel.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

/// Digits kept by the phone mask, anything past this is dropped.
pub const MAX_PHONE_DIGITS: usize = 15;

/// Placeholder option value a required select must not accept.
pub const SELECT_SENTINEL: &str = "default";

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMITTING_LABEL: &str = "Submitting...";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose controller traces when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
