use log::Level;

/// Mailbox the contact form hands off to the visitor's mail client.
pub const CONTACT_RECIPIENT: &str = "info@neptech.com";

/// How long the contact form stays in the submitting state after the
/// mail client has been opened.
pub const SUBMIT_SETTLE_MS: u32 = 1_000;

pub const NOTICE_DURATION_MS: u32 = 4_000;

/// Height of the fixed header, subtracted from every anchor scroll target.
pub const HEADER_OFFSET_PX: f64 = 80.0;

pub const COMPACT_HEADER_AFTER_PX: f64 = 10.0;

/// Fraction of an element that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const STAGGER_STEP_MS: u32 = 150;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
