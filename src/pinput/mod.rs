//! Pin entry component for Bubble Tea applications.
//!
//! A fixed-length code entry field (PIN, OTP, confirmation code) rendered as
//! a row of boxes that fill in as the user types. Characters are filtered
//! per the configured input mode, backspace deletes the last entry, and a
//! registered callback fires the moment the last slot fills.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_pinput::pinput::new;
//!
//! let mut pin = new();
//! let _cmd = pin.focus();
//! pin.on_complete(|code| {
//!     // verify the code
//!     let _ = code;
//! });
//! ```
//!
//! # Input modes and masking
//!
//! ```rust
//! use bubbletea_pinput::pinput::{new, EchoMode, InputMode};
//!
//! let mut pin = new();
//! pin.input_mode = InputMode::TextUppercase;
//! pin.echo_mode = EchoMode::EchoPassword;
//! pin.mask_char = '*';
//! ```
//!
//! # Error flash
//!
//! Call [`Model::show_error`] when the host rejects a code; every slot
//! border turns the error color until the timer expires or the user edits.

pub mod keymap;
pub mod methods;
pub mod model;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

// Re-export main types and functions for public API
pub use keymap::{default_key_map, KeyMap};
pub use model::{new, paste, Model, DEFAULT_BLINK_SPEED, DEFAULT_ERROR_DURATION};
pub use types::{
    resolve_size, BlinkMsg, CompleteFunc, CompletedMsg, EchoMode, ErrorClearMsg, InputMode,
    PasteErrMsg, PasteMsg, ResyncInputMsg, SizeConstraint, SlotBackdrop, SlotShape,
};
