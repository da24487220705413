#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-pinput/")]

//! # bubbletea-pinput
//!
//! A PIN / OTP entry widget for terminal applications built with
//! [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs): a row of slot
//! boxes that fill in as the user types a short fixed-length code.
//!
//! ## Overview
//!
//! The widget follows the Elm Architecture pattern used across the bubbletea
//! ecosystem: embed a [`PinInput`] in your model, forward messages to its
//! `update()` method, and splice its `view()` output into yours. Typed and
//! pasted characters are filtered per the configured input mode (numeric,
//! free text, or forced uppercase), backspace deletes the last entry, and
//! the moment the last slot fills the widget invokes your completion
//! callback and emits a [`CompletedMsg`].
//!
//! ## Features
//!
//! - **Three slot shapes** (square, rounded, circle) with themeable stroke,
//!   fill, and text styles via Lip Gloss
//! - **Password masking** with a configurable mask character
//! - **Blinking caret** in the next empty slot (500ms square wave)
//! - **Error flash**: a timed red-border state for rejected codes that also
//!   clears on the next edit
//! - **Clipboard paste** through the same filtering as typed input
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_pinput::prelude::*;
//! use bubbletea_rs::{Cmd, Msg};
//!
//! struct App {
//!     pin: PinInput,
//! }
//!
//! impl bubbletea_rs::Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut pin = pinput_new();
//!         pin.echo_mode = EchoMode::EchoPassword;
//!         let focus_cmd = pin.focus();
//!         (Self { pin }, Some(focus_cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(done) = msg.downcast_ref::<CompletedMsg>() {
//!             // Verify done.pin here; on failure flash the error state:
//!             if done.pin != "1234" {
//!                 return Some(self.pin.show_error());
//!             }
//!             return None;
//!         }
//!         self.pin.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Enter your PIN:\n\n{}", self.pin.view())
//!     }
//! }
//! ```
//!
//! ## Programmatic entry (autofill)
//!
//! [`PinInput::set_value`] replaces the buffer, fires completion when the
//! code is full, and returns a command that emits [`ResyncInputMsg`] so any
//! stateful input bridge can re-synchronize with the new buffer. Skipping
//! that resync is what causes the classic "keyboard stops working after
//! autofill" bug.
//!
//! ## Measurement
//!
//! Hosts that lay the widget out themselves can use
//! [`PinInput::desired_width`], [`PinInput::desired_height`], and
//! [`PinInput::measure`] with [`SizeConstraint`]s to resolve the final size
//! the way a parent layout would.

pub mod key;
pub mod pinput;

pub use key::{matches_binding, Binding, KeyPress};
pub use pinput::{
    default_key_map as pinput_default_key_map, new as pinput_new, paste, resolve_size, BlinkMsg,
    CompleteFunc, CompletedMsg, EchoMode, ErrorClearMsg, InputMode, KeyMap as PinInputKeyMap,
    Model as PinInput, PasteErrMsg, PasteMsg, ResyncInputMsg, SizeConstraint, SlotBackdrop,
    SlotShape, DEFAULT_BLINK_SPEED, DEFAULT_ERROR_DURATION,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_pinput::prelude::*;
///
/// let mut pin = pinput_new();
/// pin.input_mode = InputMode::TextUppercase;
/// ```
pub mod prelude {
    pub use crate::key::{matches_binding, Binding, KeyPress};
    pub use crate::pinput::{
        default_key_map as pinput_default_key_map, new as pinput_new, paste, resolve_size,
        BlinkMsg, CompleteFunc, CompletedMsg, EchoMode, ErrorClearMsg, InputMode,
        KeyMap as PinInputKeyMap, Model as PinInput, PasteErrMsg, PasteMsg, ResyncInputMsg,
        SizeConstraint, SlotBackdrop, SlotShape, DEFAULT_BLINK_SPEED, DEFAULT_ERROR_DURATION,
    };
}
