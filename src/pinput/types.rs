//! Core types and messages for the pin input component.

use bubbletea_rs::Msg;
use lipgloss_extras::prelude::*;

/// How entered characters are filtered and transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Only ASCII digits are accepted; everything else is silently dropped.
    /// This is the default.
    Numeric,
    /// Any printable character is accepted as-is.
    Text,
    /// Any printable character is accepted and forced to upper case.
    TextUppercase,
}

/// The outline drawn around each slot box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotShape {
    /// Square corners. This is the default.
    Square,
    /// Rounded corners (when the corner radius is non-zero).
    RoundedSquare,
    /// Curved sides, approximating a circle on the cell grid.
    Circle,
}

/// EchoMode sets the display behavior of entered characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoMode {
    /// Displays entered characters as-is. This is the default.
    EchoNormal,
    /// Displays the mask character instead of actual characters.
    EchoPassword,
}

/// A decorative backdrop drawn inside every slot instead of the flat
/// filled/empty background colors, with a distinct look for the slot that
/// currently has the insertion point while the widget is focused.
#[derive(Debug, Clone)]
pub struct SlotBackdrop {
    /// Glyph the slot interior is tiled with.
    pub glyph: char,
    /// Style for inactive slots.
    pub style: Style,
    /// Style for the active slot while the widget is focused.
    pub focused_style: Style,
}

/// Callback invoked with the full pin when the buffer reaches slot count.
pub type CompleteFunc = Box<dyn Fn(&str) + Send>;

/// A size constraint imposed by the hosting layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeConstraint {
    /// No limit; the widget gets its desired size.
    Unbounded,
    /// The widget may not exceed this many cells.
    AtMost(usize),
    /// The host dictates an exact size.
    Exactly(usize),
}

/// Resolves a desired dimension against a host constraint.
pub fn resolve_size(desired: usize, constraint: SizeConstraint) -> usize {
    match constraint {
        SizeConstraint::Unbounded => desired,
        SizeConstraint::AtMost(max) => desired.min(max),
        SizeConstraint::Exactly(size) => size,
    }
}

// --- Messages ---

/// Message that toggles the caret blink phase.
///
/// Carries the instance id and a sequence tag so a widget only honors blink
/// messages from its own most recent schedule.
#[derive(Debug, Clone)]
pub struct BlinkMsg {
    /// Identifier of the widget instance this message targets.
    pub id: usize,
    /// Sequence tag to drop stale blink messages.
    pub tag: usize,
}

/// One-shot message that ends an error flash.
#[derive(Debug, Clone)]
pub struct ErrorClearMsg {
    /// Identifier of the widget instance this message targets.
    pub id: usize,
    /// Sequence tag; only the most recent error trigger is honored.
    pub tag: usize,
}

/// Emitted when the buffer reaches slot count.
///
/// Hosts typically react by verifying the pin and dismissing whatever input
/// affordance they presented for it.
#[derive(Debug, Clone)]
pub struct CompletedMsg {
    /// Identifier of the widget instance that completed.
    pub id: usize,
    /// The full pin content.
    pub pin: String,
}

/// Emitted by [`set_value`](super::Model::set_value) after the buffer is
/// replaced programmatically.
///
/// Hosts that bridge a stateful input method must tear down and recreate
/// their input session when they see this message; keeping the old session
/// leaves it out of sync with the buffer and subsequent keystrokes are
/// dropped.
#[derive(Debug, Clone)]
pub struct ResyncInputMsg {
    /// Identifier of the widget instance whose value was replaced.
    pub id: usize,
}

/// Clipboard paste message carrying raw text.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard paste error message.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}
