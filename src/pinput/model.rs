//! Core model implementation for the pin input component.

use super::keymap::{default_key_map, KeyMap};
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{CompleteFunc, EchoMode, InputMode, PasteErrMsg, SlotBackdrop, SlotShape};
use bubbletea_rs::{tick, Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// --- Internal ID Management ---
// Used to ensure that timer messages are only received by the widget that
// scheduled them.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

/// Half-period of the caret blink square wave.
pub const DEFAULT_BLINK_SPEED: Duration = Duration::from_millis(500);

/// How long an error flash stays visible unless cleared by an edit.
pub const DEFAULT_ERROR_DURATION: Duration = Duration::from_millis(1000);

/// A fixed-length pin entry field rendered as a row of slot boxes.
///
/// The model follows the Elm Architecture used by Bubble Tea: feed it
/// messages through [`update`](Model::update) and render it with
/// [`view`](Model::view). Characters typed (or pasted) while the widget is
/// focused fill the slots left to right; when the last slot fills, the
/// registered completion callback runs and a
/// [`CompletedMsg`](super::CompletedMsg) is emitted.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pinput::pinput::{new, InputMode, EchoMode};
///
/// let mut pin = new();
/// pin.set_slot_count(6);
/// pin.input_mode = InputMode::TextUppercase;
/// pin.echo_mode = EchoMode::EchoPassword;
/// let _cmd = pin.focus();
/// assert_eq!(pin.value(), "");
/// ```
pub struct Model {
    /// An error that was not part of normal entry, e.g. a failed clipboard
    /// read. Entry itself never fails; invalid characters are dropped.
    pub err: Option<String>,

    /// Number of slots in the pin. Shrinking it truncates the buffer.
    pub(super) slot_count: usize,

    /// Outline drawn around each slot.
    pub shape: SlotShape,
    /// Total width of one slot box in cells, border included.
    pub box_width: usize,
    /// Total height of one slot box in cells, border included.
    pub box_height: usize,
    /// Cells between adjacent slot boxes.
    pub spacing: usize,
    /// Corner rounding for [`SlotShape::RoundedSquare`]; 0 draws square
    /// corners even in that shape.
    pub corner_radius: usize,
    /// Border weight; values above 1 select heavy border glyphs.
    pub stroke_width: usize,

    /// Border color for inactive slots.
    pub stroke_color: Color,
    /// Border color for the active slot while focused.
    pub focused_stroke_color: Color,
    /// Border color for every slot during an error flash.
    pub error_stroke_color: Color,
    /// Background of slots that already hold a character; `None` is
    /// transparent.
    pub filled_background: Option<Color>,
    /// Background of empty slots; `None` is transparent.
    pub empty_background: Option<Color>,
    /// Optional backdrop drawn inside slots instead of the flat backgrounds.
    pub backdrop: Option<SlotBackdrop>,

    /// Style applied to entered characters.
    pub text_style: Style,
    /// How entered characters are filtered and transformed.
    pub input_mode: InputMode,
    /// Whether characters are shown or masked.
    pub echo_mode: EchoMode,
    /// Mask character used in [`EchoMode::EchoPassword`].
    pub mask_char: char,

    /// Whether a blinking caret is drawn in the next empty slot.
    pub show_caret: bool,
    /// Style applied to the caret glyph.
    pub caret_style: Style,
    /// Caret weight; values above 1 select a heavy bar glyph.
    pub caret_width: usize,
    /// Half-period of the caret blink.
    pub blink_speed: Duration,

    /// Horizontal padding, in cells, on each side of the row.
    pub padding_horizontal: usize,
    /// Vertical padding, in cells, above and below the row.
    pub padding_vertical: usize,

    /// KeyMap encodes the keybindings.
    pub key_map: KeyMap,

    pub(super) value: Vec<char>,
    pub(super) focus: bool,
    pub(super) error: bool,
    pub(super) error_tag: usize,
    pub(super) caret_visible: bool,
    pub(super) blink_tag: usize,
    pub(super) id: usize,
    pub(super) on_complete: Option<CompleteFunc>,
}

/// Creates a new pin input with default settings: four numeric slots,
/// square boxes, no caret, characters echoed as-is.
pub fn new() -> Model {
    Model {
        err: None,
        slot_count: 4,
        shape: SlotShape::Square,
        box_width: 5,
        box_height: 3,
        spacing: 1,
        corner_radius: 1,
        stroke_width: 1,
        stroke_color: Color::from("240"),
        focused_stroke_color: Color::from("15"),
        error_stroke_color: Color::from("9"),
        filled_background: Some(Color::from("236")),
        empty_background: None,
        backdrop: None,
        text_style: Style::new(),
        input_mode: InputMode::Numeric,
        echo_mode: EchoMode::EchoNormal,
        mask_char: '●',
        show_caret: false,
        caret_style: Style::new(),
        caret_width: 1,
        blink_speed: DEFAULT_BLINK_SPEED,
        padding_horizontal: 0,
        padding_vertical: 0,
        key_map: default_key_map(),
        value: Vec::new(),
        focus: false,
        error: false,
        error_tag: 0,
        caret_visible: false,
        blink_tag: 0,
        id: next_id(),
        on_complete: None,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

/// Creates a command that retrieves text from the system clipboard.
///
/// The resulting text is delivered as a [`PasteMsg`] and runs through the
/// same filtering as typed input. Failures are delivered as
/// [`PasteErrMsg`] and surfaced on [`Model::err`].
pub fn paste() -> Cmd {
    tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = new();
        let cmd = model.focus();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
