//! Mutation, query, and update-loop methods for the pin input model.

use super::model::{paste, Model, DEFAULT_ERROR_DURATION};
use super::types::{
    BlinkMsg, CompleteFunc, CompletedMsg, ErrorClearMsg, InputMode, PasteErrMsg, PasteMsg,
    ResyncInputMsg,
};
use bubbletea_rs::{tick, Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Duration;

fn noop() -> Cmd {
    Box::pin(async { None })
}

impl Model {
    /// Returns the current pin content. No side effects.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Returns the number of characters currently entered.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Reports whether no characters have been entered.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Returns the number of slots.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Sets the number of slots, truncating the buffer if it no longer fits.
    pub fn set_slot_count(&mut self, count: usize) {
        self.slot_count = count;
        self.value.truncate(count);
    }

    /// Reports whether every slot is filled.
    pub fn is_full(&self) -> bool {
        self.value.len() >= self.slot_count
    }

    /// Replaces the pin content programmatically, e.g. for autofill.
    ///
    /// The text runs through the same per-mode filtering as typed input and
    /// is truncated to the slot count. If the resulting buffer is full, the
    /// completion callback runs immediately.
    ///
    /// The returned command emits a [`ResyncInputMsg`]; hosts bridging a
    /// stateful input method must recreate their input session on it, or the
    /// stale session will swallow subsequent keystrokes. An active error
    /// flash is deliberately left untouched.
    pub fn set_value(&mut self, s: &str) -> Cmd {
        self.value.clear();
        self.insert_filtered(s);

        if self.is_full() {
            self.invoke_on_complete();
        }

        let id = self.id;
        tick(Duration::from_nanos(1), move |_| {
            Box::new(ResyncInputMsg { id }) as Msg
        })
    }

    /// Empties the buffer and clears any error flash.
    ///
    /// Never invokes the completion callback.
    pub fn reset(&mut self) {
        self.value.clear();
        self.error = false;
    }

    /// Reports whether the error flash is currently active.
    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Starts an error flash for the default duration (one second).
    ///
    /// The returned command must be handed to the runtime; it delivers the
    /// one-shot [`ErrorClearMsg`] that ends the flash.
    pub fn show_error(&mut self) -> Cmd {
        self.show_error_for(DEFAULT_ERROR_DURATION)
    }

    /// Starts an error flash for the given duration.
    ///
    /// Re-triggering before the previous flash expires resets the clock:
    /// the tag check in [`update`](Model::update) drops the earlier timer's
    /// message, so the last call wins.
    pub fn show_error_for(&mut self, duration: Duration) -> Cmd {
        self.error = true;
        self.error_tag += 1;
        let id = self.id;
        let tag = self.error_tag;
        tick(duration, move |_| {
            Box::new(ErrorClearMsg { id, tag }) as Msg
        })
    }

    /// Registers the completion callback, replacing any previous one.
    ///
    /// The callback is invoked with the full pin whenever the buffer reaches
    /// slot count, whether via typed input, pasted text, or
    /// [`set_value`](Model::set_value).
    pub fn on_complete<F>(&mut self, f: F)
    where
        F: Fn(&str) + Send + 'static,
    {
        self.on_complete = Some(Box::new(f) as CompleteFunc);
    }

    /// Reports whether the widget currently has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Focuses the widget so it receives key input, and starts the caret
    /// blinking if the caret is enabled.
    pub fn focus(&mut self) -> Cmd {
        self.focus = true;
        if self.show_caret {
            self.caret_visible = true;
            self.blink_cmd()
        } else {
            noop()
        }
    }

    /// Removes focus. The caret stops blinking immediately.
    pub fn blur(&mut self) {
        self.focus = false;
        self.caret_visible = false;
    }

    /// Bulk text entry, e.g. a clipboard paste or an IME composition commit.
    ///
    /// Behaves exactly like typing each character in sequence, but renders
    /// once: an active error flash is cleared, characters are filtered per
    /// the input mode, entry stops at the last slot, and completion fires at
    /// most once.
    pub fn commit_text(&mut self, text: &str) -> Option<Cmd> {
        self.error = false;
        let was_full = self.is_full();
        self.insert_filtered(text);
        if !was_full && self.is_full() {
            self.invoke_on_complete();
            return Some(self.completed_cmd());
        }
        None
    }

    /// Update is the Bubble Tea update loop for the widget.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(clear) = msg.downcast_ref::<ErrorClearMsg>() {
            // A stale tag means the flash was re-triggered (or already
            // cleared by an edit) after this timer was scheduled.
            if clear.id == self.id && clear.tag == self.error_tag {
                self.error = false;
            }
            return None;
        }

        if let Some(blink) = msg.downcast_ref::<BlinkMsg>() {
            if !self.focus || !self.show_caret {
                return None;
            }
            if blink.id != self.id || blink.tag != self.blink_tag {
                return None;
            }
            self.caret_visible = !self.caret_visible;
            return Some(self.blink_cmd());
        }

        if !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            return self.commit_text(&paste_msg.0.clone());
        }

        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            self.err = Some(paste_err.0.clone());
        }

        None
    }

    /// Single-keystroke entry path.
    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        // Any key press ends an error flash, even one that mutates nothing.
        self.error = false;

        if self.key_map.paste.matches(key_msg) {
            return Some(paste());
        }

        if self.key_map.delete_character_backward.matches(key_msg) {
            // No-op on an empty buffer; never fires completion.
            self.value.pop();
            return None;
        }

        if let KeyCode::Char(ch) = key_msg.key {
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                if self.is_full() {
                    return None;
                }
                self.insert_filtered(&ch.to_string());
                if self.is_full() {
                    self.invoke_on_complete();
                    return Some(self.completed_cmd());
                }
            }
        }

        None
    }

    /// The one filtering/append routine shared by the keystroke path, the
    /// bulk commit path, and `set_value`, so the three can never diverge.
    ///
    /// Appends characters until the buffer is full: numeric mode drops
    /// non-digits, uppercase mode transforms as it appends.
    pub(super) fn insert_filtered(&mut self, text: &str) {
        for ch in text.chars() {
            if self.is_full() {
                break;
            }
            match self.input_mode {
                InputMode::Numeric => {
                    if ch.is_ascii_digit() {
                        self.value.push(ch);
                    }
                }
                InputMode::Text => self.value.push(ch),
                InputMode::TextUppercase => {
                    for upper in ch.to_uppercase() {
                        if self.is_full() {
                            break;
                        }
                        self.value.push(upper);
                    }
                }
            }
        }
    }

    pub(super) fn invoke_on_complete(&self) {
        if let Some(cb) = &self.on_complete {
            cb(&self.value());
        }
    }

    /// Command announcing a completed pin to the host, its cue to dismiss
    /// whatever input affordance it presented.
    fn completed_cmd(&self) -> Cmd {
        let id = self.id;
        let pin = self.value();
        tick(Duration::from_nanos(1), move |_| {
            Box::new(CompletedMsg {
                id,
                pin: pin.clone(),
            }) as Msg
        })
    }

    /// Schedules the next caret blink toggle.
    fn blink_cmd(&mut self) -> Cmd {
        self.blink_tag += 1;
        let id = self.id;
        let tag = self.blink_tag;
        tick(self.blink_speed, move |_| Box::new(BlinkMsg { id, tag }) as Msg)
    }
}
