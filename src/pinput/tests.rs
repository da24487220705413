//! Tests for the pin input component.

use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use bubbletea_rs::{KeyMsg, Msg};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg
    }

    fn type_str(m: &mut Model, s: &str) {
        for ch in s.chars() {
            let _ = m.update(key(KeyCode::Char(ch)));
        }
    }

    /// Registers a counter + last-value capture as the completion callback.
    fn track_completion(m: &mut Model) -> (Arc<AtomicUsize>, Arc<Mutex<String>>) {
        let count = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(Mutex::new(String::new()));
        let (c, l) = (count.clone(), last.clone());
        m.on_complete(move |pin| {
            c.fetch_add(1, Ordering::SeqCst);
            *l.lock().unwrap() = pin.to_string();
        });
        (count, last)
    }

    #[test]
    fn test_new_default_values() {
        let pin = new();

        assert_eq!(pin.slot_count(), 4);
        assert_eq!(pin.shape, SlotShape::Square);
        assert_eq!(pin.box_width, 5);
        assert_eq!(pin.box_height, 3);
        assert_eq!(pin.spacing, 1);
        assert_eq!(pin.input_mode, InputMode::Numeric);
        assert_eq!(pin.echo_mode, EchoMode::EchoNormal);
        assert_eq!(pin.mask_char, '●');
        assert!(!pin.show_caret);
        assert_eq!(pin.blink_speed, DEFAULT_BLINK_SPEED);
        assert_eq!(pin.value(), "");
        assert!(!pin.focused());
        assert!(!pin.has_error());
        assert!(pin.err.is_none());
    }

    #[test]
    fn test_typed_pin_completes_once() {
        let mut pin = new();
        let _ = pin.focus();
        let (count, last) = track_completion(&mut pin);

        type_str(&mut pin, "123");
        assert_eq!(count.load(Ordering::SeqCst), 0);

        let cmd = pin.update(key(KeyCode::Char('4')));
        assert!(cmd.is_some());
        assert_eq!(pin.value(), "1234");
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(*last.lock().unwrap(), "1234");

        // Further keystrokes are swallowed and never re-fire completion.
        let _ = pin.update(key(KeyCode::Char('5')));
        assert_eq!(pin.value(), "1234");
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_numeric_mode_rejects_non_digits() {
        let mut pin = new();
        let _ = pin.focus();

        type_str(&mut pin, "1a2b!");
        assert_eq!(pin.value(), "12");
    }

    #[test]
    fn test_buffer_never_exceeds_slot_count() {
        let mut pin = new();
        let _ = pin.focus();

        type_str(&mut pin, "123456789");
        assert_eq!(pin.value(), "1234");

        let _ = pin.commit_text("987654321");
        assert_eq!(pin.value().chars().count(), 4);
    }

    #[test]
    fn test_bulk_commit_filters_and_completes_once() {
        let mut pin = new();
        let _ = pin.focus();
        let (count, last) = track_completion(&mut pin);

        let cmd = pin.commit_text("12a34");
        assert!(cmd.is_some());
        assert_eq!(pin.value(), "1234");
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(*last.lock().unwrap(), "1234");
    }

    #[test]
    fn test_uppercase_mode_via_set_value() {
        let mut pin = new();
        pin.set_slot_count(6);
        pin.input_mode = InputMode::TextUppercase;
        let (count, last) = track_completion(&mut pin);

        let _ = pin.set_value("123dfc");
        assert_eq!(pin.value(), "123DFC");
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(*last.lock().unwrap(), "123DFC");
    }

    #[test]
    fn test_uppercase_mode_via_keys() {
        let mut pin = new();
        pin.input_mode = InputMode::TextUppercase;
        let _ = pin.focus();

        type_str(&mut pin, "aB1z");
        assert_eq!(pin.value(), "AB1Z");
    }

    #[test]
    fn test_set_value_truncates() {
        let mut pin = new();
        let _ = pin.set_value("123456");
        assert_eq!(pin.value(), "1234");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut pin = new();
        let _ = pin.focus();
        let (count, _) = track_completion(&mut pin);

        let cmd = pin.update(key(KeyCode::Backspace));
        assert!(cmd.is_none());
        assert_eq!(pin.value(), "");
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_backspace_removes_last_and_never_completes() {
        let mut pin = new();
        let _ = pin.focus();
        let (count, _) = track_completion(&mut pin);

        type_str(&mut pin, "123");
        let _ = pin.update(key(KeyCode::Backspace));
        assert_eq!(pin.value(), "12");

        // Refill to full, delete, refill: completion fires on each
        // transition to full, not on deletion.
        type_str(&mut pin, "34");
        assert_eq!(count.load(Ordering::SeqCst), 1);
        let _ = pin.update(key(KeyCode::Backspace));
        type_str(&mut pin, "4");
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_reset_clears_buffer_and_error() {
        let mut pin = new();
        let _ = pin.focus();
        let (count, _) = track_completion(&mut pin);

        type_str(&mut pin, "12");
        let _ = pin.show_error();
        assert!(pin.has_error());

        pin.reset();
        assert_eq!(pin.value(), "");
        assert!(!pin.has_error());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_error_clear_msg_matching_tag_clears() {
        let mut pin = new();
        let _ = pin.show_error_for(Duration::from_millis(500));
        assert!(pin.has_error());

        let msg = Box::new(ErrorClearMsg {
            id: pin.id,
            tag: pin.error_tag,
        }) as Msg;
        let _ = pin.update(msg);
        assert!(!pin.has_error());
    }

    #[test]
    fn test_error_retrigger_last_call_wins() {
        let mut pin = new();
        let _ = pin.show_error_for(Duration::from_millis(500));
        let first_tag = pin.error_tag;
        let _ = pin.show_error_for(Duration::from_millis(500));

        // The first timer's message is stale and must not clear the flash.
        let stale = Box::new(ErrorClearMsg {
            id: pin.id,
            tag: first_tag,
        }) as Msg;
        let _ = pin.update(stale);
        assert!(pin.has_error());

        let current = Box::new(ErrorClearMsg {
            id: pin.id,
            tag: pin.error_tag,
        }) as Msg;
        let _ = pin.update(current);
        assert!(!pin.has_error());
    }

    #[test]
    fn test_keystroke_clears_error_before_timer() {
        let mut pin = new();
        let _ = pin.focus();
        let _ = pin.show_error();
        assert!(pin.has_error());

        // Even a rejected character clears the flash on key-down.
        let _ = pin.update(key(KeyCode::Char('x')));
        assert!(!pin.has_error());
        assert_eq!(pin.value(), "");

        // The pending timer then redundantly clears an already-clear flag.
        let msg = Box::new(ErrorClearMsg {
            id: pin.id,
            tag: pin.error_tag,
        }) as Msg;
        let _ = pin.update(msg);
        assert!(!pin.has_error());
    }

    #[test]
    fn test_commit_text_clears_error() {
        let mut pin = new();
        let _ = pin.focus();
        let _ = pin.show_error();

        let _ = pin.commit_text("1");
        assert!(!pin.has_error());
    }

    #[test]
    fn test_set_value_leaves_error_untouched() {
        let mut pin = new();
        let _ = pin.show_error();

        let _ = pin.set_value("12");
        assert!(pin.has_error());
    }

    #[test]
    fn test_blink_toggles_on_matching_msg() {
        let mut pin = new();
        pin.show_caret = true;
        let _ = pin.focus();
        assert!(pin.caret_visible);

        let msg = Box::new(BlinkMsg {
            id: pin.id,
            tag: pin.blink_tag,
        }) as Msg;
        let cmd = pin.update(msg);
        assert!(!pin.caret_visible);
        // The toggle reschedules itself.
        assert!(cmd.is_some());
    }

    #[test]
    fn test_blink_ignores_stale_and_blurred() {
        let mut pin = new();
        pin.show_caret = true;
        let _ = pin.focus();

        let stale = Box::new(BlinkMsg {
            id: pin.id,
            tag: pin.blink_tag + 1,
        }) as Msg;
        let cmd = pin.update(stale);
        assert!(pin.caret_visible);
        assert!(cmd.is_none());

        pin.blur();
        assert!(!pin.caret_visible);
        let msg = Box::new(BlinkMsg {
            id: pin.id,
            tag: pin.blink_tag,
        }) as Msg;
        let cmd = pin.update(msg);
        assert!(cmd.is_none());
        assert!(!pin.caret_visible);
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut pin = new();
        type_str(&mut pin, "1234");
        assert_eq!(pin.value(), "");
    }

    #[test]
    fn test_measurement_formula() {
        let pin = new();
        // 4 slots of 5 cells, 3 gaps of 1 cell.
        assert_eq!(pin.desired_width(), 23);
        assert_eq!(pin.desired_height(), 3);

        let mut pin = new();
        pin.set_slot_count(6);
        pin.box_width = 3;
        pin.spacing = 2;
        pin.padding_horizontal = 1;
        pin.padding_vertical = 1;
        assert_eq!(pin.desired_width(), 6 * 3 + 5 * 2 + 2);
        assert_eq!(pin.desired_height(), 3 + 2);
    }

    #[test]
    fn test_measure_resolves_constraints() {
        let pin = new();
        assert_eq!(
            pin.measure(SizeConstraint::Unbounded, SizeConstraint::Unbounded),
            (23, 3)
        );
        assert_eq!(
            pin.measure(SizeConstraint::AtMost(10), SizeConstraint::AtMost(80)),
            (10, 3)
        );
        assert_eq!(
            pin.measure(SizeConstraint::Exactly(40), SizeConstraint::Exactly(1)),
            (40, 1)
        );
    }

    #[test]
    fn test_view_dimensions_match_measurement() {
        let mut pin = new();
        let _ = pin.set_value("12");
        let view = pin.view();
        let plain = strip_ansi_escapes::strip_str(&view);
        let lines: Vec<&str> = plain.lines().collect();

        assert_eq!(lines.len(), pin.desired_height());
        for line in &lines {
            assert_eq!(line.chars().count(), pin.desired_width());
        }
    }

    #[test]
    fn test_view_shows_entered_characters() {
        let mut pin = new();
        let _ = pin.set_value("42");
        let plain = strip_ansi_escapes::strip_str(&pin.view());

        assert!(plain.contains('4'));
        assert!(plain.contains('2'));
        assert!(plain.contains('┌'));
    }

    #[test]
    fn test_view_masks_in_password_mode() {
        let mut pin = new();
        pin.echo_mode = EchoMode::EchoPassword;
        let _ = pin.set_value("42");
        let plain = strip_ansi_escapes::strip_str(&pin.view());

        assert!(!plain.contains('4'));
        assert!(!plain.contains('2'));
        assert_eq!(plain.matches('●').count(), 2);
    }

    #[test]
    fn test_view_shapes() {
        let mut pin = new();
        pin.shape = SlotShape::RoundedSquare;
        assert!(strip_ansi_escapes::strip_str(&pin.view()).contains('╭'));

        pin.shape = SlotShape::Circle;
        let plain = strip_ansi_escapes::strip_str(&pin.view());
        assert!(plain.contains('('));
        assert!(plain.contains(')'));

        pin.shape = SlotShape::Square;
        pin.stroke_width = 2;
        assert!(strip_ansi_escapes::strip_str(&pin.view()).contains('┏'));
    }

    #[test]
    fn test_caret_drawn_only_in_active_slot_while_visible() {
        let mut pin = new();
        pin.show_caret = true;
        let _ = pin.focus();
        let _ = pin.set_value("1");

        // 4 slots contribute 8 side borders; the caret is the ninth bar.
        let plain = strip_ansi_escapes::strip_str(&pin.view());
        assert_eq!(plain.matches('│').count(), 9);

        pin.caret_visible = false;
        let plain = strip_ansi_escapes::strip_str(&pin.view());
        assert_eq!(plain.matches('│').count(), 8);
    }

    #[test]
    fn test_caret_not_drawn_when_full() {
        let mut pin = new();
        pin.show_caret = true;
        let _ = pin.focus();
        let _ = pin.set_value("1234");

        let plain = strip_ansi_escapes::strip_str(&pin.view());
        assert_eq!(plain.matches('│').count(), 8);
    }

    #[test]
    fn test_shrinking_slot_count_truncates() {
        let mut pin = new();
        let _ = pin.focus();
        type_str(&mut pin, "123");
        pin.set_slot_count(2);
        assert_eq!(pin.value(), "12");
        assert_eq!(pin.slot_count(), 2);
    }

    #[tokio::test]
    async fn test_completed_cmd_carries_pin() {
        let mut pin = new();
        let _ = pin.focus();

        let cmd = pin.commit_text("1234").expect("completion command");
        let msg = cmd.await.expect("message");
        let completed = msg
            .downcast_ref::<CompletedMsg>()
            .expect("CompletedMsg");
        assert_eq!(completed.pin, "1234");
        assert_eq!(completed.id, pin.id);
    }

    #[tokio::test]
    async fn test_set_value_emits_resync() {
        let mut pin = new();
        let cmd = pin.set_value("12");
        let msg = cmd.await.expect("message");
        let resync = msg
            .downcast_ref::<ResyncInputMsg>()
            .expect("ResyncInputMsg");
        assert_eq!(resync.id, pin.id);
    }

    #[tokio::test]
    async fn test_paste_msg_routes_through_commit_path() {
        let mut pin = new();
        let _ = pin.focus();
        let (count, last) = track_completion(&mut pin);

        let msg = Box::new(PasteMsg("98x76".to_string())) as Msg;
        let cmd = pin.update(msg);
        assert_eq!(pin.value(), "9876");
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(*last.lock().unwrap(), "9876");
        assert!(cmd.is_some());
    }
}
