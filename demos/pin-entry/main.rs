//! Pin entry demo: a masked numeric pin checked against "1234".
//!
//! Type digits to fill the slots, backspace to correct, ctrl+e to preview
//! the error flash, ctrl+a to autofill via `set_value`, esc or ctrl+c to
//! quit.

use bubbletea_pinput::prelude::*;
use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

struct App {
    pin: PinInput,
    status: String,
    status_style: Style,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut pin = pinput_new();
        pin.echo_mode = EchoMode::EchoPassword;
        pin.show_caret = true;
        pin.shape = SlotShape::RoundedSquare;
        let focus_cmd = pin.focus();

        let app = Self {
            pin,
            status: "Enter your PIN".to_string(),
            status_style: Style::new().foreground(Color::from("240")),
        };
        (app, Some(focus_cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(done) = msg.downcast_ref::<CompletedMsg>() {
            if done.pin == "1234" {
                self.status = "Success! PIN accepted.".to_string();
                self.pin.reset();
                return None;
            }
            self.status = "Incorrect PIN".to_string();
            return Some(self.pin.show_error());
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            match (key_msg.key, key_msg.modifiers) {
                (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                    return Some(quit());
                }
                (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                    self.status = "Error flash preview".to_string();
                    return Some(self.pin.show_error());
                }
                (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                    self.status = "Autofilled".to_string();
                    return Some(self.pin.set_value("1234"));
                }
                _ => {}
            }
        }

        self.pin.update(msg)
    }

    fn view(&self) -> String {
        format!(
            "PIN entry\n\n{}\n\n{}\n{}",
            self.pin.view(),
            self.status_style.render(&self.status),
            self.status_style
                .render("digits: type · ctrl+e: flash error · ctrl+a: autofill · esc: quit"),
        )
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<App>::builder().build()?;
    program.run().await?;
    Ok(())
}
