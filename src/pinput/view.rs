//! Rendering and measurement for the pin input component.

use super::model::Model;
use super::types::{resolve_size, EchoMode, SizeConstraint, SlotShape};
use lipgloss_extras::lipgloss::{self, join_horizontal, Color, Style};
use unicode_width::UnicodeWidthChar;

/// The glyphs a slot box outline is drawn with.
struct BorderGlyphs {
    top_left: &'static str,
    top: &'static str,
    top_right: &'static str,
    left: &'static str,
    right: &'static str,
    bottom_left: &'static str,
    bottom: &'static str,
    bottom_right: &'static str,
}

const SQUARE: BorderGlyphs = BorderGlyphs {
    top_left: "┌",
    top: "─",
    top_right: "┐",
    left: "│",
    right: "│",
    bottom_left: "└",
    bottom: "─",
    bottom_right: "┘",
};

const SQUARE_HEAVY: BorderGlyphs = BorderGlyphs {
    top_left: "┏",
    top: "━",
    top_right: "┓",
    left: "┃",
    right: "┃",
    bottom_left: "┗",
    bottom: "━",
    bottom_right: "┛",
};

const ROUNDED: BorderGlyphs = BorderGlyphs {
    top_left: "╭",
    top: "─",
    top_right: "╮",
    left: "│",
    right: "│",
    bottom_left: "╰",
    bottom: "─",
    bottom_right: "╯",
};

// Curved corners with paren sides read as a circle on the cell grid.
const CIRCLE: BorderGlyphs = BorderGlyphs {
    top_left: "╭",
    top: "─",
    top_right: "╮",
    left: "(",
    right: ")",
    bottom_left: "╰",
    bottom: "─",
    bottom_right: "╯",
};

impl Model {
    /// Renders the widget in its current state.
    ///
    /// Each slot is drawn as a bordered box; border color is the error color
    /// during an error flash, the focused color on the active slot while
    /// focused, and the normal color otherwise. Filled slots show their
    /// character (or the mask character in password mode) centered; the
    /// caret, when enabled and in its visible blink phase, occupies the next
    /// empty slot.
    pub fn view(&self) -> String {
        let slots: Vec<String> = (0..self.slot_count).map(|i| self.render_slot(i)).collect();

        let gap = " ".repeat(self.spacing);
        let mut parts: Vec<&str> = Vec::with_capacity(slots.len() * 2);
        for (i, slot) in slots.iter().enumerate() {
            if i > 0 && self.spacing > 0 {
                parts.push(&gap);
            }
            parts.push(slot);
        }
        let row = join_horizontal(lipgloss::TOP, &parts);

        if self.padding_horizontal > 0 || self.padding_vertical > 0 {
            Style::new()
                .padding(
                    self.padding_vertical as i32,
                    self.padding_horizontal as i32,
                    self.padding_vertical as i32,
                    self.padding_horizontal as i32,
                )
                .render(&row)
        } else {
            row
        }
    }

    /// Desired width: slots plus gaps plus horizontal padding.
    pub fn desired_width(&self) -> usize {
        self.slot_count * self.box_width
            + self.slot_count.saturating_sub(1) * self.spacing
            + 2 * self.padding_horizontal
    }

    /// Desired height: one box row plus vertical padding.
    pub fn desired_height(&self) -> usize {
        self.box_height + 2 * self.padding_vertical
    }

    /// Resolves the desired size against host-imposed constraints.
    ///
    /// An `Exactly` constraint is honored as given; `AtMost` caps the
    /// desired dimension.
    pub fn measure(&self, width: SizeConstraint, height: SizeConstraint) -> (usize, usize) {
        (
            resolve_size(self.desired_width(), width),
            resolve_size(self.desired_height(), height),
        )
    }

    fn border_glyphs(&self) -> &'static BorderGlyphs {
        match self.shape {
            SlotShape::Square => {
                if self.stroke_width > 1 {
                    &SQUARE_HEAVY
                } else {
                    &SQUARE
                }
            }
            SlotShape::RoundedSquare => {
                if self.corner_radius > 0 {
                    &ROUNDED
                } else if self.stroke_width > 1 {
                    &SQUARE_HEAVY
                } else {
                    &SQUARE
                }
            }
            SlotShape::Circle => &CIRCLE,
        }
    }

    fn stroke_style(&self, index: usize) -> Style {
        let color = if self.error {
            self.error_stroke_color.clone()
        } else if self.focus && index == self.value.len() {
            self.focused_stroke_color.clone()
        } else {
            self.stroke_color.clone()
        };
        Style::new().foreground(color)
    }

    /// The character shown in a slot, if any: the entered character (masked
    /// in password mode) for filled slots, the caret for the active slot
    /// during the visible blink phase.
    fn slot_content(&self, index: usize) -> Option<(char, Style)> {
        if index < self.value.len() {
            let ch = match self.echo_mode {
                EchoMode::EchoPassword => self.mask_char,
                EchoMode::EchoNormal => self.value[index],
            };
            return Some((ch, self.text_style.clone()));
        }
        if self.show_caret
            && self.focus
            && self.caret_visible
            && !self.is_full()
            && index == self.value.len()
        {
            let glyph = if self.caret_width > 1 { '┃' } else { '│' };
            return Some((glyph, self.caret_style.clone()));
        }
        None
    }

    /// Renders one slot as a `box_width` × `box_height` block.
    ///
    /// Degenerate dimensions (below 3 cells in either direction) collapse to
    /// whatever still fits; keeping them sensible is caller responsibility.
    fn render_slot(&self, index: usize) -> String {
        if let Some(backdrop) = &self.backdrop {
            return self.render_backdrop_slot(index, backdrop);
        }

        let b = self.border_glyphs();
        let stroke = self.stroke_style(index);
        let inner_w = self.box_width.saturating_sub(2);
        let inner_h = self.box_height.saturating_sub(2);
        let content_row = inner_h.saturating_sub(1) / 2;

        let fill_color = if index < self.value.len() {
            self.filled_background.clone()
        } else {
            self.empty_background.clone()
        };

        if self.box_height < 3 {
            let interior = self.interior_line(index, inner_w, &fill_color);
            return format!(
                "{}{}{}",
                stroke.render(b.left),
                interior,
                stroke.render(b.right)
            );
        }

        let mut lines = Vec::with_capacity(self.box_height);

        lines.push(stroke.render(&format!(
            "{}{}{}",
            b.top_left,
            b.top.repeat(inner_w),
            b.top_right
        )));

        for row in 0..inner_h {
            let interior = if row == content_row {
                self.interior_line(index, inner_w, &fill_color)
            } else {
                self.fill_line(inner_w, &fill_color)
            };
            lines.push(format!(
                "{}{}{}",
                stroke.render(b.left),
                interior,
                stroke.render(b.right)
            ));
        }

        lines.push(stroke.render(&format!(
            "{}{}{}",
            b.bottom_left,
            b.bottom.repeat(inner_w),
            b.bottom_right
        )));

        lines.join("\n")
    }

    /// An interior row with the slot's character (or caret) centered in it.
    fn interior_line(&self, index: usize, inner_w: usize, fill: &Option<Color>) -> String {
        match self.slot_content(index) {
            Some((ch, style)) => {
                let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1).min(inner_w);
                let pad = inner_w.saturating_sub(ch_width);
                let left = pad / 2;
                let right = pad - left;
                let style = match fill {
                    Some(color) => style.background(color.clone()),
                    None => style,
                };
                format!(
                    "{}{}{}",
                    self.fill_line(left, fill),
                    style.render(&ch.to_string()),
                    self.fill_line(right, fill)
                )
            }
            None => self.fill_line(inner_w, fill),
        }
    }

    fn fill_line(&self, width: usize, fill: &Option<Color>) -> String {
        let blank = " ".repeat(width);
        if width == 0 {
            return blank;
        }
        match fill {
            Some(color) => Style::new().background(color.clone()).render(&blank),
            None => blank,
        }
    }

    /// A slot drawn with the decorative backdrop: the whole box area is
    /// tiled with the backdrop glyph in place of borders and fills, with the
    /// slot content centered over it.
    fn render_backdrop_slot(&self, index: usize, backdrop: &super::types::SlotBackdrop) -> String {
        let active = self.focus && index == self.value.len();
        let style = if active {
            backdrop.focused_style.clone()
        } else {
            backdrop.style.clone()
        };

        let glyph_width = UnicodeWidthChar::width(backdrop.glyph).unwrap_or(1).max(1);
        let reps = self.box_width / glyph_width;
        let tile: String = backdrop.glyph.to_string().repeat(reps);
        let content_row = self.box_height.saturating_sub(1) / 2;

        let mut lines = Vec::with_capacity(self.box_height.max(1));
        for row in 0..self.box_height.max(1) {
            if row == content_row {
                if let Some((ch, ch_style)) = self.slot_content(index) {
                    let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
                    let pad = self.box_width.saturating_sub(ch_width);
                    let left = pad / 2;
                    let right = pad - left;
                    let left_tile: String = backdrop.glyph.to_string().repeat(left / glyph_width);
                    let right_tile: String = backdrop.glyph.to_string().repeat(right / glyph_width);
                    lines.push(format!(
                        "{}{}{}",
                        style.render(&left_tile),
                        ch_style.render(&ch.to_string()),
                        style.render(&right_tile)
                    ));
                    continue;
                }
            }
            lines.push(style.render(&tile));
        }

        lines.join("\n")
    }
}
