// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
pub mod key_handling;
mod msg_theme;
pub mod render;
pub mod seq_editor;
mod style;

use std::fmt;

use log::{debug, warn};

use crate::{
    config::ColorConfig,
    ui::seq_editor::{SeqEditor, MAX_SEQ_CHARS},
    App,
};

pub const USER_GUIDE: &str = include_str!("ui/bindings.md");

pub const TITLE: &str = "Protein Sequence Alignment";
pub const PREDICT_LABEL: &str = "Predict Identity Score";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    ProteinA,
    ProteinB,
    PredictButton,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::ProteinA => Focus::ProteinB,
            Focus::ProteinB => Focus::PredictButton,
            Focus::PredictButton => Focus::ProteinA,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::ProteinA => Focus::PredictButton,
            Focus::ProteinB => Focus::ProteinA,
            Focus::PredictButton => Focus::ProteinB,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::ProteinA => "Protein A Sequence",
            Focus::ProteinB => "Protein B Sequence",
            Focus::PredictButton => PREDICT_LABEL,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Focus::ProteinA => "Enter Protein A sequence here...",
            Focus::ProteinB => "Enter Protein B sequence here...",
            Focus::PredictButton => "",
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Color,
    Monochrome,
}

#[derive(Clone, Copy, PartialEq)]
enum InputMode {
    Normal,
    Help,
}

pub struct UI<'a> {
    app: &'a mut App,
    protein_a: SeqEditor,
    protein_b: SeqEditor,
    focus: Focus,
    input_mode: InputMode,
    theme: Theme,
    colors: ColorConfig,
    show_banner: bool,
    help_scroll: u16,
    dirty: bool,
}

impl<'a> UI<'a> {
    pub fn new(app: &'a mut App) -> Self {
        app.info_msg("Tab: next field, Enter on the button or Ctrl-R: predict, F1: help");
        UI {
            app,
            protein_a: SeqEditor::new(MAX_SEQ_CHARS),
            protein_b: SeqEditor::new(MAX_SEQ_CHARS),
            focus: Focus::ProteinA,
            input_mode: InputMode::Normal,
            theme: Theme::Color,
            colors: ColorConfig::default(),
            show_banner: true,
            help_scroll: 0,
            dirty: false,
        }
    }

    pub fn app(&self) -> &App {
        &*self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut *self.app
    }

    // ****************************************************************
    // Setup

    pub fn set_monochrome(&mut self) {
        self.theme = Theme::Monochrome;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_colors(&mut self, colors: ColorConfig) {
        self.colors = colors;
    }

    pub fn colors(&self) -> ColorConfig {
        self.colors
    }

    pub fn set_banner(&mut self, state: bool) {
        self.show_banner = state;
    }

    pub fn banner(&self) -> Option<&str> {
        if self.show_banner {
            self.app.banner()
        } else {
            None
        }
    }

    // Pre-fills an input (from the command line). Anything past the cap is dropped, with a
    // warning.
    pub fn prefill(&mut self, field: Focus, text: &str) {
        let Some(editor) = self.editor_mut(field) else {
            return;
        };
        let dropped = editor.set_text(text);
        if dropped > 0 {
            warn!("{}: {} characters past the limit dropped", field, dropped);
            self.app.warning_msg(format!(
                "{} truncated to {} characters ({} dropped)",
                field, MAX_SEQ_CHARS, dropped
            ));
        }
    }

    // ****************************************************************
    // Inputs

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn editor(&self, field: Focus) -> Option<&SeqEditor> {
        match field {
            Focus::ProteinA => Some(&self.protein_a),
            Focus::ProteinB => Some(&self.protein_b),
            Focus::PredictButton => None,
        }
    }

    fn editor_mut(&mut self, field: Focus) -> Option<&mut SeqEditor> {
        match field {
            Focus::ProteinA => Some(&mut self.protein_a),
            Focus::ProteinB => Some(&mut self.protein_b),
            Focus::PredictButton => None,
        }
    }

    fn focused_editor_mut(&mut self) -> Option<&mut SeqEditor> {
        self.editor_mut(self.focus)
    }

    pub fn protein_a_text(&self) -> String {
        self.protein_a.text()
    }

    pub fn protein_b_text(&self) -> String {
        self.protein_b.text()
    }

    pub fn type_char(&mut self, c: char) {
        let field = self.focus;
        let inserted = match self.focused_editor_mut() {
            Some(editor) => editor.insert_char(c),
            None => return,
        };
        if !inserted {
            self.app.warning_msg(format!(
                "{} is limited to {} characters",
                field, MAX_SEQ_CHARS
            ));
        }
    }

    // Bracketed paste. Goes to the focused input (or to A when the button has focus), truncated
    // to the remaining capacity.
    pub fn paste(&mut self, text: &str) {
        if self.focus == Focus::PredictButton {
            self.focus = Focus::ProteinA;
        }
        let field = self.focus;
        let Some(editor) = self.focused_editor_mut() else {
            return;
        };
        let dropped = editor.insert_str(text);
        debug!("paste into {}: {} chars, {} dropped", field, text.chars().count(), dropped);
        if dropped > 0 {
            warn!("{}: {} pasted characters past the limit dropped", field, dropped);
            self.app.warning_msg(format!(
                "{} is limited to {} characters: {} pasted characters dropped",
                field, MAX_SEQ_CHARS, dropped
            ));
        }
    }

    pub fn edit_focused<F: FnOnce(&mut SeqEditor)>(&mut self, f: F) {
        if let Some(editor) = self.focused_editor_mut() {
            f(editor);
        }
    }

    // ****************************************************************
    // Prediction

    pub fn request_prediction(&mut self) {
        self.app.begin_prediction();
    }

    pub fn is_computing(&self) -> bool {
        self.app.is_computing()
    }

    // Runs the pending prediction, if any. The caller draws the Computing state first.
    pub fn run_prediction(&mut self) {
        if self.app.is_computing() {
            let raw_a = self.protein_a.text();
            let raw_b = self.protein_b.text();
            self.app.predict(&raw_a, &raw_b);
        }
    }

    // ****************************************************************
    // Help

    pub fn show_help(&mut self) {
        self.help_scroll = 0;
        self.input_mode = InputMode::Help;
    }

    pub fn hide_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn help_shown(&self) -> bool {
        self.input_mode == InputMode::Help
    }

    pub fn help_scroll_by(&mut self, delta: i32) {
        let max = USER_GUIDE.lines().count().saturating_sub(1) as i32;
        self.help_scroll = (self.help_scroll as i32 + delta).clamp(0, max) as u16;
    }

    // ****************************************************************
    // Redraw bookkeeping

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
