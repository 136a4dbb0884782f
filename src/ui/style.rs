// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use ratatui::style::{Color, Modifier, Style};

use super::{Theme, UI};

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

pub fn result_style(ui: &UI) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match ui.theme() {
        Theme::Color => style.fg(rgb(ui.colors().result)),
        Theme::Monochrome => style,
    }
}

pub fn button_style(ui: &UI, focused: bool) -> Style {
    let mut style = match ui.theme() {
        Theme::Color => Style::default().fg(Color::White).bg(rgb(ui.colors().button)),
        Theme::Monochrome => Style::default(),
    };
    if focused {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    style
}

pub fn border_style(ui: &UI, focused: bool) -> Style {
    match (ui.theme(), focused) {
        (Theme::Color, true) => Style::default().fg(Color::LightBlue),
        (Theme::Monochrome, true) => Style::default().add_modifier(Modifier::BOLD),
        (_, false) => Style::default(),
    }
}

pub fn placeholder_style() -> Style {
    Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC)
}

pub fn cursor_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}
