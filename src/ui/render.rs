// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

use super::{
    msg_theme::style_for,
    style::{border_style, button_style, cursor_style, placeholder_style, result_style},
    Focus, PREDICT_LABEL, TITLE, UI, USER_GUIDE,
};

const MAX_BANNER_HEIGHT: usize = 8;
const KEYS_HINT: &str = "Tab: next field | Ctrl-R, F5: predict | Ctrl-L: clear field | F1: help | Ctrl-Q: quit";

pub fn render_ui(f: &mut Frame, ui: &mut UI) {
    let banner: Vec<Line> = ui
        .banner()
        .map(|text| {
            text.lines()
                .take(MAX_BANNER_HEIGHT)
                .map(|l| Line::from(l.to_string()))
                .collect()
        })
        .unwrap_or_default();

    let [title_area, banner_area, a_area, b_area, button_area, result_area, msg_area, keys_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(banner.len() as u16),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(f.area());

    f.render_widget(
        Paragraph::new(TITLE)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        title_area,
    );
    if !banner.is_empty() {
        f.render_widget(
            Paragraph::new(banner).alignment(Alignment::Center),
            banner_area,
        );
    }

    render_seq_input(f, ui, Focus::ProteinA, a_area);
    render_seq_input(f, ui, Focus::ProteinB, b_area);
    render_button(f, ui, button_area);

    if let Some(result) = ui.app.result_line() {
        f.render_widget(Paragraph::new(result).style(result_style(ui)), result_area);
    }

    let msg = ui.app.current_message();
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(msg.prefix.clone()),
            Span::raw(msg.message.clone()),
        ]))
        .style(style_for(msg.kind, ui.theme())),
        msg_area,
    );

    f.render_widget(
        Paragraph::new(KEYS_HINT).style(Style::default().add_modifier(Modifier::DIM)),
        keys_area,
    );

    if ui.help_shown() {
        render_help(f, ui, f.area());
    }
}

fn render_seq_input(f: &mut Frame, ui: &UI, field: Focus, area: Rect) {
    let Some(editor) = ui.editor(field) else {
        return;
    };
    let focused = ui.focus() == field;
    let block = Block::bordered()
        .title(format!(
            " {} ({}/{}) ",
            field.label(),
            editor.len(),
            editor.max_chars()
        ))
        .border_style(border_style(ui, focused));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = if editor.is_empty() {
        let mut spans = Vec::new();
        if focused {
            spans.push(Span::styled(" ", cursor_style()));
        }
        spans.push(Span::styled(field.placeholder(), placeholder_style()));
        vec![Line::from(spans)]
    } else {
        let (rows, (cur_row, cur_col)) = editor.wrap_rows(inner.width as usize);
        let height = (inner.height as usize).max(1);
        // Keep the cursor row in view.
        let top = cur_row.saturating_sub(height - 1);
        rows.into_iter()
            .enumerate()
            .skip(top)
            .take(height)
            .map(|(i, row)| {
                if focused && i == cur_row {
                    cursor_line(row, cur_col)
                } else {
                    Line::from(row)
                }
            })
            .collect()
    };
    f.render_widget(Paragraph::new(lines), inner);
}

fn cursor_line(row: String, col: usize) -> Line<'static> {
    let chars: Vec<char> = row.chars().collect();
    let before: String = chars[..col.min(chars.len())].iter().collect();
    let (under, after): (String, String) = if col < chars.len() {
        (chars[col].to_string(), chars[col + 1..].iter().collect())
    } else {
        (String::from(" "), String::new())
    };
    Line::from(vec![
        Span::raw(before),
        Span::styled(under, cursor_style()),
        Span::raw(after),
    ])
}

fn render_button(f: &mut Frame, ui: &UI, area: Rect) {
    let label = if ui.is_computing() {
        String::from("[ Predicting... ]")
    } else {
        format!("[ {} ]", PREDICT_LABEL)
    };
    let [button_area] = Layout::horizontal([Constraint::Length(label.chars().count() as u16)])
        .flex(Flex::Center)
        .areas(area);
    let focused = ui.focus() == Focus::PredictButton;
    f.render_widget(
        Paragraph::new(label).style(button_style(ui, focused)),
        button_area,
    );
}

fn render_help(f: &mut Frame, ui: &UI, area: Rect) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage(10),
        Constraint::Percentage(80),
        Constraint::Percentage(10),
    ])
    .areas(area);
    let [_, popup, _] = Layout::horizontal([
        Constraint::Percentage(10),
        Constraint::Percentage(80),
        Constraint::Percentage(10),
    ])
    .areas(middle);
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(USER_GUIDE)
            .block(Block::bordered().title(" Help (Esc to close) "))
            .wrap(Wrap { trim: false })
            .scroll((ui.help_scroll, 0)),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use super::cursor_line;

    #[test]
    fn test_cursor_line_inside_and_at_end() {
        let line = cursor_line(String::from("MKT"), 1);
        let texts: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["M", "K", "T"]);

        let line = cursor_line(String::from("MKT"), 3);
        let texts: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["MKT", " ", ""]);
    }
}
