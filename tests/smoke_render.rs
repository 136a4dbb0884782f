// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod common;

use crate::common::utils;

#[test]
fn renders_without_panic() {
    let mut app = utils::load_app("tests/data/gravy-model.json", None);
    let buf = utils::render(&mut app, 80, 30);
    let screen = utils::buffer_text(&buf);

    assert!(!screen.trim().is_empty());
    assert!(screen.contains("Protein Sequence Alignment"));
    assert!(screen.contains("Protein A Sequence (0/10000)"));
    assert!(screen.contains("Protein B Sequence (0/10000)"));
    assert!(screen.contains("Enter Protein A sequence here..."));
    assert!(screen.contains("[ Predict Identity Score ]"));
    assert!(!screen.contains("Predicted Identity Score:"));
}

#[test]
fn renders_in_a_tiny_terminal() {
    let mut app = utils::load_app("tests/data/gravy-model.json", None);
    let buf = utils::render(&mut app, 12, 5);
    assert_eq!(buf.area.width, 12);
}

#[test]
fn renders_banner() {
    let mut app = utils::load_app(
        "tests/data/gravy-model.json",
        Some("~~ protein banner ~~\nsecond line"),
    );
    let screen = utils::buffer_text(&utils::render(&mut app, 80, 30));
    assert!(screen.contains("~~ protein banner ~~"));
    assert!(screen.contains("second line"));
}

#[test]
fn banner_can_be_hidden() {
    let mut app = utils::load_app("tests/data/gravy-model.json", Some("~~ protein banner ~~"));
    let screen = utils::buffer_text(&utils::render_with(&mut app, 80, 30, |ui| {
        ui.set_banner(false)
    }));
    assert!(!screen.contains("~~ protein banner ~~"));
    assert!(screen.contains("Protein A Sequence"));
}
