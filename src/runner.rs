// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    io::{self, stdout},
    path::{Path, PathBuf},
    time::Duration,
};

use log::{debug, info, warn};

use crate::app::App;
use crate::config::{
    find_protid_config, resolve, validation_policy, ProtidConfig, BANNER_PATH_ENV,
    DEFAULT_BANNER_PATH, DEFAULT_MODEL_PATH, MODEL_PATH_ENV,
};
use crate::model::RegressionModel;
use crate::predictor::IdentityPredictor;
use crate::seq::{fasta::first_sequence, features::FEATURE_COUNT};
use crate::ui::{
    key_handling::{handle_key_press, handle_paste},
    render::render_ui,
    Focus, UI,
};

use clap::Parser;

use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};

use ratatui::{
    backend::Backend,
    prelude::{CrosstermBackend, Rect, Terminal},
    TerminalOptions, Viewport,
};

use crate::errors::ProtidError;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Model file (JSON)
    #[arg(short, long, env = MODEL_PATH_ENV)]
    model: Option<PathBuf>,

    /// Banner file (plain text, shown above the inputs)
    #[arg(long, env = BANNER_PATH_ENV)]
    banner: Option<PathBuf>,

    /// Do not show the banner
    #[arg(long = "no-banner")]
    no_banner: bool,

    /// Protein A sequence
    #[arg(short = 'a', long = "protein-a", conflicts_with = "fasta_a")]
    protein_a: Option<String>,

    /// Protein B sequence
    #[arg(short = 'b', long = "protein-b", conflicts_with = "fasta_b")]
    protein_b: Option<String>,

    /// Read protein A from (the first record of) a FastA file
    #[arg(long = "fasta-a")]
    fasta_a: Option<PathBuf>,

    /// Read protein B from (the first record of) a FastA file
    #[arg(long = "fasta-b")]
    fasta_b: Option<PathBuf>,

    /// Reject sequences shorter than --min-length valid residues
    #[arg(short, long)]
    strict: bool,

    /// Minimum number of valid residues; implies --strict [default: 1]
    #[arg(long = "min-length")]
    min_length: Option<usize>,

    /// Predict, print the result and exit (no TUI)
    #[arg(long)]
    headless: bool,

    /// Also print the feature record (JSON); headless mode only
    #[arg(long, requires = "headless")]
    features: bool,

    /// Describe the model and exit (no TUI)
    #[arg(short, long)]
    info: bool,

    /// Show key bindings and exit successfully
    #[arg(long = "show-bindings")]
    show_bindings: bool,

    /// Disable color
    #[arg(short = 'C', long = "no-color")]
    no_color: bool,

    /// Fixed terminal width (mostly used for testing/debugging)
    #[arg(short, long, requires = "height")]
    width: Option<u16>,

    /// Fixed terminal height ("tall" -- -h is already used)
    #[arg(short = 't', long, requires = "width")]
    height: Option<u16>,

    /// Poll wait time [ms]
    #[clap(long = "poll-wait-time", default_value_t = 50)]
    poll_wait_time: u64,
}

fn read_input(literal: Option<String>, fasta: Option<&Path>) -> Result<String, ProtidError> {
    match (literal, fasta) {
        (Some(seq), _) => Ok(seq),
        (None, Some(path)) => first_sequence(path),
        (None, None) => Ok(String::new()),
    }
}

fn load_banner(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("[user] no banner ({}: {})", path.display(), e);
            None
        }
    }
}

pub fn run() -> Result<(), ProtidError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();

    if cli.show_bindings {
        println!("{}", crate::ui::USER_GUIDE);
        return Ok(());
    }

    let mut config_err: Option<String> = None;
    let mut config = ProtidConfig::default();
    if let Some(path) = find_protid_config() {
        match ProtidConfig::from_file(&path) {
            Ok(cfg) => {
                info!("Read config from {}", path.display());
                config = cfg;
            }
            Err(e) => {
                warn!("[user] ignoring {}: {}", path.display(), e);
                config_err = Some(format!("Error reading {}: {}", path.display(), e));
            }
        }
    }

    let model_path = resolve(
        cli.model.clone(),
        config.model_path.clone(),
        PathBuf::from(DEFAULT_MODEL_PATH),
    );
    let model = RegressionModel::load(&model_path)
        .and_then(|model| model.expect_columns(FEATURE_COUNT).map(|()| model))
        .map_err(|source| ProtidError::Model {
            path: model_path.clone(),
            source,
        })?;
    info!("Model {}: {}", model_path.display(), model.describe());

    let policy = validation_policy(cli.strict, cli.min_length, &config);
    info!("Validation: {}", policy);
    let predictor = IdentityPredictor::new(model, policy);

    let raw_a = read_input(cli.protein_a.clone(), cli.fasta_a.as_deref())?;
    let raw_b = read_input(cli.protein_b.clone(), cli.fasta_b.as_deref())?;

    if cli.headless {
        let prediction = predictor.predict(&raw_a, &raw_b)?;
        println!("{}", prediction.score_line());
        if cli.features {
            println!("{}", serde_json::to_string_pretty(&prediction.features)?);
        }
        return Ok(());
    }

    let banner_path = resolve(
        cli.banner.clone(),
        config.banner_path.clone(),
        PathBuf::from(DEFAULT_BANNER_PATH),
    );
    let banner = load_banner(&banner_path);

    let mut app = App::new(predictor, banner);

    if cli.info {
        info!("Running in info mode.");
        app.output_info();
        return Ok(());
    }

    let viewport = match (cli.width, cli.height) {
        // Fix viewport dimensions IFF supplied (mainly for tests)
        (Some(width), Some(height)) => Viewport::Fixed(Rect::new(0, 0, width, height)),
        _ => Viewport::Fullscreen,
    };

    let mut app_ui = UI::new(&mut app);
    if cli.no_color {
        app_ui.set_monochrome();
    }
    if cli.no_banner {
        app_ui.set_banner(false);
    }
    app_ui.set_colors(config.colors);
    app_ui.prefill(Focus::ProteinA, &raw_a);
    app_ui.prefill(Focus::ProteinB, &raw_b);
    if let Some(msg) = config_err.take() {
        app_ui.app_mut().error_msg(msg);
    }

    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableBracketedPaste)?;
    enable_raw_mode()?;

    let outcome = Terminal::with_options(CrosstermBackend::new(stdout()), TerminalOptions { viewport })
        .map_err(ProtidError::from)
        .and_then(|mut terminal| {
            terminal.clear()?;
            main_loop(
                &mut terminal,
                &mut app_ui,
                Duration::from_millis(cli.poll_wait_time),
            )
        });

    let restored = restore_terminal();
    outcome.and(restored)
}

// Every step is attempted, whatever happened before.
fn restore_terminal() -> Result<(), ProtidError> {
    let steps = [
        disable_raw_mode(),
        stdout().execute(DisableBracketedPaste).map(|_| ()),
        stdout().execute(LeaveAlternateScreen).map(|_| ()),
    ];
    first_error(steps)
}

fn first_error<I: IntoIterator<Item = io::Result<()>>>(steps: I) -> Result<(), ProtidError> {
    for step in steps {
        step?;
    }
    Ok(())
}

fn main_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_ui: &mut UI,
    poll_wait: Duration,
) -> Result<(), ProtidError> {
    terminal.draw(|f| render_ui(f, app_ui))?;

    loop {
        if app_ui.is_computing() {
            // Show the Computing state before blocking on the pipeline.
            terminal.draw(|f| render_ui(f, app_ui))?;
            app_ui.run_prediction();
            app_ui.mark_dirty();
        }
        if app_ui.take_dirty() {
            terminal.draw(|f| render_ui(f, app_ui))?;
        }

        // Wait for an event (or timeout)
        if event::poll(poll_wait)? {
            match event::read()? {
                event::Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_press(app_ui, key) {
                        break;
                    }
                }
                event::Event::Paste(text) => handle_paste(app_ui, &text),
                event::Event::Resize(w, h) => {
                    debug!("resized to {}x{}", w, h);
                    app_ui.mark_dirty();
                }
                _ => {}
            }
        }
    }

    Ok(())
}
