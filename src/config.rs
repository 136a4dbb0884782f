// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Optional configuration file (JSON), looked up as ~/.protidconfig, then ./.protidconfig.
// Command-line options and environment variables take precedence over it.

use std::path::{Path, PathBuf};

use hex_color::HexColor;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::ProtidError;
use crate::predictor::ValidationPolicy;

pub const CONFIG_FILE_NAME: &str = ".protidconfig";
pub const DEFAULT_MODEL_PATH: &str = "best_model.json";
pub const DEFAULT_BANNER_PATH: &str = "protein_banner.txt";
pub const MODEL_PATH_ENV: &str = "PROTID_MODEL";
pub const BANNER_PATH_ENV: &str = "PROTID_BANNER";
pub const DEFAULT_MIN_LENGTH: usize = 1;

pub const DEFAULT_RESULT_COLOR: (u8, u8, u8) = (0xFF, 0x57, 0x22);
pub const DEFAULT_BUTTON_COLOR: (u8, u8, u8) = (0x4C, 0xAF, 0x50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    pub result: (u8, u8, u8),
    pub button: (u8, u8, u8),
}

impl Default for ColorConfig {
    fn default() -> Self {
        ColorConfig {
            result: DEFAULT_RESULT_COLOR,
            button: DEFAULT_BUTTON_COLOR,
        }
    }
}

fn rgb(color: HexColor) -> (u8, u8, u8) {
    (color.r, color.g, color.b)
}

// The file as written. Unknown keys and ill-typed values (including malformed colors) are
// errors, so that a typo does not go unnoticed.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    model_path: Option<PathBuf>,
    banner_path: Option<PathBuf>,
    strict: Option<bool>,
    min_length: Option<usize>,
    result_color: Option<HexColor>,
    button_color: Option<HexColor>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProtidConfig {
    pub model_path: Option<PathBuf>,
    pub banner_path: Option<PathBuf>,
    pub strict: Option<bool>,
    pub min_length: Option<usize>,
    pub colors: ColorConfig,
}

impl From<ConfigFile> for ProtidConfig {
    fn from(file: ConfigFile) -> Self {
        let defaults = ColorConfig::default();
        ProtidConfig {
            model_path: file.model_path,
            banner_path: file.banner_path,
            strict: file.strict,
            min_length: file.min_length,
            colors: ColorConfig {
                result: file.result_color.map(rgb).unwrap_or(defaults.result),
                button: file.button_color.map(rgb).unwrap_or(defaults.button),
            },
        }
    }
}

impl ProtidConfig {
    pub fn from_file(path: &Path) -> Result<Self, ProtidError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ProtidError> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(ProtidError::Format(String::from("expected a JSON object")));
        }
        let file: ConfigFile = serde_json::from_value(value)?;
        Ok(file.into())
    }
}

pub fn find_protid_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

// First of: command line (which clap already merged with the environment), config file, default.
pub fn resolve<T>(cli: Option<T>, file: Option<T>, default: T) -> T {
    cli.or(file).unwrap_or(default)
}

// A minimum length, on the command line or in the file, implies strict mode unless the file
// explicitly says `"strict": false`.
pub fn validation_policy(
    cli_strict: bool,
    cli_min_length: Option<usize>,
    config: &ProtidConfig,
) -> ValidationPolicy {
    let cli = (cli_strict || cli_min_length.is_some()).then_some(true);
    let file = config.strict.or(config.min_length.map(|_| true));
    if resolve(cli, file, false) {
        ValidationPolicy::Strict {
            min_length: resolve(cli_min_length, config.min_length, DEFAULT_MIN_LENGTH),
        }
    } else {
        ValidationPolicy::Permissive
    }
}
