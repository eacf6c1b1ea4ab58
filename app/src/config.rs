use directories::ProjectDirs;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use waveform::WaveformLayout;

const CONFIG_FILE_NAME: &str = "visualizer.toml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct VisualizerConfig {
    pub audio_path: PathBuf,
    pub canvas: CanvasConfig,
    pub waveform: WaveformLayout,
    pub stroke: StrokeConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
    pub background: [u8; 3],
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StrokeConfig {
    pub width: f32,
    pub color: [u8; 3],
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            audio_path: PathBuf::from("src/sample.wav"),
            canvas: CanvasConfig::default(),
            waveform: WaveformLayout::default(),
            stroke: StrokeConfig::default(),
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            background: [255, 255, 255],
        }
    }
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: [0, 0, 0],
        }
    }
}

fn get_config_path() -> Option<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("dev", "visualizer", "music_visualizer") {
        let config_dir = proj_dirs.config_dir();
        if !config_dir.exists() {
            if let Err(e) = fs::create_dir_all(config_dir) {
                error!("Failed to create config directory: {}", e);
                return None;
            }
        }
        return Some(config_dir.join(CONFIG_FILE_NAME));
    }
    None
}

pub fn save_config(config: &VisualizerConfig) {
    if let Some(path) = get_config_path() {
        match toml::to_string_pretty(config) {
            Ok(toml_str) => {
                if let Err(e) = fs::write(&path, toml_str) {
                    error!("Failed to write config file: {}", e);
                } else {
                    info!("Config saved to {}", path.display());
                }
            }
            Err(e) => {
                error!("Failed to serialize config: {}", e);
            }
        }
    }
}

/// Loads the config, writing defaults on first run. Any read or parse
/// problem falls back to defaults.
pub fn load_config() -> VisualizerConfig {
    let Some(path) = get_config_path() else {
        return VisualizerConfig::default();
    };

    if !path.exists() {
        let config = VisualizerConfig::default();
        save_config(&config);
        return config;
    }

    match fs::read_to_string(&path) {
        Ok(toml_str) => parse_config(&toml_str),
        Err(e) => {
            warn!("Failed to read config file, using defaults: {}", e);
            VisualizerConfig::default()
        }
    }
}

fn parse_config(toml_str: &str) -> VisualizerConfig {
    match toml::from_str(toml_str) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to parse config file, using defaults: {}", e);
            VisualizerConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = parse_config(
            r#"
            audio_path = "music/loop.wav"

            [waveform]
            max_samples = 400
            "#,
        );
        assert_eq!(config.audio_path, PathBuf::from("music/loop.wav"));
        assert_eq!(config.waveform.max_samples, 400);
        assert_eq!(config.waveform.amplitude_scale, 200.0);
        assert_eq!(config.canvas, CanvasConfig::default());
    }

    #[test]
    fn test_invalid_config_uses_defaults() {
        let config = parse_config("canvas = 12");
        assert_eq!(config, VisualizerConfig::default());
    }

    #[test]
    fn test_default_config_round_trips() {
        let config = VisualizerConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert_eq!(parse_config(&toml_str), config);
    }
}
