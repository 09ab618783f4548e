use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration structure for the application. The defaults are
/// the constants the piece bakes in at startup; nothing reads these from
/// flags or the environment.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub canvas: CanvasConfig,
    pub animation: AnimationConfig,
    pub caption: CaptionConfig,
    pub assets: AssetConfig,
}

/// Fixed output surface dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1550,
            height: 800,
        }
    }
}

/// Parameters of the phase cycle itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub total_phases: u32,
    pub frame_rate: u32,
    pub star_count: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            total_phases: 48,
            frame_rate: 3,
            star_count: 140,
        }
    }
}

/// The manifesto lines under the moon plus the one-line key help.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionConfig {
    pub lines: Vec<String>,
    pub help: String,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            lines: vec!["You are my crescent moon.".to_string()],
            help: "S: save · M: music".to_string(),
        }
    }
}

/// Where the optional startup assets live. Both files may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    pub dir: PathBuf,
    pub font_file: String,
    pub music_file: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
            font_file: "SourceSans3-Black.ttf".to_string(),
            music_file: "bgm.wav".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_baked_in_constants() {
        let config = AppConfig::default();
        assert_eq!(config.canvas.width, 1550);
        assert_eq!(config.canvas.height, 800);
        assert_eq!(config.animation.total_phases, 48);
        assert_eq!(config.animation.frame_rate, 3);
        assert_eq!(config.animation.star_count, 140);
        assert_eq!(config.caption.lines, vec!["You are my crescent moon."]);
    }

    #[test]
    fn partial_overrides_deserialize_over_defaults() {
        let animation: AnimationConfig =
            serde_json::from_str(r#"{"total_phases":48,"frame_rate":3,"star_count":90}"#)
                .expect("animation config should deserialize");
        assert_eq!(animation.star_count, 90);
        assert_eq!(animation.total_phases, 48);
    }
}
