//! Centralized navigation options with TOML preset support.
//!
//! Camera, navigation and motion settings are consolidated here. Options
//! serialize to/from TOML so a gallery can ship its own tuning file.

mod camera;
mod motion;
mod navigation;

use std::path::Path;

pub use camera::CameraOptions;
pub use motion::{MotionOptions, MotionProfile};
pub use navigation::NavigationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AtriumError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[navigation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and look-control parameters.
    pub camera: CameraOptions,
    /// Click classification, room bounds and pose tuning.
    pub navigation: NavigationOptions,
    /// Per-mode camera motion timing.
    #[schemars(skip)]
    pub motion: MotionOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, AtriumError> {
        let content = std::fs::read_to_string(path).map_err(AtriumError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| AtriumError::OptionsParse(e.to_string()))?;
        log::info!("Loaded navigation options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), AtriumError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| AtriumError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(AtriumError::Io)?;
        }
        std::fs::write(path, content).map_err(|e| {
            log::error!("Failed to save options to {}: {e}", path.display());
            AtriumError::Io(e)
        })?;
        log::info!("Saved navigation options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[navigation]
click_threshold = 4.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.navigation.click_threshold, 4.0);
        assert_eq!(opts.navigation.room_margin, 0.5);
        assert_eq!(opts.camera.fovy, 60.0);
    }

    #[test]
    fn easing_parses_from_toml() {
        let toml_str = r#"
[motion.walk]
duration_ms = 250
easing = { kind = "linear" }
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.motion.walk.duration_ms, 250);
        assert_eq!(opts.motion.walk.easing, EasingFunction::Linear);
        assert_eq!(opts.motion.approach, MotionOptions::default().approach);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Options::load(Path::new("/nonexistent/atrium.toml"));
        assert!(matches!(err, Err(AtriumError::Io(_))));
    }

    #[test]
    fn load_reports_bad_toml() {
        let dir = std::env::temp_dir().join("atrium-options-bad");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[navigation\nclick_threshold = ").unwrap();
        let err = Options::load(&path);
        assert!(matches!(err, Err(AtriumError::OptionsParse(_))));
    }

    #[test]
    fn save_then_load_and_list() {
        let dir = std::env::temp_dir().join("atrium-options-presets");
        let _ = std::fs::remove_dir_all(&dir);
        let mut opts = Options::default();
        opts.navigation.room_margin = 1.25;
        opts.save(&dir.join("wide.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();

        let loaded = Options::load(&dir.join("wide.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["default", "wide"]);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("navigation"));
        assert!(!props.contains_key("motion"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());
    }
}
