//! Runtime configuration with TOML file support.
//!
//! Window, camera, control speeds and keybindings are consolidated here.
//! Every section uses `#[serde(default)]` so partial files (e.g. only
//! overriding `[controls]`) work.

mod camera;
mod controls;
mod keybindings;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::ControlOptions;
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::BusViewError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Window size, title and background.
    pub window: WindowOptions,
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Control speeds and door animation.
    pub controls: ControlOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BusViewError::OptionsParse`] on malformed TOML or unknown
    /// action names.
    pub fn from_toml(content: &str) -> Result<Self, BusViewError> {
        let mut options: Self =
            toml::from_str(content).map_err(|e| BusViewError::OptionsParse(e.to_string()))?;
        options.keybindings.normalize();
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BusViewError::Io`] if the file cannot be read and
    /// [`BusViewError::OptionsParse`] if it is not valid.
    pub fn load(path: &Path) -> Result<Self, BusViewError> {
        let content = std::fs::read_to_string(path).map_err(BusViewError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`BusViewError::OptionsParse`] if serialization fails and
    /// [`BusViewError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), BusViewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BusViewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(BusViewError::Io)?;
        }
        std::fs::write(path, content).map_err(BusViewError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[controls]
move_speed = 10.0
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.controls.move_speed, 10.0);
        assert_eq!(opts.controls.rotate_speed, 45.0);
        assert_eq!(opts.window.width, 800);
        assert_eq!(opts.camera.zfar, 100.0);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyM"), Some(KeyAction::ToggleOrbit));
        assert_eq!(opts.keybindings.lookup("Digit3"), Some(KeyAction::ToggleInterior));
        assert_eq!(opts.keybindings.lookup("KeyP"), None);
    }

    #[test]
    fn rebinding_keeps_other_defaults() {
        let toml_str = r#"
[keybindings]
toggle_orbit = "Tab"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("Tab"), Some(KeyAction::ToggleOrbit));
        assert_eq!(opts.keybindings.lookup("KeyM"), None);
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(KeyAction::MoveForward));
        assert_eq!(opts.keybindings.key_for(KeyAction::Quit), Some("Escape"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[window\nwidth = 3").unwrap_err();
        assert!(matches!(err, BusViewError::OptionsParse(_)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/busview/options.toml")).unwrap_err();
        assert!(matches!(err, BusViewError::Io(_)));
    }
}
