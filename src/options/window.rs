use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Window size, title and background.
pub struct WindowOptions {
    /// Initial width in logical pixels.
    pub width: u32,
    /// Initial height in logical pixels.
    pub height: u32,
    /// Title bar text.
    pub title: String,
    /// Background color (linear RGB).
    pub clear_color: [f32; 3],
    /// Wait for vertical sync when presenting.
    pub vsync: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "ST Bus - Interior View".to_owned(),
            clear_color: [0.0, 0.44, 0.74],
            vsync: true,
        }
    }
}
