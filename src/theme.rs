use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Colours for the interactive screen, stored as `#RRGGBB` strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Input line
    pub input_border: String,
    pub input_text: String,
    pub mode_search: String,
    pub mode_add: String,

    /// Result panes
    pub result_border: String,
    pub result_title: String,
    pub result_text: String,

    /// Word list and history
    pub list_border: String,
    pub list_item: String,
    pub list_latest: String,

    /// Notifications
    pub popup_error: String,
    pub popup_success: String,
    pub popup_text: String,

    /// Footer
    pub help_bar_fg: String,
    pub status_message_fg: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            input_border: "#FFD700".to_string(), // Gold
            input_text: "#FFFFFF".to_string(),
            mode_search: "#6495ED".to_string(), // Cornflower Blue
            mode_add: "#90EE90".to_string(),    // Light Green

            result_border: "#6495ED".to_string(),
            result_title: "#FFFFFF".to_string(),
            result_text: "#E0E0E0".to_string(),

            list_border: "#90EE90".to_string(),
            list_item: "#FFFFFF".to_string(),
            list_latest: "#FFD700".to_string(),

            popup_error: "#FF6347".to_string(), // Tomato
            popup_success: "#90EE90".to_string(),
            popup_text: "#FFFFFF".to_string(),

            help_bar_fg: "#A0A0A0".to_string(),
            status_message_fg: "#90EE90".to_string(),
        }
    }
}

impl Theme {
    /// Convert hex color string to ratatui Color.
    ///
    /// Accepts `RRGGBB` and `RRGGBBAA` with or without a leading `#`; alpha is ignored.
    pub fn hex_to_color(hex: &str) -> Option<Color> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 && hex.len() != 8 {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|part| u8::from_str_radix(part, 16).ok())
        };
        Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Get color with fallback to white
    pub fn color(&self, hex: &str) -> Color {
        Self::hex_to_color(hex).unwrap_or(Color::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color() {
        assert_eq!(Theme::hex_to_color("#6495ED"), Some(Color::Rgb(100, 149, 237)));
        assert_eq!(Theme::hex_to_color("FFD700"), Some(Color::Rgb(255, 215, 0)));
        assert_eq!(Theme::hex_to_color("#FFD70080"), Some(Color::Rgb(255, 215, 0)));
        assert_eq!(Theme::hex_to_color("#FFF"), None);
        assert_eq!(Theme::hex_to_color("#GGGGGG"), None);
    }

    #[test]
    fn test_invalid_color_falls_back_to_white() {
        let theme = Theme::default();
        assert_eq!(theme.color("not a colour"), Color::White);
    }
}
