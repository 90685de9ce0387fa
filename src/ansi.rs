use anyhow::Result;
use crossterm::style::{Attribute, Color as CrosstermColor, ResetColor, SetAttribute, SetForegroundColor};
use std::fmt::Write;

use crate::lookup::Lookup;
use crate::theme::Theme;

pub const MEANING_HEADING: &str = "Meaning";
pub const USAGE_HEADING: &str = "Usage in Sentences";
pub const SYNONYMS_HEADING: &str = "Synonyms";
pub const ANTONYMS_HEADING: &str = "Antonyms";

pub struct AnsiOptions {
    pub terminal_width: usize,
    pub color: bool,
    pub theme: Theme,
}

impl Default for AnsiOptions {
    fn default() -> Self {
        Self {
            terminal_width: std::env::var("COLUMNS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(80),
            color: true,
            theme: Theme::default(),
        }
    }
}

/// Render a lookup as styled terminal text: the word, a rule, then one
/// section per field
pub fn render_lookup(lookup: &Lookup, options: &AnsiOptions) -> Result<String> {
    let mut output = String::new();

    writeln!(
        output,
        "{}",
        format_ansi_text(&lookup.word, true, Some(&options.theme.input_border), options)
    )?;
    let separator = "=".repeat(std::cmp::min(50, options.terminal_width));
    writeln!(output, "{separator}")?;
    output.push('\n');

    let sections = [
        (MEANING_HEADING, &lookup.result.meaning),
        (USAGE_HEADING, &lookup.result.usage),
        (SYNONYMS_HEADING, &lookup.result.synonyms),
        (ANTONYMS_HEADING, &lookup.result.antonyms),
    ];

    for (heading, body) in sections {
        writeln!(
            output,
            "{}",
            format_ansi_text(heading, true, Some(&options.theme.result_border), options)
        )?;
        writeln!(output, "{body}")?;
        output.push('\n');
    }

    Ok(output)
}

fn format_ansi_text(text: &str, bold: bool, color: Option<&str>, options: &AnsiOptions) -> String {
    if !options.color {
        return text.to_string();
    }

    let mut result = String::new();
    if bold {
        result.push_str(&format!("{}", SetAttribute(Attribute::Bold)));
    }
    if let Some(color) = color.and_then(convert_hex_to_crossterm_color) {
        result.push_str(&format!("{}", SetForegroundColor(color)));
    }

    result.push_str(text);

    // Reset so styling does not bleed into the body text
    result.push_str(&format!("{}{}", SetAttribute(Attribute::Reset), ResetColor));
    result
}

fn convert_hex_to_crossterm_color(hex: &str) -> Option<CrosstermColor> {
    match Theme::hex_to_color(hex)? {
        ratatui::style::Color::Rgb(r, g, b) => Some(CrosstermColor::Rgb { r, g, b }),
        _ => None,
    }
}
