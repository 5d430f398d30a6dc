//! UI colour themes

use serde::Serialize;

/// Page theme, chosen with `?theme=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    LightGreen,
    LightBlue,
}

/// Colours for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub control: &'static str,
    pub control_hover: &'static str,
    pub control_text: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::LightGreen, Theme::LightBlue];

    /// Accepts `light-green` / `light-blue` and the display names
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase().replace(|c: char| c == ' ' || c == '_', "-");
        match normalized.as_str() {
            "light-green" | "green" => Some(Theme::LightGreen),
            "light-blue" | "blue" => Some(Theme::LightBlue),
            _ => None,
        }
    }

    /// Unknown or missing values fall back to the default theme
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Theme::LightGreen => "light-green",
            Theme::LightBlue => "light-blue",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::LightGreen => "Light Green",
            Theme::LightBlue => "Light Blue",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::LightGreen => Palette {
                background: "#e8f5e9",
                text: "#004d40",
                control: "#004d40",
                control_hover: "#00332c",
                control_text: "#ffffff",
            },
            Theme::LightBlue => Palette {
                background: "#e0f7fa",
                text: "#006064",
                control: "#006064",
                control_hover: "#004d40",
                control_text: "#ffffff",
            },
        }
    }

    /// `:root` block with the palette as CSS custom properties
    pub fn css_variables(&self) -> String {
        let p = self.palette();
        format!(
            ":root {{\n    --hbc-bg: {};\n    --hbc-text: {};\n    --hbc-control: {};\n    --hbc-control-hover: {};\n    --hbc-control-text: {};\n}}",
            p.background, p.text, p.control, p.control_hover, p.control_text
        )
    }
}
