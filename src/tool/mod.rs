use std::fmt;

use serde::Deserialize;

/// The interaction mode governing how pointer events on the canvas are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Drag and resize existing shapes
    #[default]
    Select,
    Rectangle,
    Circle,
    Arrow,
    Scribble,
}

impl Tool {
    /// All tools in toolbar order
    pub const ALL: [Tool; 5] = [
        Tool::Select,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Arrow,
        Tool::Scribble,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
            Tool::Arrow => "arrow",
            Tool::Scribble => "scribble",
        }
    }

    /// Glyph shown on the toolbar button
    pub fn icon(&self) -> &'static str {
        match self {
            Tool::Select => "⬉",
            Tool::Rectangle => "▭",
            Tool::Circle => "○",
            Tool::Arrow => "➡",
            Tool::Scribble => "✏",
        }
    }

    /// Returns true if pointer-down with this tool starts a new shape
    pub fn creates_shapes(&self) -> bool {
        !matches!(self, Tool::Select)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_config_names() {
        for tool in Tool::ALL {
            let json = format!("\"{tool}\"");
            assert_eq!(serde_json::from_str::<Tool>(&json).unwrap(), tool);
        }
    }

    #[test]
    fn test_only_select_does_not_create_shapes() {
        for tool in Tool::ALL {
            assert_eq!(tool.creates_shapes(), tool != Tool::Select);
        }
    }
}
