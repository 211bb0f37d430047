use crate::application::Severity;
use crossterm::style::{Color as CrosstermColor, Stylize};
use ratatui::style::{Color as RatatuiColor, Modifier, Style as RatatuiStyle};

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Table rows
    pub day_one: ColorPair,
    pub before_start: ColorPair,
    pub normal_text: ColorPair,

    // UI elements
    pub border: ColorPair,
    pub focused_border: ColorPair,
    pub header: ColorPair,
    pub selected: ColorPair,
    pub help_text: ColorPair,

    // Notices
    pub success: ColorPair,
    pub info: ColorPair,
    pub danger: ColorPair,
}

impl ThemeColors {
    pub fn notice(&self, severity: Severity) -> &ColorPair {
        match severity {
            Severity::Success => &self.success,
            Severity::Info => &self.info,
            Severity::Danger => &self.danger,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ColorPair {
    pub fg: CrosstermColor,
    pub bg: Option<CrosstermColor>,
}

impl ColorPair {
    pub fn new(fg: CrosstermColor) -> Self {
        Self { fg, bg: None }
    }

    pub fn with_bg(fg: CrosstermColor, bg: CrosstermColor) -> Self {
        Self { fg, bg: Some(bg) }
    }

    /// Convert to ratatui style
    pub fn to_ratatui(&self) -> RatatuiStyle {
        let mut style = RatatuiStyle::default().fg(Self::crossterm_to_ratatui(self.fg));
        if let Some(bg) = self.bg {
            style = style.bg(Self::crossterm_to_ratatui(bg));
        }
        style
    }

    /// Convert crossterm color to ratatui color
    pub fn crossterm_to_ratatui(color: CrosstermColor) -> RatatuiColor {
        match color {
            CrosstermColor::Black => RatatuiColor::Black,
            CrosstermColor::DarkRed => RatatuiColor::Red,
            CrosstermColor::DarkGreen => RatatuiColor::Green,
            CrosstermColor::DarkYellow => RatatuiColor::Yellow,
            CrosstermColor::DarkBlue => RatatuiColor::Blue,
            CrosstermColor::DarkMagenta => RatatuiColor::Magenta,
            CrosstermColor::DarkCyan => RatatuiColor::Cyan,
            CrosstermColor::Grey => RatatuiColor::Gray,
            CrosstermColor::DarkGrey => RatatuiColor::DarkGray,
            CrosstermColor::Red => RatatuiColor::LightRed,
            CrosstermColor::Green => RatatuiColor::LightGreen,
            CrosstermColor::Yellow => RatatuiColor::LightYellow,
            CrosstermColor::Blue => RatatuiColor::LightBlue,
            CrosstermColor::Magenta => RatatuiColor::LightMagenta,
            CrosstermColor::Cyan => RatatuiColor::LightCyan,
            CrosstermColor::White => RatatuiColor::White,
            CrosstermColor::Rgb { r, g, b } => RatatuiColor::Rgb(r, g, b),
            CrosstermColor::AnsiValue(v) => RatatuiColor::Indexed(v),
            _ => RatatuiColor::White,
        }
    }

    /// Convert to ratatui style with modifier
    pub fn to_ratatui_with_modifier(&self, modifier: Modifier) -> RatatuiStyle {
        self.to_ratatui().add_modifier(modifier)
    }

    /// Apply color to text for terminal output
    pub fn colorize(&self, text: &str) -> String {
        let mut styled = text.with(self.fg);
        if let Some(bg) = self.bg {
            styled = styled.on(bg);
        }
        format!("{}", styled)
    }

    /// Apply color with bold
    pub fn colorize_bold(&self, text: &str) -> String {
        let mut styled = text.with(self.fg).bold();
        if let Some(bg) = self.bg {
            styled = styled.on(bg);
        }
        format!("{}", styled)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            colors: ThemeColors {
                day_one: ColorPair::with_bg(
                    CrosstermColor::White,
                    CrosstermColor::Rgb { r: 30, g: 60, b: 75 },
                ),
                before_start: ColorPair::new(CrosstermColor::Rgb { r: 127, g: 140, b: 141 }),
                normal_text: ColorPair::new(CrosstermColor::White),

                border: ColorPair::new(CrosstermColor::DarkGrey),
                focused_border: ColorPair::new(CrosstermColor::DarkCyan),
                header: ColorPair::new(CrosstermColor::DarkCyan),
                selected: ColorPair::with_bg(
                    CrosstermColor::White,
                    CrosstermColor::Rgb { r: 40, g: 40, b: 40 },
                ),
                help_text: ColorPair::new(CrosstermColor::DarkGrey),

                success: ColorPair::new(CrosstermColor::Rgb { r: 39, g: 174, b: 96 }),
                info: ColorPair::new(CrosstermColor::Rgb { r: 52, g: 152, b: 219 }),
                danger: ColorPair::new(CrosstermColor::Rgb { r: 231, g: 76, b: 60 }),
            },
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            colors: ThemeColors {
                day_one: ColorPair::with_bg(
                    CrosstermColor::Black,
                    CrosstermColor::Rgb { r: 212, g: 233, b: 242 },
                ),
                before_start: ColorPair::new(CrosstermColor::Rgb { r: 127, g: 140, b: 141 }),
                normal_text: ColorPair::new(CrosstermColor::Black),

                border: ColorPair::new(CrosstermColor::Grey),
                focused_border: ColorPair::new(CrosstermColor::DarkBlue),
                header: ColorPair::new(CrosstermColor::DarkBlue),
                selected: ColorPair::with_bg(CrosstermColor::White, CrosstermColor::DarkBlue),
                help_text: ColorPair::new(CrosstermColor::DarkGrey),

                success: ColorPair::new(CrosstermColor::DarkGreen),
                info: ColorPair::new(CrosstermColor::DarkBlue),
                danger: ColorPair::new(CrosstermColor::DarkRed),
            },
        }
    }

    pub fn minimal() -> Self {
        Self {
            name: "Minimal".to_string(),
            colors: ThemeColors {
                day_one: ColorPair::new(CrosstermColor::White),
                before_start: ColorPair::new(CrosstermColor::DarkGrey),
                normal_text: ColorPair::new(CrosstermColor::White),

                border: ColorPair::new(CrosstermColor::White),
                focused_border: ColorPair::new(CrosstermColor::White),
                header: ColorPair::new(CrosstermColor::White),
                selected: ColorPair::with_bg(CrosstermColor::Black, CrosstermColor::White),
                help_text: ColorPair::new(CrosstermColor::Grey),

                success: ColorPair::new(CrosstermColor::White),
                info: ColorPair::new(CrosstermColor::White),
                danger: ColorPair::new(CrosstermColor::White),
            },
        }
    }

    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "minimal" => Self::minimal(),
            _ => Self::dark(), // default
        }
    }

    pub fn available_themes() -> Vec<String> {
        vec!["dark".to_string(), "light".to_string(), "minimal".to_string()]
    }
}
