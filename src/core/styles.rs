//! Output roles and their colours.
//!
//! Display code asks for a role (`Field`, `Version`, ...) rather than a
//! colour. Colouring only happens when the caller passes `enabled`, so there
//! is no global colour state.
//!
//! ```
//! use pkgmeta::core::styles::StyleRole;
//! assert_eq!(StyleRole::Version.paint("1.2.3", false), "1.2.3");
//! let painted = StyleRole::Version.paint("1.2.3", true);
//! assert!(painted.starts_with("\x1b["));
//! assert!(painted.ends_with("\x1b[0m"));
//! ```

use clap::builder::styling::{AnsiColor, Color as ClapColor, Style, Styles};
use colored::Color;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StyleRole {
    /// Section headers in `--help`
    Header,
    /// Field labels in tables and check output
    Field,
    Version,
    /// Plain values, never coloured
    Value,
    /// Long secondary values such as classifier lists
    Dim,
    Error,
    Warning,
}

impl StyleRole {
    pub fn color(self) -> Option<Color> {
        match self {
            StyleRole::Header => Some(Color::Yellow),
            StyleRole::Field => Some(Color::BrightGreen),
            StyleRole::Version => Some(Color::BrightCyan),
            StyleRole::Value => None,
            StyleRole::Dim => Some(Color::BrightBlack),
            StyleRole::Error => Some(Color::BrightRed),
            StyleRole::Warning => Some(Color::BrightYellow),
        }
    }

    /// SGR parameter for the foreground colour (`92`, `38;2;r;g;b`)
    pub fn ansi_code(self) -> Option<String> {
        self.color().map(|c| c.to_fg_str().into_owned())
    }

    pub fn paint(self, text: &str, enabled: bool) -> String {
        match self.ansi_code() {
            Some(code) if enabled => format!("\x1b[{}m{}\x1b[0m", code, text),
            _ => text.to_string(),
        }
    }

    /// prettytable `style_spec` for this role (foreground colour only)
    pub fn to_prettytable_spec(self) -> Option<String> {
        let spec = match self.color()? {
            Color::Black => 'k',
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Yellow => 'y',
            Color::Blue => 'b',
            Color::Magenta => 'm',
            Color::Cyan => 'c',
            Color::White => 'w',
            Color::BrightBlack => 'K',
            Color::BrightRed => 'R',
            Color::BrightGreen => 'G',
            Color::BrightYellow => 'Y',
            Color::BrightBlue => 'B',
            Color::BrightMagenta => 'M',
            Color::BrightCyan => 'C',
            Color::BrightWhite => 'W',
            Color::TrueColor { .. } => return None,
        };
        Some(format!("F{}", spec))
    }

    fn clap_style(self, bold: bool) -> Style {
        let mut style = Style::new();
        if let Some(ansi) = self.color().and_then(to_clap_color) {
            style = style.fg_color(Some(ClapColor::Ansi(ansi)));
        }
        if bold {
            style = style.bold();
        }
        style
    }
}

fn to_clap_color(c: Color) -> Option<AnsiColor> {
    Some(match c {
        Color::Black => AnsiColor::Black,
        Color::Red => AnsiColor::Red,
        Color::Green => AnsiColor::Green,
        Color::Yellow => AnsiColor::Yellow,
        Color::Blue => AnsiColor::Blue,
        Color::Magenta => AnsiColor::Magenta,
        Color::Cyan => AnsiColor::Cyan,
        Color::White => AnsiColor::White,
        Color::BrightBlack => AnsiColor::BrightBlack,
        Color::BrightRed => AnsiColor::BrightRed,
        Color::BrightGreen => AnsiColor::BrightGreen,
        Color::BrightYellow => AnsiColor::BrightYellow,
        Color::BrightBlue => AnsiColor::BrightBlue,
        Color::BrightMagenta => AnsiColor::BrightMagenta,
        Color::BrightCyan => AnsiColor::BrightCyan,
        Color::BrightWhite => AnsiColor::BrightWhite,
        Color::TrueColor { .. } => return None,
    })
}

/// clap help styles built from the same roles as the rest of the output
pub fn palette_to_clap(enabled: bool) -> Styles {
    if !enabled {
        return Styles::plain();
    }

    Styles::styled()
        .header(StyleRole::Header.clap_style(true))
        .usage(StyleRole::Header.clap_style(true))
        .literal(StyleRole::Field.clap_style(false))
        .placeholder(StyleRole::Version.clap_style(false))
        .valid(StyleRole::Field.clap_style(false))
        .invalid(StyleRole::Error.clap_style(false))
        .error(StyleRole::Error.clap_style(true))
}
