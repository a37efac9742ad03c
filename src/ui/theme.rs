//! Visual theme and styling.

use console::Style;

/// Colors used for terminal output.
#[derive(Debug, Clone)]
pub struct InstallTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for InstallTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl InstallTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a detail line (indented, dim).
    pub fn format_detail(&self, msg: &str) -> String {
        format!("  {}", self.dim.apply_to(msg))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = InstallTheme::plain().format_success("Installed");
        assert_eq!(msg, "✓ Installed");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = InstallTheme::plain().format_warning("Outdated");
        assert_eq!(msg, "⚠ Outdated");
    }

    #[test]
    fn theme_formats_error() {
        let msg = InstallTheme::plain().format_error("Failed");
        assert_eq!(msg, "✗ Failed");
    }

    #[test]
    fn theme_formats_detail() {
        let msg = InstallTheme::plain().format_detail("mode 0755");
        assert_eq!(msg, "  mode 0755");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = InstallTheme::default();
        let new = InstallTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
