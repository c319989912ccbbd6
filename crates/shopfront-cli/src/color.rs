use clap::ValueEnum;

/// When to use colored output.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Color {
    No,
    Yes,
    Auto,
}

impl Color {
    /// Whether color should be used, resolving [`Color::Auto`] against `NO_COLOR` and the
    /// capabilities of stdout.
    pub fn is_enabled(self) -> bool {
        match self {
            Color::No => false,
            Color::Yes => true,
            Color::Auto => {
                if std::env::var("NO_COLOR").is_ok_and(|v| !v.is_empty()) {
                    false
                } else {
                    supports_color::on(supports_color::Stream::Stdout).is_some()
                }
            }
        }
    }
}

/// Install the color-eyre error and panic hooks, colored or not.
pub fn install_color_eyre(color: Color) -> color_eyre::Result<(), color_eyre::Report> {
    if color.is_enabled() {
        color_eyre::install()
    } else {
        // Use an empty theme to disable error coloring
        color_eyre::config::HookBuilder::new()
            .theme(color_eyre::config::Theme::new())
            .install()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_choices() {
        assert!(Color::Yes.is_enabled());
        assert!(!Color::No.is_enabled());
    }
}
