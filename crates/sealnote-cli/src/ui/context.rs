//! UI context for environment detection and configuration.

use std::io::IsTerminal;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stderr is a TTY (prompts, notices and spinners go there)
    pub is_tty: bool,
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Suppress informational output
    pub quiet: bool,
}

impl UiContext {
    /// Create context from environment, config and CLI flags.
    pub fn from_env(ascii: bool, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        Self::resolve(is_tty, term_is_dumb, no_color_env, ascii, quiet)
    }

    fn resolve(
        is_tty: bool,
        term_is_dumb: bool,
        no_color_env: bool,
        ascii: bool,
        quiet: bool,
    ) -> Self {
        Self {
            is_tty,
            color: is_tty && !no_color_env && !term_is_dumb,
            unicode: !ascii && !term_is_dumb,
            quiet,
        }
    }

    /// Check if animations (spinners) are allowed.
    pub fn allows_animation(&self) -> bool {
        self.is_tty && !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_disables_unicode() {
        let ctx = UiContext::resolve(true, false, false, true, false);
        assert!(!ctx.unicode);
        assert!(ctx.color);
    }

    #[test]
    fn test_no_color_env_disables_color() {
        let ctx = UiContext::resolve(true, false, true, false, false);
        assert!(!ctx.color);
    }

    #[test]
    fn test_dumb_terminal() {
        let ctx = UiContext::resolve(true, true, false, false, false);
        assert!(!ctx.color);
        assert!(!ctx.unicode);
    }

    #[test]
    fn test_quiet_disables_animation() {
        assert!(UiContext::resolve(true, false, false, false, false).allows_animation());
        assert!(!UiContext::resolve(true, false, false, false, true).allows_animation());
        assert!(!UiContext::resolve(false, false, false, false, false).allows_animation());
    }
}
