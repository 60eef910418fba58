//! Spinner for the slow key-derivation steps (unlock and seal).

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::context::UiContext;
use super::theme::spinner_frames;

/// A spinner on stderr. Does nothing when animation is not allowed.
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    pub fn start(ctx: &UiContext, message: &str) -> Self {
        if !ctx.allows_animation() {
            return Self { bar: None };
        }

        let style = ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(spinner_frames(ctx.unicode));
        let bar = ProgressBar::new_spinner();
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(bar) }
    }

    /// Run `f` with a spinner shown, clearing it afterwards.
    pub fn run<T>(ctx: &UiContext, message: &str, f: impl FnOnce() -> T) -> T {
        let spinner = Self::start(ctx, message);
        let result = f();
        spinner.finish();
        result
    }

    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            quiet: false,
        }
    }

    #[test]
    fn test_spinner_is_inert_without_tty() {
        let spinner = Spinner::start(&plain_ctx(), "Unlocking");
        assert!(spinner.bar.is_none());
        spinner.finish();
    }

    #[test]
    fn test_run_returns_closure_value() {
        assert_eq!(Spinner::run(&plain_ctx(), "Sealing", || 42), 42);
    }
}
