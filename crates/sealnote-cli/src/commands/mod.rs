mod edit;
mod inspect;
mod misc;
mod new;
mod passwd;
mod show;
mod write;

pub use edit::handle_edit;
pub use inspect::{handle_hint, handle_info};
pub use misc::handle_completions;
pub use new::handle_new;
pub use passwd::handle_passwd;
pub use show::handle_unlock;
pub use write::handle_write;

use sealnote_core::crypto::FieldErrors;
use sealnote_core::note::Intent;

/// Validation errors reported by a form submission, if any.
fn field_errors(intents: &[Intent]) -> Option<FieldErrors> {
    intents.iter().find_map(|intent| match intent {
        Intent::FieldErrors(errors) => Some(*errors),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sealnote_core::crypto::ValidationError;
    use sealnote_core::note::{Notice, View};

    #[test]
    fn test_field_errors_found_among_intents() {
        let errors = FieldErrors {
            password: None,
            confirm: Some(ValidationError::Mismatch),
        };
        let intents = vec![Intent::Show(View::NewNote), Intent::FieldErrors(errors)];
        assert_eq!(field_errors(&intents), Some(errors));
        assert_eq!(field_errors(&[Intent::Notice(Notice::Locked)]), None);
    }
}
