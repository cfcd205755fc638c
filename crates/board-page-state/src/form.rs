//! Post-form validation.
//!
//! A convenience layer only: the server re-validates every submission.
//! Name and message are checked here so the user gets one combined
//! notice without a round trip. Lengths are counted in UTF-16 code
//! units, the unit the DOM itself measures for form fields.

pub const NAME_MAX_UNITS: usize = 32;
pub const MESSAGE_MAX_UNITS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PostFormError {
    #[error("名前を入力してください")]
    EmptyName,
    #[error("名前は32文字以内で入力してください")]
    NameTooLong,
    #[error("メッセージを入力してください")]
    EmptyMessage,
    #[error("メッセージは1000文字以内で入力してください")]
    MessageTooLong,
}

/// Check both fields and collect every failure, so the notice can list
/// them together. Per field, presence is checked before length; the
/// untrimmed value counts toward the limit.
pub fn validate_post_form(name: &str, message: &str) -> Vec<PostFormError> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(PostFormError::EmptyName);
    } else if utf16_len(name) > NAME_MAX_UNITS {
        errors.push(PostFormError::NameTooLong);
    }

    if message.trim().is_empty() {
        errors.push(PostFormError::EmptyMessage);
    } else if utf16_len(message) > MESSAGE_MAX_UNITS {
        errors.push(PostFormError::MessageTooLong);
    }

    errors
}

/// One blocking notice, one line per failure.
pub fn notice_text(errors: &[PostFormError]) -> String {
    errors
        .iter()
        .map(|error| error.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_fields_produce_no_errors() {
        assert!(validate_post_form("名無しさん", "こんにちは").is_empty());
        assert!(validate_post_form(&"あ".repeat(32), &"あ".repeat(1000)).is_empty());
    }

    #[test]
    fn name_of_33_units_is_rejected_with_only_the_length_error() {
        let errors = validate_post_form(&"a".repeat(33), "hello");
        assert_eq!(errors, vec![PostFormError::NameTooLong]);
    }

    #[test]
    fn empty_message_is_rejected() {
        let errors = validate_post_form("名無しさん", "   ");
        assert_eq!(errors, vec![PostFormError::EmptyMessage]);
    }

    #[test]
    fn both_failures_are_collected_in_one_pass() {
        let errors = validate_post_form("", &"x".repeat(1001));
        assert_eq!(
            errors,
            vec![PostFormError::EmptyName, PostFormError::MessageTooLong]
        );
    }

    #[test]
    fn lengths_count_utf16_units() {
        // 17 emoji are 34 UTF-16 units even though only 17 chars.
        let name = "😀".repeat(17);
        assert_eq!(
            validate_post_form(&name, "hi"),
            vec![PostFormError::NameTooLong]
        );
        // 16 emoji fit exactly.
        assert!(validate_post_form(&"😀".repeat(16), "hi").is_empty());
    }

    #[test]
    fn whitespace_only_name_counts_as_empty_not_too_long() {
        let errors = validate_post_form(&" ".repeat(40), "hi");
        assert_eq!(errors, vec![PostFormError::EmptyName]);
    }

    #[test]
    fn notice_text_joins_messages_one_per_line() {
        let errors = validate_post_form("", "");
        assert_eq!(
            notice_text(&errors),
            "名前を入力してください\nメッセージを入力してください"
        );
    }
}
