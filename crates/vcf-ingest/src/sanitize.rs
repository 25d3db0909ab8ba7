//! Control-character removal.

/// Sanitized text and the number of characters dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    pub text: String,
    pub removed: usize,
}

/// True for characters that would break line parsing or the import.
///
/// C0 controls and DEL are removed. LF and CR delimit content lines and HTAB
/// introduces folded continuation lines, so those three stay.
pub fn is_disallowed_control(ch: char) -> bool {
    match ch {
        '\n' | '\r' | '\t' => false,
        '\u{0000}'..='\u{001F}' | '\u{007F}' => true,
        _ => false,
    }
}

/// Strip disallowed control characters. Idempotent.
pub fn sanitize(text: &str) -> Sanitized {
    let mut removed = 0usize;
    let cleaned: String = text
        .chars()
        .filter(|&ch| {
            let drop = is_disallowed_control(ch);
            if drop {
                removed += 1;
            }
            !drop
        })
        .collect();
    if removed > 0 {
        tracing::info!(removed, "removed control characters");
    }
    Sanitized {
        text: cleaned,
        removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_removes_controls_and_delete() {
        let result = sanitize("FN:Ja\u{0000}ne\u{0007} Do\u{007F}e\r\nTEL:1\u{001B}\n");
        assert_eq!(result.text, "FN:Jane Doe\r\nTEL:1\n");
        assert_eq!(result.removed, 4);
    }

    #[test]
    fn test_keeps_line_structure_and_fold_tabs() {
        let text = "NOTE:first\r\n\tsecond\rthird\n";
        let result = sanitize(text);
        assert_eq!(result.text, text);
        assert_eq!(result.removed, 0);
    }

    #[test]
    fn test_keeps_non_ascii() {
        let result = sanitize("FN:Zoë Ñandú 王\u{FFFD}");
        assert_eq!(result.text, "FN:Zoë Ñandú 王\u{FFFD}");
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(input in any::<String>()) {
            let once = sanitize(&input);
            let twice = sanitize(&once.text);
            prop_assert_eq!(&once.text, &twice.text);
            prop_assert_eq!(twice.removed, 0);
        }

        #[test]
        fn sanitized_text_has_no_disallowed_controls(input in any::<String>()) {
            let result = sanitize(&input);
            prop_assert!(!result.text.chars().any(is_disallowed_control));
        }
    }
}
