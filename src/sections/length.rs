//! Length section - rewards longer passwords.

use super::{SectionContext, SectionOutcome};

const MIN_LENGTH: usize = 8;
const OKAY_LENGTH: usize = 6;

/// Scores the password length in characters.
///
/// - `>= 8` characters: +2
/// - `6..8` characters: +1
/// - shorter: +0
pub fn length_section(ctx: &SectionContext<'_>) -> SectionOutcome {
    let len = ctx.password.chars().count();
    if len >= MIN_LENGTH {
        SectionOutcome::new(2, format!("Length: Good ({} characters)", len))
    } else if len >= OKAY_LENGTH {
        SectionOutcome::new(
            1,
            format!(
                "Length: Okay ({} characters). Consider making it longer (min {}).",
                len, MIN_LENGTH
            ),
        )
    } else {
        SectionOutcome::new(
            0,
            format!(
                "Length: Too short ({} characters). Must be at least {}.",
                len, MIN_LENGTH
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::CommonPasswords;

    fn run(password: &str) -> SectionOutcome {
        let common = CommonPasswords::empty();
        length_section(&SectionContext { password, common: &common })
    }

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(
            run("abc"),
            SectionOutcome::new(0, "Length: Too short (3 characters). Must be at least 8.")
        );
    }

    #[test]
    fn test_length_section_empty() {
        assert_eq!(
            run(""),
            SectionOutcome::new(0, "Length: Too short (0 characters). Must be at least 8.")
        );
    }

    #[test]
    fn test_length_section_okay() {
        assert_eq!(
            run("abcdef"),
            SectionOutcome::new(
                1,
                "Length: Okay (6 characters). Consider making it longer (min 8)."
            )
        );
        assert_eq!(run("abcdefg").delta, 1);
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(run("abcdefgh"), SectionOutcome::new(2, "Length: Good (8 characters)"));
    }

    #[test]
    fn test_length_section_counts_characters_not_bytes() {
        // 5 characters, 10 bytes
        let outcome = run("ééééé");
        assert_eq!(outcome.delta, 0);
        assert!(outcome.messages[0].contains("(5 characters)"));
    }
}
