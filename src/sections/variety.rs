//! Character variety section - checks for lowercase, uppercase, digits and symbols.

use super::{SectionContext, SectionOutcome};

/// Characters counted as symbols.
pub const SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

/// Scores how many character classes the password uses, then appends one
/// hint per missing class in the order lowercase, uppercase, digit, symbol.
pub fn character_variety_section(ctx: &SectionContext<'_>) -> SectionOutcome {
    let pwd = ctx.password;
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_symbol = pwd.chars().any(is_symbol);

    let char_types = [has_lower, has_upper, has_digit, has_symbol]
        .iter()
        .filter(|&&b| b)
        .count();

    let mut outcome = match char_types {
        4 => SectionOutcome::new(
            3,
            "Variety: Excellent (includes lowercase, uppercase, numbers, and symbols).",
        ),
        3 => SectionOutcome::new(2, "Variety: Good (includes at least 3 types of characters)."),
        2 => SectionOutcome::new(
            1,
            "Variety: Moderate (includes at least 2 types of characters). Add more variety for better strength.",
        ),
        _ => SectionOutcome::new(0, "Variety: Low (needs more diverse characters)."),
    };

    let hints = [
        (has_lower, "- Add lowercase letters."),
        (has_upper, "- Add uppercase letters."),
        (has_digit, "- Add numbers."),
        (has_symbol, "- Add symbols (e.g., !@#$%^&*)."),
    ];
    for (present, hint) in hints {
        if !present {
            outcome.push(0, hint);
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::CommonPasswords;

    fn run(password: &str) -> SectionOutcome {
        let common = CommonPasswords::empty();
        character_variety_section(&SectionContext { password, common: &common })
    }

    #[test]
    fn test_variety_section_all_classes() {
        let outcome = run("Ab1!");
        assert_eq!(outcome.delta, 3);
        assert_eq!(
            outcome.messages,
            vec!["Variety: Excellent (includes lowercase, uppercase, numbers, and symbols)."]
        );
    }

    #[test]
    fn test_variety_section_missing_symbol() {
        let outcome = run("Ab12");
        assert_eq!(outcome.delta, 2);
        assert_eq!(
            outcome.messages,
            vec![
                "Variety: Good (includes at least 3 types of characters).",
                "- Add symbols (e.g., !@#$%^&*).",
            ]
        );
    }

    #[test]
    fn test_variety_section_two_classes() {
        let outcome = run("abc123");
        assert_eq!(outcome.delta, 1);
        assert_eq!(
            outcome.messages,
            vec![
                "Variety: Moderate (includes at least 2 types of characters). Add more variety for better strength.",
                "- Add uppercase letters.",
                "- Add symbols (e.g., !@#$%^&*).",
            ]
        );
    }

    #[test]
    fn test_variety_section_single_class() {
        let outcome = run("password");
        assert_eq!(outcome.delta, 0);
        assert_eq!(
            outcome.messages,
            vec![
                "Variety: Low (needs more diverse characters).",
                "- Add uppercase letters.",
                "- Add numbers.",
                "- Add symbols (e.g., !@#$%^&*).",
            ]
        );
    }

    #[test]
    fn test_variety_section_empty_lists_every_hint() {
        let outcome = run("");
        assert_eq!(outcome.delta, 0);
        assert_eq!(
            outcome.messages,
            vec![
                "Variety: Low (needs more diverse characters).",
                "- Add lowercase letters.",
                "- Add uppercase letters.",
                "- Add numbers.",
                "- Add symbols (e.g., !@#$%^&*).",
            ]
        );
    }

    #[test]
    fn test_variety_section_symbols_only() {
        let outcome = run(SYMBOLS);
        assert_eq!(outcome.delta, 0);
        assert_eq!(outcome.messages.len(), 4);
        assert_eq!(outcome.messages[3], "- Add numbers.");
    }

    #[test]
    fn test_variety_section_ignores_unlisted_punctuation_and_unicode() {
        // '-', '_' and non-ASCII letters belong to no class
        let outcome = run("-_éÉ");
        assert_eq!(outcome.delta, 0);
        assert_eq!(outcome.messages.len(), 5);
    }
}
