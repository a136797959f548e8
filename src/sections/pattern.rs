//! Pattern analysis section - detects repeated characters and common sequences.

use super::{SectionContext, SectionOutcome};

const PATTERN_PENALTY: i64 = -2;
const REPEAT_RUN: usize = 3;
const COMMON_SEQUENCES: [&str; 3] = ["abc", "123", "qwe"];

/// True if some character other than a newline appears three times in a row.
fn has_repeated_run(pwd: &str) -> bool {
    let mut run = 0;
    let mut prev = None;
    for c in pwd.chars() {
        if c != '\n' && prev == Some(c) {
            run += 1;
        } else {
            run = 1;
        }
        if c != '\n' && run >= REPEAT_RUN {
            return true;
        }
        prev = Some(c);
    }
    false
}

fn has_common_sequence(pwd: &str) -> bool {
    let lowered = pwd.to_lowercase();
    COMMON_SEQUENCES.iter().any(|seq| lowered.contains(seq))
}

/// Penalizes repeated runs (case-sensitive) and common sequences
/// (case-insensitive). Both checks may fire.
pub fn pattern_analysis_section(ctx: &SectionContext<'_>) -> SectionOutcome {
    let mut outcome = SectionOutcome::default();

    if has_repeated_run(ctx.password) {
        outcome.push(
            PATTERN_PENALTY,
            "Pattern: Avoid repeating characters (e.g., 'aaa', '111').",
        );
    }
    if has_common_sequence(ctx.password) {
        outcome.push(
            PATTERN_PENALTY,
            "Pattern: Avoid common sequences (e.g., 'abc', '123', 'qwerty').",
        );
    }

    outcome
}
