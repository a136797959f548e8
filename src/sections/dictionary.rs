//! Dictionary section - checks if password is in the common password list.

use super::{SectionContext, SectionOutcome};

const DICTIONARY_PENALTY: i64 = -5;

/// Penalizes passwords found (case-insensitively) in the common password list.
pub fn dictionary_section(ctx: &SectionContext<'_>) -> SectionOutcome {
    if ctx.common.contains(ctx.password) {
        return SectionOutcome::new(
            DICTIONARY_PENALTY,
            "Dictionary Check: WARNING! Your password is a common dictionary word. This is very weak!",
        );
    }
    SectionOutcome::new(0, "Dictionary Check: Not found in common password list.")
}
