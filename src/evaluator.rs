//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::dictionary::CommonPasswords;
use crate::score::{Evaluation, Score};
use crate::sections::{
    character_variety_section, dictionary_section, length_section, pattern_analysis_section,
    Section, SectionContext,
};

/// Sections in evaluation order. Feedback order follows this table.
const SECTIONS: [(&str, Section); 4] = [
    ("length", length_section),
    ("variety", character_variety_section),
    ("dictionary", dictionary_section),
    ("pattern", pattern_analysis_section),
];

/// Evaluates password strength against the given common password list.
///
/// Every input, including the empty string, gets a score and feedback
/// covering at least length, variety and the dictionary check. The score
/// is the plain sum of each section's contribution and may be negative.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `common` - Known-weak passwords; an empty set never matches
pub fn evaluate_password_strength(password: &SecretString, common: &CommonPasswords) -> Evaluation {
    let ctx = SectionContext {
        password: password.expose_secret(),
        common,
    };

    let mut score = Score::default();
    let mut feedback = Vec::new();

    for (_section_name, section_fn) in SECTIONS {
        let outcome = section_fn(&ctx);

        #[cfg(feature = "tracing")]
        tracing::trace!(section = _section_name, delta = outcome.delta, "section evaluated");

        score += outcome.delta;
        feedback.extend(outcome.messages);
    }

    let evaluation = Evaluation { score, feedback };

    #[cfg(feature = "tracing")]
    tracing::debug!(score = evaluation.score.value(), verdict = ?evaluation.verdict(), "password evaluated");

    evaluation
}
