//! Password evaluation sections
//!
//! Each section scores one aspect of password strength and explains it.

mod dictionary;
mod length;
mod pattern;
mod variety;

pub use dictionary::dictionary_section;
pub use length::length_section;
pub use pattern::pattern_analysis_section;
pub use variety::character_variety_section;

use crate::dictionary::CommonPasswords;

/// Inputs shared by every section.
pub struct SectionContext<'a> {
    pub password: &'a str,
    pub common: &'a CommonPasswords,
}

/// Score contribution and feedback produced by one section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionOutcome {
    pub delta: i64,
    pub messages: Vec<String>,
}

impl SectionOutcome {
    pub fn new(delta: i64, message: impl Into<String>) -> Self {
        Self {
            delta,
            messages: vec![message.into()],
        }
    }

    /// Adds another finding to this outcome.
    pub fn push(&mut self, delta: i64, message: impl Into<String>) {
        self.delta += delta;
        self.messages.push(message.into());
    }
}

pub type Section = fn(&SectionContext<'_>) -> SectionOutcome;
