//! Rule-based password strength checking
//!
//! Scores a password with a handful of heuristic rules (length, character
//! variety, common-password dictionary, repeated characters and common
//! sequences) and explains the score with ordered feedback lines.
//!
//! # Features
//!
//! - `cli` (default): Builds the interactive `pwd-check` binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DICTIONARY_PATH`: Custom path to the common password list
//!   (default: `common_passwords.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_check::{dictionary_path, evaluate_password_strength, load_common_passwords};
//! use secrecy::SecretString;
//!
//! let load = load_common_passwords(dictionary_path()).expect("Failed to read dictionary");
//! if let Some(warning) = load.warning() {
//!     eprintln!("{}", warning);
//! }
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password, &load.passwords);
//!
//! println!("Score: {}", evaluation.score);
//! println!("Verdict: {}", evaluation.verdict());
//! ```

// Internal modules
mod dictionary;
mod evaluator;
mod score;
mod sections;
mod shell;

// Public API
pub use dictionary::{
    dictionary_path, load_common_passwords, CommonPasswords, DictionaryError, DictionaryLoad,
    LoadStatus, DEFAULT_DICTIONARY_PATH, DICTIONARY_PATH_ENV,
};
pub use evaluator::evaluate_password_strength;
pub use score::{Evaluation, Score, Verdict, MODERATE_THRESHOLD, STRONG_THRESHOLD};
pub use shell::{render_report, run_shell};
