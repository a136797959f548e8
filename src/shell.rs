//! Interactive password checking loop.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use secrecy::SecretString;

use crate::dictionary::CommonPasswords;
use crate::evaluator::evaluate_password_strength;
use crate::score::Evaluation;

const BANNER: &str = "--- Password Strength Checker ---\n\
Enter a password to check its strength (or type 'exit' to quit).\n";
const PROMPT: &str = "\nEnter your password: ";
const EXIT_COMMAND: &str = "exit";

/// Formats the analysis block printed after each password.
pub fn render_report(evaluation: &Evaluation) -> String {
    let mut out = String::from("\n--- Password Analysis ---\n");
    for msg in &evaluation.feedback {
        let _ = writeln!(out, "{}", msg);
    }
    let _ = writeln!(out, "\nOverall Score: {}", evaluation.score);
    let _ = writeln!(out, "Verdict: {}", evaluation.verdict());
    out
}

/// Prompts for passwords until `exit` (any case) or end of input, printing
/// an analysis for each one.
pub fn run_shell<R, W>(mut input: R, mut output: W, common: &CommonPasswords) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    output.write_all(BANNER.as_bytes())?;

    loop {
        output.write_all(PROMPT.as_bytes())?;
        output.flush()?;

        let mut raw = Vec::new();
        if input.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&raw);
        let entered = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(&*line);

        if entered.eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }

        let password = SecretString::new(entered.to_string().into());
        let evaluation = evaluate_password_strength(&password, common);
        output.write_all(render_report(&evaluation).as_bytes())?;
    }

    output.flush()
}
