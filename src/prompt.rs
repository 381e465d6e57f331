// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bounded question loops and answer parsing
//!
//! A question is re-asked until its parser accepts the answer or the
//! attempt budget runs out. Running out is reported as `Ok(None)` so the
//! caller can cancel cleanly; I/O failures stay errors.

use crate::terminal::Terminal;
use crate::types::Dialect;
use anyhow::Result;

/// Default number of times a question is asked before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Keyword selecting the informal German register.
pub const INFORMAL_KEYWORD: &str = "du";

/// Ask `question` until `parse` accepts an answer, at most `max_attempts` times.
pub fn ask_until<T, F>(
    term: &mut dyn Terminal,
    question: &str,
    max_attempts: usize,
    parse: F,
) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<T>,
{
    for _ in 0..max_attempts.max(1) {
        let answer = term.ask(question)?;
        if let Some(value) = parse(&answer) {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// `y`/`yes` → true, `n`/`no` → false, anything else is not an answer.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Only an explicit `y`/`yes` confirms; every other answer declines.
pub fn is_confirmed(answer: &str) -> bool {
    parse_yes_no(answer) == Some(true)
}

/// `du` → informal, empty → formal, anything else is not an answer.
pub fn parse_dialect(answer: &str) -> Option<Dialect> {
    let answer = answer.trim();
    if answer.is_empty() {
        Some(Dialect::Formal)
    } else if answer.eq_ignore_ascii_case(INFORMAL_KEYWORD) {
        Some(Dialect::Informal)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::ScriptedTerminal;

    #[test]
    fn yes_no_is_case_insensitive() {
        assert_eq!(parse_yes_no("Y"), Some(true));
        assert_eq!(parse_yes_no("YES"), Some(true));
        assert_eq!(parse_yes_no("No"), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);
        assert_eq!(parse_yes_no(""), None);
    }

    #[test]
    fn confirmation_requires_explicit_yes() {
        assert!(is_confirmed("yes"));
        assert!(!is_confirmed(""));
        assert!(!is_confirmed("n"));
        assert!(!is_confirmed("sure"));
    }

    #[test]
    fn dialect_answers() {
        assert_eq!(parse_dialect("DU"), Some(Dialect::Informal));
        assert_eq!(parse_dialect(""), Some(Dialect::Formal));
        assert_eq!(parse_dialect("sie"), None);
    }

    #[test]
    fn ask_until_retries_then_accepts() {
        let mut term = ScriptedTerminal::new(["what", "?", "n"]);
        let answer = ask_until(&mut term, "overwrite?", 5, parse_yes_no).unwrap();
        assert_eq!(answer, Some(false));
        assert_eq!(term.questions().len(), 3);
    }

    #[test]
    fn ask_until_stops_at_attempt_limit() {
        let mut term = ScriptedTerminal::new(["a", "b", "c", "y"]);
        let answer = ask_until(&mut term, "overwrite?", 3, parse_yes_no).unwrap();
        assert_eq!(answer, None);
        assert_eq!(term.remaining_answers(), 1);
    }

    #[test]
    fn ask_until_propagates_closed_input() {
        let mut term = ScriptedTerminal::new(Vec::<String>::new());
        assert!(ask_until(&mut term, "overwrite?", 3, parse_yes_no).is_err());
    }
}
