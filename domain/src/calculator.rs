//! Keystroke handling for the calculator widget.
//!
//! The session only builds expression strings; evaluation is done by the
//! server (`POST /api/calculator`) and its answer is fed back through
//! [`CalculatorSession::finish`].

use std::collections::VecDeque;

pub const DEFAULT_HISTORY_LIMIT: usize = 10;

const ERROR_DISPLAY: &str = "Error";
const INITIAL_DISPLAY: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcKey {
    /// A digit or the decimal point
    Digit(char),
    Operator(Operator),
    Equals,
    Clear,
    ClearEntry,
}

impl CalcKey {
    /// Map a button label to its key
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "=" => Some(CalcKey::Equals),
            "C" => Some(CalcKey::Clear),
            "CE" => Some(CalcKey::ClearEntry),
            _ => {
                if let Some(op) = Operator::from_symbol(label) {
                    return Some(CalcKey::Operator(op));
                }
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() || c == '.' => Some(CalcKey::Digit(c)),
                    _ => None,
                }
            }
        }
    }

    pub fn label(self) -> String {
        match self {
            CalcKey::Digit(c) => c.to_string(),
            CalcKey::Operator(op) => op.symbol().to_string(),
            CalcKey::Equals => "=".to_string(),
            CalcKey::Clear => "C".to_string(),
            CalcKey::ClearEntry => "CE".to_string(),
        }
    }
}

/// Button layout of the keypad, row by row
pub const KEYPAD: [[&str; 4]; 5] = [
    ["C", "CE", "/", "*"],
    ["7", "8", "9", "-"],
    ["4", "5", "6", "+"],
    ["1", "2", "3", "="],
    ["0", ".", "", ""],
];

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: String,
    pub timestamp: String,
}

/// An expression handed to the server, tied to the session state it was
/// typed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub expression: String,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorSession {
    display: String,
    expression: String,
    history: VecDeque<HistoryEntry>,
    history_limit: usize,
    /// Bumped by C and CE; answers for older evaluations are dropped
    generation: u64,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl CalculatorSession {
    pub fn new(history_limit: usize) -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            expression: String::new(),
            history: VecDeque::new(),
            history_limit,
            generation: 0,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Most recent evaluation first
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn display_is_operator(&self) -> bool {
        Operator::from_symbol(&self.display).is_some()
    }

    /// Apply a keystroke. Returns the evaluation to send when `=`
    /// completes an expression.
    pub fn press(&mut self, key: CalcKey) -> Option<Evaluation> {
        match key {
            CalcKey::Digit(c) => {
                if self.display == INITIAL_DISPLAY
                    || self.display == ERROR_DISPLAY
                    || self.display_is_operator()
                {
                    self.display = c.to_string();
                } else {
                    self.display.push(c);
                }
                None
            }
            CalcKey::Operator(op) => {
                if self.display_is_operator() && !self.expression.is_empty() {
                    // Replace the pending operator rather than stacking a second one
                    self.expression.pop();
                } else {
                    self.expression.push_str(&self.display);
                }
                self.expression.push_str(op.symbol());
                self.display = op.symbol().to_string();
                None
            }
            CalcKey::Equals => {
                if self.expression.is_empty() {
                    return None;
                }
                self.expression.push_str(&self.display);
                Some(Evaluation {
                    expression: self.expression.clone(),
                    generation: self.generation,
                })
            }
            CalcKey::Clear => {
                self.reset_entry();
                self.history.clear();
                None
            }
            CalcKey::ClearEntry => {
                self.reset_entry();
                None
            }
        }
    }

    /// Record the server's answer. `None` covers error bodies, non-numeric
    /// results and transport failures. Answers arriving after a clear are
    /// ignored.
    pub fn finish(
        &mut self,
        evaluation: &Evaluation,
        result: Option<f64>,
        timestamp: impl Into<String>,
    ) {
        if evaluation.generation != self.generation {
            log::debug!(target: "calculator", "Ignoring late result for {}", evaluation.expression);
            return;
        }
        self.expression.clear();
        match result.and_then(format_result) {
            Some(text) => {
                self.history.push_front(HistoryEntry {
                    expression: evaluation.expression.clone(),
                    result: text.clone(),
                    timestamp: timestamp.into(),
                });
                self.history.truncate(self.history_limit);
                self.display = text;
            }
            None => self.display = ERROR_DISPLAY.to_string(),
        }
    }

    fn reset_entry(&mut self) {
        self.display = INITIAL_DISPLAY.to_string();
        self.expression.clear();
        self.generation += 1;
    }
}

/// Integral values print without a decimal point. Non-finite values are
/// not displayable.
pub fn format_result(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    if value == 0.0 {
        return Some("0".to_string());
    }
    Some(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(session: &mut CalculatorSession, labels: &[&str]) -> Option<Evaluation> {
        let mut submitted = None;
        for label in labels {
            let key = CalcKey::parse(label).unwrap();
            if let Some(evaluation) = session.press(key) {
                submitted = Some(evaluation);
            }
        }
        submitted
    }

    /// Type `a + b =` and record the server's answer
    fn add(session: &mut CalculatorSession, a: &str, b: &str, result: f64) {
        let evaluation = press_all(session, &[a, "+", b, "="]).unwrap();
        session.finish(&evaluation, Some(result), "now");
    }

    #[test]
    fn test_digits_replace_initial_zero() {
        let mut session = CalculatorSession::default();
        press_all(&mut session, &["1", "2", ".", "5"]);
        assert_eq!(session.display(), "12.5");
        assert_eq!(session.expression(), "");
    }

    #[test]
    fn test_builds_expression_for_server() {
        let mut session = CalculatorSession::default();
        let submitted = press_all(&mut session, &["2", "+", "2", "="]).unwrap();
        assert_eq!(submitted.expression, "2+2");

        session.finish(&submitted, Some(4.0), "10:00:00 AM");
        assert_eq!(session.display(), "4");
        assert_eq!(session.expression(), "");

        let entry = session.history().next().unwrap();
        assert_eq!(entry.expression, "2+2");
        assert_eq!(entry.result, "4");
    }

    #[test]
    fn test_operator_after_operator_overwrites() {
        let mut session = CalculatorSession::default();
        press_all(&mut session, &["7", "+", "*"]);
        assert_eq!(session.expression(), "7*");
        assert_eq!(session.display(), "*");

        let submitted = press_all(&mut session, &["3", "="]).unwrap();
        assert_eq!(submitted.expression, "7*3");
    }

    #[test]
    fn test_equals_without_expression_does_nothing() {
        let mut session = CalculatorSession::default();
        assert_eq!(press_all(&mut session, &["5", "="]), None);
        assert_eq!(session.display(), "5");
    }

    #[test]
    fn test_failed_evaluation_shows_error() {
        let mut session = CalculatorSession::default();
        let submitted = press_all(&mut session, &["1", "/", "0", "="]).unwrap();
        session.finish(&submitted, None, "now");
        assert_eq!(session.display(), "Error");
        assert_eq!(session.expression(), "");
        assert_eq!(session.history_len(), 0);

        // Next digit replaces the error text
        press_all(&mut session, &["3"]);
        assert_eq!(session.display(), "3");
    }

    #[test]
    fn test_history_is_capped_newest_first() {
        let mut session = CalculatorSession::default();
        for digit in ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "1"] {
            add(&mut session, digit, "0", 0.0);
            press_all(&mut session, &["CE"]);
        }

        assert_eq!(session.history_len(), 10);
        let expressions: Vec<&str> = session.history().map(|e| e.expression.as_str()).collect();
        assert_eq!(expressions[0], "1+0");
        assert_eq!(expressions[9], "2+0");
    }

    #[test]
    fn test_clear_entry_keeps_history() {
        let mut session = CalculatorSession::default();
        add(&mut session, "1", "1", 2.0);
        press_all(&mut session, &["5", "+", "CE"]);

        assert_eq!(session.display(), "0");
        assert_eq!(session.expression(), "");
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn test_clear_resets_history() {
        let mut session = CalculatorSession::default();
        add(&mut session, "1", "1", 2.0);
        press_all(&mut session, &["5", "C"]);

        assert_eq!(session.display(), "0");
        assert_eq!(session.history_len(), 0);
    }

    #[test]
    fn test_result_after_clear_is_ignored() {
        let mut session = CalculatorSession::default();
        let in_flight = press_all(&mut session, &["6", "*", "7", "="]).unwrap();
        press_all(&mut session, &["C"]);

        session.finish(&in_flight, Some(42.0), "now");
        assert_eq!(session.display(), "0");
        assert_eq!(session.history_len(), 0);

        // A fresh evaluation still lands
        add(&mut session, "2", "3", 5.0);
        assert_eq!(session.display(), "5");
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(4.0).as_deref(), Some("4"));
        assert_eq!(format_result(2.5).as_deref(), Some("2.5"));
        assert_eq!(format_result(-3.0).as_deref(), Some("-3"));
        assert_eq!(format_result(-0.0).as_deref(), Some("0"));
        assert_eq!(format_result(f64::INFINITY), None);
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!(CalcKey::parse("7"), Some(CalcKey::Digit('7')));
        assert_eq!(CalcKey::parse("/"), Some(CalcKey::Operator(Operator::Divide)));
        assert_eq!(CalcKey::parse("CE"), Some(CalcKey::ClearEntry));
        assert_eq!(CalcKey::parse("12"), None);
        assert_eq!(CalcKey::parse(""), None);
        for row in KEYPAD {
            for label in row.iter().filter(|l| !l.is_empty()) {
                assert_eq!(CalcKey::parse(label).map(CalcKey::label).as_deref(), Some(*label));
            }
        }
    }
}
