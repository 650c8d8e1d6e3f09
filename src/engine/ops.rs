//! Input operations: the only way engine state changes.
//!
//! Each operation mutates the engine in place and returns the frame to
//! render. Evaluation failures never leave this module; they become
//! the error sentinel on the value line.

use crate::eval::{evaluate, format_number};
use crate::input::{InputEvent, Operator};
use crate::render::Frame;

use super::state::{ERROR_DISPLAY, Engine};

impl Engine {
    /// Apply one input event and return the frame to render.
    pub fn apply(&mut self, event: InputEvent) -> Frame {
        tracing::debug!(event = ?event, "input event");
        match event {
            InputEvent::Digit(digit) => self.input_digit(digit),
            InputEvent::Operator(op) => self.input_operator(op),
            InputEvent::Equals => self.equals(),
            InputEvent::Backspace => self.backspace(),
            InputEvent::Percent => self.percent(),
            InputEvent::ToggleSign => self.toggle_sign(),
            InputEvent::Clear => self.clear(),
        }
    }

    /// Append a digit or the decimal point to the live operand.
    ///
    /// After a completed evaluation (or on the error sentinel) a digit
    /// starts a fresh number. A leading decimal point becomes `0.`, a
    /// second decimal point is ignored, and a lone leading zero is
    /// replaced rather than extended. Characters other than `0`-`9`
    /// and `.` are ignored.
    pub fn input_digit(&mut self, digit: char) -> Frame {
        if !digit.is_ascii_digit() && digit != '.' {
            return self.frame();
        }
        if self.just_evaluated || self.is_error() {
            self.current = fresh_number(digit);
            self.just_evaluated = false;
        } else if self.current == "0" && digit != '.' {
            self.current = digit.to_string();
        } else if digit == '.' && self.current.contains('.') {
            // a number holds at most one decimal point
        } else {
            self.current.push(digit);
        }
        self.frame()
    }

    /// Push the live operand and an operator onto the history.
    ///
    /// After a completed evaluation the operand is re-seeded from the
    /// last result, so `5 + 3 =` followed by `+` continues from `8`.
    /// When the history already ends in a pending operator the new one
    /// replaces it (last-operator-wins, operators never stack).
    pub fn input_operator(&mut self, op: Operator) -> Frame {
        if self.just_evaluated {
            if let Some(value) = self.last_result {
                self.current = format_number(value);
            }
            self.just_evaluated = false;
        }
        if self.is_error() {
            // nothing valid to carry into the history
            return self.frame();
        }
        if self.previous.ends_with(['+', '-', '*', '/']) {
            self.previous.pop();
            self.previous.push(op.symbol());
        } else if self.previous.is_empty() {
            self.previous = format!("{} {}", self.current, op.symbol());
        } else {
            self.previous = format!("{} {} {}", self.previous, self.current, op.symbol());
        }
        self.current = "0".to_string();
        self.frame()
    }

    /// Evaluate the accumulated expression.
    ///
    /// On success the spaced expression moves to the history with a
    /// trailing `=` and the value line shows the result. On failure
    /// the value line shows the error sentinel and the history is
    /// cleared.
    pub fn equals(&mut self) -> Frame {
        let expr = if self.previous.is_empty() {
            self.current.clone()
        } else {
            format!("{} {}", self.previous, self.current)
        };
        let compact: String = expr.chars().filter(|c| !c.is_whitespace()).collect();
        match evaluate(&compact) {
            Ok(result) => {
                self.previous = format!("{expr} =");
                self.current = format_number(result);
                self.last_result = Some(result);
                self.just_evaluated = true;
            }
            Err(error) => {
                tracing::debug!(expr = %compact, error = %error, "evaluation failed");
                self.current = ERROR_DISPLAY.to_string();
                self.previous.clear();
            }
        }
        self.frame()
    }

    /// Delete the last typed character of the live operand.
    ///
    /// A completed result is not edited character-wise; backspace
    /// resets it to `0`. The error sentinel and single-character
    /// operands reset to `0` as well, and deleting the last digit of a
    /// negated operand drops the stranded sign.
    pub fn backspace(&mut self) -> Frame {
        if self.just_evaluated {
            self.current = "0".to_string();
            self.just_evaluated = false;
            return self.frame();
        }
        if self.is_error() || self.current.len() <= 1 {
            self.current = "0".to_string();
            return self.frame();
        }
        self.current.pop();
        if self.current == "-" {
            self.current = "0".to_string();
        }
        self.frame()
    }

    /// Divide the live operand by 100.
    pub fn percent(&mut self) -> Frame {
        match evaluate(&self.current) {
            Ok(value) => {
                self.current = format_number(value / 100.0);
            }
            Err(error) => {
                tracing::debug!(operand = %self.current, error = %error, "percent failed");
                self.current = ERROR_DISPLAY.to_string();
            }
        }
        self.frame()
    }

    /// Negate the live operand. `0` and the error sentinel are left
    /// untouched.
    pub fn toggle_sign(&mut self) -> Frame {
        if self.current != "0" && !self.is_error() {
            if let Some(stripped) = self.current.strip_prefix('-') {
                self.current = stripped.to_string();
            } else {
                self.current.insert(0, '-');
            }
        }
        self.frame()
    }

    /// Reset to the initial state.
    pub fn clear(&mut self) -> Frame {
        *self = Self::new();
        self.frame()
    }
}

fn fresh_number(digit: char) -> String {
    if digit == '.' {
        "0.".to_string()
    } else {
        digit.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_digits(engine: &mut Engine, digits: &str) {
        for c in digits.chars() {
            engine.input_digit(c);
        }
    }

    #[test]
    fn test_digit_replaces_leading_zero() {
        let mut engine = Engine::new();
        let frame = engine.input_digit('5');
        assert_eq!(frame.current, "5");
    }

    #[test]
    fn test_digits_append() {
        let mut engine = Engine::new();
        type_digits(&mut engine, "120.5");
        assert_eq!(engine.current(), "120.5");
    }

    #[test]
    fn test_leading_decimal_point_becomes_zero_dot() {
        let mut engine = Engine::new();
        engine.input_digit('.');
        assert_eq!(engine.current(), "0.");
    }

    #[test]
    fn test_second_decimal_point_is_ignored() {
        let mut engine = Engine::new();
        engine.input_digit('.');
        let frame = engine.input_digit('.');
        assert_eq!(frame.current, "0.");
    }

    #[test]
    fn test_non_digit_characters_are_ignored() {
        let mut engine = Engine::new();
        let frame = engine.input_digit('x');
        assert_eq!(frame.current, "0");
    }

    #[test]
    fn test_add_scenario() {
        let mut engine = Engine::new();
        engine.input_digit('5');
        engine.input_operator(Operator::Add);
        engine.input_digit('3');
        let frame = engine.equals();
        assert_eq!(frame.previous, "5 + 3 =");
        assert_eq!(frame.current, "8");
        assert_eq!(engine.last_result(), Some(8.0));
        assert!(engine.just_evaluated());
    }

    #[test]
    fn test_division_by_zero_shows_error() {
        let mut engine = Engine::new();
        engine.input_digit('1');
        engine.input_operator(Operator::Divide);
        engine.input_digit('0');
        let frame = engine.equals();
        assert_eq!(frame.current, "Error");
        assert_eq!(frame.previous, "");
    }

    #[test]
    fn test_evaluation_honors_precedence() {
        let mut engine = Engine::new();
        engine.input_digit('2');
        engine.input_operator(Operator::Add);
        engine.input_digit('3');
        engine.input_operator(Operator::Multiply);
        engine.input_digit('4');
        let frame = engine.equals();
        assert_eq!(frame.previous, "2 + 3 * 4 =");
        assert_eq!(frame.current, "14");
    }

    #[test]
    fn test_operator_replaces_pending_operator() {
        let mut engine = Engine::new();
        engine.input_digit('5');
        engine.input_operator(Operator::Add);
        let frame = engine.input_operator(Operator::Multiply);
        assert_eq!(frame.previous, "5 *");
        assert_eq!(frame.current, "0");
    }

    #[test]
    fn test_operator_chains_through_history() {
        let mut engine = Engine::new();
        engine.input_digit('1');
        engine.input_operator(Operator::Add);
        engine.input_digit('2');
        let frame = engine.input_operator(Operator::Subtract);
        assert_eq!(frame.previous, "1 + 2 -");
    }

    #[test]
    fn test_operator_after_equals_continues_from_result() {
        let mut engine = Engine::new();
        engine.input_digit('5');
        engine.input_operator(Operator::Add);
        engine.input_digit('3');
        engine.equals();
        let frame = engine.input_operator(Operator::Add);
        assert_eq!(frame.previous, "8 +");
        assert_eq!(frame.current, "0");
        assert!(!engine.just_evaluated());
    }

    #[test]
    fn test_digit_after_equals_starts_fresh() {
        let mut engine = Engine::new();
        engine.input_digit('5');
        engine.equals();
        let frame = engine.input_digit('7');
        assert_eq!(frame.current, "7");
        assert!(!engine.just_evaluated());
    }

    #[test]
    fn test_decimal_after_equals_starts_fresh() {
        let mut engine = Engine::new();
        engine.input_digit('5');
        engine.equals();
        let frame = engine.input_digit('.');
        assert_eq!(frame.current, "0.");
    }

    #[test]
    fn test_equals_without_history() {
        let mut engine = Engine::new();
        type_digits(&mut engine, "42");
        let frame = engine.equals();
        assert_eq!(frame.previous, "42 =");
        assert_eq!(frame.current, "42");
    }

    #[test]
    fn test_equals_twice_shows_error() {
        // The rebuilt expression ends in `=`, which the grammar rejects.
        let mut engine = Engine::new();
        engine.input_digit('5');
        engine.input_operator(Operator::Add);
        engine.input_digit('3');
        engine.equals();
        let frame = engine.equals();
        assert_eq!(frame.current, "Error");
        assert_eq!(frame.previous, "");
    }

    #[test]
    fn test_backspace_drops_last_character() {
        let mut engine = Engine::new();
        type_digits(&mut engine, "123");
        let frame = engine.backspace();
        assert_eq!(frame.current, "12");
    }

    #[test]
    fn test_backspace_on_single_digit_resets_to_zero() {
        let mut engine = Engine::new();
        engine.input_digit('7');
        let frame = engine.backspace();
        assert_eq!(frame.current, "0");
    }

    #[test]
    fn test_backspace_after_equals_resets_to_zero() {
        let mut engine = Engine::new();
        type_digits(&mut engine, "123");
        engine.equals();
        let frame = engine.backspace();
        assert_eq!(frame.current, "0");
        assert!(!engine.just_evaluated());
    }

    #[test]
    fn test_backspace_never_strands_a_sign() {
        let mut engine = Engine::new();
        engine.input_digit('5');
        engine.toggle_sign();
        let frame = engine.backspace();
        assert_eq!(frame.current, "0");
    }

    #[test]
    fn test_percent_scenario() {
        let mut engine = Engine::new();
        engine.input_digit('5');
        let frame = engine.percent();
        assert_eq!(frame.current, "0.05");
    }

    #[test]
    fn test_percent_of_negative_operand() {
        let mut engine = Engine::new();
        engine.input_digit('5');
        engine.toggle_sign();
        let frame = engine.percent();
        assert_eq!(frame.current, "-0.05");
    }

    #[test]
    fn test_percent_on_error_stays_error() {
        let mut engine = Engine::new();
        engine.input_digit('1');
        engine.input_operator(Operator::Divide);
        engine.input_digit('0');
        engine.equals();
        let frame = engine.percent();
        assert_eq!(frame.current, "Error");
    }

    #[test]
    fn test_toggle_sign_roundtrip() {
        let mut engine = Engine::new();
        engine.input_digit('9');
        assert_eq!(engine.toggle_sign().current, "-9");
        assert_eq!(engine.toggle_sign().current, "9");
    }

    #[test]
    fn test_toggle_sign_ignores_zero() {
        let mut engine = Engine::new();
        let frame = engine.toggle_sign();
        assert_eq!(frame.current, "0");
    }

    #[test]
    fn test_negated_operand_evaluates() {
        let mut engine = Engine::new();
        engine.input_digit('5');
        engine.toggle_sign();
        engine.input_operator(Operator::Add);
        engine.input_digit('8');
        let frame = engine.equals();
        assert_eq!(frame.previous, "-5 + 8 =");
        assert_eq!(frame.current, "3");
    }

    #[test]
    fn test_digit_after_error_starts_fresh() {
        let mut engine = Engine::new();
        engine.input_digit('1');
        engine.input_operator(Operator::Divide);
        engine.input_digit('0');
        engine.equals();
        let frame = engine.input_digit('4');
        assert_eq!(frame.current, "4");
    }

    #[test]
    fn test_operator_on_error_is_ignored() {
        let mut engine = Engine::new();
        engine.input_digit('1');
        engine.input_operator(Operator::Divide);
        engine.input_digit('0');
        engine.equals();
        let frame = engine.input_operator(Operator::Add);
        assert_eq!(frame.current, "Error");
        assert_eq!(frame.previous, "");
    }

    #[test]
    fn test_backspace_on_error_resets_to_zero() {
        let mut engine = Engine::new();
        engine.input_digit('1');
        engine.input_operator(Operator::Divide);
        engine.input_digit('0');
        engine.equals();
        let frame = engine.backspace();
        assert_eq!(frame.current, "0");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut engine = Engine::new();
        engine.input_digit('5');
        engine.input_operator(Operator::Add);
        engine.input_digit('3');
        engine.equals();
        let frame = engine.clear();
        assert_eq!(frame.current, "0");
        assert_eq!(frame.previous, "");
        assert_eq!(engine.last_result(), None);
        assert!(!engine.just_evaluated());
    }

    #[test]
    fn test_apply_dispatches_every_event() {
        let mut engine = Engine::new();
        engine.apply(InputEvent::Digit('5'));
        engine.apply(InputEvent::Operator(Operator::Multiply));
        engine.apply(InputEvent::Digit('4'));
        let frame = engine.apply(InputEvent::Equals);
        assert_eq!(frame.previous, "5 * 4 =");
        assert_eq!(frame.current, "20");

        engine.apply(InputEvent::Backspace);
        engine.apply(InputEvent::Digit('8'));
        engine.apply(InputEvent::ToggleSign);
        assert_eq!(engine.current(), "-8");
        engine.apply(InputEvent::Percent);
        assert_eq!(engine.current(), "-0.08");
        let frame = engine.apply(InputEvent::Clear);
        assert_eq!(frame.current, "0");
    }

    #[test]
    fn test_float_noise_is_rounded_for_display() {
        let mut engine = Engine::new();
        type_digits(&mut engine, "0.1");
        engine.input_operator(Operator::Add);
        type_digits(&mut engine, "0.2");
        let frame = engine.equals();
        assert_eq!(frame.current, "0.3");
    }
}
