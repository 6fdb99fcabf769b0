//! Form field validation and sanitization.
//!
//! A [`Validator`] runs one pass over the submitted fields. Each field accessor trims the
//! raw value, applies its [`Rule`]s in order, records every failing rule as a
//! [`Violation`], and returns the sanitized value. Sanitized values are returned even when
//! a rule fails so that callers can always build a candidate to re-populate the form.

use chrono::NaiveDate;
use serde::Serialize;

use crate::server::util::parse::{parse_id, parse_iso_date};

/// A single field-level validation failure shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Name of the form field that failed validation.
    pub field: &'static str,
    /// Human-readable message describing the failure.
    pub msg: String,
}

/// A pure check applied to a trimmed text field.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// The value must be at least this many characters long.
    MinLength(usize, &'static str),
    /// The value must be non-empty and contain only ASCII letters and digits.
    Alphanumeric(&'static str),
}

impl Rule {
    /// Checks the value against the rule.
    ///
    /// # Returns
    /// - `Ok(())` - The value satisfies the rule
    /// - `Err(String)` - The violation message of the rule
    pub fn check(&self, value: &str) -> Result<(), String> {
        match *self {
            Rule::MinLength(min, msg) => {
                if value.chars().count() >= min {
                    Ok(())
                } else {
                    Err(msg.to_string())
                }
            }
            Rule::Alphanumeric(msg) => {
                if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric()) {
                    Ok(())
                } else {
                    Err(msg.to_string())
                }
            }
        }
    }
}

/// Outcome of validating a submitted form.
///
/// The candidate is always present; it is only safe to persist when `violations` is empty.
#[derive(Debug, Clone)]
pub struct Submission<C> {
    pub candidate: C,
    pub violations: Vec<Violation>,
}

impl<C> Submission<C> {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Splits the submission into the valid candidate or the candidate with its violations.
    pub fn into_result(self) -> Result<C, (C, Vec<Violation>)> {
        if self.is_valid() {
            Ok(self.candidate)
        } else {
            Err((self.candidate, self.violations))
        }
    }
}

/// Collects violations across the fields of one form submission.
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trims a text field and applies every rule in order.
    ///
    /// # Arguments
    /// - `field` - Form field name reported in violations
    /// - `raw` - Submitted value
    /// - `rules` - Rules applied to the trimmed value
    ///
    /// # Returns
    /// - `String` - The trimmed value, regardless of the outcome of the rules
    pub fn text(&mut self, field: &'static str, raw: &str, rules: &[Rule]) -> String {
        let value = raw.trim().to_string();

        for rule in rules {
            if let Err(msg) = rule.check(&value) {
                self.violations.push(Violation { field, msg });
            }
        }

        value
    }

    /// Parses an optional ISO 8601 date field.
    ///
    /// Empty values are treated as absent and never violate. A non-empty value that is not
    /// a valid date records `msg` and yields `None`.
    pub fn optional_date(
        &mut self,
        field: &'static str,
        raw: &str,
        msg: &'static str,
    ) -> Option<NaiveDate> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }

        let date = parse_iso_date(value);
        if date.is_none() {
            self.push(field, msg);
        }
        date
    }

    /// Parses an optional reference to another entity by id.
    ///
    /// Empty values are treated as absent. A non-numeric value records `msg`.
    pub fn optional_id(&mut self, field: &'static str, raw: &str, msg: &'static str) -> Option<i32> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }

        let id = parse_id(value);
        if id.is_none() {
            self.push(field, msg);
        }
        id
    }

    /// Parses a repeated field of entity ids, dropping duplicates and keeping the
    /// submission order. A single violation is recorded if any value is not an id.
    pub fn ids(&mut self, field: &'static str, raws: &[String], msg: &'static str) -> Vec<i32> {
        let mut ids = Vec::new();
        let mut invalid = false;

        for raw in raws.iter().map(|raw| raw.trim()).filter(|raw| !raw.is_empty()) {
            match parse_id(raw) {
                Some(id) if !ids.contains(&id) => ids.push(id),
                Some(_) => {}
                None => invalid = true,
            }
        }

        if invalid {
            self.push(field, msg);
        }
        ids
    }

    /// Finishes the pass, pairing the collected violations with the candidate built from
    /// the sanitized values.
    pub fn finish<C>(self, candidate: C) -> Submission<C> {
        Submission {
            candidate,
            violations: self.violations,
        }
    }

    fn push(&mut self, field: &'static str, msg: &str) {
        self.violations.push(Violation {
            field,
            msg: msg.to_string(),
        });
    }
}
