//! Batch validation.
//!
//! Validates every structural and semantic invariant of a [`CommandBatch`]
//! locally, before any network call is attempted, so that malformed schemas
//! fail fast with an actionable diagnostic instead of an opaque remote
//! rejection.
//!
//! Collection is exhaustive: every violation across the whole batch is
//! reported in one pass, in deterministic order (batch order, then
//! depth-first option order).
//!
//! # Examples
//!
//! ```
//! use slash_schema_core::*;
//!
//! let batch: CommandBatch = [Command::new("ping", "Check liveness.")]
//!     .into_iter()
//!     .collect();
//! let validated = validate(batch).expect("valid batch");
//! assert_eq!(validated.commands().len(), 1);
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{Command, CommandBatch, CommandOption, OptionType};

/// Maximum length of a command or option name, per the platform contract.
const MAX_NAME_LEN: usize = 32;

/// Batch validation errors.
///
/// Each variant names its subject: the owning command and, for option-level
/// problems, the space-joined option path from the command root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Two commands in the batch share a name.
    #[error("duplicate command in batch: {0}")]
    DuplicateCommand(String),
    /// Two sibling options share a name.
    #[error("duplicate option at '{path}'")]
    DuplicateOption {
        /// Space-joined path from the command name to the duplicate option.
        path: String,
    },
    /// A required option is ordered after an optional sibling.
    #[error("required option '{path}' follows an optional sibling")]
    OptionOrderingViolation {
        /// Space-joined path to the misplaced required option.
        path: String,
    },
    /// `min_value` exceeds `max_value`.
    #[error("invalid bounds on '{path}': min {min} > max {max}")]
    InvalidBounds {
        /// Space-joined path to the offending option.
        path: String,
        /// Declared lower bound.
        min: i64,
        /// Declared upper bound.
        max: i64,
    },
    /// A constraint was declared on an option type that does not support it.
    #[error("type constraint mismatch on '{path}': {detail}")]
    TypeConstraintMismatch {
        /// Space-joined path to the offending option.
        path: String,
        /// What was declared and why it does not fit the option's type.
        detail: String,
    },
    /// Both autocomplete and static choices are set on one option.
    #[error("option '{path}' declares both autocomplete and static choices")]
    ConflictingCompletionMode {
        /// Space-joined path to the offending option.
        path: String,
    },
    /// Two choices within one option share a value.
    #[error("duplicate choice value in option '{path}'")]
    DuplicateChoice {
        /// Space-joined path to the owning option.
        path: String,
    },
    /// A command or option name fails the platform naming pattern.
    #[error("invalid name '{name}': must be 1-32 chars of [a-z0-9_-]")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
}

/// A batch that passed [`validate`] intact.
///
/// Immutable by construction: the only way to obtain one is through
/// [`validate`], so holding a `ValidatedBatch` guarantees serialization will
/// succeed without further checks.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBatch {
    batch: CommandBatch,
}

impl ValidatedBatch {
    /// Commands in submission order.
    pub fn commands(&self) -> &[Command] {
        &self.batch.commands
    }

    /// Consumes the wrapper, returning the underlying batch.
    pub fn into_inner(self) -> CommandBatch {
        self.batch
    }
}

/// Validates a whole batch, collecting every violation.
///
/// Pure function: no side effects, no network. On success the batch is
/// sealed into a [`ValidatedBatch`]; on failure every problem found across
/// the batch is returned together.
///
/// # Errors
///
/// Returns the complete list of [`ValidationError`]s, never a truncated one.
///
/// # Examples
///
/// ```
/// use slash_schema_core::*;
///
/// let bad: CommandBatch = [Command::new("epoch", "desc")
///     .option(CommandOption::integer("day", "d").min(5).max(1))]
/// .into_iter()
/// .collect();
///
/// let errors = validate(bad).unwrap_err();
/// assert_eq!(
///     errors,
///     vec![ValidationError::InvalidBounds {
///         path: "epoch day".to_string(),
///         min: 5,
///         max: 1,
///     }]
/// );
/// ```
pub fn validate(batch: CommandBatch) -> Result<ValidatedBatch, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen_commands: HashSet<&str> = HashSet::new();

    for command in &batch.commands {
        if !seen_commands.insert(command.name.as_str()) {
            errors.push(ValidationError::DuplicateCommand(command.name.clone()));
        }
        if !is_valid_name(&command.name) {
            errors.push(ValidationError::InvalidName {
                name: command.name.clone(),
            });
        }

        let mut path = vec![command.name.clone()];
        validate_options(&command.options, &mut path, &mut errors);
    }

    if errors.is_empty() {
        Ok(ValidatedBatch { batch })
    } else {
        Err(errors)
    }
}

fn validate_options(
    options: &[CommandOption],
    path: &mut Vec<String>,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut optional_seen = false;

    for option in options {
        path.push(option.name.clone());
        let here = path.join(" ");

        if !seen.insert(option.name.as_str()) {
            errors.push(ValidationError::DuplicateOption { path: here.clone() });
        }
        if !is_valid_name(&option.name) {
            errors.push(ValidationError::InvalidName {
                name: option.name.clone(),
            });
        }

        if option.required && optional_seen {
            errors.push(ValidationError::OptionOrderingViolation { path: here.clone() });
        }
        if !option.required {
            optional_seen = true;
        }

        validate_constraints(option, &here, errors);
        validate_options(&option.options, path, errors);
        path.pop();
    }
}

fn validate_constraints(option: &CommandOption, path: &str, errors: &mut Vec<ValidationError>) {
    let has_bounds = option.min_value.is_some() || option.max_value.is_some();

    if let (Some(min), Some(max)) = (option.min_value, option.max_value)
        && min > max
    {
        errors.push(ValidationError::InvalidBounds {
            path: path.to_string(),
            min,
            max,
        });
    }

    if has_bounds && option.kind != OptionType::Integer {
        errors.push(ValidationError::TypeConstraintMismatch {
            path: path.to_string(),
            detail: format!("numeric bounds on a {:?} option", option.kind),
        });
    }

    if !option.choices.is_empty() && option.kind == OptionType::Boolean {
        errors.push(ValidationError::TypeConstraintMismatch {
            path: path.to_string(),
            detail: "choices on a Boolean option".to_string(),
        });
    }

    if option.autocomplete && option.kind == OptionType::Boolean {
        errors.push(ValidationError::TypeConstraintMismatch {
            path: path.to_string(),
            detail: "autocomplete on a Boolean option".to_string(),
        });
    }

    if option.autocomplete && !option.choices.is_empty() {
        errors.push(ValidationError::ConflictingCompletionMode {
            path: path.to_string(),
        });
    }

    let mut seen_values = Vec::new();
    for choice in &option.choices {
        if option.kind != OptionType::Boolean && choice.value.type_of() != option.kind {
            errors.push(ValidationError::TypeConstraintMismatch {
                path: path.to_string(),
                detail: format!(
                    "choice '{}' has a {:?} value on a {:?} option",
                    choice.name,
                    choice.value.type_of(),
                    option.kind
                ),
            });
        }
        if seen_values.contains(&choice.value) {
            errors.push(ValidationError::DuplicateChoice {
                path: path.to_string(),
            });
        } else {
            seen_values.push(choice.value.clone());
        }
    }
}

/// Platform naming pattern: 1-32 chars of lowercase alphanumerics, `-`, `_`.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_NAME_LEN
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use crate::{Command, CommandBatch, CommandOption};

    use super::*;

    fn batch_of(commands: Vec<Command>) -> CommandBatch {
        commands.into_iter().collect()
    }

    #[test]
    fn test_validate_accepts_registration_shaped_batch() {
        let batch = batch_of(vec![
            Command::new("help", "Summon the help menu.").option(
                CommandOption::string("command", "Ask about a specific command.")
                    .choice("/epoch", "epoch")
                    .choice("/help", "help"),
            ),
            Command::new("epoch", "Get the ISO-8601 timestamp from a date.")
                .option(
                    CommandOption::string("timezone", "The timezone to base the date from.")
                        .required()
                        .autocomplete(),
                )
                .option(CommandOption::integer("year", "Sets the year.").required())
                .option(CommandOption::integer("month", "Sets the month.").min(1).max(12))
                .option(CommandOption::boolean("preview", "Enables preview mode.")),
        ]);

        assert!(validate(batch).is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_commands() {
        let batch = batch_of(vec![
            Command::new("ping", "a"),
            Command::new("ping", "b"),
        ]);

        let errors = validate(batch).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateCommand("ping".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_sibling_options_at_depth() {
        let batch = batch_of(vec![Command::new("config", "desc").option(
            CommandOption::string("set", "group")
                .option(CommandOption::string("key", "k"))
                .option(CommandOption::string("key", "k again")),
        )]);

        let errors = validate(batch).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateOption {
                path: "config set key".to_string()
            }]
        );
    }

    #[test]
    fn test_validate_rejects_required_after_optional() {
        let batch = batch_of(vec![
            Command::new("epoch", "desc")
                .option(CommandOption::integer("year", "y"))
                .option(CommandOption::string("timezone", "tz").required()),
        ]);

        let errors = validate(batch).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::OptionOrderingViolation {
                path: "epoch timezone".to_string()
            }]
        );
    }

    #[test]
    fn test_validate_reports_exactly_one_invalid_bounds() {
        let batch = batch_of(vec![Command::new("epoch", "desc")
            .option(CommandOption::integer("day", "d").min(5).max(1))]);

        let errors = validate(batch).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidBounds {
                path: "epoch day".to_string(),
                min: 5,
                max: 1,
            }]
        );
    }

    #[test]
    fn test_validate_rejects_bounds_on_string_option() {
        // The original registration data carried stray bounds on a string
        // option; locally that is a type constraint mismatch.
        let batch = batch_of(vec![Command::new("epoch", "desc")
            .option(CommandOption::string("timezone", "tz").min(1).max(1))]);

        let errors = validate(batch).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::TypeConstraintMismatch {
                path: "epoch timezone".to_string(),
                detail: "numeric bounds on a String option".to_string(),
            }]
        );
    }

    #[test]
    fn test_validate_rejects_autocomplete_with_choices() {
        let batch = batch_of(vec![Command::new("help", "desc").option(
            CommandOption::string("command", "c")
                .autocomplete()
                .choice("/help", "help"),
        )]);

        let errors = validate(batch).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::ConflictingCompletionMode {
                path: "help command".to_string()
            }]
        );
    }

    #[test]
    fn test_validate_rejects_choice_value_type_mismatch() {
        let batch = batch_of(vec![Command::new("epoch", "desc")
            .option(CommandOption::integer("month", "m").choice("January", "jan"))]);

        let errors = validate(batch).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::TypeConstraintMismatch { path, .. }] if path == "epoch month"
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_choice_values() {
        let batch = batch_of(vec![Command::new("epoch", "desc").option(
            CommandOption::integer("month", "m")
                .choice("January", 1)
                .choice("Also January", 1),
        )]);

        let errors = validate(batch).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateChoice {
                path: "epoch month".to_string()
            }]
        );
    }

    #[test]
    fn test_validate_rejects_invalid_names() {
        let batch = batch_of(vec![
            Command::new("Help", "uppercase"),
            Command::new("ok", "desc").option(CommandOption::string("", "empty")),
        ]);

        let errors = validate(batch).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidName {
                    name: "Help".to_string()
                },
                ValidationError::InvalidName {
                    name: String::new()
                },
            ]
        );
    }

    #[test]
    fn test_validate_collects_all_errors_in_one_pass() {
        // A duplicate option must not suppress the unrelated bounds error.
        let batch = batch_of(vec![Command::new("epoch", "desc")
            .option(CommandOption::string("timezone", "a"))
            .option(CommandOption::string("timezone", "b"))
            .option(CommandOption::integer("day", "d").min(9).max(2))]);

        let errors = validate(batch).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::DuplicateOption {
                    path: "epoch timezone".to_string()
                },
                ValidationError::InvalidBounds {
                    path: "epoch day".to_string(),
                    min: 9,
                    max: 2,
                },
            ]
        );
    }

    #[test]
    fn test_is_valid_name_bounds() {
        assert!(is_valid_name("epoch"));
        assert!(is_valid_name("a-b_c0"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("Epoch"));
        assert!(!is_valid_name("has space"));
        assert!(!is_valid_name(&"x".repeat(33)));
    }
}
