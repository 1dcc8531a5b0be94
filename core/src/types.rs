//! Schema type definitions for slash command modeling.
//!
//! This module defines the in-memory data model used to describe an
//! application's slash commands before they are validated and pushed to the
//! platform. The types are designed for serialization with [`serde`] and
//! round-trip through JSON and YAML definition files.
//!
//! Platform wire codes (integer option types, context integers) never appear
//! here; the translation to the wire format happens in one place, in
//! [`crate::wire`].

use serde::{Deserialize, Serialize};

/// Primitive kind of a command option.
///
/// Determines which constraints are meaningful: numeric bounds apply only to
/// [`Integer`](OptionType::Integer), choices and autocomplete only to
/// [`String`](OptionType::String) and [`Integer`](OptionType::Integer).
///
/// # Examples
///
/// ```
/// use slash_schema_core::OptionType;
///
/// assert_eq!(OptionType::default(), OptionType::String);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Free-form text value (the default).
    #[default]
    String,
    /// Whole-number value, optionally bounded.
    Integer,
    /// On/off toggle. Accepts no choices, bounds, or autocomplete.
    Boolean,
}

/// Value of a [`Choice`], matching the owning option's [`OptionType`].
///
/// # Examples
///
/// ```
/// use slash_schema_core::{ChoiceValue, OptionType};
///
/// assert_eq!(ChoiceValue::Int(12).type_of(), OptionType::Integer);
/// assert_eq!(ChoiceValue::Str("epoch".into()).type_of(), OptionType::String);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    /// Integer choice value.
    Int(i64),
    /// String choice value.
    Str(String),
}

impl ChoiceValue {
    /// Returns the [`OptionType`] this value is compatible with.
    pub fn type_of(&self) -> OptionType {
        match self {
            ChoiceValue::Int(_) => OptionType::Integer,
            ChoiceValue::Str(_) => OptionType::String,
        }
    }
}

impl From<i64> for ChoiceValue {
    fn from(value: i64) -> Self {
        ChoiceValue::Int(value)
    }
}

impl From<&str> for ChoiceValue {
    fn from(value: &str) -> Self {
        ChoiceValue::Str(value.to_string())
    }
}

/// One enumerated value an option may take: a display name and the value
/// actually submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Display name shown in the command picker (e.g., "January").
    pub name: String,
    /// Submitted value; its type must match the owning option's kind.
    pub value: ChoiceValue,
}

impl Choice {
    /// Creates a choice from a display name and any value convertible to
    /// [`ChoiceValue`].
    ///
    /// # Examples
    ///
    /// ```
    /// use slash_schema_core::{Choice, ChoiceValue};
    ///
    /// let january = Choice::new("January", 1);
    /// assert_eq!(january.value, ChoiceValue::Int(1));
    /// ```
    pub fn new(name: &str, value: impl Into<ChoiceValue>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

/// A named, typed parameter of a command (or of another option, when used
/// for grouping).
///
/// Use the constructor methods [`string`](CommandOption::string),
/// [`integer`](CommandOption::integer), and
/// [`boolean`](CommandOption::boolean) to create options, then chain builder
/// methods like [`required`](CommandOption::required) and
/// [`choice`](CommandOption::choice).
///
/// Sibling order is significant: the platform treats option order as
/// positional, so required options must precede optional ones (enforced by
/// [`validate`](crate::validate)).
///
/// # Examples
///
/// ```
/// use slash_schema_core::CommandOption;
///
/// let month = CommandOption::integer("month", "Sets the month.")
///     .min(1)
///     .max(12)
///     .choice("January", 1)
///     .choice("February", 2);
/// assert_eq!(month.choices.len(), 2);
/// assert!(!month.required);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOption {
    /// Option name, unique among siblings.
    pub name: String,
    /// Description shown in the command picker.
    pub description: String,
    /// Primitive kind of the value this option accepts.
    #[serde(default)]
    pub kind: OptionType,
    /// Whether the user must supply this option.
    #[serde(default)]
    pub required: bool,
    /// Whether completions are served dynamically. Mutually exclusive with
    /// a non-empty `choices` list.
    #[serde(default)]
    pub autocomplete: bool,
    /// Inclusive lower bound; absent means unconstrained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    /// Inclusive upper bound; absent means unconstrained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,
    /// Static set of acceptable values, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
    /// Nested options (sub-commands / option groups), in positional order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
}

impl CommandOption {
    fn new(name: &str, description: &str, kind: OptionType) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind,
            required: false,
            autocomplete: false,
            min_value: None,
            max_value: None,
            choices: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Creates a string option.
    ///
    /// # Examples
    ///
    /// ```
    /// use slash_schema_core::{CommandOption, OptionType};
    ///
    /// let tz = CommandOption::string("timezone", "The timezone to use.");
    /// assert_eq!(tz.kind, OptionType::String);
    /// ```
    pub fn string(name: &str, description: &str) -> Self {
        Self::new(name, description, OptionType::String)
    }

    /// Creates an integer option.
    pub fn integer(name: &str, description: &str) -> Self {
        Self::new(name, description, OptionType::Integer)
    }

    /// Creates a boolean option.
    pub fn boolean(name: &str, description: &str) -> Self {
        Self::new(name, description, OptionType::Boolean)
    }

    /// Marks the option as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Enables dynamic autocompletion.
    pub fn autocomplete(mut self) -> Self {
        self.autocomplete = true;
        self
    }

    /// Sets the inclusive lower bound.
    pub fn min(mut self, value: i64) -> Self {
        self.min_value = Some(value);
        self
    }

    /// Sets the inclusive upper bound.
    pub fn max(mut self, value: i64) -> Self {
        self.max_value = Some(value);
        self
    }

    /// Appends a static choice.
    pub fn choice(mut self, name: &str, value: impl Into<ChoiceValue>) -> Self {
        self.choices.push(Choice::new(name, value));
        self
    }

    /// Appends a nested option.
    pub fn option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }
}

/// Where a command may be installed.
///
/// # Examples
///
/// ```
/// use slash_schema_core::InstallContext;
///
/// let contexts = vec![InstallContext::UserInstall];
/// assert_eq!(contexts.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallContext {
    /// Installed to a guild (server-wide availability).
    GuildInstall,
    /// Installed to a user account (follows the user across surfaces).
    UserInstall,
}

/// Where an installed command may be invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionContext {
    /// Inside a guild channel.
    Guild,
    /// In a direct message with the application's bot.
    BotDm,
    /// In group DMs and DMs with other users.
    PrivateChannel,
}

/// A top-level slash command: name, description, ordered options, and
/// optional install/invocation context restrictions.
///
/// # Examples
///
/// ```
/// use slash_schema_core::{Command, CommandOption};
///
/// let help = Command::new("help", "Summon the help menu.")
///     .option(
///         CommandOption::string("command", "Ask about a specific command.")
///             .choice("/help", "help"),
///     );
/// assert_eq!(help.options.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Command name, unique within its batch. Must match the platform
    /// naming pattern (1-32 chars of lowercase `a-z`, `0-9`, `-`, `_`).
    pub name: String,
    /// Description shown in the command picker.
    pub description: String,
    /// Ordered option list; order is positional on the platform side.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
    /// Where the command may be installed; absent means platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_types: Option<Vec<InstallContext>>,
    /// Where the command may be invoked; absent means platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contexts: Option<Vec<InteractionContext>>,
}

impl Command {
    /// Creates a command with no options and no context restrictions.
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            options: Vec::new(),
            integration_types: None,
            contexts: None,
        }
    }

    /// Appends an option.
    pub fn option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }

    /// Restricts where the command may be installed.
    pub fn integration_types(mut self, types: Vec<InstallContext>) -> Self {
        self.integration_types = Some(types);
        self
    }

    /// Restricts where the command may be invoked.
    pub fn contexts(mut self, contexts: Vec<InteractionContext>) -> Self {
        self.contexts = Some(contexts);
        self
    }
}

/// The full ordered set of commands submitted in one synchronization call.
///
/// A batch is a plain value: constructed fresh per invocation, validated as
/// a whole, serialized, and discarded. It holds no identity across calls.
///
/// # Examples
///
/// ```
/// use slash_schema_core::{Command, CommandBatch};
///
/// let batch: CommandBatch = [Command::new("ping", "Check liveness.")]
///     .into_iter()
///     .collect();
/// assert_eq!(batch.command_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandBatch {
    /// Commands in submission order; order is preserved end-to-end.
    pub commands: Vec<Command>,
}

impl CommandBatch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of commands in the batch.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl FromIterator<Command> for CommandBatch {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_option_order() {
        let cmd = Command::new("epoch", "Get the Unix timestamp from a date.")
            .option(CommandOption::string("timezone", "tz").required())
            .option(CommandOption::integer("year", "Sets the year."))
            .option(CommandOption::integer("month", "Sets the month."));

        let names: Vec<&str> = cmd.options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["timezone", "year", "month"]);
    }

    #[test]
    fn test_choice_value_type_of() {
        assert_eq!(ChoiceValue::from(3).type_of(), OptionType::Integer);
        assert_eq!(ChoiceValue::from("epoch").type_of(), OptionType::String);
    }

    #[test]
    fn test_batch_round_trips_through_yaml() {
        let batch: CommandBatch = [Command::new("help", "Summon the help menu.")
            .integration_types(vec![InstallContext::UserInstall])
            .contexts(vec![
                InteractionContext::Guild,
                InteractionContext::BotDm,
                InteractionContext::PrivateChannel,
            ])
            .option(
                CommandOption::string("command", "Ask about a specific command.")
                    .choice("/help", "help"),
            )]
        .into_iter()
        .collect();

        let yaml = serde_yaml::to_string(&batch).expect("serialize");
        let back: CommandBatch = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(batch, back);
    }

    #[test]
    fn test_absent_bounds_stay_absent_in_json() {
        let option = CommandOption::integer("year", "Sets the year.");
        let json = serde_json::to_value(&option).expect("serialize");
        assert!(json.get("min_value").is_none());
        assert!(json.get("max_value").is_none());
    }
}
