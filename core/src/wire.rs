//! Platform wire format.
//!
//! The single translation boundary between the named internal model and the
//! platform's flat integer enumerations. Everything upstream of this module
//! works over [`OptionType`] variants and context enums; everything on the
//! wire is the integer codes defined here.
//!
//! Serialization is deterministic and order-preserving: sibling order in the
//! model is sibling order in the payload, since the platform treats it as
//! positional.

use serde::{Deserialize, Serialize};

use crate::{
    ChoiceValue, Command, CommandOption, InstallContext, InteractionContext, OptionType,
    ValidatedBatch,
};

/// Platform integer code for an [`OptionType`].
fn type_code(kind: OptionType) -> u8 {
    match kind {
        OptionType::String => 3,
        OptionType::Integer => 4,
        OptionType::Boolean => 5,
    }
}

/// Platform integer code for an [`InstallContext`].
fn install_code(context: InstallContext) -> u8 {
    match context {
        InstallContext::GuildInstall => 0,
        InstallContext::UserInstall => 1,
    }
}

/// Platform integer code for an [`InteractionContext`].
fn interaction_code(context: InteractionContext) -> u8 {
    match context {
        InteractionContext::Guild => 0,
        InteractionContext::BotDm => 1,
        InteractionContext::PrivateChannel => 2,
    }
}

/// One choice as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireChoice {
    /// Display name.
    pub name: String,
    /// Submitted value (string or number, matching the option type).
    pub value: ChoiceValue,
}

/// One option as it appears on the wire. Optional fields are omitted when
/// absent or at their platform default, so an untouched field never narrows
/// what the schema allows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireOption {
    /// Platform option-type code (3=string, 4=integer, 5=boolean).
    #[serde(rename = "type")]
    pub kind: u8,
    /// Option name.
    pub name: String,
    /// Option description.
    pub description: String,
    /// Present only when true (false is the platform default).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Present only when true.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub autocomplete: bool,
    /// Inclusive lower bound; omitted means unconstrained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    /// Inclusive upper bound; omitted means unconstrained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,
    /// Static choices, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<WireChoice>,
    /// Nested options, in positional order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<WireOption>,
}

/// One command as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireCommand {
    /// Command name.
    pub name: String,
    /// Command description.
    pub description: String,
    /// Install-context restriction codes; omitted means platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_types: Option<Vec<u8>>,
    /// Invocation-context restriction codes; omitted means platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contexts: Option<Vec<u8>>,
    /// Options in positional order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<WireOption>,
}

/// The full payload of one replace call: a JSON array with one element per
/// command, in batch order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WirePayload {
    /// Commands in submission order.
    pub commands: Vec<WireCommand>,
}

impl WirePayload {
    /// Renders the payload as compact JSON.
    ///
    /// # Errors
    ///
    /// Only if JSON serialization itself fails, which cannot happen for a
    /// payload produced by [`serialize`].
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Renders the payload as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Only if JSON serialization itself fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Transforms a validated batch into its wire payload.
///
/// Infallible by contract: a [`ValidatedBatch`] is guaranteed to serialize,
/// so no checks happen here. Deterministic: the same batch always yields the
/// same payload.
///
/// # Examples
///
/// ```
/// use slash_schema_core::*;
///
/// let batch: CommandBatch = [Command::new("ping", "Check liveness.")]
///     .into_iter()
///     .collect();
/// let payload = serialize(&validate(batch).unwrap());
/// assert_eq!(payload.commands[0].name, "ping");
/// ```
pub fn serialize(batch: &ValidatedBatch) -> WirePayload {
    WirePayload {
        commands: batch.commands().iter().map(wire_command).collect(),
    }
}

fn wire_command(command: &Command) -> WireCommand {
    WireCommand {
        name: command.name.clone(),
        description: command.description.clone(),
        integration_types: command
            .integration_types
            .as_ref()
            .map(|types| types.iter().copied().map(install_code).collect()),
        contexts: command
            .contexts
            .as_ref()
            .map(|contexts| contexts.iter().copied().map(interaction_code).collect()),
        options: command.options.iter().map(wire_option).collect(),
    }
}

fn wire_option(option: &CommandOption) -> WireOption {
    WireOption {
        kind: type_code(option.kind),
        name: option.name.clone(),
        description: option.description.clone(),
        required: option.required,
        autocomplete: option.autocomplete,
        min_value: option.min_value,
        max_value: option.max_value,
        choices: option
            .choices
            .iter()
            .map(|choice| WireChoice {
                name: choice.name.clone(),
                value: choice.value.clone(),
            })
            .collect(),
        options: option.options.iter().map(wire_option).collect(),
    }
}

/// One command as echoed back by the platform after a successful replace.
///
/// Deserialize-only: the acknowledgment body is the platform's record of the
/// accepted command set, carrying identifiers the request never sends.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegisteredCommand {
    /// Platform-assigned command identifier.
    pub id: String,
    /// Owning application identifier.
    pub application_id: String,
    /// Accepted command name.
    pub name: String,
    /// Accepted command description.
    pub description: String,
    /// Platform-assigned schema version, when present.
    #[serde(default)]
    pub version: Option<String>,
}
