//! Core schema model, validation, and wire format for slash commands.
//!
//! This crate defines the foundational types for declaring an application's
//! slash commands:
//!
//! - [`Command`] — a top-level command (options, context restrictions,
//!   metadata).
//! - [`CommandOption`] — a named, typed parameter with bounds, choices,
//!   autocomplete, and nesting.
//! - [`CommandBatch`] — the full ordered set submitted in one call.
//!
//! Validation ([`validate`]) checks every structural invariant locally —
//! duplicate names, required-after-optional ordering, inverted bounds,
//! constraints that do not fit the option type — and reports every violation
//! in one pass. A successful validation yields a [`ValidatedBatch`], the
//! only input [`serialize`] accepts, so a payload that reaches the wire is
//! sound by construction.
//!
//! # Example
//!
//! ```
//! use slash_schema_core::*;
//!
//! let batch: CommandBatch = [Command::new("epoch", "Get the Unix timestamp from a date.")
//!     .option(
//!         CommandOption::string("timezone", "The timezone to base the date from.")
//!             .required()
//!             .autocomplete(),
//!     )
//!     .option(CommandOption::integer("month", "Sets the month.").min(1).max(12))]
//! .into_iter()
//! .collect();
//!
//! let validated = validate(batch).expect("schema is internally consistent");
//! let payload = serialize(&validated);
//! assert_eq!(payload.commands[0].options[0].kind, 3); // string wire code
//! ```

mod types;
mod validate;
mod wire;

pub use types::*;
pub use validate::{ValidatedBatch, ValidationError, validate};
pub use wire::{
    RegisteredCommand, WireChoice, WireCommand, WireOption, WirePayload, serialize,
};
