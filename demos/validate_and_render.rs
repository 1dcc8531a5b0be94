//! Build, validate, and render example.
//!
//! Demonstrates the no-network half of the pipeline: construct a command
//! batch with the builders, validate it as a whole, resolve the target it
//! would address, and print the wire payload a sync would `PUT`.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p slash-schema-demos --example validate_and_render
//! ```

use slash_schema_core::{
    Command, CommandBatch, CommandOption, InstallContext, InteractionContext, serialize, validate,
};
use slash_schema_sync::{Scope, resolve_target};

fn main() {
    let batch: CommandBatch = [
        Command::new("help", "Summon the help menu.")
            .integration_types(vec![InstallContext::UserInstall])
            .contexts(vec![
                InteractionContext::Guild,
                InteractionContext::BotDm,
                InteractionContext::PrivateChannel,
            ])
            .option(
                CommandOption::string("command", "Ask for more details for a specific command.")
                    .choice("/epoch", "epoch")
                    .choice("/help", "help"),
            ),
        Command::new("epoch", "Get the ISO-8601 timestamp from a date and timezone.")
            .option(
                CommandOption::string("timezone", "The timezone to base the date from.")
                    .required()
                    .autocomplete(),
            )
            .option(CommandOption::integer("year", "Sets the year.").required())
            .option(
                CommandOption::integer("month", "Sets the month (defaults to January).")
                    .min(1)
                    .max(12)
                    .choice("January", 1)
                    .choice("December", 12),
            )
            .option(CommandOption::boolean("preview", "Enables preview mode.")),
    ]
    .into_iter()
    .collect();

    println!("=== Validation ===");
    let validated = match validate(batch) {
        Ok(validated) => {
            println!("Validated {} command(s)", validated.commands().len());
            validated
        }
        Err(errors) => {
            for error in errors {
                println!("  invalid: {error}");
            }
            return;
        }
    };

    println!();
    println!("=== Target resolution ===");
    let target = resolve_target("123456789012345678", Scope::Global, None)
        .expect("global scope without a guild id always resolves");
    println!("Would PUT to {target}");

    println!();
    println!("=== Wire payload ===");
    let payload = serialize(&validated);
    println!(
        "{}",
        payload
            .to_json_pretty()
            .expect("validated payload always renders")
    );
}
