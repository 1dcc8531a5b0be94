use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use slash_schema_core::{CommandBatch, ValidatedBatch, serialize, validate};
use slash_schema_sync::{Credential, RetryPolicy, Scope, SyncClient, resolve_target};

/// CLI-specific scope enum with clap argument parsing support.
///
/// `Auto` reproduces the deployment convention: a guild id in the
/// environment means guild scope, its absence means global scope. The
/// explicit values surface scope/id mismatches as errors instead.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliScope {
    Auto,
    Global,
    Guild,
}

#[derive(Debug, Parser)]
#[command(name = "slash-sync")]
#[command(about = "Validate and synchronize declarative slash command schemas")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a command definitions file without touching the network.
    Validate(ValidateArgs),
    /// Validate a definitions file and print its wire payload.
    Render(RenderArgs),
    /// Validate, resolve the target, and replace the remote command set.
    Sync(SyncArgs),
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Command definitions file (.yml, .yaml, or .json).
    #[arg(long)]
    file: PathBuf,
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Command definitions file (.yml, .yaml, or .json).
    #[arg(long)]
    file: PathBuf,
    /// Print compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

#[derive(Debug, Args)]
struct SyncArgs {
    /// Command definitions file (.yml, .yaml, or .json).
    #[arg(long)]
    file: PathBuf,
    /// Target scope (auto infers guild scope from a guild id).
    #[arg(long, value_enum, default_value = "auto")]
    scope: CliScope,
    /// Guild id for guild scope (falls back to the GUILD_ID env var).
    #[arg(long)]
    guild: Option<String>,
    /// Application id (falls back to the APP_ID env var).
    #[arg(long)]
    app_id: Option<String>,
    /// Retries allowed for transient failures, on top of the first attempt.
    #[arg(long, default_value_t = 2)]
    retries: u32,
    /// Outbound request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
    /// API base URL override (test servers, proxies).
    #[arg(long)]
    api_base: Option<String>,
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Validate(args) => run_validate(args),
        Command::Render(args) => run_render(args),
        Command::Sync(args) => run_sync(args).await,
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("SLASH_SYNC_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let batch = load_batch(&args.file)?;
    let validated = validate_or_report(batch)?;
    println!("Validated {} command(s).", validated.commands().len());
    Ok(())
}

fn run_render(args: RenderArgs) -> Result<(), String> {
    let batch = load_batch(&args.file)?;
    let validated = validate_or_report(batch)?;
    let payload = serialize(&validated);

    let rendered = if args.compact {
        payload.to_json_string()
    } else {
        payload.to_json_pretty()
    }
    .map_err(|err| format!("JSON serialization failed: {err}"))?;

    println!("{rendered}");
    Ok(())
}

async fn run_sync(args: SyncArgs) -> Result<(), String> {
    let app_id = args
        .app_id
        .or_else(|| env_non_empty("APP_ID"))
        .ok_or("missing application id: pass --app-id or set APP_ID")?;
    let token = env_non_empty("TOKEN").ok_or("missing credential: set TOKEN")?;
    let guild_from_flag = args.guild.is_some();
    let guild_id = args.guild.or_else(|| env_non_empty("GUILD_ID"));

    let batch = load_batch(&args.file)?;
    let validated = validate_or_report(batch)?;
    let payload = serialize(&validated);

    let scope = match args.scope {
        CliScope::Global => Scope::Global,
        CliScope::Guild => Scope::Guild,
        CliScope::Auto => {
            if guild_id.is_some() {
                Scope::Guild
            } else {
                Scope::Global
            }
        }
    };
    // Explicit global scope ignores a stray GUILD_ID from the environment,
    // but a guild id passed on the command line is a contradiction.
    let guild_id = if matches!(args.scope, CliScope::Global) && !guild_from_flag {
        None
    } else {
        guild_id
    };

    let target = resolve_target(&app_id, scope, guild_id.as_deref())
        .map_err(|err| err.to_string())?;

    let mut client = SyncClient::with_timeout(Duration::from_secs(args.timeout_secs));
    if let Some(base) = &args.api_base {
        client = client.with_base_url(base);
    }
    let policy = RetryPolicy {
        max_attempts: args.retries + 1,
        ..RetryPolicy::default()
    };
    let credential = Credential::bot(&token);

    let ack = client
        .synchronize_with_retry(&target, &payload, &credential, &policy)
        .await
        .map_err(|err| err.to_string())?;

    println!("Replaced command set at {target}.");
    for name in ack.command_names() {
        println!("  /{name}");
    }
    Ok(())
}

/// Runs validation, printing every violation before failing.
fn validate_or_report(batch: CommandBatch) -> Result<ValidatedBatch, String> {
    validate(batch).map_err(|errors| {
        for error in &errors {
            eprintln!("invalid schema: {error}");
        }
        format!("{} validation error(s)", errors.len())
    })
}

fn load_batch(path: &Path) -> Result<CommandBatch, String> {
    let contents = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read '{}': {err}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    match extension {
        "yml" | "yaml" => serde_yaml::from_str(&contents)
            .map_err(|err| format!("Failed to parse '{}': {err}", path.display())),
        "json" => serde_json::from_str(&contents)
            .map_err(|err| format!("Failed to parse '{}': {err}", path.display())),
        other => Err(format!(
            "Unsupported definitions format '{other}' (expected .yml, .yaml, or .json)"
        )),
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::env_non_empty;

    #[test]
    fn test_env_non_empty_filters_blank_values() {
        // Process-global env is shared across tests; use a unique key.
        let key = "SLASH_SYNC_TEST_BLANK_VAR";
        unsafe { std::env::set_var(key, "") };
        assert_eq!(env_non_empty(key), None);
        unsafe { std::env::set_var(key, "value") };
        assert_eq!(env_non_empty(key), Some("value".to_string()));
        unsafe { std::env::remove_var(key) };
    }
}
