//! Dispatch for the roster CLI.
//!
//! - `run()`: parses arguments, installs logging and dispatches
//! - `init_context()`: resolves the data directory and builds the API
//! - `handle_*()`: per-command handlers that call the API and print results

use super::render::{print_messages, render_record_details, render_record_table};
use super::setup::{Cli, Commands};
use clap::Parser;
use roster::api::{ConfigAction, RosterApi};
use roster::error::{Result, RosterError};
use roster::init::{initialize, resolve_data_dir};
use roster::model::{Draft, RecordPatch};
use roster::query::ViewQuery;
use roster::store::fs::FileStore;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: RosterApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            search,
            page,
            query,
        }) => handle_list(&mut ctx, search, page, query),
        Some(Commands::Add { name, email, role }) => handle_add(&mut ctx, name, email, role),
        Some(Commands::Show { selectors }) => handle_show(&mut ctx, selectors),
        Some(Commands::Edit {
            selector,
            name,
            email,
            role,
        }) => handle_edit(&mut ctx, selector, name, email, role),
        Some(Commands::Delete { selectors }) => handle_delete(&mut ctx, selectors),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, None, None, None),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "roster=debug" } else { "roster=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    let ctx = initialize(data_dir)?;
    Ok(AppContext { api: ctx.api })
}

fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    page: Option<String>,
    query: Option<String>,
) -> Result<()> {
    let view_query = match query {
        Some(raw) => ViewQuery::parse(&raw),
        None => ViewQuery::from_params(page.as_deref(), search.as_deref()),
    };
    tracing::debug!(query = %view_query, "listing records");

    let result = ctx.api.list_records(&view_query)?;
    let output = render_record_table(&result.listed_records, result.pagination.as_ref());
    print!("{}", output);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, name: String, email: String, role: String) -> Result<()> {
    let mut draft = Draft::new(name, email, role);
    let result = ctx.api.add_record(&mut draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.get_records(&selectors)?;
    print!("{}", render_record_details(&result.listed_records));
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    selector: String,
    name: Option<String>,
    email: Option<String>,
    role: Option<String>,
) -> Result<()> {
    let patch = RecordPatch { name, email, role };
    if patch.is_empty() {
        return Err(RosterError::Validation(
            "Nothing to change: pass --name, --email or --role".to_string(),
        ));
    }

    ctx.api.begin_edit(&selector)?;
    ctx.api.apply_edit(&patch)?;
    let result = ctx.api.save_edit()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_records(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;

    if key.is_none() {
        if let Some(config) = &result.config {
            for k in roster::config::CONFIG_KEYS {
                if let Some(v) = config.get(k) {
                    println!("{} = {}", k, v);
                }
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
