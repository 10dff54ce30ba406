use super::print::{
    print_categories, print_config, print_messages, print_quote, print_quote_list,
    print_sync_report,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use quotez::api::{CmdResult, ConfigAction, ExportTarget, QuoteApi};
use quotez::error::{QuotezError, Result};
use quotez::init::{initialize, resolve_data_dir};
use quotez::remote::{HttpRemote, RemoteSource};
use quotez::scheduler::SyncScheduler;
use quotez::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

struct AppContext {
    api: QuoteApi<FileStore>,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Random { category }) => handle_random(&mut ctx, category),
        Some(Commands::Show) | None => handle_show(&mut ctx),
        Some(Commands::Add {
            text,
            category,
            author,
        }) => handle_add(&mut ctx, &text, &category, author.as_deref()),
        Some(Commands::List { category }) => handle_list(&ctx, category),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Category { name }) => handle_select(&mut ctx, &name),
        Some(Commands::Import { file }) => handle_import(&mut ctx, file),
        Some(Commands::Export { output }) => handle_export(&ctx, &output),
        Some(Commands::Sync) => handle_sync(&mut ctx).await,
        Some(Commands::Watch { interval }) => handle_watch(ctx, interval).await,
        Some(Commands::Reset { yes }) => handle_reset(&mut ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

/// Logs go to stderr so `export -o -` output stays clean.
fn init_logging(verbose: bool) {
    let default = if verbose { "quotez=debug" } else { "quotez=warn" };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    Ok(AppContext {
        api: initialize(data_dir)?,
    })
}

fn print_displayed(result: &CmdResult) {
    if let Some(quote) = &result.displayed {
        print_quote(quote);
    }
    print_messages(&result.messages);
}

fn handle_random(ctx: &mut AppContext, category: Option<String>) -> Result<()> {
    let result = ctx.api.random_quote(category.as_deref())?;
    print_displayed(&result);
    Ok(())
}

fn handle_show(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.show_quote()?;
    print_displayed(&result);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    text: &str,
    category: &str,
    author: Option<&str>,
) -> Result<()> {
    let result = ctx.api.add_quote(text, category, author)?;
    print_displayed(&result);
    Ok(())
}

fn handle_list(ctx: &AppContext, category: Option<String>) -> Result<()> {
    let result = ctx.api.list_quotes(category.as_deref())?;
    print_quote_list(&result.listed_quotes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.categories()?;
    print_categories(
        &result.categories,
        result.selected_category.as_deref().unwrap_or_default(),
    );
    Ok(())
}

fn handle_select(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.select_category(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.import_file(&file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, output: &str) -> Result<()> {
    let target = if output == "-" {
        ExportTarget::Inline
    } else {
        ExportTarget::File(PathBuf::from(output))
    };
    let result = ctx.api.export(target)?;
    if let Some(document) = &result.exported {
        println!("{}", document);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_sync_result(result: &CmdResult) {
    print_messages(&result.messages);
    if let Some(report) = &result.sync {
        print_sync_report(report);
    }
}

async fn handle_sync(ctx: &mut AppContext) -> Result<()> {
    let remote = HttpRemote::from_config(ctx.api.settings())?;
    let result = ctx.api.sync(&remote).await?;
    print_sync_result(&result);
    Ok(())
}

async fn handle_watch(ctx: AppContext, interval: Option<u64>) -> Result<()> {
    let every = match interval {
        Some(0) => {
            return Err(QuotezError::Validation(
                "Interval must be at least 1 second".to_string(),
            ))
        }
        Some(secs) => Duration::from_secs(secs),
        None => ctx.api.sync_interval(),
    };
    let remote: Arc<dyn RemoteSource> = Arc::new(HttpRemote::from_config(ctx.api.settings())?);

    println!(
        "Syncing every {}s, press Ctrl-C to stop.",
        every.as_secs()
    );
    let scheduler = SyncScheduler::new(Arc::new(Mutex::new(ctx.api)), remote, every);
    let handle = scheduler.spawn(|outcome| match outcome {
        Ok(result) => print_sync_result(&result),
        Err(e) => eprintln!("Error: {}", e),
    });

    tokio::signal::ctrl_c().await.map_err(QuotezError::Io)?;
    handle.shutdown().await
}

fn handle_reset(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes {
        println!("This will remove all saved quotes and restore defaults.");
        print!("[Y] To continue: ");
        io::stdout().flush().map_err(QuotezError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(QuotezError::Io)?;

        if input.trim() != "Y" {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.reset()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
