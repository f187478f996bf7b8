use arcana::api::{load_deck, ArcanaApi, ConfigAction};
use arcana::commands::{self, ArcanaPaths};
use arcana::config::ArcanaConfig;
use arcana::error::{ArcanaError, Result};
use arcana::store::fs::FileBackend;
use clap::Parser;
use directories::ProjectDirs;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::{Cli, Commands};
use cli::print::{
    print_config, print_full_readings, print_history, print_layouts, print_messages, print_spread,
};

const HOME_ENV: &str = "ARCANA_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ArcanaApi<FileBackend, StdRng>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Config must stay usable when the configured deck or layouts are broken.
    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(key, value),
        command => {
            let mut ctx = init_context(cli.seed)?;
            dispatch(&mut ctx, command)
        }
    }
}

fn dispatch(ctx: &mut AppContext, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Draw {
            layout,
            category,
            question,
            note,
            save,
            export,
        }) => handle_draw(ctx, &layout, &category, &question, &note, save, export),
        Some(Commands::History) | None => handle_history(ctx),
        Some(Commands::Show { indexes }) => handle_show(ctx, indexes),
        Some(Commands::Delete { indexes }) => handle_delete(ctx, indexes),
        Some(Commands::Export { index, output }) => handle_export(ctx, &index, output),
        Some(Commands::Layouts) => handle_layouts(ctx),
        Some(Commands::Config { key, value }) => handle_config(key, value),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "arcana", "arcana")
        .ok_or_else(|| ArcanaError::Api("Could not determine data directory".into()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context(seed: Option<u64>) -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = ArcanaConfig::load(&data_dir)?;
    let deck = load_deck(&config)?;

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let backend = FileBackend::new(data_dir);
    let api = ArcanaApi::new(deck, backend, rng, &config)?;
    Ok(AppContext { api })
}

fn handle_draw(
    ctx: &mut AppContext,
    layout: &str,
    category: &str,
    question: &str,
    note: &str,
    save: bool,
    export: Option<PathBuf>,
) -> Result<()> {
    let result = ctx.api.draw_spread(layout, category)?;
    let Some(spread) = result.spread else {
        print_messages(&result.messages);
        return Ok(());
    };

    if !question.is_empty() {
        println!("Question: {}", question);
    }
    print_spread(&spread);
    print_messages(&result.messages);

    if save {
        let saved = ctx.api.save_reading(&spread, question, note)?;
        print_messages(&saved.messages);
    }

    if let Some(path) = export {
        let exported = ctx.api.export_spread(&spread, question, note, Some(&path))?;
        print_messages(&exported.messages);
    }
    Ok(())
}

fn handle_history(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.history()?;
    print_history(&result.listed_readings);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.show_readings(indexes.as_slice())?;
    print_full_readings(&result.listed_readings);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_readings(indexes.as_slice())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, index: &str, output: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_reading(index, output.as_deref())?;
    if result.export_path.is_none() {
        if let Some(text) = &result.transcript {
            print!("{}", text);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_layouts(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.layouts()?;
    print_layouts(&result.layouts);
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let paths = ArcanaPaths {
        data_dir: data_dir()?,
    };
    let result = commands::config::run(&paths, action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
