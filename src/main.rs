use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

use toolshed::{ToolDescriptor, ToolRegistry};

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolshed")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolshed.log");

    // Setup env_logger with file output; records everything until the config level applies
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let env = env_logger::Env::default().default_filter_or("trace");
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Narrow the log level to the configured one unless RUST_LOG is set
fn apply_log_level(level: Option<&str>) {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    let level = level.unwrap_or("info");
    match level.parse::<log::LevelFilter>() {
        Ok(filter) => log::set_max_level(filter),
        Err(_) => {
            log::warn!("Unknown log_level '{}' in config, using info", level);
            log::set_max_level(log::LevelFilter::Info);
        }
    }
}

async fn run_application(cli: &Cli, config: &Config, registry: &ToolRegistry) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None | Some(Commands::Categories) => handle_categories_command(registry),
        Some(Commands::List { json }) => handle_list_command(*json, config, registry),
        Some(Commands::Search { query, limit, exact }) => {
            handle_search_command(&query.join(" "), *limit, *exact, config, registry)
        }
        Some(Commands::Show { path }) => handle_show_command(path, registry),
        Some(Commands::Open { path }) => handle_open_command(path, registry).await,
        Some(Commands::Routes) => handle_routes_command(registry),
        Some(Commands::Check) => handle_check_command(registry),
    }
}

fn print_tool_line(tool: &ToolDescriptor, config: &Config) {
    println!("  {:<28} {}", tool.path.cyan(), tool.name.bold());
    if config.display.show_keywords && !tool.keywords.is_empty() {
        println!("  {:<28} {}", "", tool.keywords.join(", ").dimmed());
    }
}

fn handle_list_command(json: bool, config: &Config, registry: &ToolRegistry) -> Result<()> {
    info!("Listing {} tools (json: {})", registry.len(), json);
    if json {
        let tools: Vec<&ToolDescriptor> = registry.iter().collect();
        let out = serde_json::to_string_pretty(&tools).context("Failed to serialize catalog")?;
        println!("{}", out);
        return Ok(());
    }

    for tool in registry.iter() {
        print_tool_line(tool, config);
    }
    Ok(())
}

fn handle_categories_command(registry: &ToolRegistry) -> Result<()> {
    info!("Listing categories");
    for category in registry.categories() {
        println!("{} {}", category.name.green().bold(), format!("[{}]", category.icon).dimmed());
        for tool in &category.tools {
            println!("  {:<28} {}", tool.path.cyan(), tool.name);
        }
    }
    Ok(())
}

fn handle_search_command(
    query: &str,
    limit: Option<usize>,
    exact: bool,
    config: &Config,
    registry: &ToolRegistry,
) -> Result<()> {
    info!("Searching for '{}' (limit: {:?}, exact: {})", query, limit, exact);
    let hits = registry.search(query, config.search.options(limit, exact));
    if hits.is_empty() {
        println!("{} {}", "No tools match".yellow(), query);
        return Ok(());
    }
    for hit in hits {
        println!("  {:>4}  {:<28} {}", hit.score, hit.tool.path.cyan(), hit.tool.name.bold());
    }
    Ok(())
}

fn handle_show_command(path: &str, registry: &ToolRegistry) -> Result<()> {
    info!("Showing tool: {}", path);
    let tool = registry
        .resolve(path)
        .ok_or_else(|| toolshed::ToolshedError::UnknownTool(path.to_string()))?;

    if tool.path != path {
        println!("{} {} -> {}", "Redirected:".yellow(), path, tool.path);
    }
    println!("{} {}", "Name:".green(), tool.name);
    println!("{} {}", "Path:".green(), tool.path);
    println!("{} {}", "Icon:".green(), tool.icon);
    println!("{} {}", "Description:".green(), tool.description);
    if !tool.keywords.is_empty() {
        println!("{} {}", "Keywords:".green(), tool.keywords.join(", "));
    }
    if !tool.redirect_from.is_empty() {
        println!("{} {}", "Redirects:".green(), tool.redirect_from.join(", "));
    }
    Ok(())
}

async fn handle_open_command(path: &str, registry: &ToolRegistry) -> Result<()> {
    info!("Opening tool: {}", path);
    let component = registry
        .load(path)
        .await
        .context(format!("Failed to open {}", path))?;
    print!("{}", component.render());
    Ok(())
}

fn handle_routes_command(registry: &ToolRegistry) -> Result<()> {
    info!("Printing route table");
    for route in registry.routes() {
        if route.is_redirect {
            println!("  {:<28} {} {}", route.path.dimmed(), "->".dimmed(), route.target.path);
        } else {
            println!("  {:<28} {}", route.path.cyan(), route.target.name);
        }
    }
    Ok(())
}

fn handle_check_command(registry: &ToolRegistry) -> Result<()> {
    let redirects = registry.routes().iter().filter(|r| r.is_redirect).count();
    info!("Registry check passed");
    println!(
        "{} {} tools, {} categories, {} redirects",
        "Registry OK:".green(),
        registry.len(),
        registry.categories().len(),
        redirects
    );
    Ok(())
}


#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    apply_log_level(config.log_level.as_deref());

    if !config.display.color {
        colored::control::set_override(false);
    }

    info!("Starting with config from: {:?}", cli.config);

    // Registry assembly fails fast on malformed descriptors
    let registry = ToolRegistry::with_builtins().context("Failed to build tool registry")?;

    run_application(&cli, &config, &registry).await.context("Application failed")?;

    Ok(())
}
