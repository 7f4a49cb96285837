// Chaperone - human-in-the-loop tool layer for chat agents
// Main entry point

use anyhow::Result;
use clap::Parser;

use chaperone::config::{load_config, Config};
use chaperone::errors;
use chaperone::meme::{build_meme_url, MemeOptions};
use chaperone::tools::implementations::builtin_registry;
use tracing_subscriber::prelude::*;

mod playground;

#[derive(Parser, Debug)]
#[command(name = "chaperone")]
#[command(about = "Human-in-the-loop tool layer for chat agents", version)]
struct Args {
    /// Run mode
    #[command(subcommand)]
    command: Option<Command>,

    /// Approve gated calls without prompting (playground mode)
    #[arg(long = "auto-approve")]
    auto_approve: bool,
}

#[derive(Parser, Debug)]
enum Command {
    /// Build a meme image URL without touching the network
    Meme {
        /// Template id (see `chaperone templates`)
        template: String,
        /// Top caption
        top: String,
        /// Bottom caption
        bottom: String,
        /// File extension (png, jpg, gif, webp)
        #[arg(long)]
        ext: Option<String>,
        /// Font name
        #[arg(long)]
        font: Option<String>,
        /// Image width in pixels
        #[arg(long)]
        width: Option<u32>,
        /// Image height in pixels
        #[arg(long)]
        height: Option<u32>,
    },
    /// Fetch the meme template catalog
    Templates {
        /// Case-insensitive filter on template id or name
        query: Option<String>,
    },
    /// Print registered tool definitions as JSON
    Tools,
}

#[tokio::main]
async fn main() -> Result<()> {
    install_panic_handler();
    init_tracing();

    let args = Args::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", errors::config_parse_error(&format!("{:#}", e)));
            std::process::exit(1);
        }
    };

    match args.command {
        Some(Command::Meme {
            template,
            top,
            bottom,
            ext,
            font,
            width,
            height,
        }) => {
            return run_meme(&template, &top, &bottom, ext, font, width, height);
        }
        Some(Command::Templates { query }) => {
            return run_templates(&config, query.as_deref()).await;
        }
        Some(Command::Tools) => {
            return run_tools(&config);
        }
        None => {
            // Fall through to playground mode
        }
    }

    playground::Playground::new(&config, args.auto_approve)
        .run()
        .await
}

fn install_panic_handler() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Emergency terminal cleanup; rustyline may have left raw mode on
        use crossterm::{cursor, execute, terminal};
        let _ = terminal::disable_raw_mode();
        let _ = execute!(
            std::io::stdout(),
            cursor::Show,
            terminal::Clear(terminal::ClearType::FromCursorDown)
        );

        default_panic(info);
    }));
}

/// Initialize tracing with an env-controlled filter
///
/// Default: INFO level, can be overridden with RUST_LOG. Logs go to
/// stderr so they never interleave with command output on stdout.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Bridge log crate → tracing (for dependencies using log crate)
    tracing_log::LogTracer::init().ok();
}

fn run_meme(
    template: &str,
    top: &str,
    bottom: &str,
    ext: Option<String>,
    font: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<()> {
    let options = MemeOptions {
        extension: ext,
        font,
        width,
        height,
    };
    println!("{}", build_meme_url(template, top, bottom, &options));
    Ok(())
}

async fn run_templates(config: &Config, query: Option<&str>) -> Result<()> {
    let catalog = config.template_catalog();
    let fetched = match query {
        Some(query) => catalog.search(query).await,
        None => catalog.list().await,
    };

    let templates = match fetched {
        Ok(templates) => templates,
        Err(e) => {
            eprintln!(
                "{}",
                errors::catalog_fetch_error(&config.meme.base_url, &format!("{:#}", e))
            );
            std::process::exit(1);
        }
    };

    if templates.is_empty() {
        println!("No templates matched.");
        return Ok(());
    }

    println!("{} templates", templates.len());
    for template in &templates {
        match &template.blank {
            Some(blank) => println!(
                "  \x1b[1;36m{:<24}\x1b[0m {}  {}",
                template.id, template.name, blank
            ),
            None => println!("  \x1b[1;36m{:<24}\x1b[0m {}", template.id, template.name),
        }
    }
    Ok(())
}

fn run_tools(config: &Config) -> Result<()> {
    let registry = builtin_registry(config.template_catalog(), config.mcp.callback_host.clone());
    let mut definitions = registry.definitions();
    definitions.sort_by(|a, b| a.name.cmp(&b.name));
    println!("{}", serde_json::to_string_pretty(&definitions)?);
    Ok(())
}
