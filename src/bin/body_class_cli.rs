//! Body Class CLI - render a `<body>` class attribute from a params file
//!
//! Order: defaults, reset, set, add, clean, render.
//! Prints the fragment (or JSON with --json) to stdout.
//! Returns non-zero when the params cannot be loaded or read.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use easy_body_class::{BodyClassManager, Params};

#[derive(Parser)]
#[command(name = "body-class-cli")]
#[command(about = "Render CSS classes for the <body> tag")]
#[command(version)]
struct Cli {
    /// JSON file holding the application params
    #[arg(short, long, conflicts_with = "app_config")]
    params: Option<PathBuf>,

    /// JSON application config whose "params" section holds the params
    #[arg(short = 'c', long)]
    app_config: Option<PathBuf>,

    /// Param holding the default classes (defaults to defaultBodyClass)
    #[arg(short = 'k', long)]
    param_key: Option<String>,

    /// Discard the defaults before applying --set and --add
    #[arg(long)]
    reset: bool,

    /// Classes to set
    #[arg(short, long = "set", value_name = "CLASS")]
    set: Vec<String>,

    /// Append --set classes instead of replacing
    #[arg(long)]
    merge: bool,

    /// Classes to add
    #[arg(short, long = "add", value_name = "CLASS")]
    add: Vec<String>,

    /// Remove duplicate classes before rendering
    #[arg(long)]
    clean: bool,

    /// Print only the class names, without class=""
    #[arg(long)]
    no_attr: bool,

    /// Print classes and rendered fragment as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level.as_str()),
    )
    .init();

    let loaded = match (&cli.params, &cli.app_config) {
        (Some(path), _) => Some((path, Params::load_from_file(path))),
        (None, Some(path)) => Some((path, Params::load_app_config(path))),
        (None, None) => None,
    };
    let params = match loaded {
        Some((_, Ok(p))) => p,
        Some((path, Err(e))) => {
            eprintln!("Failed to load params from {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
        None => Params::new(),
    };

    let mut manager = match BodyClassManager::with_defaults(params, cli.param_key.as_deref()) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.reset {
        manager.reset();
    }
    if !cli.set.is_empty() {
        manager.set(cli.set.clone(), !cli.merge);
    }
    manager.add(cli.add.clone());
    if cli.clean {
        manager.clean_classes();
    }

    let rendered = manager.render(!cli.no_attr);

    if cli.json {
        let output = serde_json::json!({
            "classes": manager.classes(),
            "rendered": rendered,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Failed to serialize output: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", rendered);
    }

    ExitCode::SUCCESS
}
