use anyhow::{Context, Result, bail};
use clap::Parser;
use mdsite_config::{Config, DiagnosticPolicy};
use mdsite_engine::{Diagnostic, render_document};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};

mod template;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Render a markdown page into an HTML template")]
struct Cli {
    /// Input markdown file
    input: PathBuf,

    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output HTML file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to ~/.config/mdsite/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat any diagnostic as an error
    #[arg(long)]
    deny_warnings: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    let markdown = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let rendered = render_document(&markdown)
        .with_context(|| format!("Failed to render {}", cli.input.display()))?;

    let policy = if cli.deny_warnings {
        DiagnosticPolicy::Deny
    } else {
        config.diagnostics
    };
    report_diagnostics(&cli.input, &rendered.diagnostics, policy)?;

    let template = match cli.template.as_ref().or(config.template_path.as_ref()) {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read template {}", path.display()))?,
        None => template::DEFAULT_TEMPLATE.to_string(),
    };
    let page = template::render(&template, &rendered.title, &rendered.body_html);

    match &cli.output {
        Some(path) => {
            fs::write(path, page).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {} ({})", path.display(), rendered.title);
        }
        None => io::stdout().write_all(page.as_bytes())?,
    }
    Ok(())
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            log::debug!("Config path: {}", path.display());
            match Config::load_from_path(path)? {
                Some(config) => Ok(config),
                None => bail!("Config file {} does not exist", path.display()),
            }
        }
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Ok(Config::load()?.unwrap_or_default())
        }
    }
}

fn report_diagnostics(
    input: &Path,
    diagnostics: &[Diagnostic],
    policy: DiagnosticPolicy,
) -> Result<()> {
    match policy {
        DiagnosticPolicy::Ignore => Ok(()),
        DiagnosticPolicy::Warn => {
            for diagnostic in diagnostics {
                log::warn!("{}: {diagnostic}", input.display());
            }
            Ok(())
        }
        DiagnosticPolicy::Deny => {
            for diagnostic in diagnostics {
                log::error!("{}: {diagnostic}", input.display());
            }
            if !diagnostics.is_empty() {
                bail!(
                    "{} diagnostic(s) in {} and diagnostics are denied",
                    diagnostics.len(),
                    input.display()
                );
            }
            Ok(())
        }
    }
}
