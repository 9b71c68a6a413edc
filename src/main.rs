use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;

use md2post::{Config, PublishOptions, Template};

const DEFAULT_CONFIG_FILE: &str = "md2post.toml";

#[derive(Parser)]
#[command(name = "md2post")]
#[command(about = "Convert a Markdown post to an HTML page with SEO metadata")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file (defaults to input name with .html extension)
    output: Option<PathBuf>,

    /// Site base URL, overrides the config file
    #[arg(long)]
    base_url: Option<String>,

    /// Config file (defaults to ./md2post.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page template, overrides the config file
    #[arg(long)]
    template: Option<PathBuf>,

    /// Publication date (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file {} not found", path.display())),
        None => Ok(Config::load_from_path(Path::new(DEFAULT_CONFIG_FILE))?
            .unwrap_or_else(Config::compiled_default)),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_ref())?;
    if let Some(base_url) = cli.base_url {
        config.site.base_url = base_url;
    }
    if let Some(template) = cli.template {
        config.render.template = Some(template);
    }

    let date = cli
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive())
        .format("%Y-%m-%d")
        .to_string();

    let options = PublishOptions {
        template: Template::load(config.render.template.as_deref())?,
        site: config.site,
        date,
    };

    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension("html"));

    let published = md2post::publish_file(&cli.input, &output, &options)?;

    println!(
        "✓ Wrote {} ({} min read, {} tags)",
        output.display(),
        published.reading_time,
        published.tag_count
    );
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
