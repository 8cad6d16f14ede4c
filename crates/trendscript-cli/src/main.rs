use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use trendscript_pipeline::Pipeline;

#[derive(Debug, Parser)]
#[command(name = "trendscript")]
#[command(about = "Turn a video idea into a trend-aware short-form script")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run every phase and print the full pipeline result
    Run {
        /// Free-form video idea
        idea: String,
        /// Google Trends category id (defaults to `TRENDSCRIPT_DEFAULT_CATEGORY`)
        #[arg(long)]
        category: Option<String>,
    },
    /// Extract the trend search keyword from an idea
    Keyword { idea: String },
    /// Fetch category and global trends for a keyword
    Trends {
        keyword: String,
        #[arg(long)]
        category: Option<String>,
    },
    /// Write a script for an existing viral angle
    Script { viral_angle: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = trendscript_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let pipeline = Pipeline::from_config(&config)?;
    let default_category = config.default_category_id.as_str();

    match cli.command {
        Commands::Run { idea, category } => {
            let category = category_or_default(category, default_category);
            tracing::info!(category_id = %category, "running full pipeline");
            let result = pipeline.run(&idea, &category).await?;
            print_json(&result)?;
        }
        Commands::Keyword { idea } => {
            tracing::info!("extracting keyword");
            let keyword = pipeline.extract_keyword(&idea).await?;
            print_json(&serde_json::json!({ "keyword": keyword, "original_idea": idea }))?;
        }
        Commands::Trends { keyword, category } => {
            let category = category_or_default(category, default_category);
            tracing::info!(keyword = %keyword, category_id = %category, "fetching trends");
            let trends = pipeline.fetch_trends(&keyword, &category).await;
            print_json(&trends)?;
        }
        Commands::Script { viral_angle } => {
            tracing::info!("generating script");
            let script = pipeline.generate_script(&viral_angle).await?;
            print_json(&serde_json::json!({ "script": script }))?;
        }
    }

    Ok(())
}

/// A missing or blank `--category` falls back to the configured default.
fn category_or_default(category: Option<String>, default: &str) -> String {
    category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
