use clap::Parser;
use std::net::SocketAddr;
use tracing::info;
use wa_core::{Article, Config, ContentSource, Error, NormalizationRequest, Result, SourceText};
use wa_inference::{ArticleNormalizer, ModelKind};
use wa_sources::WikipediaSource;
use wa_web::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate encyclopedia-based articles of a minimum length", long_about = None)]
pub struct Cli {
    #[arg(long, default_value = "groq", help = "Model to use for generation. Available models: groq (default), dummy")]
    model: ModelKind,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
    /// Generate a single article and print it as JSON
    Generate {
        topic: String,
        /// Overrides ARTICLE_MIN_WORDS
        #[arg(long)]
        min_words: Option<usize>,
    },
    /// Print the raw encyclopedia extract for a topic
    Fetch {
        topic: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    wa_core::logging::init_logging();
    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Serve { host, port } => {
            let addr: SocketAddr = format!("{}:{}", host, port)
                .parse()
                .map_err(|e| Error::Configuration(format!("invalid listen address {}:{}: {}", host, port, e)))?;
            let state = AppState::from_config(cli.model, &config)?;
            wa_web::serve(state, addr).await?;
        }
        Commands::Generate { topic, min_words } => {
            let normalizer = ArticleNormalizer::from_config(cli.model, &config)?;
            let source = WikipediaSource::new(&config.source)?;
            let min_words = min_words.unwrap_or(config.min_words);

            let text = source.fetch(&topic).await?;
            let request = NormalizationRequest::from_source(topic.trim(), &text, min_words);
            let content = normalizer.normalize(&request).await;
            info!("✍️ Generated article for '{}' ({} words)", topic, content.split_whitespace().count());

            let article = Article { title: topic, content };
            println!("{}", serde_json::to_string_pretty(&article)?);
        }
        Commands::Fetch { topic } => {
            let source = WikipediaSource::new(&config.source)?;
            match source.fetch(&topic).await? {
                SourceText::Found(text) => println!("{}", text),
                SourceText::NotFound => eprintln!("No {} page found for '{}'", source.name(), topic),
            }
        }
    }

    Ok(())
}
