//! websmith CLI - Main entry point

mod export;

use clap::{Parser, Subcommand};
use futures::StreamExt;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use websmith_foundation::{Error, GenerateOptions, Result, WebsmithConfig};
use websmith_tokens::{
    flatten_tokens, generate_optimized_css, init_global_engine, stream_optimized_css,
};

use export::{export, ExportFormat};

/// websmith - design tokens to CSS custom properties
#[derive(Parser, Debug)]
#[command(name = "websmith")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to websmith.toml (defaults to ./websmith.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a stylesheet from a JSON token file
    Generate {
        /// Token file (JSON)
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: css, scss, json
        #[arg(short, long, default_value = "css")]
        format: String,

        #[command(flatten)]
        flags: GenerateFlags,

        /// Write the stylesheet incrementally, batch by batch
        #[arg(long)]
        stream: bool,

        /// Serve repeated generations from the stylesheet cache
        #[arg(long)]
        cached: bool,
    },
    /// Print generation statistics for a token file
    Stats {
        /// Token file (JSON)
        input: PathBuf,

        #[arg(long)]
        prefix: Option<String>,
    },
}

/// Flags layered over the `[generate]` section of websmith.toml
#[derive(clap::Args, Debug, Default)]
struct GenerateFlags {
    /// Custom property prefix
    #[arg(long)]
    prefix: Option<String>,

    /// Rule selector
    #[arg(long)]
    selector: Option<String>,

    #[arg(long)]
    minify: bool,

    /// Keep variables that share a value
    #[arg(long)]
    no_dedup: bool,

    /// Append the dark theme block
    #[arg(long)]
    theme: bool,

    #[arg(long)]
    batch_size: Option<usize>,
}

impl GenerateFlags {
    fn apply(&self, base: &GenerateOptions) -> GenerateOptions {
        let mut options = base.clone();
        if let Some(prefix) = &self.prefix {
            options.prefix = prefix.clone();
        }
        if let Some(selector) = &self.selector {
            options.selector = selector.clone();
        }
        if let Some(batch_size) = self.batch_size {
            options.batch_size = batch_size;
        }
        options.minify |= self.minify;
        options.include_theme |= self.theme;
        if self.no_dedup {
            options.deduplicate = false;
        }
        options
    }
}

/// Streaming only produces css
fn check_stream_format(format: ExportFormat) -> Result<()> {
    if format == ExportFormat::Css {
        Ok(())
    } else {
        Err(Error::InvalidInput("--stream is only available for css output".to_string()))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run(args).await {
        eprintln!("❌ Failed to generate tokens: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let config = WebsmithConfig::load(args.config.as_deref())?;

    match args.command {
        Command::Generate {
            input,
            output,
            format,
            flags,
            stream,
            cached,
        } => {
            let format: ExportFormat = format.parse()?;
            if stream {
                check_stream_format(format)?;
            }
            let tokens = read_tokens(&input)?;
            let options = flags.apply(&config.generate);

            if stream {
                return write_streamed(&tokens, &options, output.as_deref()).await;
            }

            let text = {
                let mut engine = init_global_engine(config).lock();
                export(&mut engine, &tokens, format, &options, cached)?
            };
            write_output(&text, output.as_deref()).await
        }
        Command::Stats { input, prefix } => {
            let tokens = read_tokens(&input)?;
            let mut options = config.generate.clone();
            if let Some(prefix) = prefix {
                options.prefix = prefix;
            }
            print_stats(&tokens, &options)
        }
    }
}

fn read_tokens(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    let tokens: Value = serde_json::from_str(&content)?;
    if !tokens.is_object() {
        tracing::warn!(
            path = %path.display(),
            "token file is not an object, output will be empty"
        );
    }
    Ok(tokens)
}

async fn write_output(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            tokio::fs::write(path, text).await?;
            tracing::info!("✓ Wrote {}", path.display());
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(text.as_bytes()).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

async fn write_streamed(
    tokens: &Value,
    options: &GenerateOptions,
    output: Option<&Path>,
) -> Result<()> {
    let mut writer: Box<dyn tokio::io::AsyncWrite + Unpin + Send> = match output {
        Some(path) => Box::new(tokio::fs::File::create(path).await?),
        None => Box::new(tokio::io::stdout()),
    };

    let mut chunks = Box::pin(stream_optimized_css(tokens, options));
    let mut written = 0usize;
    while let Some(chunk) = chunks.next().await {
        writer.write_all(chunk.as_bytes()).await?;
        written += chunk.len();
    }
    writer.flush().await?;

    tracing::debug!(bytes = written, "streamed stylesheet");
    if let Some(path) = output {
        tracing::info!("✓ Wrote {}", path.display());
    }
    Ok(())
}

fn print_stats(tokens: &Value, options: &GenerateOptions) -> Result<()> {
    let flattened = flatten_tokens(tokens, &options.prefix).len();
    let result = generate_optimized_css(tokens, options);

    println!("Tokens flattened:   {}", flattened);
    println!("Variables emitted:  {}", result.stats.variable_count);
    println!("Duplicates removed: {}", result.stats.duplicates_removed);
    println!("Output size:        {} chars", result.stats.output_size);
    println!("Generation time:    {:.3}ms", result.stats.generation_time);
    println!("{}", serde_json::to_string_pretty(&result.stats)?);
    Ok(())
}
