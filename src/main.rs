use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use zmarkup::{
    error::Result,
    formatter::{FormatConfig, Formatter, MarkupFormatter, TreeFormatter},
    parse_file_with_config,
    parser::ParserConfig,
    utils::write_file,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file path
    #[arg(short, long)]
    file: String,

    /// Output format
    #[arg(short = 't', long, value_enum, default_value_t = OutputFormat::Tree)]
    format: OutputFormat,

    /// Output file path
    #[arg(short, long)]
    output: Option<String>,

    /// Spaces per indentation level
    #[arg(short, long, default_value_t = 2)]
    indent: usize,

    /// Drop trimmed text fragments shorter than this
    #[arg(long)]
    min_text_length: Option<usize>,

    /// Maximum bytes between '<' and '>'
    #[arg(long)]
    max_tag_length: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Indented outline of tags, text and attributes
    Tree,
    /// Markup that parses back to the same tree
    Markup,
}

fn main() {
    // Initialize the default subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let mut config = ParserConfig::default();
    if let Some(min) = args.min_text_length {
        config.min_text_length = min;
    }
    if let Some(max) = args.max_tag_length {
        config.max_tag_length = max;
    }

    info!("Reading file: {}", args.file);
    let document = parse_file_with_config(&args.file, config)?;
    info!(elements = document.element_count(), "Parsed successfully");

    let format_config = FormatConfig {
        indent_spaces: args.indent,
    };
    let formatted_output = match args.format {
        OutputFormat::Tree => TreeFormatter.format(&document, &format_config)?,
        OutputFormat::Markup => MarkupFormatter.format(&document, &format_config)?,
    };

    if let Some(output_path) = args.output {
        write_file(&output_path, &formatted_output)?;
    } else {
        println!("{}", formatted_output);
    }

    Ok(())
}
