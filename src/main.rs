use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use traducir::{
    supported_pairs, ConversionRequest, ConversionResult, Language, SkillLevel,
};

#[derive(Parser)]
#[command(name = "traducir")]
#[command(about = "Convert code snippets between JavaScript, Python, and Swift")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a snippet (from a file, or stdin when omitted)
    Convert {
        /// Source file (stdin when omitted)
        input: Option<PathBuf>,

        /// Source language (javascript, python, swift, ...)
        #[arg(long)]
        from: String,

        /// Target language
        #[arg(long)]
        to: String,

        /// Skill level for the generated explanation
        #[arg(long, value_enum, default_value = "intermediate")]
        skill: SkillArg,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the supported conversion pairs
    Pairs,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SkillArg {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<SkillArg> for SkillLevel {
    fn from(arg: SkillArg) -> Self {
        match arg {
            SkillArg::Beginner => SkillLevel::Beginner,
            SkillArg::Intermediate => SkillLevel::Intermediate,
            SkillArg::Advanced => SkillLevel::Advanced,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter_layer = if cli.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::new("info")
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("traducir v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Convert { input, from, to, skill, format, output } => {
            cmd_convert(input, &from, &to, skill, format, output)?;
        }
        Commands::Pairs => {
            cmd_pairs();
        }
    }

    Ok(())
}

fn cmd_convert(
    input: Option<PathBuf>,
    from: &str,
    to: &str,
    skill: SkillArg,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let source_code = match &input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read source from stdin")?;
            buf
        }
    };

    let mut request = ConversionRequest::new(source_code, Language::from(from), Language::from(to));
    request.skill_level = SkillLevel::from(skill);
    request.validate()?;

    info!(
        "converting {} -> {}",
        request.source_language, request.target_language
    );
    let result = traducir::convert(&request);

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Text => render_text(&request, &result),
    };

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote conversion to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn render_text(request: &ConversionRequest, result: &ConversionResult) -> String {
    let color = std::io::stdout().is_terminal();
    let header = format!(
        "{} -> {}",
        request.source_language, request.target_language
    );

    let mut out = String::new();
    if color {
        out.push_str(&format!("{}\n", header.bright_cyan().bold()));
        out.push_str(&format!("{}\n", "-".repeat(40).dimmed()));
    } else {
        out.push_str(&format!("{}\n{}\n", header, "-".repeat(40)));
    }
    out.push_str(&result.target_code);
    out.push('\n');

    if color {
        out.push_str(&format!("\n{}\n", "Explanation".bright_cyan().bold()));
    } else {
        out.push_str("\nExplanation\n");
    }
    out.push_str(&result.explanation.high_level);
    out.push('\n');
    for (index, step) in result.explanation.step_by_step.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index + 1, step));
    }
    out
}

fn cmd_pairs() {
    let color = std::io::stdout().is_terminal();
    if color {
        println!("{}", "Supported conversions".bright_cyan().bold());
    } else {
        println!("Supported conversions");
    }
    for (from, to) in supported_pairs() {
        println!("  {} -> {}", from, to);
    }
    println!("  (any other pair passes through with a comment header)");
}
