//! resumefmt CLI - plain-text resume to HTML and PDF

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use resumefmt::{
    parse_file_with_options, CleanupPreset, ConvertOptions, Converter, JsonFormat, ParseOptions,
    PdfEngineRegistry, RenderOptions, ResumeStats, SectionKind,
};

#[derive(Parser)]
#[command(name = "resumefmt")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Turn a plain-text resume into HTML and PDF", long_about = None)]
struct Cli {
    /// Input resume text file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// HTML output file (default: input with .html extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Also generate a PDF
    #[arg(long)]
    pdf: bool,

    /// PDF output file (default: HTML output with .pdf extension)
    #[arg(long, value_name = "FILE")]
    pdf_output: Option<PathBuf>,

    /// PDF engine to use (default: first available)
    #[arg(long, value_name = "NAME", env = "RESUMEFMT_PDF_ENGINE")]
    engine: Option<String>,

    /// HTML page title
    #[arg(long)]
    title: Option<String>,

    /// Emit HTML without the built-in stylesheet
    #[arg(long)]
    no_styles: bool,

    #[command(flatten)]
    parse: ParseArgs,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Parsing flags shared by every command that reads a resume.
#[derive(clap::Args, Clone, Copy, Default)]
struct ParseArgs {
    /// Only accept the known section headings
    #[arg(long)]
    strict_headings: bool,

    /// Input cleanup preset
    #[arg(long, value_enum)]
    cleanup: Option<CleanupLevel>,
}

impl ParseArgs {
    fn options(self) -> ParseOptions {
        let mut options = ParseOptions::new();
        if self.strict_headings {
            options = options.strict_headings();
        }
        if let Some(level) = self.cleanup {
            options = options.with_cleanup_preset(level.into());
        }
        options
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a resume to JSON
    Json {
        /// Input resume text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        parse: ParseArgs,
    },

    /// Convert a resume to normalized plain text
    Text {
        /// Input resume text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include YAML frontmatter
        #[arg(short, long)]
        frontmatter: bool,

        #[command(flatten)]
        parse: ParseArgs,
    },

    /// Show what the parser recovered from a resume
    Info {
        /// Input resume text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        parse: ParseArgs,
    },

    /// List PDF engines and whether they are installed
    Engines,

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Line endings, BOM and Unicode normalization only
    Minimal,
    /// Also bullets, ligatures, tabs and stray characters (default)
    Standard,
    /// Also private-use glyphs and repeated spaces
    Aggressive,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
            CleanupLevel::Aggressive => CleanupPreset::Aggressive,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Json {
            ref input,
            ref output,
            compact,
            parse,
        }) => cmd_json(input, output.as_deref(), compact, parse),
        Some(Commands::Text {
            ref input,
            ref output,
            frontmatter,
            parse,
        }) => cmd_text(input, output.as_deref(), frontmatter, parse),
        Some(Commands::Info { ref input, parse }) => cmd_info(input, parse),
        Some(Commands::Engines) => {
            cmd_engines();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => match cli.input {
            Some(ref input) => cmd_convert(input, &convert_options(&cli)),
            None => {
                println!("{}", "Usage: resumefmt <FILE> [-o OUTPUT] [--pdf]".yellow());
                println!("       resumefmt --help for more information");
                Ok(())
            }
        },
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn convert_options(cli: &Cli) -> ConvertOptions {
    let mut render = RenderOptions::new();
    if let Some(ref title) = cli.title {
        render = render.with_title(title);
    }
    if cli.no_styles {
        render = render.without_styles();
    }

    let mut options = ConvertOptions::new()
        .with_parse_options(cli.parse.options())
        .with_render_options(render)
        .with_pdf(cli.pdf)
        .with_stats(true);

    if let Some(ref path) = cli.output {
        options = options.with_html_output(path);
    }
    if let Some(ref path) = cli.pdf_output {
        options = options.with_pdf_output(path);
    }
    if let Some(ref engine) = cli.engine {
        options = options.with_engine(engine);
    }
    options
}

fn cmd_convert(input: &Path, options: &ConvertOptions) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(80));

    pb.set_message("Parsing resume...");
    let doc = parse_file_with_options(input, options.parse.clone())?;
    log::debug!("Parsed {} sections from {}", doc.section_count(), input.display());

    pb.set_message(if options.pdf {
        "Writing HTML and PDF..."
    } else {
        "Writing HTML..."
    });
    let html_path = options.html_path_for(input);
    let converter = Converter::new();
    let result = converter.convert_document(&doc, &html_path, options);
    pb.finish_and_clear();

    let result = match result {
        Ok(result) => result,
        Err(e) if e.is_pdf_failure() => {
            println!("{} {}", "HTML saved to".green(), html_path.display());
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    println!("{}", "Output files:".green().bold());
    match result.pdf_path {
        Some(ref pdf) => {
            println!("  {} {}", "├─".dimmed(), result.html_path.display());
            let engine = result.engine.as_deref().unwrap_or("unknown");
            println!("  {} {} ({})", "└─".dimmed(), pdf.display(), engine.dimmed());
        }
        None => println!("  {} {}", "└─".dimmed(), result.html_path.display()),
    }

    if let Some(ref stats) = result.stats {
        if stats.incomplete_count > 0 {
            println!(
                "{} {} of {} entries were only partly recognized (shown as written)",
                "Note:".yellow(),
                stats.incomplete_count,
                stats.entry_count
            );
        }
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    parse: ParseArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file_with_options(input, parse.options())?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = resumefmt::render::to_json(&doc, format)?;
    write_or_print(output, &json)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    frontmatter: bool,
    parse: ParseArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file_with_options(input, parse.options())?;
    let render_options = RenderOptions::new().with_frontmatter(frontmatter);
    let text = resumefmt::render::to_text(&doc, &render_options)?;
    write_or_print(output, &text)
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_info(input: &Path, parse: ParseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file_with_options(input, parse.options())?;

    println!("{}", "Resume Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Lines".bold(), doc.metadata.line_count);
    println!("{}: {}", "Name".bold(), doc.name());

    let contact = &doc.contact;
    if let Some(ref email) = contact.email {
        println!("{}: {}", "Email".bold(), email);
    }
    if let Some(ref phone) = contact.phone {
        println!("{}: {}", "Phone".bold(), phone);
    }
    if let Some(ref linkedin) = contact.linkedin {
        println!("{}: {}", "LinkedIn".bold(), linkedin);
    }
    if let Some(ref location) = contact.location {
        println!("{}: {}", "Location".bold(), location);
    }
    println!(
        "{}: {}",
        "Summary".bold(),
        if doc.summary.is_some() { "Yes" } else { "No" }
    );

    println!();
    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for section in &doc.sections {
        let kind = match section.kind() {
            SectionKind::Other => "unrecognized".dimmed().to_string(),
            kind => kind.to_string(),
        };
        let incomplete = section.incomplete_count();
        let note = if incomplete > 0 {
            format!(" ({} incomplete)", incomplete).yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "{} [{}]: {} entries{}",
            section.title.bold(),
            kind,
            section.entry_count(),
            note
        );
    }

    let stats = ResumeStats::from_document(&doc);
    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Bullets".bold(), stats.bullet_count);
    println!("{}: {}", "Skills".bold(), stats.skill_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);
    println!(
        "{}: {:.0}%",
        "Recognized".bold(),
        stats.completeness() * 100.0
    );

    Ok(())
}

fn cmd_engines() {
    let registry = PdfEngineRegistry::with_defaults();

    println!("{}", "PDF Engines".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for name in registry.names() {
        let available = registry.get(name).is_some_and(|e| e.is_available());
        let status = if available {
            "available".green()
        } else {
            "not found".red()
        };
        println!("{}: {}", name.bold(), status);
    }
}

fn cmd_version() {
    println!("{} {}", "resumefmt".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Plain-text resume to HTML and PDF");
    println!();
    println!("License: MIT");
}
