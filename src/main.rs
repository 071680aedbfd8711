//! ascii-graphs CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ascii_graphs::renderers::charset::CharSet;
use ascii_graphs::{ChartKind, OutputFormat, ParseOptions, RenderConfig, StyleParams};

/// Label/value CSV to ASCII/Unicode chart output.
#[derive(Parser, Debug)]
#[command(
    name = "ascii-graphs",
    version = env!("ASCII_GRAPHS_VERSION"),
    about = "Label/value CSV to ASCII/Unicode chart output"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Chart kind (bar, vertical-bar, area, pie)
    #[arg(short = 'k', long = "kind", default_value = "bar")]
    kind: ChartKind,

    /// Emit HTML markup instead of plain text
    #[arg(long = "html")]
    html: bool,

    /// Use plain ASCII for axis rules
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// Omit the chart heading
    #[arg(long = "no-title")]
    no_title: bool,

    /// Field delimiter
    #[arg(short = 'd', long = "delimiter", default_value = ",")]
    delimiter: char,

    /// TOML file with style parameters (bar_char, area_chars, pie_chars, colors)
    #[arg(short = 's', long = "style")]
    style: Option<PathBuf>,

    /// Bar glyph (overrides the style file)
    #[arg(long = "bar-char")]
    bar_char: Option<String>,

    /// Area line glyph
    #[arg(long = "line-char")]
    line_char: Option<String>,

    /// Area fill glyph
    #[arg(long = "fill-char")]
    fill_char: Option<String>,

    /// Whitespace-separated pie glyphs
    #[arg(long = "pie-chars")]
    pie_chars: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Log layout decisions to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "ascii_graphs=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

/// Style file first, then individual glyph flags on top.
fn load_style(cli: &Cli) -> Result<StyleParams, String> {
    let mut style = match &cli.style {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
            toml::from_str::<StyleParams>(&text)
                .map_err(|e| format!("invalid style file '{}': {}", path.display(), e))?
        }
        None => StyleParams::default(),
    };
    if let Some(c) = &cli.bar_char {
        style.bar_char = c.clone();
    }
    if let Some(c) = &cli.line_char {
        style.area_chars.0 = c.clone();
    }
    if let Some(c) = &cli.fill_char {
        style.area_chars.1 = c.clone();
    }
    if let Some(chars) = &cli.pie_chars {
        style.pie_chars = chars.split_whitespace().map(str::to_owned).collect();
    }
    Ok(style)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => fail(format!("cannot read '{}': {}", path.display(), e)),
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            fail(format!("cannot read stdin: {}", e));
        }
        buf
    };

    let style = load_style(&cli).unwrap_or_else(|e| fail(e));
    let config = RenderConfig {
        style,
        format: if cli.html { OutputFormat::Html } else { OutputFormat::Text },
        charset: if cli.use_ascii { CharSet::Ascii } else { CharSet::Unicode },
        title: !cli.no_title,
    };
    let options = ParseOptions {
        delimiter: cli.delimiter,
    };

    let rendered = ascii_graphs::render_csv_with(&text, options, cli.kind, &config)
        .unwrap_or_else(|e| fail(e));

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            fail(format!("cannot write '{}': {}", path.display(), e));
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            fail(format!("cannot flush stdout: {}", e));
        }
    }
}
