use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use mdhtml::{Converter, Dialect};
use rayon::prelude::*;

#[derive(Parser)]
#[command(version, about = "Convert lightweight markup to HTML")]
struct Cli {
    /// Rule set used for conversion
    #[arg(long, value_enum, default_value_t = DialectArg::Standard)]
    dialect: DialectArg,
    /// Write `<file>.html` (the full input name plus `.html`) next to each input
    /// instead of printing
    #[arg(long = "write", requires = "files")]
    write: bool,
    /// Markup files to convert
    files: Vec<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum DialectArg {
    Standard,
    Legacy,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Standard => Dialect::Standard,
            DialectArg::Legacy => Dialect::Legacy,
        }
    }
}

fn convert_path(path: &Path, converter: &Converter) -> anyhow::Result<String> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(converter.convert(&content))
}

/// Output path for `--write`: the input's full file name with `.html` appended,
/// so it never coincides with the input or with another input's output.
fn html_target(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".html");
    PathBuf::from(name)
}

fn write_html(path: &Path, html: &str) -> anyhow::Result<()> {
    let target = html_target(path);
    log::info!("writing {}", target.display());
    fs::write(&target, format!("{html}\n"))
        .with_context(|| format!("failed to write {}", target.display()))
}

/// Entry point for the `mdhtml` command-line tool.
///
/// With no file arguments the tool reads markup from standard input and prints
/// HTML. Files are converted in parallel and printed in argument order, or
/// written beside their inputs with `--write`.
///
/// # Examples
///
/// ```sh
/// # Convert a file and print the HTML
/// mdhtml notes.md
///
/// # Write notes.md.html next to notes.md
/// mdhtml --write notes.md
///
/// # Convert standard input with the legacy rules
/// cat notes.md | mdhtml --dialect legacy
/// ```
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let converter = Converter::builtin(cli.dialect.into());

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read standard input")?;
        println!("{}", converter.convert(&input));
        return Ok(());
    }

    let outputs = cli
        .files
        .par_iter()
        .map(|path| convert_path(path, converter))
        .collect::<anyhow::Result<Vec<_>>>()?;

    for (path, html) in cli.files.iter().zip(&outputs) {
        if cli.write {
            write_html(path, html)?;
        } else {
            println!("{html}");
        }
    }

    Ok(())
}
