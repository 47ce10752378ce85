use clap::{Parser, Subcommand};
use figweb_codegen::{page, CompilerOutput, PageOptions, DEFAULT_TITLE};
use figweb_document::{Document, DocumentError, DEFAULT_ROOT_ID};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "figweb")]
#[command(about = "figweb: convert design-document exports to static HTML + CSS")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an export to a standalone HTML page
    Build {
        /// Input text containing the design payload
        path: PathBuf,

        /// Output file (defaults to `<input-stem>.html` next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Id of the root node that marks the start of the payload
        #[arg(long, default_value = DEFAULT_ROOT_ID)]
        root_id: String,

        /// Document title
        #[arg(long, default_value = DEFAULT_TITLE)]
        title: String,
    },

    /// Check that an export converts, without writing output
    Check {
        /// Input text containing the design payload
        path: PathBuf,

        /// Id of the root node that marks the start of the payload
        #[arg(long, default_value = DEFAULT_ROOT_ID)]
        root_id: String,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Refusing to overwrite input {}; pass --output to choose another file", path.display())]
    OverwritesInput { path: PathBuf },

    #[error("{0}")]
    Document(#[from] DocumentError),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Build {
            path,
            output,
            root_id,
            title,
        } => cmd_build(&path, output.as_deref(), &root_id, PageOptions { title }).map(|_| ()),
        Command::Check { path, root_id } => cmd_check(&path, &root_id),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn convert(path: &Path, root_id: &str) -> Result<CompilerOutput, CliError> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = Document::from_text(&source, root_id)?;
    Ok(figweb_codegen::compile(&doc))
}

fn cmd_build(
    path: &Path,
    output: Option<&Path>,
    root_id: &str,
    options: PageOptions,
) -> Result<PathBuf, CliError> {
    let html_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(path));
    if same_file(&html_path, path) {
        return Err(CliError::OverwritesInput { path: html_path });
    }

    let compiled = convert(path, root_id)?;

    let html = page::render(&compiled, &options);
    std::fs::write(&html_path, html).map_err(|source| CliError::Write {
        path: html_path.clone(),
        source,
    })?;

    let out_dir = html_path.parent().unwrap_or(Path::new("."));
    for image in missing_images(&compiled.images, out_dir) {
        log::warn!("referenced image not found: {}", out_dir.join(image).display());
    }

    log::info!("Built: {}", html_path.display());
    Ok(html_path)
}

fn cmd_check(path: &Path, root_id: &str) -> Result<(), CliError> {
    let compiled = convert(path, root_id)?;
    log::info!(
        "OK: {} ({} classes, {} images)",
        path.display(),
        compiled.classes,
        compiled.images.len()
    );
    Ok(())
}

/// `designs/home.txt` → `designs/home.html`.
fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("html")
}

/// Whether two paths name the same file, resolving links when both exist.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Image paths that do not exist relative to `dir`.
fn missing_images<'a>(images: &'a [String], dir: &Path) -> Vec<&'a str> {
    images
        .iter()
        .filter(|image| !dir.join(image.as_str()).exists())
        .map(String::as_str)
        .collect()
}
