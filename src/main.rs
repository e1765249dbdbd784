//! docstub: turn API-reference HTML pages into declaration-only source stubs.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use docstub::diagnostics::{self, WriterReporter};
use docstub::{config, generate, input, prompt, Catalog};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docstub")]
#[command(about = "Source stubs from API-reference HTML pages", long_about = None)]
struct Args {
    /// Pages or directories to convert; prompts interactively when omitted
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Directory to write stubs into (defaults to each page's directory)
    #[arg(long, short = 'o', value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Print every captured component and a per-section summary instead of writing stubs
    #[arg(long)]
    self_test: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docstub=info")),
        )
        .init();

    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }

    let result = Catalog::with_backtrack_limit(cfg.backtrack_limit).and_then(|catalog| {
        if args.paths.is_empty() {
            run_interactive(&catalog)
        } else {
            let documents = input::find_documents(args.paths, &cfg.file_extensions)?;
            if args.self_test {
                run_self_test(&documents, &catalog)
            } else {
                run_batch(&documents, &catalog, args.out_dir.as_deref(), &cfg)
            }
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_interactive(catalog: &Catalog) -> docstub::Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();

    if let Ok(dir) = std::env::current_dir() {
        writeln!(stdout, "Using dir: {}", dir.display())?;
    }

    let (_, document) = prompt::read_source(&mut reader, &mut stdout)?;
    let (target, file) = prompt::create_output(&mut reader, &mut stdout)?;

    input::write_or_discard(&target, file, generate(&document, catalog))?;
    tracing::info!(path = %target.display(), "wrote stub");
    Ok(())
}

fn run_batch(
    documents: &[PathBuf],
    catalog: &Catalog,
    out_dir: Option<&Path>,
    cfg: &config::Config,
) -> docstub::Result<()> {
    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    let mut failed = 0usize;
    for page in documents {
        let target = input::stub_path(page, out_dir, &cfg.output_extension);
        match convert(page, &target, catalog) {
            Ok(()) => {
                tracing::info!(page = %page.display(), stub = %target.display(), "wrote stub");
            }
            Err(e) => {
                tracing::warn!(page = %page.display(), "skipped: {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        let total = documents.len();
        let message = format!("{failed} of {total} pages failed to convert");
        return Err(io::Error::other(message).into());
    }
    Ok(())
}

fn convert(page: &Path, target: &Path, catalog: &Catalog) -> docstub::Result<()> {
    let document = input::read_document(page)?;
    let stub = generate(&document, catalog)?;
    input::write_stub(target, &stub)?;
    Ok(())
}

fn run_self_test(documents: &[PathBuf], catalog: &Catalog) -> docstub::Result<()> {
    let mut reporter = WriterReporter::new(io::stdout());
    for page in documents {
        let document = input::read_document(page)?;
        let report = diagnostics::self_test(&document, catalog, &mut reporter)?;
        let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
        println!("{json}");
    }
    Ok(())
}
