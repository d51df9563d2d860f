pub mod cli;
pub mod diagnostics;
pub mod extract;
pub mod output;
pub mod render;
pub mod tokenize;

use std::path::Path;

use anyhow::Result;
use cli::{Cli, Target};
use diagnostics::{Report, build_report, summarize};

pub fn run(cli: Cli) -> Result<()> {
    let report = generate(&cli.source, &cli.out, cli.target)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", summarize(&report));
    }
    Ok(())
}

/// Reads `source`, collects its unique words and writes them to `out` as a
/// `target` array literal.
pub fn generate(source: &Path, out: &Path, target: Target) -> Result<Report> {
    tracing::info!("extracting words from {}", source.display());
    let list = extract::extract(source)?;

    let contents = render::render(&list.words, target);
    output::write_file(out, &contents)?;
    tracing::info!("wrote {} words to {}", list.len(), out.display());

    Ok(build_report(
        source.to_path_buf(),
        out.to_path_buf(),
        target,
        &list,
    ))
}
