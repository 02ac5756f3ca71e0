use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use gloss_align::GlossFile;

#[derive(Parser)]
#[command(author, version, about = "Realigns interlinear glosses in Toolbox files")]
struct Cli {
    /// Toolbox file to reformat
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Write the reformatted file here instead of printing to stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Report faulty glosses as JSON on stderr instead of warning blocks
    #[arg(long)]
    json: bool,
}

/// One faulty gloss, as reported on stderr under `--json`.
#[derive(Serialize)]
struct GlossWarning {
    error: String,
    lines: String,
}

fn warn_block(error: &str, gloss: &str) -> String {
    format!(
        "\n\
         ========================= WARNING ==========================\n\
         Could not parse following gloss:\n\
         ({error})\n\
         ------------------------------------------------------------\n\
         {gloss}\n\
         ============================================================\n"
    )
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let input_data = fs::read_to_string(&cli.input)
        .with_context(|| format!("could not read {}", cli.input.display()))?;
    // the scanner expects lines with trailing whitespace stripped
    let lines: Vec<String> = input_data
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect();

    let file = GlossFile::parse(lines);
    let rendered = file.to_string();

    match &cli.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("could not write {}", path.display()))?;
            println!("✅ Reformatted file written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    // faulty glosses are diagnostics, not failures; the document above is
    // complete either way
    let faulty: Vec<_> = file.glosses().filter(|gloss| gloss.is_faulty()).collect();
    if cli.json {
        let warnings: Vec<GlossWarning> = faulty
            .iter()
            .map(|gloss| GlossWarning {
                error: gloss
                    .error()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
                lines: gloss.to_string(),
            })
            .collect();
        eprintln!("{}", serde_json::to_string_pretty(&warnings)?);
    } else {
        for gloss in faulty {
            let error = gloss
                .error()
                .map(ToString::to_string)
                .unwrap_or_default();
            eprint!("{}", warn_block(&error, &gloss.to_string()));
        }
    }

    Ok(())
}
