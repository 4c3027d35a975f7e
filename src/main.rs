use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;

use pubparse::{
    authors::format_authors,
    cli::{Cli, Command, Source},
    parser::parse_bib,
    publication::Publication,
};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    match args.command {
        Command::Parse { from } => {
            let mut records: Vec<Publication> = Vec::new();
            let mut ok = 0usize;
            let mut failed = 0usize;

            for source in &from {
                match read_source(source) {
                    Ok(text) => {
                        records.extend(parse_bib(&text));
                        ok += 1;
                    }
                    Err(err) => {
                        eprintln!("{err:#}");
                        failed += 1;
                    }
                }
            }

            println!("{}", serde_json::to_string_pretty(&records)?);
            eprintln!("{} {ok} {} {failed}", "✓".green(), "✗".red());
        }
        Command::Authors { authors, max } => {
            println!("{}", format_authors(&authors, max));
        }
    }
    Ok(())
}

fn read_source(source: &Source) -> anyhow::Result<String> {
    match source {
        Source::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        Source::Inline(text) => Ok(text.clone()),
    }
}
