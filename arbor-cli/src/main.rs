mod cli;
mod edits;
mod logging;

use std::time::Duration;

use arbor::{fetch_records, HttpFetcher, Record, Tree, TreeConfig};
use arbor_dom::to_markup;
use clap::Parser;
use log::info;

use crate::cli::{Cli, OutputFormat};
use crate::logging::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.log_level.into(), cli.log_file.as_deref()) {
        eprintln!("error: failed to initialize logging: {e}");
        std::process::exit(1);
    }

    match run(&cli).await {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let records = if cli.source_is_url() {
        let fetcher = HttpFetcher::new().with_timeout(Duration::from_secs(cli.timeout));
        fetch_records(&fetcher, &cli.source).await?
    } else {
        let json = std::fs::read_to_string(&cli.source)?;
        Record::parse_document(&json)?
    };

    let mut tree = Tree::new(TreeConfig::default());
    tree.set_data(&records)?;
    info!("Loaded {} nodes from {}", tree.len(), cli.source);

    for edit in &cli.edits {
        edit.apply(&mut tree)?;
    }

    if cli.expand_all {
        tree.expand_all();
    }

    Ok(match cli.format {
        OutputFormat::Markup => format!("{}\n", to_markup(&tree.render())),
        OutputFormat::Outline => tree.outline(),
    })
}
