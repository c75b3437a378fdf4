mod config;
mod relations;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use relations::query::RelationshipQuery;
use relations::report::ReportGenerator;
use relations::store::RelationshipStore;
use relations::types::Person;

#[derive(Parser)]
#[command(name = "kinship", version, about = "Relationship facts behind a query capability")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the sample family and report the children of a subject
    Demo {
        /// Subject to report on (defaults to the configured subject)
        #[arg(long)]
        name: Option<String>,
        /// Emit the report as JSON instead of plain lines
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level and default subject)
    let config = config::KinshipConfig::load()?;

    let filter =
        EnvFilter::try_new(&config.log.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Demo { name, json } => {
            let subject = name.unwrap_or(config.report.default_subject);
            run_demo(&subject, json)?;
        }
    }

    Ok(())
}

/// Build the canonical sample facts and report on `subject`.
fn run_demo(subject: &str, json: bool) -> Result<()> {
    let john = Person::new("John");
    let chris = Person::new("Chris");
    let matt = Person::new("Matt");

    let mut store = RelationshipStore::new();
    store.add_parent_and_child(&john, &chris);
    store.add_parent_and_child(&john, &matt);
    store.add_siblings(&chris, &matt);
    tracing::info!(facts = store.len(), "sample relationships ready");

    // The report sees only the capability, not the store.
    let report = ReportGenerator::new(&store as &dyn RelationshipQuery);

    if json {
        let payload = json!({
            "subject": subject,
            "children": report.children(subject),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        let stdout = std::io::stdout();
        report
            .write_report(subject, &mut stdout.lock())
            .context("failed to write report")?;
    }

    Ok(())
}
