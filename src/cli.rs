//! Command-line interface.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use crate::demo;
use crate::error::Result;
use crate::registry::MissingPolicy;
use crate::xml::select;

/// xmlbind - Materialize typed objects from XML documents.
#[derive(Parser)]
#[command(name = "xmlbind")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Materialize the demo menu object model from an XML file.
    Materialize {
        /// Path to the XML file.
        file: PathBuf,

        /// Path query to run after the root (e.g. /Menu/Category/Category);
        /// each match is materialized separately.
        #[arg(short, long)]
        query: Option<String>,

        /// What to do when an element has no registered constructor.
        #[arg(short, long, value_enum, default_value_t = PolicyArg::Error)]
        missing: PolicyArg,
    },
}

/// Missing-constructor policy as a CLI argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    /// Log an error and skip the element.
    Error,
    /// Abort with a structured error.
    Fail,
    /// Skip the element silently.
    Ignore,
    /// Substitute a generic placeholder.
    Generic,
}

impl From<PolicyArg> for MissingPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Error => MissingPolicy::Error,
            PolicyArg::Fail => MissingPolicy::Fail,
            PolicyArg::Ignore => MissingPolicy::Ignore,
            PolicyArg::Generic => MissingPolicy::Generic,
        }
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Materialize {
            file,
            query,
            missing,
        } => materialize_command(&file, query.as_deref(), missing.into()),
    }
}

/// Execute the materialize command.
fn materialize_command(file: &Path, query: Option<&str>, policy: MissingPolicy) -> Result<()> {
    // Read and parse up front: malformed input aborts before any
    // materialization starts.
    let xml = fs::read_to_string(file)?;
    let doc = roxmltree::Document::parse(&xml)?;

    let materializer = demo::materializer(policy);

    println!(
        "{} {}",
        style("Materializing").bold(),
        style(file.display()).cyan()
    );
    let root = materializer.materialize(doc.root_element(), None, None)?;
    print_object(root.as_deref())?;

    if let Some(path) = query {
        let matches = select(doc.root_element(), path);
        println!(
            "{} {} {} {}",
            style("Query").bold(),
            style(path).cyan(),
            style("matched").bold(),
            style(matches.len()).green()
        );
        for node in matches {
            let object = materializer.materialize(node, None, None)?;
            print_object(object.as_deref())?;
        }
    }

    Ok(())
}

fn print_object(object: Option<&dyn std::any::Any>) -> Result<()> {
    match object {
        Some(object) => match demo::render_yaml(object)? {
            Some(yaml) => println!("{yaml}"),
            None => println!("{}", style("(object of unknown shape)").dim()),
        },
        None => println!("{}", style("(nothing materialized)").dim()),
    }
    Ok(())
}
