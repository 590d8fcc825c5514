#![cfg_attr(test, allow(unused_crate_dependencies))]

use std::io::Read;

use anyhow::Context;
use clap::crate_version;
use graphql_request_builder::{OperationType, Operations, QueryBuilder};

mod args;

fn main() -> anyhow::Result<()> {
    let args = args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    tracing::debug!("gqlreq {}", crate_version!());

    let builder = QueryBuilder::new(args.builder_config()?);
    let operations: Operations = serde_json::from_str(&read_input(&args)?).context("parsing the operation tree")?;

    let operation_type = OperationType::from(args.operation_type);
    let request = builder
        .build(operation_type, &operations)
        .with_context(|| format!("building the {operation_type}"))?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&request)?
    } else {
        serde_json::to_string(&request)?
    };

    println!("{json}");

    Ok(())
}

fn read_input(args: &args::Args) -> anyhow::Result<String> {
    match &args.input {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("reading the operation tree from stdin")?;
            Ok(input)
        }
    }
}
