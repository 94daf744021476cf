//! netquery CLI: run a rule set against a network file.
//!
//! Usage:
//!   netquery filter --network net.json --rules rules.yaml [--fast]
//!   netquery query --network net.json --rules rules.json

use clap::{Parser, Subcommand};
use netquery::{compile_fast_filter, compile_filter, compile_query, JoinSpec, Network};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "netquery",
    version,
    about = "Query and filter social networks with declarative rules"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sub-network matching the rules as JSON
    Filter {
        /// Network file (JSON, or YAML by extension)
        #[arg(long)]
        network: PathBuf,
        /// Join spec file (JSON, or YAML by extension)
        #[arg(long)]
        rules: PathBuf,
        /// Use the single-pass strategy for large networks
        #[arg(long)]
        fast: bool,
    },
    /// Print whether the network satisfies the rules
    Query {
        /// Network file (JSON, or YAML by extension)
        #[arg(long)]
        network: PathBuf,
        /// Join spec file (JSON, or YAML by extension)
        #[arg(long)]
        rules: PathBuf,
    },
}

fn load(network: &Path, rules: &Path) -> Result<(Network, JoinSpec), String> {
    let net = Network::from_path(network)
        .map_err(|e| format!("cannot load network '{}': {}", network.display(), e))?;
    let spec = JoinSpec::from_path(rules)
        .map_err(|e| format!("cannot load rules '{}': {}", rules.display(), e))?;
    Ok((net, spec))
}

fn cmd_filter(network: &Path, rules: &Path, fast: bool) -> i32 {
    let (network, spec) = match load(network, rules) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let result = if fast {
        compile_fast_filter(&spec).apply(&network)
    } else {
        compile_filter(&spec).apply(&network)
    };
    match serde_json::to_string_pretty(&result) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_query(network: &Path, rules: &Path) -> i32 {
    match load(network, rules) {
        Ok((network, spec)) => {
            println!("{}", compile_query(&spec).evaluate(&network));
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level)
        .init();

    let code = match cli.command {
        Commands::Filter { network, rules, fast } => cmd_filter(&network, &rules, fast),
        Commands::Query { network, rules } => cmd_query(&network, &rules),
    };
    std::process::exit(code);
}
