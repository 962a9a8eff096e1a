//! Tree command implementation: every branch as JSON.

use serde::Serialize;

use pytree::{Branch, Point};

use super::args::DumpArgs;
use super::common::write_output;
use super::config::TreeConfig;
use super::error::CliError;

/// A branch in JSON output format.
#[derive(Serialize)]
struct JsonBranch {
    origin: Point,
    side: f64,
    inclination: f64,
    outline: Vec<Point>,
}

/// One level of the tree.
#[derive(Serialize)]
struct JsonLevel {
    level: usize,
    branches: Vec<JsonBranch>,
}

/// JSON output for the whole tree.
#[derive(Serialize)]
struct JsonTree {
    generated_at: String,
    side: f64,
    ratio: f64,
    depth: usize,
    branch_count: usize,
    levels: Vec<JsonLevel>,
}

impl From<&Branch> for JsonBranch {
    fn from(b: &Branch) -> Self {
        Self {
            origin: b.origin(),
            side: b.side(),
            inclination: b.inclination(),
            outline: b.vertices().to_vec(),
        }
    }
}

/// Execute the tree command.
pub fn cmd_tree(args: &DumpArgs) -> Result<(), CliError> {
    let config = TreeConfig::resolve(&args.tree)?;
    let root = config.trunk()?;
    let tree = root.build_tree(config.depth);

    let output = JsonTree {
        generated_at: chrono::Utc::now().to_rfc3339(),
        side: config.side,
        ratio: config.ratio,
        depth: tree.depth(),
        branch_count: tree.branch_count(),
        levels: tree
            .levels()
            .map(|(level, branches)| JsonLevel {
                level,
                branches: branches.iter().map(JsonBranch::from).collect(),
            })
            .collect(),
    };

    let mut json = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    json.push('\n');
    write_output(args.output.as_deref(), &json)
}
