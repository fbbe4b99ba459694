use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use obst::{BuildConfig, OptimalTree, RankIndex, ShapePolicy, WeightMode};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "obst", about = "Optimal binary search trees from access weights")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the optimal tree and print its cost and shape.
    Solve {
        /// Input file with `p:`, `q:` and `keys:` lines.
        input: PathBuf,
        /// How children are assigned when materializing the tree.
        #[arg(long, value_enum, default_value_t = ShapeArg::SplitTable)]
        shape: ShapeArg,
        /// How range weights are computed during the DP.
        #[arg(long, value_enum, default_value_t = WeightsArg::Incremental)]
        weights: WeightsArg,
    },
    /// Build the optimal tree, then look up keys in it.
    Query {
        /// Input file with `p:`, `q:` and `keys:` lines.
        input: PathBuf,
        /// Keys to look up.
        #[arg(required = true, allow_negative_numbers = true)]
        keys: Vec<i64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ShapeArg {
    SplitTable,
    InsertionOrder,
}

impl From<ShapeArg> for ShapePolicy {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::SplitTable => ShapePolicy::SplitTable,
            ShapeArg::InsertionOrder => ShapePolicy::InsertionOrder,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum WeightsArg {
    Recompute,
    Incremental,
}

impl From<WeightsArg> for WeightMode {
    fn from(arg: WeightsArg) -> Self {
        match arg {
            WeightsArg::Recompute => WeightMode::Recompute,
            WeightsArg::Incremental => WeightMode::Incremental,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            input,
            shape,
            weights,
        } => run_solve(&input, shape.into(), weights.into())?,
        Commands::Query { input, keys } => run_query(&input, &keys)?,
    }

    Ok(())
}

fn run_solve(input: &Path, shape: ShapePolicy, weights: WeightMode) -> Result<()> {
    let config = BuildConfig::default()
        .with_shape(shape)
        .with_weight_mode(weights);
    let mut tree = load_tree(input)?.with_config(config);
    let report = tree.build_report();

    let preorder: Vec<String> = tree.tree().preorder().iter().map(|k| k.to_string()).collect();
    println!("cost\t{:.6}", report.cost);
    match tree.tree().root_key() {
        Some(root) => println!("root\t{root}"),
        None => println!("root\t-"),
    }
    println!("preorder\t{}", preorder.join(" "));
    println!("height\t{}", tree.tree().height());
    println!("fingerprint\t{}", report.fingerprint.to_hex());

    Ok(())
}

fn run_query(input: &Path, keys: &[i64]) -> Result<()> {
    let mut tree = load_tree(input)?;
    tree.build();
    let reference = RankIndex::from_keys(tree.keys().iter().copied());

    for key in keys {
        let found = tree.search(key).is_ok();
        let depth = tree
            .depth(key)
            .map_or_else(|_| "-".to_string(), |d| d.to_string());
        let rank = reference
            .rank(key)
            .map_or_else(|| "-".to_string(), |r| r.to_string());

        if found != reference.search(key).is_some() {
            bail!("membership of key {key} disagrees with the reference index");
        }
        println!("{key}\tfound={found}\tdepth={depth}\trank={rank}");
    }

    Ok(())
}

fn load_tree(path: &Path) -> Result<OptimalTree<i64>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input from {}", path.display()))?;
    parse_tree(&contents).with_context(|| format!("invalid input in {}", path.display()))
}

/// Labelled lines `p: ...`, `q: ...`, `keys: ...`; `#` starts a comment.
/// `p` and `keys` may be omitted for an empty key set.
fn parse_tree(contents: &str) -> Result<OptimalTree<i64>> {
    let mut p: Vec<f64> = Vec::new();
    let mut q: Option<Vec<f64>> = None;
    let mut keys: Vec<i64> = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_no = idx + 1;
        let (label, values) = line
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("missing label on line {line_no}"))?;

        match label.trim() {
            "p" => p = parse_fields(values, line_no)?,
            "q" => q = Some(parse_fields(values, line_no)?),
            "keys" => keys = parse_fields(values, line_no)?,
            other => bail!("unknown label '{other}' on line {line_no}"),
        }
    }

    let q = q.ok_or_else(|| anyhow::anyhow!("no gap weights ('q:' line)"))?;
    Ok(OptimalTree::new(p, q, keys)?)
}

fn parse_fields<T>(text: &str, line_no: usize) -> Result<Vec<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.split_whitespace()
        .map(|field| {
            field
                .parse()
                .with_context(|| format!("invalid value '{field}' on line {line_no}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use obst::{ObstError, WeightsError};

    #[test]
    fn parses_labelled_lines() {
        let input = "# knuth\np: 0.15 0.10 0.05 0.10 0.20\nq: 0.05 0.10 0.05 0.05 0.05 0.10\n\nkeys: 1 2 3 4 5\n";
        let mut tree = parse_tree(input).unwrap();
        assert_eq!(tree.keys(), &[1, 2, 3, 4, 5]);
        assert!((tree.build() - 2.75).abs() < 1e-9);
    }

    #[test]
    fn gap_line_alone_is_empty_tree() {
        let tree = parse_tree("q: 0.5\n").unwrap();
        assert!(tree.keys().is_empty());
        assert_eq!(tree.weights().gaps(), &[0.5]);
    }

    #[test]
    fn rejects_unknown_label() {
        let err = parse_tree("q: 0.5\nweights: 1\n").unwrap_err();
        assert_eq!(err.to_string(), "unknown label 'weights' on line 2");
    }

    #[test]
    fn rejects_missing_label_and_gap_line() {
        let err = parse_tree("0.5 0.5\n").unwrap_err();
        assert_eq!(err.to_string(), "missing label on line 1");

        let err = parse_tree("p: 0.5\nkeys: 1\n").unwrap_err();
        assert!(err.to_string().contains("no gap weights"));
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = parse_tree("p: 0.5 x\nq: 0.1 0.1 0.1\nkeys: 1 2\n").unwrap_err();
        assert_eq!(err.to_string(), "invalid value 'x' on line 1");

        let err = parse_fields::<i64>("3 4.5", 7).unwrap_err();
        assert_eq!(err.to_string(), "invalid value '4.5' on line 7");
    }

    #[test]
    fn validation_errors_pass_through() {
        let err = parse_tree("p: 0.5\nq: 0.1\nkeys: 1\n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ObstError>(),
            Some(&ObstError::Weights(WeightsError::LengthMismatch { keys: 1, gaps: 1 }))
        );
    }
}
