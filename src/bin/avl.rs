//! Replays a sequence of insertions and deletions against an AVL tree, logging every rotation and
//! printing the resulting tree.

use std::io::{self, Write};

use anyhow::Context;
use avl::{Logger, Observer, Rebalance, Tree};
use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

/// The classroom exercise the defaults replay.
const DEFAULT_INSERTS: [i64; 11] = [15, 27, 49, 10, 8, 67, 59, 9, 13, 20, 14];
const DEFAULT_DELETES: [i64; 4] = [9, 20, 27, 8];

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Options {
    /// Keys to insert, in order
    #[clap(
        short,
        long,
        value_delimiter = ',',
        num_args = 1..,
        allow_negative_numbers = true,
        default_values_t = DEFAULT_INSERTS
    )]
    insert: Vec<i64>,
    /// Keys to delete once every insert is done, in order
    #[clap(
        short,
        long,
        value_delimiter = ',',
        num_args = 0..,
        allow_negative_numbers = true,
        default_values_t = DEFAULT_DELETES
    )]
    delete: Vec<i64>,
    /// Traversal used to list the final keys
    #[clap(long, value_enum, env = "AVL_ORDER", default_value_t = Order::In)]
    order: Order,
    /// Print the tree in graphviz format after every rebalancing operation and at the end
    #[clap(long)]
    dot: bool,
    /// Enables verbose logging
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Order {
    /// Sorted order
    In,
    /// Every node before its subtrees
    Pre,
    /// Every node after its subtrees
    Post,
}

/// Logs events like [`Logger`] and counts them so we know when to draw the tree.
struct Counting {
    logger: Logger,
    rotations: usize,
}

impl Observer<i64> for Counting {
    fn observe(&mut self, event: Rebalance<&i64>) {
        self.rotations += 1;
        self.logger.observe(event);
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Options::parse();

    let level = match opts.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
    log::debug!("{opts:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut tree = Tree::new();
    let mut observer = Counting {
        logger: Logger::new(log::Level::Info),
        rotations: 0,
    };

    for &key in &opts.insert {
        log::debug!("inserting {key}");
        let before = observer.rotations;
        if !tree.insert_observed(key, &mut observer) {
            log::warn!("{key} is already in the tree, ignoring it");
        }
        tree.validate()
            .with_context(|| format!("tree invariants broken after inserting {key}"))?;
        log::trace!("height {} after inserting {key}", tree.height());

        if opts.dot && observer.rotations != before {
            write!(out, "{}", tree.dot())?;
        }
    }

    for &key in &opts.delete {
        log::debug!("deleting {key}");
        let before = observer.rotations;
        if !tree.delete_observed(&key, &mut observer) {
            log::warn!("{key} is not in the tree, ignoring it");
        }
        tree.validate()
            .with_context(|| format!("tree invariants broken after deleting {key}"))?;
        log::trace!("height {} after deleting {key}", tree.height());

        if opts.dot && observer.rotations != before {
            write!(out, "{}", tree.dot())?;
        }
    }

    log::info!(
        "{} keys, height {}, {} rotations",
        tree.len(),
        tree.height(),
        observer.rotations
    );

    let keys: Vec<String> = match opts.order {
        Order::In => tree.iter().map(i64::to_string).collect(),
        Order::Pre => tree.pre_order().map(i64::to_string).collect(),
        Order::Post => tree.post_order().map(i64::to_string).collect(),
    };
    writeln!(out, "{}", keys.join(" "))?;

    if opts.dot {
        write!(out, "{}", tree.dot())?;
    }
    Ok(())
}
