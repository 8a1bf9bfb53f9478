//! `avl-timing` — time bulk insertion into an AVL tree, then run the
//! built-in self-check battery.
//!
//! Usage:
//!   avl-timing [count]
//!
//! Without `count` the element count is read from stdin. Counts below 2
//! are rejected with exit status 1. `AVL_SEED` (u64)
//! makes the random workload reproducible; `AVL_LOG` sets the log filter.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use avl_tree::cli::{parse_count, CliError, TimingReport};
use avl_tree::{AvlError, AvlTree, Fuzzer};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const TEST_DATA: [i64; 11] = [8, 9, 10, 2, 1, 5, 3, 6, 4, 7, 11];
const DELETE_ORDER: [i64; 11] = [4, 5, 8, 9, 10, 2, 1, 3, 6, 7, 11];
const PRE_ORDER: [i64; 11] = [5, 3, 2, 1, 4, 8, 6, 7, 10, 9, 11];
const POST_ORDER: [i64; 11] = [1, 2, 4, 3, 7, 6, 9, 11, 10, 8, 5];
const BREADTH_FIRST: [i64; 11] = [5, 3, 8, 2, 4, 6, 10, 1, 7, 9, 11];
const HEIGHT: usize = 4;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("AVL_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let count = match read_count() {
        Ok(n) => n,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut fuzzer = match std::env::var("AVL_SEED") {
        Ok(raw) => match raw.parse::<u64>() {
            Ok(seed) => Fuzzer::from_u64(seed),
            Err(_) => {
                eprintln!("AVL_SEED must be an unsigned integer, got {raw:?}");
                std::process::exit(1);
            }
        },
        Err(_) => Fuzzer::new(None),
    };

    let values = fuzzer.ints(count, 0, i64::from(i32::MAX));
    let start = Instant::now();
    let mut tree = AvlTree::new();
    for v in values {
        tree.insert(v);
    }
    let report = TimingReport::new(count, start.elapsed(), &tree);
    println!("{report}");
    debug!(nodes = tree.len(), "timing run finished");

    let mut failed = 0;
    for (name, check) in CHECKS {
        let ok = check();
        println!("{name}: {}", if ok { "PASSED" } else { "FAILED" });
        if !ok {
            warn!(check = name, "self-check failed");
            failed += 1;
        }
    }
    if failed > 0 {
        std::process::exit(1);
    }
}

fn read_count() -> Result<usize, CliError> {
    let raw = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            println!("Please enter an integer number of how many elements to add to the tree...");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        }
    };
    parse_count(&raw)
}

fn sample_tree() -> AvlTree<i64> {
    TEST_DATA.into_iter().collect()
}

fn in_order(tree: &AvlTree<i64>) -> Vec<i64> {
    let mut out = Vec::new();
    tree.in_order(|v| out.push(*v));
    out
}

fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

type Check = fn() -> bool;

const CHECKS: [(&str, Check); 17] = [
    ("default_ctor", check_default_ctor),
    ("copy_ctor", check_copy_ctor),
    ("op_eql", check_op_eql),
    ("insert", check_insert),
    ("delete", check_delete),
    ("delete_empty", check_delete_empty),
    ("purge", check_purge),
    ("height", check_height),
    ("height_empty", check_height_empty),
    ("in_order", check_in_order),
    ("in_order_empty", check_in_order_empty),
    ("pre_order", check_pre_order),
    ("pre_order_empty", check_pre_order_empty),
    ("post_order", check_post_order),
    ("post_order_empty", check_post_order_empty),
    ("breadth_first", check_breadth_first),
    ("breadth_first_empty", check_breadth_first_empty),
];

fn check_default_ctor() -> bool {
    let tree = AvlTree::<i64>::new();
    tree.is_empty() && tree.height() == Err(AvlError::EmptyTree)
}

fn check_copy_ctor() -> bool {
    let source = sample_tree();
    let mut copy = source.clone();
    let mut ok = copy.pre_order_iter().eq(PRE_ORDER.iter());
    for v in &DELETE_ORDER {
        ok &= copy.delete(v).is_ok() && is_sorted(&in_order(&copy));
    }
    ok && copy.is_empty() && source.pre_order_iter().eq(PRE_ORDER.iter())
}

fn check_op_eql() -> bool {
    let source = sample_tree();
    let mut dest: AvlTree<i64> = [100, 200, 300].into_iter().collect();
    dest.clone_from(&source);
    let mut ok = !dest.contains(&100) && dest.pre_order_iter().eq(PRE_ORDER.iter());
    for v in &DELETE_ORDER {
        ok &= dest.delete(v).is_ok() && is_sorted(&in_order(&dest));
    }
    ok && source.len() == TEST_DATA.len()
}

fn check_insert() -> bool {
    let tree = sample_tree();
    let values = in_order(&tree);
    values.len() == TEST_DATA.len() && is_sorted(&values) && tree.is_balanced()
}

fn check_delete() -> bool {
    let mut tree = sample_tree();
    let mut ok = true;
    for v in &DELETE_ORDER {
        ok &= tree.delete(v).is_ok() && tree.is_balanced() && is_sorted(&in_order(&tree));
    }
    ok && tree.is_empty()
}

fn check_delete_empty() -> bool {
    let mut tree = AvlTree::<i64>::new();
    if tree.delete(&42) != Err(AvlError::EmptyTree) {
        return false;
    }
    tree.extend(TEST_DATA);
    let results: Vec<_> = TEST_DATA.iter().chain([12].iter()).map(|v| tree.delete(v)).collect();
    results[..TEST_DATA.len()].iter().all(Result::is_ok)
        && results[TEST_DATA.len()] == Err(AvlError::EmptyTree)
}

fn check_purge() -> bool {
    let mut tree = sample_tree();
    tree.purge();
    tree.is_empty() && tree.height() == Err(AvlError::EmptyTree)
}

fn check_height() -> bool {
    sample_tree().height() == Ok(HEIGHT)
}

fn check_height_empty() -> bool {
    AvlTree::<i64>::new().height() == Err(AvlError::EmptyTree)
}

fn check_in_order() -> bool {
    let mut expected = TEST_DATA;
    expected.sort_unstable();
    in_order(&sample_tree()) == expected
}

fn check_in_order_empty() -> bool {
    let mut visited = 0;
    AvlTree::<i64>::new().in_order(|_| visited += 1);
    visited == 0
}

fn check_pre_order() -> bool {
    let mut out = Vec::new();
    sample_tree().pre_order(|v| out.push(*v));
    out == PRE_ORDER
}

fn check_pre_order_empty() -> bool {
    let mut visited = 0;
    AvlTree::<i64>::new().pre_order(|_| visited += 1);
    visited == 0
}

fn check_post_order() -> bool {
    let mut out = Vec::new();
    sample_tree().post_order(|v| out.push(*v));
    out == POST_ORDER
}

fn check_post_order_empty() -> bool {
    let mut visited = 0;
    AvlTree::<i64>::new().post_order(|_| visited += 1);
    visited == 0
}

fn check_breadth_first() -> bool {
    let mut out = Vec::new();
    sample_tree().breadth_first(|v| out.push(*v));
    out == BREADTH_FIRST
}

fn check_breadth_first_empty() -> bool {
    let mut visited = 0;
    AvlTree::<i64>::new().breadth_first(|_| visited += 1);
    visited == 0
}
