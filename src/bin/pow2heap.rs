use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use power_of_two_heap::{PowerOfTwoHeap, MAX_BRANCHING_EXPONENT};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "pow2heap",
    about = "Push integers through a d-ary max-heap and print them in extraction order"
)]
struct Cli {
    /// Branching exponent k; every node has 2^k children.
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    exponent: i32,
    /// Print the heap-array layout after all values are inserted.
    #[arg(long)]
    snapshot: bool,
    /// Values to insert. Read whitespace-separated from stdin when omitted.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let values = if cli.values.is_empty() {
        read_values(io::stdin().lock()).context("failed to read values from stdin")?
    } else {
        cli.values
    };

    let mut heap = build_heap(cli.exponent, values)?;

    let stdout = io::stdout();
    let popped = write_extraction(&mut heap, cli.snapshot, stdout.lock())?;
    debug!(popped, "heap drained");

    Ok(())
}

/// Builds a heap of the given arity holding every value
fn build_heap(exponent: i32, values: Vec<i64>) -> Result<PowerOfTwoHeap<i64>> {
    let mut heap: PowerOfTwoHeap<i64> =
        PowerOfTwoHeap::with_capacity(exponent, values.len()).with_context(|| {
            format!("cannot build heap (exponent must be within 0..={MAX_BRANCHING_EXPONENT})")
        })?;
    info!(
        exponent,
        num_children = heap.num_children(),
        count = values.len(),
        "building heap"
    );

    heap.extend(values);
    debug!(len = heap.len(), "inserted all values");
    Ok(heap)
}

/// Writes the optional heap layout line, then drains the heap one value per
/// line. Returns the number of values popped.
fn write_extraction(
    heap: &mut PowerOfTwoHeap<i64>,
    snapshot: bool,
    mut out: impl Write,
) -> Result<usize> {
    if snapshot {
        let layout: Vec<String> = heap.snapshot().iter().map(i64::to_string).collect();
        writeln!(out, "{}", layout.join(" "))?;
    }

    let mut popped = 0usize;
    while !heap.is_empty() {
        let value = heap.pop_max()?;
        writeln!(out, "{value}")?;
        popped += 1;
    }
    out.flush()?;
    Ok(popped)
}

fn read_values(reader: impl BufRead) -> Result<Vec<i64>> {
    let mut values = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let value = token
                .parse::<i64>()
                .with_context(|| format!("invalid integer {token:?} on line {}", idx + 1))?;
            values.push(value);
        }
    }
    Ok(values)
}
