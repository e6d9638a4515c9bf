//! Basic reductions over a vector of readings

use shard_reduce::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Reading {
    sensor: &'static str,
    celsius: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Basic Reduce Example ===\n");

    let readings: Vec<Reading> = (0..1_000)
        .map(|i| Reading {
            sensor: if i % 3 == 0 { "north" } else { "south" },
            celsius: ((i * 37) % 101) as f64 / 2.0 - 10.0,
        })
        .collect();

    let workers = default_workers();
    println!("Using {} workers over {} readings\n", workers, readings.len());

    let by_temp = |a: &Reading, b: &Reading| a.celsius.total_cmp(&b.celsius);

    let hottest = maximum(&readings, workers, by_temp)?;
    let coldest = minimum(&readings, workers, by_temp)?;
    println!("Hottest: {:?}", hottest);
    println!("Coldest: {:?}", coldest);

    let all_above_freezing = all(&readings, workers, |r| r.celsius > 0.0)?;
    let any_north_hot = any(&readings, workers, |r| r.sensor == "north" && r.celsius > 35.0)?;
    println!("All above freezing: {}", all_above_freezing);
    println!("Any hot north reading: {}", any_north_hot);

    // Custom shard/global pair: mean temperature
    let (sum, count) = reduce(
        &readings,
        workers,
        |shard| (shard.iter().map(|r| r.celsius).sum::<f64>(), shard.len()),
        |parts| {
            parts
                .into_iter()
                .fold((0.0, 0), |(sum, count), (s, c)| (sum + s, count + c))
        },
    )?;
    println!("Mean: {:.2}", sum / count as f64);

    Ok(())
}
