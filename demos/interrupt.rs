//! Cancelling a slow reduction from another thread

use shard_reduce::prelude::*;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Interrupt Example ===\n");

    let (handle, signal) = interrupt::pair();
    let reducer = Reducer::new(
        ReduceConfig::new()
            .with_worker_config(WorkerConfig::new().with_thread_name("slow"))
            .with_interrupt(signal),
    );

    let values: Vec<u32> = (0..16).collect();

    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(100));
        println!("Interrupting...");
        handle.interrupt();
    });

    let result = reducer.all(&values, 4, |x| {
        thread::sleep(Duration::from_millis(50));
        *x < 100
    });

    if canceller.join().is_err() {
        eprintln!("Canceller thread panicked");
    }

    match result {
        Ok(all) => println!("Finished before the interrupt: {}", all),
        Err(Error::Interrupted) => println!("Reduction was interrupted"),
        Err(e) => eprintln!("Reduction failed: {}", e),
    }
}
