//! Step throughput benchmark: serial vs parallel strategy

use std::time::Instant;

use life_engine::{Engine, FrameTrigger, LifeResult, NullRenderer, Pattern, PatternCatalog, StepStrategy};
use rand::{SeedableRng, rngs::StdRng};

/// Average milliseconds per generation for `pattern` under `strategy`
fn benchmark_pattern(
    catalog: &PatternCatalog,
    pattern: &str,
    strategy: StepStrategy,
    iterations: u32,
) -> LifeResult<f64> {
    let mut engine = Engine::new(catalog.clone(), NullRenderer, FrameTrigger::new());
    engine.set_strategy(strategy);
    engine.start(pattern, 0)?;

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step()?;
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> LifeResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut catalog = PatternCatalog::builtin();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let sizes = [100, 250, 500, 1000];
    for size in sizes {
        catalog.register(Pattern::random(format!("soup{size}"), size, size, 0.3, &mut rng)?);
    }

    println!("=== Step Benchmark ===\n");
    println!("{:>12} {:>10} {:>12} {:>12} {:>10}", "Pattern", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<60}", "");

    let keys: Vec<String> = catalog.names().map(str::to_owned).collect();
    for key in keys {
        let pattern = catalog.lookup(&key)?;
        let size = format!("{}x{}", pattern.height(), pattern.width());
        let iterations = if pattern.height() * pattern.width() > 100_000 { 10 } else { 100 };

        let serial_ms = benchmark_pattern(&catalog, &key, StepStrategy::Serial, iterations)?;
        let parallel_ms = benchmark_pattern(&catalog, &key, StepStrategy::Parallel, iterations)?;

        println!(
            "{:>12} {:>10} {:>10.3}ms {:>10.3}ms {:>9.1}x",
            key,
            size,
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    Ok(())
}
