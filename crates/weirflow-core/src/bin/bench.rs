/// Benchmarks for Ce lookup and the discharge models.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for head
/// generation, and std::hint::black_box to prevent dead-code elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use weirflow_core::coefficient::ce_part_vnotch;
use weirflow_core::discharge::{HollyComposite, PhilComposite, SamComposite};
use weirflow_core::traits::StageDischarge;
use weirflow_core::vectorized;
use weirflow_core::UnitSystem;

const REPEATS: usize = 7;

/// Heads in [0, 3) ft and approach widths in [1, 10) ft.
fn make_data(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut state = seed;
    let mut next_f64 = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    let heads: Vec<f64> = (0..n).map(|_| next_f64() * 3.0).collect();
    let widths: Vec<f64> = (0..n).map(|_| 1.0 + next_f64() * 9.0).collect();
    (heads, widths)
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_coefficient(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();
    for &n in sizes {
        let (heads, widths) = make_data(n, 42);
        let dur = median_time(|| {
            let ce: f64 = heads
                .iter()
                .zip(&widths)
                .map(|(&h, &b)| ce_part_vnotch(h, 1.0, b))
                .filter(|c| !c.is_nan())
                .sum();
            black_box(ce);
        });
        results.push(("ce_part_vnotch", n, dur));
    }
    results
}

fn bench_broadcast(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();
    for &n in sizes {
        let (heads, widths) = make_data(n, 7);
        let dur = median_time(|| {
            black_box(vectorized::q_kindsvater_shen(90.0, &heads, 1.0, &widths).ok());
        });
        results.push(("q_kindsvater_shen[]", n, dur));
    }
    results
}

fn bench_models(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let models: [(&'static str, Box<dyn StageDischarge>); 3] = [
        ("phil", Box::new(PhilComposite::new(1.0, 2.5, 3.33, 4.0))),
        (
            "sam",
            Box::new(SamComposite::new(2.5, 1.0, 4.0, 90.0, UnitSystem::Imperial, 4.0)),
        ),
        ("holly", Box::new(HollyComposite::new(2.5, 1.0, 4.0, 90.0))),
    ];
    let mut results = Vec::new();
    for (name, model) in &models {
        for &n in sizes {
            let (heads, _) = make_data(n, 1234);
            black_box(model.rating(&heads));
            let dur = median_time(|| {
                black_box(model.rating(&heads));
            });
            results.push((*name, n, dur));
        }
    }
    results
}

fn main() {
    let sizes = [1_000, 10_000, 100_000];

    let mut all = Vec::new();
    all.extend(bench_coefficient(&sizes));
    all.extend(bench_broadcast(&sizes));
    all.extend(bench_models(&sizes));

    println!("{:<22} {:>10} {:>14} {:>12}", "function", "n", "median", "ns/eval");
    println!("{}", "-".repeat(62));
    for (name, n, dur) in all {
        println!(
            "{:<22} {:>10} {:>14.3?} {:>12.1}",
            name,
            n,
            dur,
            dur.as_nanos() as f64 / n as f64
        );
    }
}
