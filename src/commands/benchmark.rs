//! Benchmark command
//!
//! Generates many seeded layouts for the same word list and summarizes how
//! well the greedy placement does.

use crate::core::WordEntry;
use crate::layout::{LayoutConfig, LayoutEngine, UnplacedReason};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub runs: usize,
    /// Run `i` uses seed `base_seed + i`
    pub base_seed: u64,
    pub layout: LayoutConfig,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(runs: usize, base_seed: u64) -> Self {
        Self {
            runs,
            base_seed,
            layout: LayoutConfig::new(
                crate::layout::MAX_WORDS,
                crate::layout::RANDOM_ATTEMPTS,
                crate::layout::RANDOM_FALLBACK_LIMIT,
            ),
            show_progress: false,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub runs: usize,
    pub input_words: usize,
    pub average_placed: f64,
    pub min_placed: usize,
    pub max_placed: usize,
    /// Layouts in which every input word was placed
    pub complete_layouts: usize,
    /// Placed-word count -> number of runs
    pub distribution: BTreeMap<usize, usize>,
    pub average_filled_cells: f64,
    pub too_long: usize,
    pub no_fit: usize,
    pub over_cap: usize,
    pub duration: Duration,
    pub layouts_per_second: f64,
}

struct RunOutcome {
    placed: usize,
    filled: usize,
    complete: bool,
    too_long: usize,
    no_fit: usize,
    over_cap: usize,
}

/// Generate `config.runs` layouts in parallel and aggregate the outcomes
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
#[must_use]
pub fn run_benchmark(words: &[WordEntry], config: &BenchmarkConfig) -> BenchmarkResult {
    let engine = LayoutEngine::new(config.layout);
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.runs as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<RunOutcome> = (0..config.runs)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(config.base_seed.wrapping_add(i as u64));
            let result = engine.generate(words, &mut rng);
            let count = |reason: UnplacedReason| {
                result.unplaced.iter().filter(|u| u.reason == reason).count()
            };
            let outcome = RunOutcome {
                placed: result.placed_words.len(),
                filled: result.grid.filled_count(),
                complete: result.is_complete(),
                too_long: count(UnplacedReason::TooLong),
                no_fit: count(UnplacedReason::NoFit),
                over_cap: count(UnplacedReason::OverCap),
            };
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution = BTreeMap::new();
    for outcome in &outcomes {
        *distribution.entry(outcome.placed).or_insert(0) += 1;
    }

    let runs = outcomes.len();
    let average = |total: usize| {
        if runs == 0 {
            0.0
        } else {
            total as f64 / runs as f64
        }
    };

    BenchmarkResult {
        runs,
        input_words: words.len(),
        average_placed: average(outcomes.iter().map(|o| o.placed).sum()),
        min_placed: outcomes.iter().map(|o| o.placed).min().unwrap_or(0),
        max_placed: outcomes.iter().map(|o| o.placed).max().unwrap_or(0),
        complete_layouts: outcomes.iter().filter(|o| o.complete).count(),
        distribution,
        average_filled_cells: average(outcomes.iter().map(|o| o.filled).sum()),
        too_long: outcomes.iter().map(|o| o.too_long).sum(),
        no_fit: outcomes.iter().map(|o| o.no_fit).sum(),
        over_cap: outcomes.iter().map(|o| o.over_cap).sum(),
        duration,
        layouts_per_second: if duration.as_secs_f64() > 0.0 {
            runs as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordList;

    #[test]
    fn benchmark_runs() {
        let words = WordList::defaults();
        let result = run_benchmark(words.entries(), &BenchmarkConfig::new(20, 0));

        assert_eq!(result.runs, 20);
        assert_eq!(result.input_words, words.len());
        assert!(result.min_placed >= 1);
        assert!(result.max_placed <= 8);
        assert!(result.average_placed >= result.min_placed as f64);
        assert!(result.average_placed <= result.max_placed as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let words = WordList::defaults();
        let result = run_benchmark(words.entries(), &BenchmarkConfig::new(15, 3));

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.runs);
    }

    #[test]
    fn benchmark_counts_over_cap_words() {
        // Ten default words, eight considered: two are never attempted per run
        let words = WordList::defaults();
        let result = run_benchmark(words.entries(), &BenchmarkConfig::new(4, 0));

        assert_eq!(result.over_cap, 2 * 4);
        assert_eq!(result.complete_layouts, 0);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let words = WordList::defaults();
        let a = run_benchmark(words.entries(), &BenchmarkConfig::new(10, 11));
        let b = run_benchmark(words.entries(), &BenchmarkConfig::new(10, 11));

        assert_eq!(a.distribution, b.distribution);
        assert_eq!(a.no_fit, b.no_fit);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let result = run_benchmark(&[], &BenchmarkConfig::new(5, 0));

        assert_eq!(result.runs, 5);
        assert_eq!(result.max_placed, 0);
        assert_eq!(result.complete_layouts, 5);
    }

    #[test]
    fn benchmark_zero_runs() {
        let words = WordList::defaults();
        let result = run_benchmark(words.entries(), &BenchmarkConfig::new(0, 0));

        assert_eq!(result.runs, 0);
        assert!(result.average_placed.abs() < f64::EPSILON);
    }
}
