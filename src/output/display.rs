//! Display functions for command results

use super::formatters::{
    EMPTY_CELL, clue_label, clues_for, create_progress_bar, difficulty_badge, direction_heading,
};
use crate::commands::BenchmarkResult;
use crate::core::Direction;
use crate::layout::{GRID_SIZE, LayoutResult, UnplacedReason};
use crate::wordlists::WordList;
use colored::Colorize;

/// Print the grid, the clue lists and any words left out
pub fn print_layout(result: &LayoutResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "CROSSWORD".bright_cyan().bold(),
        format!("({} words)", result.placed_words.len()).bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());
    println!();

    for row in result.grid.rows() {
        let mut line = String::from("   ");
        for cell in row {
            let text = match (cell.letter, cell.number) {
                (Some(letter), Some(_)) => letter.to_string().bright_yellow().bold().to_string(),
                (Some(letter), None) => letter.to_string().bold().to_string(),
                (None, _) => EMPTY_CELL.to_string().bright_black().to_string(),
            };
            line.push_str(&text);
            line.push(' ');
        }
        println!("{}", line.trim_end());
    }

    print_clues(result);

    if !result.unplaced.is_empty() {
        println!("\n⚠️  {}", "Not placed:".yellow().bold());
        for word in &result.unplaced {
            let reason = match word.reason {
                UnplacedReason::TooLong => format!("longer than {GRID_SIZE} letters"),
                UnplacedReason::NoFit => "no legal position".to_string(),
                UnplacedReason::OverCap => "beyond the word limit".to_string(),
            };
            println!("   {} ({})", word.text, reason.bright_black());
        }
    }
}

fn print_clues(result: &LayoutResult) {
    for direction in [Direction::Horizontal, Direction::Vertical] {
        println!("\n{}", direction_heading(direction).bright_cyan().bold());
        let clues = clues_for(&result.placed_words, direction);
        if clues.is_empty() {
            println!("   {}", "(none)".bright_black());
        }
        for word in clues {
            println!(
                "   {} {} {}",
                format!("{:>2}.", clue_label(word, &result.grid)).bright_yellow(),
                word.clue,
                format!("({})", word.len()).bright_black()
            );
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Placement:".bright_cyan().bold());
    println!("   Layouts generated: {}", result.runs);
    println!("   Input words:       {}", result.input_words);
    println!(
        "   Average placed:    {}",
        format!("{:.2}", result.average_placed)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:         {}",
        format!("{}", result.max_placed).green()
    );
    println!(
        "   Worst case:        {}",
        format!("{}", result.min_placed).yellow()
    );
    println!("   Complete layouts:  {}", result.complete_layouts);

    let cells = (GRID_SIZE * GRID_SIZE) as f64;
    println!(
        "   Grid fill:         [{}] {:.1}/{cells:.0} cells",
        create_progress_bar(result.average_filled_cells, cells, 20).green(),
        result.average_filled_cells
    );

    println!("\n🚫 {}", "Dropped words (all runs):".bright_cyan().bold());
    println!("   Too long:          {}", result.too_long);
    println!("   No legal position: {}", result.no_fit);
    println!("   Beyond word limit: {}", result.over_cap);

    println!("\n⏱️  {}", "Timing:".bright_cyan().bold());
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Layouts/second:    {:.1}", result.layouts_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&placed, &count) in &result.distribution {
        let pct = (count as f64 / result.runs.max(1) as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {placed:>2}: {bar} {count:4} ({pct:5.1}%)");
    }
}

/// Print every entry of a word list
pub fn print_word_list(list: &WordList) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        " {} {}",
        "WORD LIST".bright_cyan().bold(),
        format!("({} words)", list.len()).bright_yellow()
    );
    println!("{}", "─".repeat(60).cyan());

    if list.is_empty() {
        println!("   {}", "No words yet. Add one with `crossword words add`.".bright_black());
        return;
    }

    for entry in list.entries() {
        println!(
            "   {} {:<15} {} {}",
            difficulty_badge(entry.difficulty),
            entry.text.bold(),
            entry.clue,
            format!("[{}]", entry.id).bright_black()
        );
    }
}
