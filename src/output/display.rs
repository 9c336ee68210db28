//! Display functions for session results

use super::formatters::{filled_cells, percentage};
use crate::commands::{BenchmarkResult, SessionStatistics};
use colored::Colorize;

const BAR_WIDTH: usize = 40;

/// Print win/loss totals and the distribution of winning guess counts
pub fn print_session_statistics(statistics: &SessionStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SESSION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let total = statistics.total_games();
    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {total}");
    println!(
        "   Won:              {}",
        format!("{} ({:.1}%)", statistics.wins(), statistics.win_rate() * 100.0).green()
    );
    println!(
        "   Lost:             {}",
        format!("{}", statistics.losses()).red()
    );
    match statistics.average_guesses_to_win() {
        Some(average) => println!(
            "   Average guesses:  {}",
            format!("{average:.2}").bright_yellow().bold()
        ),
        None => println!("   Average guesses:  -"),
    }

    let distribution = statistics.guess_distribution();
    if distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guess_count, count) in distribution {
        let pct = percentage(count, total);
        let filled = filled_cells(pct, 100.0, BAR_WIDTH);
        let bar = format!(
            "{}{}",
            "█".repeat(filled).green(),
            "░".repeat(BAR_WIDTH - filled).bright_black()
        );
        println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    print_session_statistics(&result.statistics);

    println!("\n⏱  {}", "Timing:".bright_cyan().bold());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);
}
