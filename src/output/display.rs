//! Display functions for command results

use super::formatters::{colored_tier, create_progress_bar, format_confusable, format_duration};
use crate::commands::AnalysisResult;
use crate::confusion::ConfusionKind;
use crate::pipeline::PipelineOutput;
use crate::scoring::hardest;
use crate::tiers::Tier;
use crate::wordlists::FilterReport;
use colored::Colorize;
use std::path::Path;

/// Print the summary of a build run
pub fn print_build_summary(output: &PipelineOutput, destination: Option<&Path>) {
    let d = &output.diagnostics;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LEXIGLYPH BUILD".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📥 {}", "Input:".bright_cyan().bold());
    println!("   Tokens read:      {}", d.tokens_read);
    println!("   Skipped:          {}", d.skipped.to_string().yellow());
    println!("   Blocklisted:      {}", d.filtered.to_string().yellow());
    println!(
        "   Vocabulary:       {}",
        d.vocabulary.to_string().bright_yellow().bold()
    );
    if let Some((word, score)) = hardest(output.registry.all_words(), &output.scores) {
        println!("   Most complex:     {} ({score:.2})", word.text().bright_yellow());
    }

    println!("\n🔀 {}", "Confusion pairs:".bright_cyan().bold());
    for kind in ConfusionKind::ALL {
        println!("   {:<17} {}", format!("{kind}:"), d.pairs_of(kind));
    }
    println!(
        "   Compared:         {} ({} rejected, {} collapsed)",
        d.detection.compared, d.detection.rejected, d.detection.collapsed
    );

    println!("\n📈 {}", "Tiers:".bright_cyan().bold());
    let tier_count = output.tier_count();
    for (index, &size) in d.tier_sizes.iter().enumerate() {
        let Some(tier) = Tier::from_index(index) else {
            continue;
        };
        let pct = if d.vocabulary == 0 {
            0.0
        } else {
            size as f64 / d.vocabulary as f64 * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 30);
        println!(
            "   {:<8} {} {size:6} ({pct:5.1}%)",
            colored_tier(tier, tier_count),
            bar.green()
        );
    }

    println!();
    println!("   Time taken:       {}", format_duration(d.elapsed));
    match destination {
        Some(path) => println!(
            "{}",
            format!("✅ Wrote {}", path.display()).green().bold()
        ),
        None => println!("{}", "✅ Done".green().bold()),
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let b = &result.breakdown;
    let w = &result.weights;
    println!("\n🧮 {}", "Complexity:".bright_cyan().bold());
    println!("   Length:      {:6.3} × {:.2}", b.length, w.length);
    println!("   Rarity:      {:6.3} × {:.2}", b.rarity, w.rarity);
    println!(
        "   Structure:   {:6.3} × {:.2}  ({} repeated, {} consonant links, {} glyph points)",
        b.structure, w.structure, b.repeated_letters, b.consonant_links, b.glyph_points
    );
    println!(
        "   Score:       {}",
        format!("{:.3}", result.score).bright_yellow()
    );
    println!(
        "   Adjusted:    {}",
        format!("{:.3}", result.adjusted_score).bright_yellow().bold()
    );

    println!(
        "\n🎯 Tier {} of {}: {}  (rank {} of {})",
        result.tier,
        result.tier_count,
        colored_tier(result.tier, result.tier_count).bold(),
        result.rank,
        result.vocabulary
    );

    if result.confused_with.is_empty() {
        println!("\n🔀 No confusable words");
    } else {
        println!("\n🔀 {}", "Confusable with:".bright_cyan().bold());
        for confusable in &result.confused_with {
            println!("   {}", format_confusable(confusable));
        }
    }
}

/// Print the counts from cleaning a word file
pub fn print_filter_report(report: &FilterReport, input: &Path, output: &Path) {
    println!("\n{}", "Filtering complete.".green().bold());
    println!("   Words read from {}: {}", input.display(), report.read);
    println!(
        "   Blocked words filtered out: {}",
        report.filtered.to_string().yellow()
    );
    println!(
        "   Clean words written to {}: {}",
        output.display(),
        report.written.to_string().bright_yellow()
    );
}
