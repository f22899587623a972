//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::capability::{LinkifyUrlDetector, UnicodeEmojiTable, VaderPolarityScorer};
use chatlens::cli::{Args, ReportFormat};
use chatlens::report::{AnalysisReport, Capabilities};
use chatlens::stopwords::StopWords;
use chatlens::{ChatlensError, SenderFilter, TranscriptParser};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    println!("💬 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("👤 User:    {}", args.user);
    println!("📄 Format:  {}", args.format);
    println!();

    // Step 1: Parse the transcript
    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let parser = TranscriptParser::new();
    let records = parser.parse(Path::new(&args.input))?;

    if records.is_empty() {
        // Zero boundaries means this is not a supported export; one clear
        // failure beats a garbled all-zero report
        return Err(ChatlensError::invalid_format(
            "no timestamp boundaries matched — the file is not a supported \
             chat export (expected [D/M/YY, H:MM:SS AM|PM] entries)",
        ));
    }

    println!(
        "   Found {} messages ({:.2}s)",
        records.len(),
        parse_start.elapsed().as_secs_f64()
    );

    if let Some((first, last)) = records.time_span() {
        println!("   Range: {} — {}", first.format("%Y-%m-%d"), last.format("%Y-%m-%d"));
    }

    if args.list_senders {
        println!();
        println!("👥 Senders:");
        for sender in records.senders() {
            println!("   {sender}");
        }
        return Ok(());
    }

    // Step 2: Load stop words (missing file silently falls back)
    let stop_words = StopWords::load(args.stopwords.as_deref().map(Path::new));

    // Step 3: Run every aggregation
    println!("📊 Analyzing...");
    let analyze_start = Instant::now();

    let urls = LinkifyUrlDetector;
    let emoji = UnicodeEmojiTable;
    let sentiment = VaderPolarityScorer::new();
    let capabilities = Capabilities {
        urls: &urls,
        emoji: &emoji,
        sentiment: &sentiment,
    };

    let filter = SenderFilter::parse(&args.user);
    let report = AnalysisReport::build(&records, &filter, &stop_words, &capabilities);
    println!("   Done ({:.2}s)", analyze_start.elapsed().as_secs_f64());
    println!();

    // Step 4: Render
    let rendered = match args.format {
        ReportFormat::Text => render_text(&report),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(&report)
                .map_err(|e| ChatlensError::invalid_format(e.to_string()))?;
            json.push('\n');
            json
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            println!("✅ Report saved to {path}");
        }
        None => print!("{rendered}"),
    }

    if args.output.is_some() {
        println!();
        println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());
    }

    Ok(())
}

/// Renders the sectioned terminal report.
fn render_text(report: &AnalysisReport) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(out, "📊 Top Statistics — {}", report.filter);
    let _ = writeln!(out, "   Messages: {}", report.stats.messages);
    let _ = writeln!(out, "   Words:    {}", report.stats.words);
    let _ = writeln!(out, "   Media:    {}", report.stats.media);
    let _ = writeln!(out, "   Links:    {}", report.stats.links);

    let _ = writeln!(out, "\n👥 Busiest Senders");
    for share in &report.busiest_senders {
        let _ = writeln!(
            out,
            "   {:<24} {:>6} ({:.2}%)",
            share.name, share.messages, share.percent
        );
    }

    let _ = writeln!(out, "\n📈 Monthly Timeline");
    for point in &report.monthly_timeline {
        let _ = writeln!(out, "   {:<16} {:>6}", point.label, point.messages);
    }

    let _ = writeln!(out, "\n🗓️  Most Active Days");
    for count in &report.weekday_activity {
        let _ = writeln!(out, "   {:<12} {:>6}", count.label, count.messages);
    }

    let _ = writeln!(out, "\n🗓️  Most Active Months");
    for count in &report.month_activity {
        let _ = writeln!(out, "   {:<12} {:>6}", count.label, count.messages);
    }

    if !report.heatmap.is_empty() {
        let _ = writeln!(out, "\n🔥 Activity Heatmap (day × hour)");
        let _ = write!(out, "   {:<12}", "");
        for column in &report.heatmap.columns {
            let _ = write!(out, "{:>7}", column);
        }
        let _ = writeln!(out);
        for (row, counts) in report.heatmap.rows.iter().zip(&report.heatmap.counts) {
            let _ = write!(out, "   {:<12}", row);
            for count in counts {
                let _ = write!(out, "{:>7}", count);
            }
            let _ = writeln!(out);
        }
    }

    let _ = writeln!(out, "\n💬 Most Common Words");
    for word in &report.top_words {
        let _ = writeln!(out, "   {:<20} {:>6}", word.word, word.count);
    }

    if report.emoji.is_empty() {
        let _ = writeln!(out, "\n😔 No emojis found");
    } else {
        let _ = writeln!(out, "\n😊 Emoji Frequency");
        for emoji in &report.emoji {
            let _ = writeln!(out, "   {:<4} {:>6}", emoji.emoji, emoji.count);
        }
    }

    let _ = writeln!(out, "\n🎭 Sentiment");
    if report.sentiment.is_empty() {
        let _ = writeln!(out, "   No messages eligible for analysis");
    } else {
        let _ = writeln!(
            out,
            "   Positive: {:>6} ({:.2}%)",
            report.sentiment.positive, report.sentiment.positive_pct
        );
        let _ = writeln!(
            out,
            "   Negative: {:>6} ({:.2}%)",
            report.sentiment.negative, report.sentiment.negative_pct
        );
        let _ = writeln!(
            out,
            "   Neutral:  {:>6} ({:.2}%)",
            report.sentiment.neutral, report.sentiment.neutral_pct
        );
        let _ = writeln!(out, "   Analyzed: {:>6}", report.sentiment.total());
    }

    out
}
