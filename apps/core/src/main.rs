// SentiBuddy V1 Backend Entry Point
// "The Brain" - Mood classification over two scoring engines

mod brain;
mod config;
mod engines;
mod error;
mod session;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, Write};

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use brain::{default_classifier, MoodClassifier, SentimentClass, SentimentReport};
use config::AppConfig;
use engines::{IntensityEngine, PolarityEngine};
use error::AppError;
use session::{SessionState, EXAMPLE_TEXTS};

/// Width of the mood meter bar
const METER_WIDTH: usize = 20;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = AppConfig::from_env()?;
    init_tracing(&config);

    info!("SentiBuddy brain starting up");
    run(&config)?;
    info!("SentiBuddy brain shutting down");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    // RUST_LOG wins over the configured default filter
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(config: &AppConfig) -> Result<(), AppError> {
    let classifier = default_classifier();
    let mut session = SessionState::new(config.history_limit);

    println!("🌟 Meet Your Sentiment Buddy");
    println!("Let's figure out how your text feels!");
    println!("Type something like \"I'm pumped about this!\" or \"Ugh, that sucked.\"");
    println!("Commands: :examples, :example N, :last, :last json, :quit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break; // EOF
        };
        let line = line?;
        let input = line.trim();

        match input {
            ":quit" | ":exit" => break,
            ":examples" => render_examples(),
            ":last" => match session.last() {
                Some(report) => render_card(report),
                None => println!("Nothing analyzed yet this session."),
            },
            ":last json" => match session.last() {
                Some(report) => println!("{}", serde_json::to_string_pretty(report)?),
                None => println!("Nothing analyzed yet this session."),
            },
            _ if input.starts_with(":example") => match pick_example(input) {
                Some(text) => {
                    println!("Trying: {}", text);
                    analyze_into(text, classifier, &mut session);
                }
                None => println!("Pick an example between 1 and {}.", EXAMPLE_TEXTS.len()),
            },
            _ => analyze_into(input, classifier, &mut session),
        }
    }

    Ok(())
}

/// The empty-input screen the classifier itself does not perform: blank
/// text never reaches it.
fn screen_input(text: &str) -> Result<&str, AppError> {
    if text.trim().is_empty() {
        Err(AppError::EmptyInput)
    } else {
        Ok(text)
    }
}

fn pick_example(input: &str) -> Option<&'static str> {
    input
        .strip_prefix(":example")
        .and_then(|rest| rest.trim().parse::<usize>().ok())
        .and_then(SessionState::example)
}

fn analyze_into<A, B>(text: &str, classifier: &MoodClassifier<A, B>, session: &mut SessionState)
where
    A: IntensityEngine,
    B: PolarityEngine,
{
    let text = match screen_input(text) {
        Ok(text) => text,
        Err(e) => {
            warn!("blank submission ignored");
            println!("⚠️  {}", e);
            return;
        }
    };

    match classifier.analyze(text) {
        Ok(report) => {
            render_card(&report);
            session.record(report);
        }
        Err(e) => {
            let e = AppError::from(e);
            error!("analysis failed: {}", e);
            eprintln!("Something went wrong: {}", e);
        }
    }
}

fn render_examples() {
    println!("Try these 👇");
    for (ix, text) in EXAMPLE_TEXTS.iter().enumerate() {
        println!("  {}. {}", ix + 1, text);
    }
}

fn render_card(report: &SentimentReport) {
    println!();
    println!("──────────── Sentiment Breakdown ────────────");
    println!("Your vibe: {} {}", report.mood.emoji(), report.mood.label());
    println!("Confidence score: {:.3} (from -1 to +1)", report.score);
    println!(
        "Positive 💚 {:.3}   Neutral 😐 {:.3}   Negative ❤️‍🔥 {:.3}",
        report.bundle.positive, report.bundle.neutral, report.bundle.negative
    );
    println!("Mood meter: {}", meter_bar(report.meter()));
    if report.has_keywords() {
        println!("Words impacting sentiment: {}", report.keywords.join(", "));
    } else {
        println!("No standout sentiment words detected.");
    }
    println!("{}", closing_line(report.sentiment_class));
    println!();
}

fn meter_bar(meter: f32) -> String {
    let filled = ((meter * METER_WIDTH as f32).round() as usize).min(METER_WIDTH);
    format!(
        "[{}{}] {:.0}%",
        "█".repeat(filled),
        "░".repeat(METER_WIDTH - filled),
        meter * 100.0
    )
}

fn closing_line(class: SentimentClass) -> &'static str {
    match class {
        SentimentClass::Positive => "Woo! That was some positive energy. Keep it up! 💪",
        SentimentClass::Negative => "Yikes, sounds rough. Want to talk about it? 🫂",
        SentimentClass::Neutral => "Totally balanced vibe. Not good, not bad. Just neutral 🧘",
    }
}
