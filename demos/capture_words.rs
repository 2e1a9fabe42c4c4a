use tracing_subscriber::EnvFilter;
use vocabmark_rs::{Language, Lemmatizer};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let lemmatizer = Lemmatizer::new(Language::English);
    let selections = vec!["Studying", "watches", "stopped", "children", "was", "don't", " "];

    println!("=== Capturing selections ===");
    for selection in selections {
        match lemmatizer.capture(selection) {
            Ok(capture) => println!("{:>10}: stored {}", selection, capture),
            Err(e) => println!("{:>10}: rejected ({})", selection, e),
        }
    }
}
