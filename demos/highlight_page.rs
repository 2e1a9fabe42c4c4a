use tracing_subscriber::EnvFilter;
use vocabmark_rs::{Config, Matcher};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(json) => match Config::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(2);
            }
        },
        None => Config::default(),
    };

    let page = "The children were running home. She ran faster than the other runners, \
                then stopped to study the happiest cats she had ever seen.";
    let matcher = Matcher::from_config(&config);
    let index = matcher.index(["run", "stop", "study", "happy", "cat", "child"]);

    println!("options: {:?}", matcher.options());
    for token in index.highlight(page) {
        println!("{:>4}..{:<4} {:<10} {:?}", token.start, token.end, token.text, index.explain(&token.text));
    }
}
