use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use recipe_assistant::config::{load_config, load_config_from};
use recipe_assistant::{ChatAssistant, ChatError, Profile};

#[derive(Parser)]
#[command(
    name = "recipe-assistant",
    about = "Ask questions about your recommended recipes",
    version
)]
struct Cli {
    /// Message to answer. Starts an interactive chat when omitted
    message: Vec<String>,

    /// File holding the recommended recipes (Name:/Calories:/Protein lines)
    #[arg(short, long)]
    context: Option<PathBuf>,

    /// File holding the conversation so far
    #[arg(long)]
    history: Option<PathBuf>,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ask the configured AI provider first
    #[arg(long)]
    ai: bool,

    /// Rule set for quick responses: standard or lite
    #[arg(long)]
    profile: Option<Profile>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), ChatError> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    let use_ai = cli.ai || config.ai_enabled;

    let mut builder = ChatAssistant::builder().config(config);
    if let Some(profile) = cli.profile {
        builder = builder.profile(profile);
    }
    let assistant = builder.build()?;

    let context_text = read_optional(cli.context.as_ref())?;
    let mut history_text = read_optional(cli.history.as_ref())?;
    debug!(
        "Loaded {} context bytes and {} history bytes",
        context_text.len(),
        history_text.len()
    );

    if !cli.message.is_empty() {
        let message = cli.message.join(" ");
        let reply = assistant
            .answer(&message, &context_text, &history_text, use_ai)
            .await;
        println!("{}", reply);
        return Ok(());
    }

    println!("Ask me about your recipes. Type 'exit' to quit.");
    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if message == "exit" || message == "quit" {
            break;
        }

        let reply = assistant
            .answer(message, &context_text, &history_text, use_ai)
            .await;
        println!("\n{}\n", reply);

        history_text.push_str(&format!("User: {}\nAssistant: {}\n", message, reply));
    }

    Ok(())
}

fn read_optional(path: Option<&PathBuf>) -> Result<String, ChatError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => Ok(String::new()),
    }
}
