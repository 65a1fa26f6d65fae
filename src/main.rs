use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use clap::Parser;
use colored::*;

use loglens_core::{DocumentSource, FileValidator, LlmProvider, ProviderKind};
use loglens_ollama::OllamaClient;
use loglens_openai::OpenAiClient;
use loglens_qdrant::QdrantIndex;
use loglens_rag::Pipeline;

#[derive(Parser)]
#[command(name = "loglens")]
#[command(about = "Upload a .log file and ask questions about it", long_about = None)]
struct Cli {
    /// Log file to ingest
    file: PathBuf,

    /// Ask a single question and exit
    #[arg(short, long)]
    question: Option<String>,

    /// Print a two-stage summary of the log and exit
    #[arg(short, long)]
    summarize: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Validate the upload before any remote work
    let filename = cli
        .file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("invalid file path"))?;
    let size_bytes = std::fs::metadata(&cli.file)?.len();

    let (accepted, reason) = FileValidator::validate(filename, size_bytes);
    if !accepted {
        println!("{} {}", "❌".red(), reason.unwrap_or_default());
        std::process::exit(1);
    }

    // Initialize provider and index
    let vendor = env::var("MODEL_VENDOR").unwrap_or_else(|_| "ollama".to_string());
    let kind = ProviderKind::parse(&vendor)
        .ok_or_else(|| anyhow!("unknown MODEL_VENDOR '{}' (expected ollama or openai)", vendor))?;

    let provider: Arc<dyn LlmProvider> = match kind {
        ProviderKind::Ollama => {
            let mut client = OllamaClient::from_env()?;
            client.connect().await?;
            Arc::new(client)
        }
        ProviderKind::OpenAi => {
            let mut client = OpenAiClient::from_env()?;
            client.connect().await?;
            Arc::new(client)
        }
    };
    println!("{} Using {} ({})", "✅".green(), kind, provider.model_id());

    let index = Arc::new(QdrantIndex::from_env()?);
    let pipeline = Pipeline::new(provider, index);

    // Ingest
    let source = DocumentSource::path(&cli.file);
    println!("{} Ingesting {}...", "📄".blue(), filename);
    let chunk_count = pipeline.ingest(&source).await?;
    println!(
        "{} Chunks ingested into '{}': {}",
        "✅".green(),
        pipeline.index_name(),
        chunk_count
    );

    if cli.summarize {
        let text = source.load().await?;
        if let Some(summary) = pipeline.summarize(&text).await? {
            println!("\n{}", summary);
        }
        return Ok(());
    }

    if let Some(question) = cli.question {
        ask_and_print(&pipeline, &question).await?;
        return Ok(());
    }

    // Interactive mode
    println!("\n{}", "Ask a question about the uploaded log".bold());
    print_help();

    loop {
        print!("{} ", ">".cyan());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "exit" | "quit" => {
                println!("{}", "👋 Goodbye!".green());
                break;
            }
            "help" => {
                print_help();
            }
            "summarize" => {
                let text = source.load().await?;
                match pipeline.summarize(&text).await {
                    Ok(Some(summary)) => println!("{}", summary),
                    Ok(None) => println!("{} Nothing to summarize", "⚠️".yellow()),
                    Err(e) => println!("{} Error summarizing log: {}", "❌".red(), e),
                }
            }
            _ => {
                if let Err(e) = ask_and_print(&pipeline, input).await {
                    println!("{} Error analyzing log: {}", "❌".red(), e);
                }
            }
        }
    }

    Ok(())
}

async fn ask_and_print(pipeline: &Pipeline, question: &str) -> Result<()> {
    println!("{} Analyzing...", "🤖".blue());

    let Some(answer) = pipeline.ask(question).await? else {
        return Ok(());
    };

    println!("\n{}", answer.answer);
    if !answer.sources.is_empty() {
        println!("{} {}", "Sources:".bold(), answer.sources.join(", "));
    }
    println!(
        "{} {} chunks retrieved",
        "Context:".bold(),
        answer.contexts.len()
    );

    Ok(())
}

fn print_help() {
    println!("{}", "Available commands:".bold());
    println!(
        "  {} - Type a natural language question about the log",
        "question".green()
    );
    println!("  {} - Summarize the uploaded log", "summarize".green());
    println!("  {} - Show this help message", "help".green());
    println!("  {} - Exit the application", "exit/quit".green());
}
