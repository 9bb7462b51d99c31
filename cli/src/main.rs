use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "potager")]
#[command(about = "Potager CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ping the server
    Ping {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
    },
    /// Ask a question and print the answer
    Ask {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
        /// Answering role: vegetable | fruit | general
        #[arg(long, default_value = "vegetable")]
        expert: String,
        /// The question to ask
        question: String,
    },
}

#[derive(Serialize)]
struct AskRequest<'a> {
    expert: &'a str,
    question: &'a str,
}

#[derive(Debug, Deserialize)]
struct AskResponse {
    answer: String,
    answered_by: String,
    downgraded: bool,
}

#[derive(Debug, Deserialize)]
struct PingResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ping { server } => {
            ping(&server).await?;
        }
        Commands::Ask {
            server,
            expert,
            question,
        } => {
            ask(&server, &expert, &question).await?;
        }
    }

    Ok(())
}

async fn ping(server: &str) -> Result<()> {
    let response: PingResponse = reqwest::get(format!("{}/api/test/unauthed-ping", server))
        .await?
        .error_for_status()?
        .json()
        .await?;

    println!("{}", response.message);

    Ok(())
}

async fn ask(server: &str, expert: &str, question: &str) -> Result<()> {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/chat", server))
        .json(&AskRequest { expert, question })
        .send()
        .await?;

    if !response.status().is_success() {
        let error: ErrorResponse = response.json().await?;
        anyhow::bail!("{}", error.error);
    }

    let answer: AskResponse = response.json().await?;

    if answer.downgraded {
        eprintln!("note: the question looked unrelated to the selected domain");
    }
    eprintln!("answered by: {}", answer.answered_by);
    println!("{}", answer.answer);

    Ok(())
}
