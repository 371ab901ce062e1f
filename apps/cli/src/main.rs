use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;

use promptnik_core::{FormInput, FormSession, SubmissionClient, format_result_readable};

#[derive(Parser)]
#[command(name = "promptnik")]
#[command(
    about = "Turn a YouTube link into ready-to-paste GPT prompts via a prompt-generation backend"
)]
struct Cli {
    /// Video URL
    video_link: String,

    /// Transcript chunk size, forwarded to the backend as-is
    #[arg(short, long, default_value = "")]
    chunk_size: String,

    /// Output language (e.g., "en", "ru", "uk")
    #[arg(short, long, default_value = "")]
    language: String,

    /// Prompt template applied to each transcript chunk
    #[arg(short, long, default_value = "")]
    prompt: String,

    /// Prompt appended after each chunk
    #[arg(short, long, default_value = "")]
    end_prompt: String,

    /// Backend base URL
    #[arg(long, default_value = "http://127.0.0.1:5000/")]
    endpoint: String,

    /// Print the raw response JSON instead of the readable layout
    #[arg(long)]
    json: bool,

    /// Also save the response JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let client = match SubmissionClient::parse(&cli.endpoint) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    println!(
        "\n{}  {}\n",
        style("promptnik").cyan().bold(),
        style("Prompt Generator").dim()
    );

    let session = FormSession::new(client);
    session.set_input(FormInput {
        video_link: cli.video_link,
        chunk_size: cli.chunk_size,
        language: cli.language,
        prompt: cli.prompt,
        end_prompt: cli.end_prompt,
    });

    let spinner = create_spinner(&format!("Submitting to {}...", cli.endpoint));
    session.submit().await;

    let Some(result) = session.result() else {
        spinner.finish_with_message(format!(
            "{} Submission failed, nothing to display",
            style("✗").red().bold()
        ));
        eprintln!(
            "{}",
            style("Run with RUST_LOG=debug for the failure details.").dim()
        );
        std::process::exit(1);
    };

    spinner.finish_with_message(format!(
        "{} Received {} prompt(s)",
        style("✓").green().bold(),
        result.prompts.len()
    ));

    if let Some(path) = &cli.output {
        let pretty_json = serde_json::to_string_pretty(&result)?;
        fs::write(path, &pretty_json).await?;
        println!(
            "\n{} {}",
            style("Saved:").dim(),
            style(path.display()).cyan()
        );
    }

    println!("{}", style("─".repeat(60)).dim());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", format_result_readable(&result));
    }

    Ok(())
}
