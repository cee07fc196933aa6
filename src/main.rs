//! PagePress CLI
//!
//! Scrape a single web page and write its content as a paginated PDF.

use clap::Parser;
use pagepress::pipeline::{self, FetchMode, PipelineOptions};
use std::path::PathBuf;

/// PagePress - web page to PDF report
#[derive(Parser, Debug)]
#[command(name = "pagepress")]
#[command(version)]
#[command(about = "Scrape a web page and lay out its content as a paginated PDF")]
struct Args {
    /// URL of the webpage to scrape
    url: String,

    /// Output PDF filename
    #[arg(short, long, default_value = "output.pdf")]
    output: PathBuf,

    /// Fetch the page with a plain HTTP GET instead of a headless browser
    /// (no JS rendering, no tab discovery)
    #[arg(long = "static")]
    static_fetch: bool,

    /// Deadline for the fetch-and-discover phase, in seconds
    #[arg(long, default_value = "120")]
    timeout_secs: u64,

    /// Path to Chrome/Chromium executable
    #[arg(long)]
    chrome_path: Option<String>,

    /// Run the browser with a visible window
    #[arg(long)]
    headed: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = PipelineOptions {
        url: args.url,
        output: args.output,
        mode: if args.static_fetch {
            FetchMode::Static
        } else {
            FetchMode::Browser
        },
        acquire_timeout_secs: args.timeout_secs,
        chrome_path: args.chrome_path,
        headless: !args.headed,
    };

    pipeline::run(&options).await?;

    println!("PDF generated successfully: {}", options.output.display());
    Ok(())
}
