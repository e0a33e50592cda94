//! Cvdrop CLI — command-line client for the cvdrop resume API.
//!
//! Set CVDROP_API_URL (or API_URL); defaults to http://localhost:8000.

use anyhow::Context;
use clap::{Parser, Subcommand};
use cvdrop_api_client::{ApiClient, UploadStage, UploadWorkflow};
use cvdrop_cli::{init_tracing, print_records};
use cvdrop_core::{ClientConfig, PendingUpload};

#[derive(Parser)]
#[command(name = "cvdrop", about = "Resume upload and listing CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all resumes known to the backend
    List,
    /// Upload a resume (pdf, docx, png, or jpeg) via presigned storage upload
    Upload {
        /// Path to the file to upload
        file: std::path::PathBuf,
    },
    /// Fetch a short-lived download URL for a resume and open it
    Download {
        /// Resume id
        id: String,
        /// Print the URL without opening a browser
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env().context("Failed to load configuration")?;
    let client = ApiClient::from_config(&config).context("Failed to create API client")?;

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            let records = client.list_resumes().await?;
            print_records(&records);
        }
        Commands::Upload { file } => {
            let pending = PendingUpload::from_path(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let workflow = UploadWorkflow::new(client, config);
            let mut stage = workflow.stage();
            let progress = tokio::spawn(async move {
                while stage.changed().await.is_ok() {
                    let label = stage.borrow_and_update().clone();
                    if label != UploadStage::Idle {
                        eprintln!("{}", label);
                    }
                }
            });

            let result = workflow.upload(pending).await;
            progress.abort();

            let records = result?;
            print_records(&records);
        }
        Commands::Download { id, no_open } => {
            let url = client.download_url(&id).await?;
            println!("{}", url);
            if !no_open {
                open::that(&url).with_context(|| format!("Failed to open {}", url))?;
            }
        }
    }

    Ok(())
}
