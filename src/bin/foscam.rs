use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use foscam_rs::{Config, FoscamApiClient};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "foscam")]
#[command(about = "Foscam IP camera CLI", long_about = None)]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print device information
    Info,
    /// Print the current image settings
    Image,
    /// Print the on-screen display settings
    Osd,
    /// Save a JPEG snapshot
    Snapshot {
        /// Output file
        #[arg(short, long, default_value = "snapshot.jpg")]
        out: PathBuf,
    },
    /// Nudge the camera in one direction
    Ptz {
        #[arg(value_enum)]
        direction: Direction,
        /// How long to move before stopping, in milliseconds
        #[arg(short, long, default_value = "500")]
        millis: u64,
    },
    /// Reboot the camera
    Reboot,
}

#[derive(Clone, Copy, ValueEnum)]
enum Direction {
    Up,
    Down,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    // reqwest logs full request URLs, and those carry the camera credentials.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"))
        .add_directive("reqwest=info".parse()?);
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let config = Config::from_file(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    let client = FoscamApiClient::new(config.camera)?;

    match cli.command {
        Commands::Info => {
            let info = client.get_dev_info().await?;
            println!("{}", serde_json::to_string_pretty(info.value())?);
        }
        Commands::Image => {
            let image = client.get_image_setting().await?;
            let mirror_flip = client.get_mirror_and_flip_setting().await?;
            println!("{}", serde_json::to_string_pretty(image.value())?);
            println!("{}", serde_json::to_string_pretty(mirror_flip.value())?);
        }
        Commands::Osd => {
            let osd = client.get_osd_setting().await?;
            println!("{}", serde_json::to_string_pretty(osd.value())?);
        }
        Commands::Snapshot { out } => {
            let jpeg = client.snap_picture2().await?;
            tokio::fs::write(&out, &jpeg).await?;
            info!("Wrote {} bytes to {}", jpeg.len(), out.display());
        }
        Commands::Ptz { direction, millis } => {
            let moved = match direction {
                Direction::Up => client.ptz_move_up().await?,
                Direction::Down => client.ptz_move_down().await?,
                Direction::Left => client.ptz_move_left().await?,
                Direction::Right => client.ptz_move_right().await?,
                Direction::TopLeft => client.ptz_move_top_left().await?,
                Direction::TopRight => client.ptz_move_top_right().await?,
                Direction::BottomLeft => client.ptz_move_bottom_left().await?,
                Direction::BottomRight => client.ptz_move_bottom_right().await?,
            };
            if !moved.is_success() {
                warn!("Camera refused to move: {:?}", moved.result_code());
                return Ok(());
            }
            tokio::time::sleep(Duration::from_millis(millis)).await;
            client.ptz_stop_run().await?;
            info!("PTZ move finished");
        }
        Commands::Reboot => {
            let response = client.reboot_system().await?;
            info!("Reboot requested: {:?}", response.result_code());
        }
    }

    Ok(())
}
