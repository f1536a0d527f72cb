use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// E-paper weather dashboard client.
#[derive(Parser, Debug)]
#[command(name = "paperstation", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Select the display driver by name.
    #[arg(long, global = true)]
    pub driver: Option<String>,

    /// Don't use partial updates even if the display supports them.
    #[arg(long, global = true)]
    pub no_partial: bool,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to a TOML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the dashboard poll loop.
    Run(RunArgs),

    /// Render the demo image set into the output directory.
    Demo,

    /// Print an image file to the display.
    Bitmap(BitmapArgs),

    /// List available display drivers.
    List,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// JSON file polled for station snapshots each tick (demo data if omitted).
    #[arg(long)]
    pub station_file: Option<PathBuf>,

    /// JSON file polled for forecast snapshots each tick (demo data if omitted).
    #[arg(long)]
    pub forecast_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BitmapArgs {
    /// Full path to the image file to display.
    #[arg(long)]
    pub file: PathBuf,
}
