//! Operator CLI for GOES-R imagery analysis.
//!
//! Three subcommands mirror the toolkit crates:
//! - `list` pages through stored imagery keys in an S3-compatible bucket
//! - `navigate` reprojects a fixed-grid scan-angle grid to lat/lon
//! - `colormap` parses a `.cpt` color table and prints a sampled ramp

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use futures::TryStreamExt;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use catalog::{ImageryPath, ImageryStore, ImageryStoreConfig};
use colormap::{ColorTable, Colormap};
use navigation::{reproject, ProjectionParameters, ScanAngleAxes};

#[derive(Parser, Debug)]
#[command(name = "goes")]
#[command(about = "GOES-R imagery analysis toolkit")]
struct Args {
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List stored imagery keys under a prefix
    List {
        /// Bucket name
        #[arg(long, env = "GOES_BUCKET", default_value = "noaa-goes16")]
        bucket: String,

        /// S3/MinIO endpoint URL (AWS default when omitted)
        #[arg(long, env = "GOES_ENDPOINT")]
        endpoint: Option<String>,

        /// AWS region
        #[arg(long, env = "GOES_REGION", default_value = "us-east-1")]
        region: String,

        /// Access key ID (requests are anonymous when omitted)
        #[arg(long, env = "GOES_ACCESS_KEY_ID")]
        access_key_id: Option<String>,

        /// Secret access key
        #[arg(long, env = "GOES_SECRET_ACCESS_KEY", requires = "access_key_id")]
        secret_access_key: Option<String>,

        /// Raw key prefix to list under
        #[arg(long, conflicts_with = "product")]
        prefix: Option<String>,

        /// Product name (e.g. ABI-L2-CMIPF); listed with an ABI-layout prefix
        #[arg(long)]
        product: Option<String>,

        /// Stop after this many keys
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Reproject a scan-angle grid to geographic coordinates
    Navigate {
        /// Satellite preset: goes-east or goes-west
        #[arg(long, default_value = "goes-east")]
        satellite: String,

        /// Number of grid columns
        #[arg(long, default_value = "101")]
        nx: usize,

        /// Number of grid rows
        #[arg(long, default_value = "101")]
        ny: usize,

        /// Half-width of the scan-angle extent in radians
        #[arg(long, default_value = "0.151844")]
        half_angle: f64,
    },

    /// Parse a .cpt color table and print a sampled ramp
    Colormap {
        /// Path to the .cpt file
        path: PathBuf,

        /// Number of samples to print
        #[arg(long, default_value = "9")]
        samples: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::List {
            bucket,
            endpoint,
            region,
            access_key_id,
            secret_access_key,
            prefix,
            product,
            limit,
        } => {
            let allow_http = endpoint
                .as_deref()
                .is_some_and(|e| e.starts_with("http://"));
            let config = ImageryStoreConfig {
                // Sign requests only when credentials were supplied
                skip_signature: access_key_id.is_none(),
                endpoint,
                bucket,
                region,
                access_key_id,
                secret_access_key,
                allow_http,
            };
            list(config, prefix, product, limit).await
        }
        Command::Navigate {
            satellite,
            nx,
            ny,
            half_angle,
        } => navigate(&satellite, nx, ny, half_angle),
        Command::Colormap { path, samples } => print_colormap(&path, samples),
    }
}

async fn list(
    config: ImageryStoreConfig,
    prefix: Option<String>,
    product: Option<String>,
    limit: Option<usize>,
) -> Result<()> {
    let store = ImageryStore::new(&config).context("failed to open imagery store")?;

    let prefix = product
        .as_deref()
        .map(ImageryPath::product)
        .or(prefix);
    info!(bucket = store.bucket(), ?prefix, "listing imagery keys");

    let mut stream = store.list_keys(prefix.as_deref());
    let mut count = 0usize;
    while let Some(key) = stream.try_next().await? {
        println!("{}", key);
        count += 1;
        if limit.is_some_and(|l| count >= l) {
            break;
        }
    }

    info!(count, "done");
    Ok(())
}

fn navigate(satellite: &str, nx: usize, ny: usize, half_angle: f64) -> Result<()> {
    let params = match satellite {
        "goes-east" => ProjectionParameters::goes_east(),
        "goes-west" => ProjectionParameters::goes_west(),
        other => bail!("unknown satellite preset '{}'", other),
    };

    if nx < 2 || ny < 2 {
        bail!("grid must be at least 2x2");
    }

    let dx = 2.0 * half_angle / (nx - 1) as f64;
    let dy = 2.0 * half_angle / (ny - 1) as f64;
    let axes = ScanAngleAxes::regular(-half_angle, dx, nx, half_angle, -dy, ny)
        .context("invalid scan-angle grid")?;

    let grid = reproject(&params, &axes)?;

    let (rows, cols) = grid.shape();
    let total = rows * cols;
    let defined = grid.defined_count();
    println!("grid: {} rows x {} cols", rows, cols);
    println!(
        "on-Earth cells: {} of {} ({:.1}%)",
        defined,
        total,
        100.0 * defined as f64 / total as f64
    );

    if let Some((min_lon, min_lat, max_lon, max_lat)) = grid.geographic_bounds() {
        println!(
            "bounds: lon {:.3} to {:.3}, lat {:.3} to {:.3}",
            min_lon, max_lon, min_lat, max_lat
        );
    } else {
        println!("bounds: entire grid is off-Earth");
    }

    Ok(())
}

fn print_colormap(path: &Path, samples: usize) -> Result<()> {
    let table = ColorTable::from_cpt_file(path)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let cmap = Colormap::from_table(&table)?;

    println!("{} breakpoints", table.breakpoints().len());
    let n = samples.max(2);
    for i in 0..n {
        let t = i as f64 / (n - 1) as f64;
        let (r, g, b) = cmap.sample(t).to_u8();
        println!("{:>6.3}  #{:02x}{:02x}{:02x}", t, r, g, b);
    }

    Ok(())
}
