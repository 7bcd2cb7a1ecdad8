use clap::{Parser, Subcommand};
use photo_tool::config::{self, DEFAULT_PORT, Roots, ServerConfig};
use photo_tool::gallery::{self, Templates};
use photo_tool::{output, thumbs, zips};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Directory holding the original photos.
#[derive(clap::Args, Clone)]
struct PhotosArg {
    /// Path to directory with photos
    #[arg(short, long, value_parser = config::existing_dir)]
    photos: PathBuf,
}

/// Photos directory plus the thumbnail mirror.
#[derive(clap::Args, Clone)]
struct TreeArgs {
    /// Path to directory with photos
    #[arg(short, long, value_parser = config::existing_dir)]
    photos: PathBuf,

    /// Path to thumbs directory
    #[arg(short, long, value_parser = config::existing_dir)]
    thumbs: PathBuf,
}

impl TreeArgs {
    fn roots(&self) -> Roots {
        Roots::new(&self.photos, &self.thumbs)
    }
}

#[derive(Parser)]
#[command(name = "photo-tool")]
#[command(about = "Tool for handling photos")]
#[command(long_about = "\
Tool for handling photos

Thumbnails mirror the photos tree, with `_th.jpg` appended to each file name:

  photos/vacation/beach.jpg  →  thumbs/vacation/beach.jpg_th.jpg

Existing thumbnails are never regenerated. Supported photos: jpg, jpeg,
png, heif, heic.

Set RUST_LOG=debug for per-file diagnostics on stderr.")]
#[command(disable_version_flag = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the path of every zip file under the photos directory
    ShowZipFiles(PhotosArg),
    /// Generate missing 200px JPEG thumbnails
    CreateThumbs(TreeArgs),
    /// Start an HTTP server with a photo gallery
    ServeGallery {
        #[command(flatten)]
        tree: TreeArgs,
        /// Port to listen on (all interfaces)
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Show version
    Version,
}

/// Rewrite a lone `-v` / `--version` into the `version` command.
fn normalize_args(mut args: Vec<OsString>) -> Vec<OsString> {
    if args.len() == 2 && (args[1] == "-v" || args[1] == "--version") {
        args[1] = OsString::from("version");
    }
    args
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_args(std::env::args_os().collect()));
    init_logging();

    match cli.command {
        Command::ShowZipFiles(args) => {
            let result = zips::find_zip_files(&args.photos, |path| {
                println!("{}", output::format_zip_path(path));
            });
            if let Err(e) = result {
                eprintln!("Error searching for zip files: {e}");
                return ExitCode::FAILURE;
            }
        }
        Command::CreateThumbs(args) => {
            let (tx, rx) = mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_thumb_event(&event) {
                        println!("{}", line);
                    }
                }
            });
            let result = thumbs::create_thumbs(&args.roots(), Some(tx));
            if printer.join().is_err() {
                warn!("progress printer panicked");
            }
            match result {
                Ok(summary) => output::print_thumb_summary(&summary),
                Err(e) => {
                    eprintln!("Error creating photo thumbnails: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        Command::ServeGallery { tree, port } => {
            let server_config = ServerConfig {
                port,
                ..ServerConfig::default()
            };
            if let Err(e) = gallery::run(&tree.roots(), &server_config, Templates::default()) {
                eprintln!("Error serving gallery: {e}");
                return ExitCode::FAILURE;
            }
        }
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
    }

    ExitCode::SUCCESS
}
