use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::{Builder, Env};
use lsbs::pixels::{encoded_path, PixelBuffer};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "lsbs")]
#[command(author, version, about = "Hide messages in the least significant bits of a PNG image", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Hide a message in an image
    #[command(alias = "e")]
    Encode {
        /// Cover PNG image
        image: PathBuf,

        /// Message to hide
        message: String,

        /// Output image (defaults to encoded_<IMAGE> next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Reveal the bytes hidden in an image
    #[command(alias = "d")]
    Decode {
        /// Image holding a message
        image: PathBuf,

        /// Keep only the first N revealed bytes
        #[arg(long)]
        length: Option<usize>,

        /// Stop at the first NUL byte
        #[arg(long)]
        until_nul: bool,

        /// Write the revealed bytes to stdout unchanged
        #[arg(long)]
        raw: bool,
    },

    /// Show how many message bytes an image can hold
    #[command(alias = "c")]
    Capacity {
        /// Image to inspect
        image: PathBuf,
    },
}

/// Logs go to stderr so stdout only carries command output.
/// `RUST_LOG` overrides the default `info` level.
fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args()
            )
        })
        .init();
}

/// Applies the caller-side framing options to revealed bytes.
fn interpret(mut revealed: Vec<u8>, length: Option<usize>, until_nul: bool) -> Vec<u8> {
    if let Some(length) = length {
        revealed.truncate(length);
    }

    if until_nul {
        if let Some(nul) = revealed.iter().position(|&byte| byte == 0) {
            revealed.truncate(nul);
        }
    }

    revealed
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Encode {
            image,
            message,
            output,
        } => {
            if message.is_empty() {
                return Err(lsbs::Error::EmptyMessage.into());
            }

            let cover = PixelBuffer::open(&image)
                .with_context(|| format!("failed to load image {}", image.display()))?;
            let package = cover.conceal(message.as_bytes())?;

            let output = output.unwrap_or_else(|| encoded_path(&image));
            package
                .save(&output)
                .with_context(|| format!("failed to save image {}", output.display()))?;

            println!("Encoded image saved in {}", output.display());
        }

        Commands::Decode {
            image,
            length,
            until_nul,
            raw,
        } => {
            let package = PixelBuffer::open(&image)
                .with_context(|| format!("failed to load image {}", image.display()))?;
            let revealed = interpret(package.reveal(), length, until_nul);

            if raw {
                let mut stdout = io::stdout().lock();
                stdout.write_all(&revealed)?;
                stdout.flush()?;
            } else {
                println!("Extracted message: {}", String::from_utf8_lossy(&revealed));
            }
        }

        Commands::Capacity { image } => {
            let cover = PixelBuffer::open(&image)
                .with_context(|| format!("failed to load image {}", image.display()))?;

            println!(
                "Width: {}, Height: {}, Pixels: {}",
                cover.width(),
                cover.height(),
                cover.pixel_count()
            );
            println!(
                "Color: {:?}, depth {}",
                cover.color(),
                cover.depth() as u8
            );
            println!("Samples: {}", cover.samples().len());
            println!("Capacity: {} bytes", cover.capacity());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    init_logger();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
