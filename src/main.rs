use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bibleqr::{qr, ECLevel, ReferenceBuilder, BOOKS};

/// Generates a QR code that opens a bible app to a specific location
#[derive(Debug, Parser)]
#[command(disable_version_flag = true)]
struct Args {
    /// Desired book (e.g. "Genesis")
    #[arg(required_unless_present = "list_books")]
    book: Option<String>,

    /// Output filename (with png extension)
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// Desired chapter
    #[arg(short, long, default_value_t = 1)]
    chapter: u32,

    /// Starting verse
    #[arg(short, long = "start_verse", default_value_t = 1)]
    start_verse: u32,

    /// Ending verse
    #[arg(short, long = "end_verse")]
    end_verse: Option<u32>,

    /// Three letter Bible version code (e.g. "KJV")
    #[arg(short, long, default_value = "KJV")]
    version: String,

    /// Scale factor to apply to the QR code
    #[arg(short, long, default_value_t = 5)]
    zoom: u32,

    /// Error correction level
    #[arg(long, value_enum, ignore_case = true, default_value_t = ECLevel::H)]
    ec_level: ECLevel,

    /// Also draw the QR code in the terminal
    #[arg(long)]
    print: bool,

    /// List the accepted book names and exit
    #[arg(long)]
    list_books: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Args::parse())
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.list_books {
        BOOKS.iter().for_each(|b| println!("{}", b.name));
        return Ok(());
    }
    let book = args.book.as_deref().context("No book given")?;

    let mut builder = ReferenceBuilder::new(book, args.chapter);
    builder.verse_start(args.start_verse).version(&args.version);
    if let Some(e) = args.end_verse {
        builder.verse_end(e);
    }
    let intent_uri = builder.build()?.url();

    println!("Generating QR code for intent URI:");
    println!("{intent_uri}");

    if args.print {
        print!("{}", qr::to_str(&intent_uri, args.ec_level)?);
    }

    qr::encode_to_png(&intent_uri, &args.output, args.zoom, args.ec_level)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!("Saved {}", args.output.display());

    Ok(())
}
