use std::error::Error;

use clap::builder::PossibleValuesParser;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use randomart::config::{DEFAULT_HEIGHT, DEFAULT_TILES, DEFAULT_WIDTH, RANDOM_FINGERPRINT_LEN};
use randomart::input::{self, Address};
use randomart::{armor, Board, TileSet, BUNDLED};

mod app;
mod ui;

#[derive(Debug, Parser)]
#[command(name = "randomart")]
#[command(about = "Draw drunken-bishop randomart for a fingerprint")]
#[command(version)]
struct Cli {
    /// Fingerprint to draw, read according to --format
    #[arg(required_unless_present_any = ["random", "list_tiles"])]
    input: Option<String>,

    /// How to read INPUT
    #[arg(short, long, value_enum, default_value_t = Format::Hex)]
    format: Format,

    /// Draw a random fingerprint instead of INPUT
    #[arg(long, conflicts_with = "input")]
    random: bool,

    /// Tileset id (see --list-tiles)
    #[arg(
        short,
        long,
        default_value = DEFAULT_TILES,
        value_parser = PossibleValuesParser::new(BUNDLED.iter().map(|t| t.id()))
    )]
    tiles: String,

    /// Board width in columns
    #[arg(short = 'x', long, default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
    width: i32,

    /// Board height in rows
    #[arg(short = 'y', long, default_value_t = DEFAULT_HEIGHT, allow_negative_numbers = true)]
    height: i32,

    /// Wrap the output in a box
    #[arg(short, long)]
    armor: bool,

    /// Open the interactive viewer
    #[arg(long)]
    view: bool,

    /// List bundled tilesets and exit
    #[arg(long)]
    list_tiles: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Plain or colon-separated hex
    Hex,
    /// Filecoin f1 address; the 20-byte key hash is drawn
    F1,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("randomart: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if cli.list_tiles {
        for tiles in BUNDLED {
            println!("{:<8} {}", tiles.id(), tiles.glyphs().concat());
        }
        return Ok(());
    }

    let tiles = TileSet::by_id(&cli.tiles)?;
    let fingerprint = read_fingerprint(&cli)?;

    if cli.view {
        let viewer = app::Viewer::new(cli.width, cli.height, fingerprint, tiles, cli.armor)?;
        return app::run(viewer);
    }

    let mut board = Board::new(cli.width, cli.height)?;
    board.walk(&fingerprint);
    let rendered = board.render(&tiles);
    if cli.armor {
        print!("{}", armor(&rendered));
    } else {
        print!("{rendered}");
    }
    Ok(())
}

fn read_fingerprint(cli: &Cli) -> Result<Vec<u8>, Box<dyn Error>> {
    if cli.random {
        let bytes = input::random_fingerprint(RANDOM_FINGERPRINT_LEN);
        info!(fingerprint = %hex::encode(&bytes), "generated random fingerprint");
        return Ok(bytes);
    }

    let text = cli.input.as_deref().unwrap_or_default();
    match cli.format {
        Format::Hex => Ok(input::parse_hex(text)?),
        Format::F1 => {
            let addr = Address::parse_f1(text)?;
            info!(
                payload = %hex::encode(&addr.payload),
                checksum = %hex::encode(&addr.checksum),
                "decoded f1 address"
            );
            Ok(addr.payload)
        }
    }
}
