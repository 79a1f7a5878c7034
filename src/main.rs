use clap::Parser;
use mosaic::{EncoderConfig, MarshalError, Marshaller};
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Renders a JSON document as an SVG mosaic.
#[derive(Parser, Debug)]
#[command(name = "mosaic", version, about)]
struct Args {
    /// JSON input file, or `-` for stdin.
    input: PathBuf,

    /// Output file. Defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Side of the square document, in SVG units.
    #[arg(long, default_value_t = 512.0)]
    size: f64,

    /// Deepest nesting to draw.
    #[arg(long)]
    max_depth: Option<usize>,
}

fn main() -> Result<(), MarshalError> {
    env_logger::init();
    let args = Args::parse();

    let source = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        log::info!("Loading data from {}", args.input.display());
        fs::read_to_string(&args.input)?
    };
    let data: serde_json::Value = serde_json::from_str(&source)?;

    let mut config = EncoderConfig::default();
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }
    let marshaller = Marshaller::new().with_config(config);

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            marshaller.marshal_to_writer(&data, args.size, &mut writer)?;
            writer.flush()?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout().lock();
            let mut writer = BufWriter::new(stdout);
            marshaller.marshal_to_writer(&data, args.size, &mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}
