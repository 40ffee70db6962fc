use clap::Parser;
use rhombus::{FrameDecoder, LineSource, ReaderLines, Screen, SerialPort, StopSignal, Viewer};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "rhombus", about = "Draw matrices arriving on the serial line as diamonds")]
struct Cli {
    /// Rows and columns of each matrix.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(1..))]
    size: u16,

    /// Read frames from FILE (`-` for stdin) instead of the serial port.
    #[arg(long, value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Stop after the first pair of matrices.
    #[arg(long)]
    once: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(io::stderr)
                             .init();
}

fn view<S: LineSource>(source: S, cli: &Cli, stop: StopSignal) -> rhombus::Result<()> {
    let decoder = FrameDecoder::square(usize::from(cli.size))?;
    let mut viewer = Viewer::new(source, decoder, Screen::stdout(), stop);
    if cli.once {
        viewer.run_cycle()?;
    } else {
        viewer.run()?;
    }
    Ok(())
}

fn run(cli: &Cli) -> rhombus::Result<()> {
    let stop = StopSignal::from_os_signals()?;
    match cli.replay.as_deref() {
        Some(path) if path.as_os_str() == "-" => view(ReaderLines::new(io::stdin().lock()), cli, stop),
        Some(path) => {
            tracing::info!(file = %path.display(), "replaying frames");
            view(ReaderLines::new(BufReader::new(File::open(path)?)), cli, stop)
        },
        None => view(SerialPort::open_default()?, cli, stop),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "rhombus failed");
            ExitCode::FAILURE
        },
    }
}
