use clap::Parser;
use ipenum::cli::Args;
use ipenum::{logging, run, Options};
use std::error::Error;
use std::io::{self, BufRead, BufWriter};
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();
    let options = Options::from(&args);
    dotenv::dotenv().ok();
    logging::init(&options)?;
    log::info!("#Start main() {options:?}");

    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = io::stderr().lock();

    let result = if args.ranges.is_empty() {
        run(io::stdin().lock().lines(), &options, &mut out, &mut err)
    } else {
        run(args.ranges.into_iter().map(Ok), &options, &mut out, &mut err)
    };

    match result {
        Ok(status) => Ok(ExitCode::from(status.exit_code())),
        // reader went away, e.g. `ipenum ::/0 | head`
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("stdout closed: {e}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Err(e.into()),
    }
}
