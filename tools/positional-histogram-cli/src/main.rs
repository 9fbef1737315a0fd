use argh::FromArgs;
use positional_histogram::{run_with_options, OptionMap};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DESCRIPTION: &str = "\
Generates character distribution histograms.
    Output is a CSV like list of \"VALUE,OCCURRENCES;\" lines per block.
    BLOCKSIZE generates a set of histograms, one for each position in a block.
    CHARSETSIZE sets the maximum range of the histogram(s).";

/// Positional byte histogram generator
#[derive(FromArgs, Debug)]
pub struct Args {
    /// option assignments, e.g. INPUTFILE=data.bin BLOCKSIZE=4
    #[argh(positional)]
    options: Vec<String>,

    /// print the description and current option values, then exit
    #[argh(switch, short = 'd')]
    describe: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: Args = argh::from_env();

    let mut options = OptionMap::new();
    for assignment in &args.options {
        if let Err(e) = options.set_assignment(assignment) {
            error!("{e}");
            return exit_code(e.exit_code());
        }
    }

    if args.describe {
        print_description(&options);
        return ExitCode::SUCCESS;
    }

    match run_with_options(&options) {
        Ok(summary) => {
            info!(
                bytes = summary.bytes_read,
                blocks = summary.blocks,
                "Histogram written"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            exit_code(e.exit_code())
        }
    }
}

fn print_description(options: &OptionMap) {
    println!("Module: positional-histogram");
    println!("    {DESCRIPTION}");
    println!();

    let width = options.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, value) in options.iter() {
        println!("    {name:<width$}  {value}");
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX))
}
