//! bandsplit - split an audio file into low and high bands with a
//! first-order crossover.

mod split;

use clap::Parser;

#[derive(Parser)]
#[command(name = "bandsplit")]
#[command(
    author,
    version,
    about = "Two-way crossover: split an audio file into low and high bands",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    split: split::SplitArgs,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // The crossover contract pins exit code 1 for usage errors; clap's
    // default is 2, so parse failures are handled explicitly.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let code = i32::from(err.use_stderr());
        let _ = err.print();
        std::process::exit(code);
    });

    if let Err(err) = split::run(cli.split) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
