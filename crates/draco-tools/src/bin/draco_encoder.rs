use std::io::{self, Write};
use std::process;

use draco_tools::{Args, EncoderPipeline};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args = match Args::try_parse_legacy(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };
    init_tracing(args.verbose);

    let request = args.to_request();
    let status = {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let status = EncoderPipeline::new().run(&request, &mut out);
        if let Err(e) = out.flush() {
            warn!(error = %e, "failed to flush stdout");
        }
        status
    };
    process::exit(status);
}
