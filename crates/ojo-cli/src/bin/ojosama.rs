use std::io;
use std::process;

use clap::Parser;

use ojo_cli::cli::Cli;
use ojo_cli::{trace_init, EXIT_OK, EXIT_USAGE};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too.
            let code = if e.use_stderr() { EXIT_USAGE } else { EXIT_OK };
            let _ = e.print();
            process::exit(code);
        }
    };
    let trace_guard = trace_init::init_tracing(cli.trace_dir.as_deref());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = ojo_cli::run(&cli, &mut stdin.lock(), &mut stdout.lock());
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        // process::exit skips destructors; flush the trace file first.
        drop(trace_guard);
        process::exit(e.exit_code());
    }
}
