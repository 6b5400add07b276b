use anstream::AutoStream;
use is_terminal::IsTerminal;
use std::io;
use std::process::ExitCode;

use sop::Cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("SOP_LOG", "warn")).init();

    let args = std::env::args_os();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let out_color = AutoStream::choice(&stdout);
    let err_color = AutoStream::choice(&stderr);
    let status = if stdout.is_terminal() {
        Cli::new(stdout.lock(), stderr.lock()).with_auto_colors(out_color, err_color).run(args)
    } else {
        Cli::new(io::BufWriter::new(stdout.lock()), stderr.lock()).with_auto_colors(out_color, err_color).run(args)
    };
    ExitCode::from(status.code())
}
