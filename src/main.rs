use std::io;
use std::process::ExitCode;

use logfile_manager::app;
use logfile_manager::cli::CliArgs;
use logfile_manager::utils;

fn main() -> ExitCode {
    let args = CliArgs::parse_args();
    utils::init(args.verbose);

    match app::execute(&args, io::stdin().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
