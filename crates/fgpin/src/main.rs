use std::process::ExitCode;

use fgpin_core::init_logging;

mod app;
mod commands;

fn main() -> ExitCode {
    let matches = match app::build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            // --help and --version are reported as "errors" on stdout
            return if e.use_stderr() {
                println!("{}", app::usage_line());
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let verbose = matches.get_flag("verbose");
    let quiet = !verbose;
    init_logging(quiet);

    commands::run_command(&matches)
}
