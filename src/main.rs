use std::process::ExitCode;

use log::{error, info};

use namesmith::cli::{
    get_action, get_assume_yes, get_log_file, get_matches, get_run_options, get_verbosity,
};
use namesmith::logging::init_logger;
use namesmith::session::{FixedPrompter, Prompter, StdinPrompter};
use namesmith::workflow::execute;

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let matches = get_matches();
    let verbosity = get_verbosity(&matches);
    let log_file = match get_log_file(&matches) {
        Ok(log_file) => log_file,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_logger(verbosity, &log_file) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    let action = get_action(&matches);
    let options = get_run_options(&matches);
    let mut prompter: Box<dyn Prompter> = if get_assume_yes(&matches) {
        Box::new(FixedPrompter::new(None, true))
    } else {
        Box::new(StdinPrompter)
    };

    match execute(&action, options, prompter.as_mut()) {
        Ok(context) => {
            let stats = &context.stats;
            if stats.items_renamed > 0 || stats.errors > 0 {
                info!(
                    "Renamed {}, skipped {}, failed {}",
                    stats.items_renamed, stats.items_skipped, stats.errors
                );
            }
            if stats.errors > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
