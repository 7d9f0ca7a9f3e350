use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgMatches;
use tracing::{error, info, warn};

use fgpin_core::config::{FgpinConfig, ForegroundConfig, InputConfig, ProcessConfig, WindowConfig};
use fgpin_core::events;
use fgpin_core::pin::handler::pin_target;
use fgpin_core::process::ProcessError;
use fgpin_core::window::WindowError;
use fgpin_core::{
    ForegroundOutcome, MaintenanceStop, PinError, PinEvent, PinRequest, ProcessOrigin,
    SuppressionMode, SystemDesktop,
};

pub fn run_command(matches: &ArgMatches) -> ExitCode {
    events::log_app_startup();

    let result = handle_pin_command(matches);
    if let Err(e) = &result {
        events::log_app_error(&**e);
    }

    events::log_app_shutdown(result.is_ok());
    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Load the config hierarchy and layer the command-line overrides on top.
///
/// A config file that fails to parse or validate aborts the run. Failures are
/// user-facing, so they go to stdout with the rest of the progress output.
fn load_config(matches: &ArgMatches) -> Result<FgpinConfig, Box<dyn std::error::Error>> {
    let config = match FgpinConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            println!(
                "Could not load config: {}\n\
                 Tip: Check ~/.fgpin/config.toml and ./.fgpin/config.toml for errors.",
                e
            );
            error!(event = "cli.config.load_failed", error = %e);
            return Err(e);
        }
    };

    let config = config.merged_with(cli_overrides(matches)?);

    if let Err(e) = config.validate() {
        println!("{}", e);
        error!(event = "cli.config.validation_failed", error = %e);
        return Err(e.into());
    }

    Ok(config)
}

fn cli_overrides(matches: &ArgMatches) -> Result<FgpinConfig, Box<dyn std::error::Error>> {
    let suppression = matches
        .get_one::<String>("suppress")
        .map(|s| s.parse::<SuppressionMode>())
        .transpose()?;

    Ok(FgpinConfig {
        window: WindowConfig {
            max_attempts: matches.get_one::<u32>("attempts").copied(),
            poll_interval_ms: matches.get_one::<u64>("poll-interval").copied(),
        },
        foreground: ForegroundConfig {
            bypass: matches.get_flag("no-bypass").then_some(false),
            extra_assurance_attempts: matches.get_one::<u32>("extra-assurance").copied(),
            maintain: matches.get_flag("no-maintain").then_some(false),
            ..ForegroundConfig::default()
        },
        input: InputConfig { suppression },
        process: ProcessConfig {
            input_idle_timeout_ms: matches.get_one::<u64>("input-idle-timeout").copied(),
        },
    })
}

fn handle_pin_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let executable = matches
        .get_one::<String>("executable")
        .ok_or("Executable argument is required")?;

    let config = load_config(matches)?;
    let request = PinRequest::new(PathBuf::from(executable), config.policy());

    info!(
        event = "cli.pin_started",
        executable = %executable,
        max_attempts = request.policy.window_max_attempts,
        suppression = %request.policy.suppression
    );

    let desktop = SystemDesktop::new();
    match pin_target(&desktop, &request, &mut print_progress) {
        Ok(report) => {
            info!(
                event = "cli.pin_completed",
                pid = report.process.pid.as_u32(),
                window = %report.window,
                confirmed = report.foreground.is_confirmed(),
                stop = ?report.maintenance.map(|m| m.stop)
            );
            Ok(())
        }
        Err(e) => {
            println!("{}", failure_message(&e));
            error!(event = "cli.pin_failed", error = %e);
            Err(e.into())
        }
    }
}

fn print_progress(event: &PinEvent) {
    match event {
        PinEvent::SuppressionStarted { mode } => {
            println!("Keyboard suppression enabled ({}).", mode)
        }
        PinEvent::ProcessResolved(process) => match process.origin {
            ProcessOrigin::Discovered => println!("Process found (PID: {})", process.pid),
            ProcessOrigin::Launched { .. } => println!("Process started (PID: {})", process.pid),
        },
        PinEvent::WindowLocated { .. } => println!("Focusing window..."),
        PinEvent::Foreground(outcome) => match outcome {
            ForegroundOutcome::Confirmed { .. } => println!("Window focused."),
            ForegroundOutcome::Unconfirmed { attempts } => {
                warn!(event = "cli.pin_foreground_unconfirmed", attempts = attempts);
                println!("Unable to confirm foreground; continuing.")
            }
            ForegroundOutcome::WindowLost { .. } => println!("Window closed."),
        },
        PinEvent::SuppressionEnded { .. } => println!("Keyboard suppression released."),
        PinEvent::Maintenance(outcome) => match outcome.stop {
            MaintenanceStop::ProcessExited => println!("Process exited."),
            MaintenanceStop::WindowLost => println!("Window closed."),
        },
    }
}

/// The sentence printed when the run fails after configuration.
fn failure_message(error: &PinError) -> String {
    match error {
        PinError::Process(e @ ProcessError::LaunchFailed { message, .. }) => {
            format!("{}\n{}", e, message)
        }
        PinError::Window(WindowError::NotFound { pid, attempts }) => format!(
            "Failed to find main window for the process.\n\
             Unable to find window for process (PID: {}) after {} attempts.",
            pid, attempts
        ),
        PinError::Process(e) => e.to_string(),
        PinError::Window(e) => e.to_string(),
    }
}
