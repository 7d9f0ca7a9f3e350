use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("fgpin")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Launch or find a program and keep its main window in the foreground")
        .long_about(
            "fgpin finds a running process for the given executable (or launches it), waits \
             for its main window, forces that window to the foreground and keeps it there \
             until the process exits. Intended for kiosk and single-application setups.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue),
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("executable")
                .help("Full path to the executable to pin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("attempts")
                .long("attempts")
                .help("Window lookups before giving up (overrides config)")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("poll-interval")
                .long("poll-interval")
                .help("Milliseconds between window lookups (overrides config)")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("suppress")
                .long("suppress")
                .help("Keyboard suppression while taking focus (overrides config)")
                .value_parser(["off", "focus-keys", "all"]),
        )
        .arg(
            Arg::new("no-bypass")
                .long("no-bypass")
                .help("Use a plain foreground request instead of the focus-steal workaround")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extra-assurance")
                .long("extra-assurance")
                .help("Extra plain foreground requests after the takeover (overrides config)")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("no-maintain")
                .long("no-maintain")
                .help("Exit once the window is in front instead of keeping it there")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("input-idle-timeout")
                .long("input-idle-timeout")
                .help("Milliseconds to wait for a launched process to finish starting (0 disables)")
                .value_parser(clap::value_parser!(u64)),
        )
}

/// The sentence printed to stdout when the arguments are unusable.
pub fn usage_line() -> String {
    format!(
        "{}\nPass exactly one argument: the full path to the executable.",
        build_cli().render_usage()
    )
}
