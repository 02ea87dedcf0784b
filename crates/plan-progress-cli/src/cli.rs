use anyhow::{Context, Result};
use clap::{builder::PossibleValuesParser, value_parser, Arg, ArgAction, ArgMatches, Command};
use plan_progress_core::{
    confirmation, progress_line, render_report, state_value, OutputFormat, ProgressConfig,
    ProgressTracker, DEFAULT_MANIFEST, DEFAULT_STATE_FILE,
};
use std::path::PathBuf;

pub(crate) fn command() -> Command {
    Command::new("plan-progress")
        .version(plan_progress_core::VERSION)
        .about("Report completion progress across planning phases")
        .arg(
            Arg::new("root")
                .long("root")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Project root that relative paths are resolved against [default: .]"),
        )
        .arg(
            Arg::new("manifest")
                .long("manifest")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help(format!(
                    "Phase manifest, a JSON array of {{\"phase\": path}} [default: {DEFAULT_MANIFEST}]"
                )),
        )
        .arg(
            Arg::new("marker")
                .long("marker")
                .global(true)
                .help("Completion marker, matched case-insensitively [default: SUMMARY.md]"),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .global(true)
                .value_parser(value_parser!(usize))
                .help("Progress bar width in cells [default: 20]"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log progress details to stderr (-v info, -vv debug)"),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .global(true)
                .default_value("text")
                .value_parser(PossibleValuesParser::new(["text", "json"]))
                .help("Log output format"),
        )
        .subcommand(
            Command::new("report")
                .about("Print the progress bar (default when no subcommand is given)")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("bar")
                        .value_parser(PossibleValuesParser::new(OutputFormat::NAMES))
                        .help("Output format"),
                ),
        )
        .subcommand(
            Command::new("update-state")
                .about("Write the progress into the state file's **Progress:** field")
                .arg(
                    Arg::new("state")
                        .long("state")
                        .value_parser(value_parser!(PathBuf))
                        .help(format!("State file to update [default: {DEFAULT_STATE_FILE}]")),
                )
                .arg(
                    Arg::new("state-width")
                        .long("state-width")
                        .value_parser(value_parser!(usize))
                        .help("Bar width written to the state file [default: 10]"),
                ),
        )
}

pub(crate) fn dispatch(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("report", args)) => {
            let format = args
                .get_one::<String>("format")
                .map(|f| f.parse::<OutputFormat>())
                .transpose()?
                .unwrap_or_default();
            report(config_from(args), format)
        }
        Some(("update-state", args)) => update_state(config_from(args)),
        _ => report(config_from(matches), OutputFormat::Bar),
    }
}

/// Overlay command-line values on the defaults
fn config_from(args: &ArgMatches) -> ProgressConfig {
    let mut config = ProgressConfig::new();
    if let Some(root) = args.get_one::<PathBuf>("root") {
        config = config.with_root(root);
    }
    if let Some(manifest) = args.get_one::<PathBuf>("manifest") {
        config = config.with_manifest(manifest);
    }
    if let Some(marker) = args.get_one::<String>("marker") {
        config = config.with_marker(marker);
    }
    if let Some(width) = args.get_one::<usize>("width") {
        config = config.with_bar_width(*width);
    }
    if let Ok(Some(state)) = args.try_get_one::<PathBuf>("state") {
        config = config.with_state_file(state);
    }
    if let Ok(Some(width)) = args.try_get_one::<usize>("state-width") {
        config = config.with_state_bar_width(*width);
    }
    config
}

fn report(config: ProgressConfig, format: OutputFormat) -> Result<()> {
    let tracker = ProgressTracker::new(config)?;
    let report = tracker.run().with_context(|| {
        format!(
            "failed to compute progress from {}",
            tracker.config().manifest.display()
        )
    })?;

    println!("{}", render_report(&report, format, tracker.config().bar())?);
    if format.has_confirmation() {
        println!("{}", confirmation(&report));
    }
    Ok(())
}

fn update_state(config: ProgressConfig) -> Result<()> {
    let tracker = ProgressTracker::new(config)?;
    let report = tracker.run().with_context(|| {
        format!(
            "failed to compute progress from {}",
            tracker.config().manifest.display()
        )
    })?;

    let state_file = tracker.config().state_file.display().to_string();
    let update = tracker
        .update_state(&report)
        .with_context(|| format!("failed to update {state_file}"))?;

    println!("{}", progress_line(&report, tracker.config().bar()));
    if update.changed() {
        println!("Updated {state_file} with progress: {}", update.value);
    } else {
        println!(
            "{state_file} already records progress: {}",
            state_value(&report, tracker.config().state_bar())
        );
    }
    Ok(())
}
