use clap::{Arg, ArgAction, Command, ValueHint};
use std::path::PathBuf;

/// Command line definition shared by the binary and its tests.
pub fn build_cli() -> Command {
    Command::new("mplot")
        .version(clap::crate_version!())
        .about("Evenly spaced ranges, coordinate grids and demonstration plots")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("arange")
                .about("Print evenly spaced values within [START, STOP)")
                .arg(
                    Arg::new("start")
                        .help("Start of the interval")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("stop")
                        .help("End of the interval (excluded)")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("step")
                        .short('s')
                        .long("step")
                        .help("Spacing between values. Defaults to 1.")
                        .allow_negative_numbers(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("integer")
                        .short('i')
                        .long("integer")
                        .help("Treat the bounds and step as integers")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("meshgrid")
                .about("Print the coordinate grids of two ranges")
                .arg(
                    Arg::new("x")
                        .long("x")
                        .help("x range as START:STOP[:STEP]")
                        .required(true)
                        .allow_hyphen_values(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("y")
                        .long("y")
                        .help("y range as START:STOP[:STEP]")
                        .required(true)
                        .allow_hyphen_values(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                ),
        )
        .subcommand(
            Command::new("demo")
                .about("Render a demonstration plot to an HTML file")
                .arg(
                    Arg::new("config")
                        .help("Path to a JSON demo configuration file")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("kind")
                        .short('k')
                        .long("kind")
                        .help("Demo to render. Overrides the kind in the configuration file.")
                        .value_parser(["simple", "multiple", "subplots", "contour", "surface"]),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output_file")
                        .help("HTML file the plot is written to. Overrides the configuration file.")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("title")
                        .short('t')
                        .long("title")
                        .help("Plot title. Overrides the configuration file.")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("print_config")
                        .long("print-config")
                        .help("Print the resolved configuration as JSON instead of rendering. Implied when no configuration file is given.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
}
