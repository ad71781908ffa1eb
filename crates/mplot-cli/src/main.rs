use anyhow::{Context, Result};
use clap::ArgMatches;
use log::LevelFilter;
use std::path::PathBuf;

use mplot_cli::cli::build_cli;
use mplot_cli::demo::input::DemoConfig;
use mplot_cli::demo::run_demo;
use mplot_cli::util::parse_range_spec;
use mplot_core::dynamic::{list, str, Object};
use mplot_core::math::{arange, meshgrid};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MPLOT_LOG", "error,mplot=info"))
        .init();

    let matches = build_cli().get_matches();

    let (name, result) = match matches.subcommand() {
        Some(("arange", sub_m)) => ("arange", handle_arange(sub_m)),
        Some(("meshgrid", sub_m)) => ("meshgrid", handle_meshgrid(sub_m)),
        Some(("demo", sub_m)) => ("demo", handle_demo(sub_m)),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("[mplot::{}] failed: {:#}", name, e);
            std::process::exit(1)
        }
    }
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(id)
        .with_context(|| format!("Missing required argument '{}'", id))
}

fn parse_number<T>(value: &str, id: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse::<T>()
        .with_context(|| format!("Invalid {} '{}'", id, value))
}

fn handle_arange(matches: &ArgMatches) -> Result<()> {
    let start = required(matches, "start")?;
    let stop = required(matches, "stop")?;
    let step = matches.get_one::<String>("step");

    if matches.get_flag("integer") {
        let step = match step {
            Some(step) => parse_number::<i64>(step, "step")?,
            None => 1,
        };
        let values = arange(
            parse_number::<i64>(start, "start")?,
            parse_number::<i64>(stop, "stop")?,
            step,
        )?;
        println!("{}", str(&list(values.iter().copied())));
    } else {
        let step = match step {
            Some(step) => parse_number::<f64>(step, "step")?,
            None => 1.0,
        };
        let values = arange(
            parse_number::<f64>(start, "start")?,
            parse_number::<f64>(stop, "stop")?,
            step,
        )?;
        println!("{}", str(&Object::from(values)));
    }
    Ok(())
}

fn handle_meshgrid(matches: &ArgMatches) -> Result<()> {
    let x = parse_range_spec(required(matches, "x")?)?.generate()?;
    let y = parse_range_spec(required(matches, "y")?)?.generate()?;
    log::debug!("[mplot::meshgrid] {} x {} grid", y.len(), x.len());

    let (xx, yy) = meshgrid(&x, &y);
    println!("X = {}", str(&Object::from(xx)));
    println!("Y = {}", str(&Object::from(yy)));
    Ok(())
}

fn handle_demo(matches: &ArgMatches) -> Result<()> {
    let config_path: Option<&PathBuf> = matches.get_one("config");
    if let Some(path) = config_path {
        log::info!("[mplot::demo] Using config: {:?}", path);
    }

    let config = DemoConfig::from_arguments(config_path, matches)?;

    // No config file: print the template instead of rendering.
    if config_path.is_none() || matches.get_flag("print_config") {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    run_demo(&config)
}
