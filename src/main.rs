use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;

use holidayschedule::configuration::Configuration;
use holidayschedule::manager::manager::IManager;
use holidayschedule::time::recurringholiday::defaultholidays::us_federal_holidays;
use holidayschedule::time::recurringholiday::holidayrule::HolidayRule;
use holidayschedule::time::schedule::holidayschedulegenerator::HolidayScheduleGenerator;

mod logger;

const USAGE: &str = "usage: holidayschedule [CONFIG.json [SET_NAME]]";

struct Args {
    config_path: Option<String>,
    set_name: Option<String>
}

fn parse_args() -> anyhow::Result<Args> {
    use lexopt::prelude::*;

    let mut args = Args { config_path: None, set_name: None };
    let mut parser = lexopt::Parser::from_env();
    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            Value(value) if args.config_path.is_none() => {
                args.config_path = Some(value.string()?);
            }
            Value(value) if args.set_name.is_none() => {
                args.set_name = Some(value.string()?);
            }
            _ => return Err(arg.unexpected().into()),
        }
    }
    Ok(args)
}

fn load_rules(args: &Args) -> anyhow::Result<(HolidayScheduleGenerator, Arc<[HolidayRule]>)> {
    let Some(config_path) = &args.config_path else {
        log::debug!("no configuration given, using US federal holidays");
        let rules = us_federal_holidays().context("building default holiday set")?;
        return Ok((HolidayScheduleGenerator::new(), rules.into()));
    };

    let config = Configuration::from_reader(config_path)
        .with_context(|| format!("loading configuration from {config_path}"))?;
    let set_name = match &args.set_name {
        Some(name) => name.clone(),
        None => {
            let names = config.holiday_set_manager().names();
            names.into_iter().next().context("configuration defines no holiday sets")?
        }
    };
    log::debug!("using holiday set '{set_name}'");
    let rules = config.holiday_set(&set_name)?;
    Ok((config.schedule_generator(), rules))
}

/// Reads years line by line and prints their holidays until a blank line or
/// end of input.
fn run_interactive<R: BufRead, W: Write>(input: R,
                                         mut output: W,
                                         generator: &HolidayScheduleGenerator,
                                         rules: &[HolidayRule]) -> io::Result<()> {
    writeln!(output, "Holiday Schedule Generator")?;
    let mut lines = input.lines();
    loop {
        write!(output, "Enter the year to generate holiday dates for (or press Enter to exit): ")?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => String::new()
        };
        let line = line.trim();
        if line.is_empty() {
            writeln!(output, "Exiting application.")?;
            return Ok(());
        }

        let Ok(year) = line.parse::<i32>() else {
            writeln!(output, "Invalid year. Please enter a valid year.")?;
            continue;
        };

        match generator.generate_for_year(year, rules) {
            Ok(holidays) => {
                writeln!(output, "Holiday dates for {year}:")?;
                for holiday in holidays {
                    writeln!(output, "- {}: {}", holiday.name(), holiday.date())?;
                }
            }
            Err(err) => {
                log::warn!("generating holidays for {year} failed: {err}");
                writeln!(output, "{err}")?;
            }
        }
    }
}

fn run() -> anyhow::Result<()> {
    let level = match env::var("HOLIDAYSCHEDULE_LOG").unwrap_or_default().as_str() {
        "" | "off" => log::LevelFilter::Off,
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        unk => anyhow::bail!("unrecognized log level '{}'", unk),
    };
    log::set_max_level(level);
    logger::Logger::init()?;

    let args = parse_args()?;
    let (generator, rules) = load_rules(&args)?;
    let stdin = io::stdin();
    run_interactive(stdin.lock(), io::stdout(), &generator, &rules)?;
    Ok(())
}

fn main() -> std::process::ExitCode {
    match run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(input: &str) -> String {
        let rules = us_federal_holidays().unwrap();
        let generator = HolidayScheduleGenerator::new();
        let mut output = Vec::new();
        run_interactive(input.as_bytes(), &mut output, &generator, &rules).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn prints_one_line_per_holiday() {
        let out = transcript("2023\n\n");
        assert!(out.contains("Holiday dates for 2023:"));
        assert!(out.contains("- Thanksgiving: 2023-11-23\n"));
        assert!(out.contains("- Memorial Day: 2023-05-29\n"));
        assert_eq!(out.matches("\n- ").count(), 9);
        assert!(out.ends_with("Exiting application.\n"));
    }

    #[test]
    fn first_named_set_is_used_when_none_is_given() {
        let path = env::temp_dir().join(format!("holidayschedule-{}.json", std::process::id()));
        std::fs::write(&path, r#"{
            "holiday_sets": [
                { "name": "B", "holidays": [
                    { "name": "Boxing Day", "holiday_type": "FixedDate", "month": 12, "day": 26 }
                ] },
                { "name": "A", "holidays": [
                    { "name": "Christmas", "holiday_type": "FixedDate", "month": 12, "day": 25 }
                ] }
            ]
        }"#).unwrap();
        let args = Args { config_path: Some(path.display().to_string()), set_name: None };
        let (_, rules) = load_rules(&args).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].name(), "Christmas");
    }

    #[test]
    fn rejects_non_numeric_and_out_of_range_years() {
        let out = transcript("abc\n1799\n");
        assert!(out.contains("Invalid year. Please enter a valid year."));
        assert!(out.contains("year 1799 is below the minimum of 1800"));
        assert!(out.ends_with("Exiting application.\n"));
    }
}
