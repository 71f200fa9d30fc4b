use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use trip_collector::logging::{init_logger, parse_level};
use trip_collector::models::{LocationSet, ValueIndex};
use trip_collector::report::{write_json_report, write_report};
use trip_collector::utils::init_map::{init_map, validate_coordinates};
use trip_collector::utils::synthetic::{synthetic_dataset, SyntheticOptions};
use trip_collector::{BudgetedDfsPlanner, Error, PlannerConfig, Result, TripPlanner};

const LATITUDE_ARG_NAME: &str = "LAT";
const LONGITUDE_ARG_NAME: &str = "LON";
const DATA_DIR_ARG_NAME: &str = "data-dir";
const CONFIG_ARG_NAME: &str = "config";
const BUDGET_ARG_NAME: &str = "budget";
const FANOUT_ARG_NAME: &str = "fanout";
const CANDIDATES_ARG_NAME: &str = "candidates";
const JSON_ARG_NAME: &str = "json";
const LOG_LEVEL_ARG_NAME: &str = "log-level";
const SEED_ARG_NAME: &str = "seed";
const LOCATIONS_ARG_NAME: &str = "locations";
const VALUES_ARG_NAME: &str = "values";

fn planner_args() -> Vec<Arg> {
    vec![
        Arg::new(CONFIG_ARG_NAME)
            .help("Path to a JSON file with planner options")
            .long(CONFIG_ARG_NAME)
            .value_parser(value_parser!(PathBuf)),
        Arg::new(BUDGET_ARG_NAME)
            .help("Maximum round trip distance in km")
            .short('b')
            .long(BUDGET_ARG_NAME)
            .value_parser(value_parser!(f64)),
        Arg::new(FANOUT_ARG_NAME)
            .help("Number of nearest neighbors considered at each step")
            .short('k')
            .long(FANOUT_ARG_NAME)
            .value_parser(value_parser!(usize)),
        Arg::new(CANDIDATES_ARG_NAME)
            .help("Number of distinct candidate trips to score")
            .short('n')
            .long(CANDIDATES_ARG_NAME)
            .value_parser(value_parser!(usize)),
        Arg::new(JSON_ARG_NAME)
            .help("Print the result as JSON")
            .long(JSON_ARG_NAME)
            .action(ArgAction::SetTrue),
        Arg::new(LOG_LEVEL_ARG_NAME)
            .help("Log level: error, warn, info, debug, trace or off")
            .long(LOG_LEVEL_ARG_NAME)
            .default_value("info"),
    ]
}

fn get_app() -> Command {
    Command::new("trip_collector")
        .about("Plans a round trip within a distance budget collecting as many distinct beers as possible")
        .subcommand_required(true)
        .subcommand(
            Command::new("plan")
                .about("Plans a trip over the brewery dump files")
                .arg(
                    Arg::new(LATITUDE_ARG_NAME)
                        .help("Home latitude in degrees")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64))
                        .index(1),
                )
                .arg(
                    Arg::new(LONGITUDE_ARG_NAME)
                        .help("Home longitude in degrees")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64))
                        .index(2),
                )
                .arg(
                    Arg::new(DATA_DIR_ARG_NAME)
                        .help("Directory with breweries.csv, geocodes.csv and beers.csv")
                        .short('d')
                        .long(DATA_DIR_ARG_NAME)
                        .default_value("data")
                        .value_parser(value_parser!(PathBuf)),
                )
                .args(planner_args()),
        )
        .subcommand(
            Command::new("demo")
                .about("Plans a trip over a generated dataset")
                .arg(
                    Arg::new(SEED_ARG_NAME)
                        .help("Seed of the generated dataset")
                        .long(SEED_ARG_NAME)
                        .default_value("42")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new(LOCATIONS_ARG_NAME)
                        .help("Number of generated locations")
                        .long(LOCATIONS_ARG_NAME)
                        .default_value("200")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new(VALUES_ARG_NAME)
                        .help("Size of the generated value catalog")
                        .long(VALUES_ARG_NAME)
                        .default_value("120")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("lat")
                        .help("Home latitude in degrees")
                        .long("lat")
                        .allow_negative_numbers(true)
                        .default_value("51.0")
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("lon")
                        .help("Home longitude in degrees")
                        .long("lon")
                        .allow_negative_numbers(true)
                        .default_value("10.0")
                        .value_parser(value_parser!(f64)),
                )
                .args(planner_args()),
        )
}

/// Config file values overridden by explicit flags
fn get_config(matches: &ArgMatches) -> Result<PlannerConfig> {
    let mut config = match matches.get_one::<PathBuf>(CONFIG_ARG_NAME) {
        Some(path) => PlannerConfig::from_file(path)?,
        None => PlannerConfig::default(),
    };

    if let Some(budget) = matches.get_one::<f64>(BUDGET_ARG_NAME) {
        config = config.with_budget(*budget);
    }
    if let Some(fanout) = matches.get_one::<usize>(FANOUT_ARG_NAME) {
        config = config.with_fanout(*fanout);
    }
    if let Some(candidates) = matches.get_one::<usize>(CANDIDATES_ARG_NAME) {
        config = config.with_max_candidates(*candidates);
    }

    config.validate()?;
    Ok(config)
}

fn get_coordinate(matches: &ArgMatches, name: &str) -> Result<f64> {
    matches
        .get_one::<f64>(name)
        .cloned()
        .ok_or_else(|| Error::invalid_input(format!("missing argument '{name}'")))
}

fn load_dataset(command: &str, matches: &ArgMatches) -> Result<(LocationSet, ValueIndex)> {
    match command {
        "plan" => {
            let latitude = get_coordinate(matches, LATITUDE_ARG_NAME)?;
            let longitude = get_coordinate(matches, LONGITUDE_ARG_NAME)?;
            validate_coordinates(0, latitude, longitude)?;

            let data_dir = matches
                .get_one::<PathBuf>(DATA_DIR_ARG_NAME)
                .cloned()
                .unwrap_or_else(|| PathBuf::from("data"));
            init_map(data_dir, latitude, longitude)
        }
        _ => {
            let latitude = get_coordinate(matches, "lat")?;
            let longitude = get_coordinate(matches, "lon")?;
            validate_coordinates(0, latitude, longitude)?;

            let defaults = SyntheticOptions::default();
            let options = SyntheticOptions {
                seed: matches.get_one::<u64>(SEED_ARG_NAME).cloned().unwrap_or(defaults.seed),
                locations: matches
                    .get_one::<usize>(LOCATIONS_ARG_NAME)
                    .cloned()
                    .unwrap_or(defaults.locations),
                catalog_size: matches
                    .get_one::<usize>(VALUES_ARG_NAME)
                    .cloned()
                    .unwrap_or(defaults.catalog_size),
                origin_latitude: latitude,
                origin_longitude: longitude,
                ..defaults
            };
            log::info!("generating {} locations with seed {}", options.locations, options.seed);
            Ok(synthetic_dataset(&options))
        }
    }
}

fn run(command: &str, matches: &ArgMatches) -> Result<()> {
    let config = get_config(matches)?;
    let (locations, values) = load_dataset(command, matches)?;

    let planner = BudgetedDfsPlanner::new(locations, config);
    let planned = planner.plan(&values);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if matches.get_flag(JSON_ARG_NAME) {
        write_json_report(&mut out, &planned, planner.locations())?;
        writeln!(out)?;
    } else {
        write_report(&mut out, &planned, planner.locations())?;
    }

    Ok(())
}

fn main() {
    let matches = get_app().get_matches();

    let Some((command, sub_matches)) = matches.subcommand() else {
        eprintln!("No subcommand was used. Use -h to print help information.");
        process::exit(1);
    };

    let level = sub_matches
        .get_one::<String>(LOG_LEVEL_ARG_NAME)
        .map(|level| parse_level(level))
        .transpose()
        .unwrap_or_else(|err| {
            eprintln!("{err}");
            process::exit(1);
        })
        .unwrap_or(log::LevelFilter::Info);

    if let Err(err) = init_logger(level) {
        eprintln!("{err}");
    }

    if let Err(err) = run(command, sub_matches) {
        log::error!("{err}");
        process::exit(1);
    }
}
