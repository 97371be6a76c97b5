use anyhow::{anyhow, Result};
use clap::{arg, Arg, ArgMatches, Command};
use knap_algorithms::{solve_challenge as run_solver, Algorithm, SolverConfig};
use knap_challenges::*;
use knap_utils::{jsonify, load_json_arg, render_ids, u8s_from_str};
use std::{fs, path::PathBuf};

fn limit_args(command: Command, with_volume: bool) -> Command {
    let command = command
        .allow_negative_numbers(true)
        .arg(arg!(<CAPACITY> "Maximum total weight"));
    let command = if with_volume {
        command.arg(arg!(<MAX_VOLUME> "Maximum total volume"))
    } else {
        command
    };
    command
        .arg(arg!(<NUM_ITEMS> "Number of items that follow"))
        .arg(
            // Negative fields still parse as values; `--option` tokens end the list.
            Arg::new("ITEMS")
                .help("Item fields, one group per item")
                .num_args(0..),
        )
}

pub fn cli() -> Command {
    Command::new("knap")
        .about("Selects items under weight and volume limits")
        .arg_required_else_help(true)
        .arg(
            arg!(--config [CONFIG] "Solver config json string or path to json file")
                .global(true),
        )
        .arg(
            Arg::new("max_cells")
                .long("max-cells")
                .value_name("MAX_CELLS")
                .help("Fail instead of allocating a DP table with more cells")
                .value_parser(clap::value_parser!(usize))
                .global(true),
        )
        .subcommand(
            limit_args(
                Command::new("solve")
                    .about("Selects items given as `id weight volume value` groups"),
                true,
            )
            .arg(arg!(--algorithm [ALGORITHM] "Algorithm to run, dp unless configured otherwise")),
        )
        .subcommand(limit_args(
            Command::new("solve_weight")
                .about("Exact selection on weight alone, items given as `id weight value` groups"),
            false,
        ))
        .subcommand(
            limit_args(
                Command::new("greedy")
                    .about("Approximate ratio-ordered selection, items as `id weight volume value`"),
                true,
            )
            .arg(
                arg!(--ratio [RATIO] "value_per_size or value_per_weight")
                    .default_value("value_per_size"),
            ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generates a random challenge")
                .arg(arg!(<SEED> "A string used in seed generation"))
                .arg(
                    arg!(--"num-items" [NUM_ITEMS] "Number of items")
                        .default_value("20")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--budget [BUDGET] "Limits as a percentage of the catalog totals")
                        .default_value("50")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the challenge is saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("solve_challenge")
                .about("Solves a challenge and prints the solution json")
                .arg(arg!(<CHALLENGE> "Challenge json string, path to json file, or '-' for stdin"))
                .arg(arg!(--algorithm [ALGORITHM] "Overrides the configured algorithm")),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a solution against a challenge")
                .arg(arg!(<CHALLENGE> "Challenge json string, path to json file, or '-' for stdin"))
                .arg(arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")),
        )
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some((name @ ("solve" | "solve_weight" | "greedy"), sub_m)) => {
            let (challenge, config) = catalog_request(name, sub_m)?;
            solve(&challenge, &config)
        }
        Some(("generate", sub_m)) => generate(
            required(sub_m, "SEED")?,
            sub_m.get_one::<usize>("num-items").copied().unwrap_or(20),
            sub_m.get_one::<u32>("budget").copied().unwrap_or(50),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("solve_challenge", sub_m)) => {
            solve_challenge(required(sub_m, "CHALLENGE")?, load_config(sub_m)?)
        }
        Some(("verify_solution", sub_m)) => verify_solution(
            required(sub_m, "CHALLENGE")?,
            required(sub_m, "SOLUTION")?,
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    }
}

/// Catalog and solver config for the `solve`, `solve_weight` and `greedy` subcommands.
pub fn catalog_request(name: &str, sub_m: &ArgMatches) -> Result<(Challenge, SolverConfig)> {
    let mut config = load_config(sub_m)?;
    let (layout, max_volume) = match name {
        "solve" => (ItemLayout::WeightVolume, Some(required(sub_m, "MAX_VOLUME")?)),
        "solve_weight" => {
            config.algorithm = Algorithm::WeightOnly;
            (ItemLayout::WeightOnly, None)
        }
        "greedy" => {
            config.algorithm = match required(sub_m, "ratio")?.as_str() {
                "value_per_size" => Algorithm::GreedyValuePerSize,
                "value_per_weight" => Algorithm::GreedyValuePerWeight,
                other => return Err(anyhow!("Unknown ratio '{}'", other)),
            };
            (ItemLayout::WeightVolume, Some(required(sub_m, "MAX_VOLUME")?))
        }
        other => return Err(anyhow!("Subcommand '{}' takes no catalog", other)),
    };

    let capacity = parse_non_negative("capacity", &required(sub_m, "CAPACITY")?)?;
    let max_volume = match max_volume {
        Some(max_volume) => parse_non_negative("max volume", &max_volume)?,
        None => 0,
    };
    let num_items = parse_non_negative("number of items", &required(sub_m, "NUM_ITEMS")?)?;
    let items = parse_items(num_items, &item_fields(sub_m), layout)?;
    Ok((Challenge::new(capacity, max_volume, items), config))
}

fn required(sub_m: &ArgMatches, id: &str) -> Result<String> {
    sub_m
        .get_one::<String>(id)
        .cloned()
        .ok_or_else(|| anyhow!("Missing argument {}", id))
}

fn item_fields(sub_m: &ArgMatches) -> Vec<String> {
    sub_m
        .get_many::<String>("ITEMS")
        .map(|fields| fields.cloned().collect())
        .unwrap_or_default()
}

/// Config file first, then command line overrides.
fn load_config(sub_m: &ArgMatches) -> Result<SolverConfig> {
    let mut config = match sub_m.get_one::<String>("config") {
        Some(arg) => load_json_arg::<SolverConfig>(arg)?,
        None => SolverConfig::default(),
    };
    if let Ok(Some(algorithm)) = sub_m.try_get_one::<String>("algorithm") {
        config.algorithm = algorithm.parse()?;
    }
    if let Some(max_cells) = sub_m.get_one::<usize>("max_cells") {
        config.max_table_cells = *max_cells;
    }
    log::debug!("Using {:?}", config);
    Ok(config)
}

pub fn solve(challenge: &Challenge, config: &SolverConfig) -> Result<()> {
    if !config.algorithm.is_exact() {
        log::info!("{} is approximate", config.algorithm);
    }
    let solution = run_solver(challenge, config)?;
    println!("{}", render_ids(&solution.items));
    Ok(())
}

pub fn generate(
    seed: String,
    num_items: usize,
    budget: u32,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let difficulty = Difficulty { num_items, budget };
    let challenge = Challenge::generate_instance(&u8s_from_str(&seed), &difficulty)?;
    let json = jsonify(&challenge)?;
    match output_file {
        Some(path) => {
            fs::write(&path, json)
                .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;
            log::info!("Wrote challenge to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub fn solve_challenge(challenge: String, config: SolverConfig) -> Result<()> {
    let challenge = load_json_arg::<Challenge>(&challenge)?;
    let solution = run_solver(&challenge, &config)?;
    println!("{}", jsonify(&solution)?);
    Ok(())
}

pub fn verify_solution(challenge: String, solution: String) -> Result<()> {
    if challenge == "-" && solution == "-" {
        return Err(anyhow!("Only one of CHALLENGE and SOLUTION can be read from stdin"));
    }
    let challenge = load_json_arg::<Challenge>(&challenge)?;
    let solution = load_json_arg::<Solution>(&solution)?;
    let evaluation = challenge
        .verify_solution(&solution)
        .map_err(|e| anyhow!("Invalid solution: {}", e))?;
    println!("{}", jsonify(&evaluation)?);
    Ok(())
}
