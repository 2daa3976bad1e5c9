use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use tube_planner::closure::ClosureAnalyzer;
use tube_planner::config::{CostModel, PlannerConfig};
use tube_planner::metrics::{self, JourneySample};
use tube_planner::paths::Algorithm;
use tube_planner::planner::RoutePlanner;
use tube_planner::report::Histogram;
use tube_planner::stations::{Network, load_records};

#[derive(Parser, Debug)]
#[command(
    name = "tube-planner",
    version,
    about = "Shortest journeys and closure analysis over a transit network"
)]
struct Args {
    /// JSON file of connection records (StationA, StationB, Time)
    #[arg(short, long, env = "TUBE_DATA")]
    data: PathBuf,

    /// Treat each connection as one-way, StationA to StationB
    #[arg(long)]
    directed: bool,

    /// Shortest-path algorithm
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Auto)]
    algorithm: AlgorithmArg,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan the shortest journey between two stations
    Route {
        from: String,
        to: String,
        /// Minimise the number of stops instead of travel time
        #[arg(long)]
        stops: bool,
    },
    /// Check every connection for an alternative route if it closed
    Closures,
    /// Close every connection along a line of stations
    Line {
        #[arg(required = true, num_args = 2..)]
        stations: Vec<String>,
    },
    /// Histograms of journey times and stop counts over all station pairs
    Metrics {
        #[arg(long)]
        bins: Option<usize>,
    },
    /// Journey histograms before and after closing one connection
    Impact {
        from: String,
        to: String,
        #[arg(long)]
        bins: Option<usize>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AlgorithmArg {
    Dijkstra,
    BellmanFord,
    Auto,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Dijkstra => Algorithm::Dijkstra,
            AlgorithmArg::BellmanFord => Algorithm::BellmanFord,
            AlgorithmArg::Auto => Algorithm::Auto,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let records = load_records(&args.data)
        .with_context(|| format!("loading connections from {}", args.data.display()))?;

    let config = PlannerConfig {
        directed: args.directed,
        algorithm: args.algorithm.into(),
        ..PlannerConfig::default()
    };

    let network = Network::build(&records, config.directed).context("building network")?;
    tracing::info!(
        stations = network.stations().len(),
        connections = network.graph().edge_count(),
        "network loaded"
    );

    match args.command {
        Command::Route { from, to, stops } => {
            let cost = if stops {
                CostModel::Stops
            } else {
                CostModel::TravelTime
            };
            route(&network, &config.with_cost(cost), &from, &to)
        }
        Command::Closures => closures(&network),
        Command::Line { stations } => line(&network, &stations),
        Command::Metrics { bins } => {
            let bins = bins.unwrap_or(config.histogram_bins);
            journey_metrics(&network, &config.with_histogram_bins(bins))
        }
        Command::Impact { from, to, bins } => {
            let bins = bins.unwrap_or(config.histogram_bins);
            impact(&network, &config.with_histogram_bins(bins), &from, &to)
        }
    }
}

fn route(network: &Network, config: &PlannerConfig, from: &str, to: &str) -> Result<()> {
    let planner = RoutePlanner::new(network, config);

    match planner.plan(from, to)? {
        Some(journey) => {
            match config.cost {
                CostModel::TravelTime => println!(
                    "Shortest journey duration from {from} to {to}: {} minutes",
                    journey.duration
                ),
                CostModel::Stops => println!(
                    "Number of stops from {from} to {to}: {} stops",
                    journey.stops
                ),
            }
            println!("Stations to go through: {journey}");
        }
        None => println!("No valid path found from {from} to {to}"),
    }
    Ok(())
}

fn closures(network: &Network) -> Result<()> {
    let reports = ClosureAnalyzer::new(network.graph()).analyze_all()?;
    let stations = network.stations();

    for report in &reports {
        let from = stations.name_of(report.from).unwrap_or("?");
        let to = stations.name_of(report.to).unwrap_or("?");
        if report.feasible {
            println!("Closure can be executed for edge: {from} -- {to}");
        } else {
            println!("Closure cannot be executed for edge: {from} -- {to}");
        }
    }

    let infeasible = reports.iter().filter(|r| !r.feasible).count();
    println!();
    println!(
        "{} of {} connections cannot be closed without stranding a station",
        infeasible,
        reports.len()
    );
    Ok(())
}

fn line(network: &Network, names: &[String]) -> Result<()> {
    let chain = names
        .iter()
        .map(|name| network.stations().require(name))
        .collect::<Result<Vec<_>, _>>()?;

    let report = ClosureAnalyzer::new(network.graph()).analyze_chain(&chain)?;
    for pair in &report.pairs {
        let from = network.stations().name_of(pair.from).unwrap_or("?");
        let to = network.stations().name_of(pair.to).unwrap_or("?");
        if pair.connected {
            println!("{from} -- {to}: alternative route available");
        } else {
            println!("No path from {from} to {to}");
        }
    }

    if report.feasible() {
        println!("Line closure can be executed");
    } else {
        println!("Line closure cannot be executed");
    }
    Ok(())
}

fn journey_metrics(network: &Network, config: &PlannerConfig) -> Result<()> {
    let samples = metrics::aggregate(network.graph(), config.algorithm)?;
    print_histograms("", &samples, config.histogram_bins);
    Ok(())
}

fn impact(network: &Network, config: &PlannerConfig, from: &str, to: &str) -> Result<()> {
    let u = network.stations().require(from)?;
    let v = network.stations().require(to)?;

    let impact = metrics::closure_impact(network.graph(), u, v, config.algorithm)
        .with_context(|| format!("closing {from} -- {to}"))?;

    print_histograms("Pre-closure ", &impact.before, config.histogram_bins);
    print_histograms("Post-closure ", &impact.after, config.histogram_bins);
    println!(
        "{} station pairs disconnected by closing {from} -- {to}",
        impact.disconnected_pairs()
    );
    Ok(())
}

fn print_histograms(label: &str, samples: &[JourneySample], bins: usize) {
    println!("{label}journey times (minutes), {} station pairs", samples.len());
    match Histogram::from_samples(metrics::durations(samples), bins) {
        Some(hist) => print!("{hist}"),
        None => println!("  (no connected pairs)"),
    }
    println!();

    println!("{label}stops count");
    match Histogram::unit_bins(metrics::stops(samples)) {
        Some(hist) => print!("{hist}"),
        None => println!("  (no connected pairs)"),
    }
    println!();
}
