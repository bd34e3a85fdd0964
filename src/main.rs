use anyhow::Result;
use clap::Parser;
use log::info;

use intersection_sim::{
    config::SimulationConfig,
    simulation::{CaptureOutcome, Intersection, SignalPhase},
};

#[derive(Parser)]
#[command(name = "intersection-sim")]
#[command(about = "Headless red-light enforcement simulation of a signalised intersection")]
struct Args {
    /// Simulation configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 3600)]
    ticks: u64,

    /// Milliseconds per tick
    #[arg(short, long, default_value_t = 16.0)]
    delta: f32,

    /// Random seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Capture automatically once per red phase when a violation is visible
    #[arg(short, long)]
    auto_capture: bool,

    /// Enable verbose logging for detailed simulation progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info })
        .init();
    info!("Starting intersection simulation (headless)");

    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path);
            SimulationConfig::load_from_file(path)?
        }
        None => SimulationConfig::default(),
    };

    info!(
        "Signal cycle: green {:.0}ms, yellow {:.0}ms, red {:.0}ms",
        config.signal.green_ms, config.signal.yellow_ms, config.signal.red_ms
    );
    info!(
        "Traffic: up to {} vehicles, one every {:.0}ms",
        config.traffic.max_vehicles, config.traffic.spawn_interval_ms
    );

    let seed = args.seed.or(config.random.seed);
    let mut intersection = Intersection::new(&config, seed)?;

    let ticks_per_report = ((1000.0 / args.delta.max(1.0)) as u64).max(1) * 5;
    let mut captured_this_red = false;
    let mut outcomes = [0u32; 3];

    for tick in 1..=args.ticks {
        let report = intersection.tick(args.delta);

        if report.phase_changed {
            captured_this_red = false;
            if report.phase == SignalPhase::Red {
                info!("Tick {}: light turned red with {} vehicles on the road", tick, intersection.vehicles().len());
            }
        }

        if args.auto_capture && report.phase.is_red() && !captured_this_red {
            let sample = intersection.sample();
            if !sample.is_empty() {
                if let Some(id) = intersection.highlight() {
                    if let Some(vehicle) = intersection.vehicles().get(id) {
                        info!("Tick {}: highlighting {} ({} violators in frame)", tick, vehicle.plate, sample.len());
                    }
                }
                let outcome = intersection.capture();
                info!("Tick {}: {}", tick, outcome);
                captured_this_red = true;
                outcomes[outcome_index(outcome)] += 1;
            }
        }

        if tick % ticks_per_report == 0 {
            let signal = intersection.signal();
            info!(
                "Tick {}: {} light ({:.0}ms left), {} active, {} violating, score {}",
                tick,
                signal.phase(),
                signal.remaining_ms(),
                intersection.vehicles().len(),
                intersection.vehicles().query_violations().len(),
                intersection.scoreboard().score
            );
        }
    }

    let vehicles = intersection.vehicles();
    let scoreboard = intersection.scoreboard();
    info!("Simulation completed!");
    info!("Simulated time: {:.1}s over {} ticks", intersection.elapsed_ms() / 1000.0, intersection.ticks());
    info!("Vehicles: {} spawned, {} departed, {} active", vehicles.total_spawned(), vehicles.total_despawned(), vehicles.len());
    info!(
        "Captures: {} confirmed, {} false positives, {} rejected",
        outcomes[0], outcomes[1], outcomes[2]
    );
    info!("Violations recorded: {}, final score: {}", scoreboard.violations, scoreboard.score);

    Ok(())
}

fn outcome_index(outcome: CaptureOutcome) -> usize {
    match outcome {
        CaptureOutcome::Confirmed => 0,
        CaptureOutcome::FalsePositive => 1,
        CaptureOutcome::RejectedNoRedLight => 2,
    }
}
