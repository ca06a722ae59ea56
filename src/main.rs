use clap::Parser;
use miette::{IntoDiagnostic, Result};
use reelpay::application::engine::PayoutEngine;
use reelpay::application::simulator::{SimulationReport, Simulator};
use reelpay::domain::bet::Bet;
use reelpay::domain::ports::RandomSourceBox;
use reelpay::domain::symbol::Payline;
use reelpay::domain::variation::ReelConfiguration;
use reelpay::infrastructure::rng::StdRandomSource;
use reelpay::interfaces::csv::round_writer::RoundWriter;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of rounds to play
    #[arg(long, default_value_t = 10_000)]
    rounds: u64,

    /// Coins bet on the payline every round (0-3)
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    bet: i64,

    /// Play the lucky coin every round
    #[arg(long)]
    lucky_coin: bool,

    /// Seed for a reproducible run. Drawn from the OS when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Write every round to this CSV file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let bet = Bet::new(cli.bet).into_diagnostic()?;
    let config = Arc::new(ReelConfiguration::classic().into_diagnostic()?);

    let rng: RandomSourceBox = match cli.seed {
        Some(seed) => Box::new(StdRandomSource::seeded(seed)),
        None => Box::new(StdRandomSource::from_entropy()),
    };
    let engine = PayoutEngine::new(config.clone(), rng);
    let faces = engine.initial_faces().into_diagnostic()?;
    let resting = Payline::new(faces[1], faces[4], faces[7]);

    let mut simulator = Simulator::new(engine, bet, cli.lucky_coin);
    let report = match cli.log {
        Some(path) => {
            let mut writer = RoundWriter::new(File::create(path).into_diagnostic()?);
            let report = simulator
                .run_with(cli.rounds, |round| writer.write_round(round))
                .into_diagnostic()?;
            writer.finish().into_diagnostic()?;
            report
        }
        None => simulator.run(cli.rounds).into_diagnostic()?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
    } else {
        print_summary(&report, &config, &resting);
    }

    Ok(())
}

fn print_summary(report: &SimulationReport, config: &ReelConfiguration, resting: &Payline) {
    println!("machine: {}", report.machine);
    println!("idle payline: {}", config.describe_payline(resting));
    println!("rounds: {}", report.rounds);
    println!("wagered: {}", report.wagered);
    println!("paid: {}", report.paid);
    println!("bonus paid: {}", report.bonus_paid);
    println!("wins: {}", report.wins);
    println!("losses: {}", report.losses);
    println!("return to player: {:.4}", report.return_to_player());
    println!("hit rate: {:.4}", report.hit_rate());
    for (index, hits) in report.rule_hits.iter().enumerate() {
        println!("rule {index}: {hits}");
    }
}
