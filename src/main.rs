// stepviz: record textbook algorithms and replay them in the terminal

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use stepviz::algorithm::{Algorithm, Family};
use stepviz::catalog::CATALOG;
use stepviz::config::{self, Config};
use stepviz::input::graph::node_label;
use stepviz::input::parse::{parse_edges, parse_node, parse_values};
use stepviz::input::random::InputRng;
use stepviz::input::{clamp_target, AlgorithmInput};
use stepviz::recorder::record;
use stepviz::replay::Speed;
use stepviz::session::Session;
use stepviz::ui::App;

/// Input selection shared by `play` and `trace`.
#[derive(clap::Args, Clone, Debug, Default)]
struct InputArgs {
    /// Algorithm to record
    #[arg(long, short)]
    algorithm: Option<Algorithm>,

    /// Array values, comma or space separated (e.g. "5,3,4,1,2")
    #[arg(long)]
    values: Option<String>,

    /// Search target or pair sum
    #[arg(long)]
    target: Option<i64>,

    /// Sliding window size
    #[arg(long)]
    window: Option<usize>,

    /// Graph edges (e.g. "N1-N2, N2-N3")
    #[arg(long)]
    edges: Option<String>,

    /// BFS start node (e.g. "N1")
    #[arg(long)]
    source: Option<String>,

    /// Length of randomized arrays
    #[arg(long)]
    size: Option<usize>,

    /// Seed for randomized input; without --values a random input is generated
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser)]
#[command(name = "stepviz")]
#[command(version, about = "Record textbook algorithms step by step and replay them in the terminal")]
struct Cli {
    /// Config file (defaults to ./stepviz.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file (the TUI never logs to the terminal)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive player (default)
    Play {
        #[command(flatten)]
        input: InputArgs,

        /// Milliseconds per step (200-2000)
        #[arg(long)]
        speed: Option<u64>,
    },
    /// Record once and print every step
    Trace {
        #[command(flatten)]
        input: InputArgs,

        /// Print the whole sequence as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the available algorithms
    List,
}

fn init_logging(log_file: Option<&Path>, stderr_fallback: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_env("STEPVIZ_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if stderr_fallback => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

/// Resolve the run parameters: built-in defaults < config file < CLI flags.
fn build_session_parts(
    config: &Config,
    args: &InputArgs,
) -> stepviz::Result<(Algorithm, AlgorithmInput, InputRng, usize)> {
    let algorithm = args.algorithm.unwrap_or(config.defaults.algorithm);
    let size = args.size.unwrap_or(config.input.size);
    let mut rng = InputRng::from_seed_u64(args.seed.unwrap_or(config.input.seed));

    let mut input = match &args.values {
        Some(text) => AlgorithmInput::new(parse_values(text)?),
        None if args.seed.is_some() => {
            rng.input_for(algorithm, size, &AlgorithmInput::sample(algorithm))
        }
        None => AlgorithmInput::sample(algorithm),
    };

    if let Some(text) = &args.edges {
        input.graph = parse_edges(text, None)?;
    }
    if let Some(text) = &args.source {
        input.source = parse_node(text)?;
    }
    if let Some(target) = args.target.or(config.defaults.target) {
        input.target = clamp_target(target, algorithm);
    }
    if let Some(window) = args.window.or(config.defaults.window) {
        input.window = window;
    }

    input.validate_for(algorithm)?;
    Ok((algorithm, input, rng, size))
}

fn run_play(config: &Config, args: &InputArgs, speed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let (algorithm, input, rng, size) = build_session_parts(config, args)?;
    let speed = speed.map_or_else(|| config.speed(), Speed::from_millis);
    let session = Session::new(algorithm, input, rng, size, speed)?;
    tracing::info!(algorithm = %algorithm, speed = %speed, "starting player");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }
    Ok(())
}

fn run_trace(config: &Config, args: &InputArgs, json: bool) -> stepviz::Result<()> {
    let (algorithm, input, _, _) = build_session_parts(config, args)?;
    let sequence = record(algorithm, &input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&sequence)?);
        return Ok(());
    }

    println!("{}", algorithm);
    if algorithm.family() == Family::Graph {
        let edges: Vec<String> = input
            .graph
            .edges()
            .iter()
            .map(|&(a, b)| format!("{}-{}", node_label(a), node_label(b)))
            .collect();
        println!("Edges: {}", edges.join(", "));
    } else {
        println!("Input: {:?}", input.values);
    }
    println!();

    for (i, step) in sequence.iter().enumerate() {
        let c = step.counters;
        println!(
            "#{:<4} {:<13} {:<60} [cmp={} swp={} pass={}]",
            i + 1,
            step.kind.label(),
            step.narration,
            c.comparisons,
            c.swaps,
            c.passes
        );
    }
    println!();
    println!("Outcome: {:?}", sequence.outcome());
    println!("Final:   {:?}", sequence.final_array());
    Ok(())
}

fn run_list() {
    println!(
        "{:<18} {:<26} {:<10} {:<10} {:<10} {:<9} {}",
        "ALGORITHM", "TITLE", "BEST", "AVERAGE", "WORST", "SPACE", "TOPIC"
    );
    for entry in CATALOG {
        let id = entry
            .algorithm
            .to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default();
        println!(
            "{:<18} {:<26} {:<10} {:<10} {:<10} {:<9} {}",
            id, entry.title, entry.best, entry.average, entry.worst, entry.space, entry.topic_id
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Play {
        input: InputArgs::default(),
        speed: None,
    });

    let is_play = matches!(command, Command::Play { .. });
    init_logging(cli.log_file.as_deref(), !is_play)?;

    let cwd = std::env::current_dir()?;
    let (config, config_path) = config::discover(cli.config.as_deref(), &cwd)?;
    if let Some(path) = &config_path {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    match command {
        Command::Play { input, speed } => run_play(&config, &input, speed)?,
        Command::Trace { input, json } => run_trace(&config, &input, json)?,
        Command::List => run_list(),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target_for(args: InputArgs, config: &Config) -> i64 {
        let (_, input, _, _) = build_session_parts(config, &args).unwrap();
        input.target
    }

    #[test]
    fn test_cli_target_is_clamped() {
        let args = InputArgs {
            algorithm: Some(Algorithm::Linear),
            target: Some(-5),
            ..Default::default()
        };
        assert_eq!(target_for(args, &Config::default()), 0);

        let args = InputArgs {
            algorithm: Some(Algorithm::Binary),
            target: Some(500),
            ..Default::default()
        };
        assert_eq!(target_for(args, &Config::default()), 99);
    }

    #[test]
    fn test_pair_sum_target_keeps_doubled_range() {
        let args = InputArgs {
            algorithm: Some(Algorithm::TwoPointer),
            target: Some(150),
            ..Default::default()
        };
        assert_eq!(target_for(args, &Config::default()), 150);
    }

    #[test]
    fn test_config_target_is_clamped() {
        let mut config = Config::default();
        config.defaults.target = Some(1_000);
        let args = InputArgs {
            algorithm: Some(Algorithm::Linear),
            ..Default::default()
        };
        assert_eq!(target_for(args, &config), 99);
    }
}
