//! Command-line interface for the algotrace utility
//!
//! Builds algorithm traces from the terminal and replays them with the
//! playback controller.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use crossterm::{cursor::MoveTo, execute, terminal::Clear, terminal::ClearType};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::presenter::{render_step, render_trace};
use algotrace::core::logging::init_logging;
use algotrace::plugins::AlgorithmRegistry;
use algotrace::session::Session;
use algotrace::playback::PlaybackEvent;
use algotrace::{PlaybackConfig, StructureKind, TraceParams};

/// Algotrace - trace and replay data-structure algorithms
#[derive(Parser)]
#[command(name = "algotrace")]
#[command(about = "Record step-by-step traces of classic algorithms and replay them")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error|off)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Where the raw structure input comes from
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Structure kind (array, linked-list, tree, graph)
    #[arg(short, long)]
    pub structure: StructureKind,

    /// Inline input, e.g. "5,2,8,1" or graph JSON
    #[arg(short, long, conflicts_with = "input")]
    pub data: Option<String>,

    /// Input file (use - for stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Structure, algorithm, and input selection shared by trace and play
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Algorithm name (see `algotrace algorithms`)
    #[arg(short, long)]
    pub algorithm: String,

    /// Search target for binary search
    #[arg(short, long, allow_negative_numbers = true)]
    pub target: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every step of an algorithm run
    Trace {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// When to use colors in output
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
    },

    /// Animate an algorithm run in the terminal
    Play {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Speed multiplier (clamped to 0.5..=4)
        #[arg(long, default_value_t = 1.0, value_parser = parse_speed)]
        speed: f64,

        /// Delay between steps at 1x speed, in milliseconds
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,

        /// When to use colors in output
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
    },

    /// Show registered algorithms
    Algorithms {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Check that input parses for a structure kind
    Validate {
        #[command(flatten)]
        source: InputArgs,
    },
}

/// Trace output formats
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One frame per step
    #[default]
    Text,
    /// The serialized trace
    Json,
}

/// When to colorize output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if output is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Main CLI application
pub struct AlgotraceApp {
    registry: AlgorithmRegistry,
}

impl AlgotraceApp {
    /// Create a new application instance with every plugin registered
    pub fn new() -> Self {
        Self {
            registry: AlgorithmRegistry::with_all_plugins(),
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level_str = std::env::var("ALGOTRACE_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("ALGOTRACE_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Algotrace v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Trace {
                selection,
                format,
                output,
                color,
            } => self.trace_command(selection, format, output, color, cli.verbose),
            Commands::Play {
                selection,
                speed,
                interval_ms,
                color,
            } => self.play_command(selection, speed, interval_ms, color),
            Commands::Algorithms { json } => self.algorithms_command(json),
            Commands::Validate { source } => self.validate_command(source, cli.verbose),
        }
    }

    /// Handle the trace command
    fn trace_command(
        &self,
        selection: SelectionArgs,
        format: OutputFormat,
        output: Option<PathBuf>,
        color: ColorChoice,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_source(&selection.source)?;
        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let kind = selection.source.structure;
        // Resolve the name first so a typo is reported before any parse error
        self.registry.algorithm(kind, &selection.algorithm)?;
        let structure = self.registry.adapt(kind, &content)?;
        let params = TraceParams {
            target: selection.target,
        };
        let trace = self
            .registry
            .trace_structure(&selection.algorithm, &structure, &params)?;

        let rendered = match format {
            OutputFormat::Json => serde_json::to_string_pretty(&trace)?,
            OutputFormat::Text => {
                render_trace(&structure, &trace, should_colorize(&output, color))
            }
        };
        self.write_output(output, &rendered)
    }

    /// Handle the play command
    fn play_command(
        &self,
        selection: SelectionArgs,
        speed: f64,
        interval_ms: u64,
        color: ColorChoice,
    ) -> Result<()> {
        let content = self.read_source(&selection.source)?;
        let config =
            PlaybackConfig::default().with_base_interval(Duration::from_millis(interval_ms));

        let mut session = Session::new(AlgorithmRegistry::with_all_plugins(), config)?;
        session.set_structure_kind(selection.source.structure)?;
        session.set_target(selection.target)?;
        session.load_input(&content)?;
        session.select_algorithm(&selection.algorithm)?;
        let speed = session.set_speed(speed)?;
        info!(speed, algorithm = session.algorithm(), "Starting playback");

        let colorize = should_colorize(&None, color);
        let mut stdout = io::stdout();
        let redraw = crossterm::tty::IsTty::is_tty(&stdout);

        if session.controller().is_empty() {
            println!("Nothing to play: the input is empty");
            return Ok(());
        }

        session.play(Instant::now());
        loop {
            // Redraw only when the step moved
            let mut step_changed = false;
            for event in session.take_events() {
                match event {
                    PlaybackEvent::StepChanged { .. } => step_changed = true,
                    other => debug!(event = ?other, "Playback event"),
                }
            }

            if let Some(step) = session.controller().current_step().filter(|_| step_changed) {
                let frame = render_step(
                    session.structure(),
                    step,
                    (session.controller().current_index(), session.controller().len()),
                    colorize,
                );
                if redraw {
                    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
                }
                writeln!(stdout, "{}\n", frame)?;
                stdout.flush()?;
            }

            let Some(deadline) = session.controller().next_deadline() else {
                break;
            };
            std::thread::sleep(deadline.saturating_duration_since(Instant::now()));
            while !session.tick(Instant::now()) {
                if session.controller().next_deadline().is_none() {
                    break;
                }
                std::thread::sleep(Duration::from_millis(1));
            }
        }
        debug!(index = session.controller().current_index(), "Playback finished");
        Ok(())
    }

    /// Handle the algorithms command
    fn algorithms_command(&self, json: bool) -> Result<()> {
        let algorithms = self.registry.list();
        if json {
            let listing = serde_json::json!({
                "algorithms": algorithms,
                "total": algorithms.len(),
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            let width = algorithms.iter().map(|a| a.name.len()).max().unwrap_or(0);
            let mut current = None;
            for algorithm in &algorithms {
                if current != Some(algorithm.structure) {
                    println!("{}:", algorithm.structure);
                    current = Some(algorithm.structure);
                }
                println!(
                    "  {:<width$}  - {}",
                    algorithm.name,
                    algorithm.summary,
                    width = width
                );
            }
            println!();
            println!("Total: {} algorithms", algorithms.len());
        }
        Ok(())
    }

    /// Handle the validate command
    fn validate_command(&self, source: InputArgs, verbose: bool) -> Result<()> {
        let content = self.read_source(&source)?;
        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        match self.registry.adapt(source.structure, &content) {
            Ok(structure) => {
                println!(
                    "✓ Valid {} input: {} elements",
                    source.structure,
                    structure.len()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ {}", e);
                Err(e.into())
            }
        }
    }

    /// Inline data wins; otherwise read the file or stdin
    fn read_source(&self, source: &InputArgs) -> Result<String> {
        match &source.data {
            Some(data) => Ok(data.clone()),
            None => self.read_input(source.input.clone()),
        }
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .with_context(|| format!("Failed to read input file '{}'", path.display())),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        let stdout_content = if content.is_empty() || content.ends_with('\n') {
            content.to_string()
        } else {
            format!("{}\n", content)
        };

        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                print!("{}", stdout_content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}

impl Default for AlgotraceApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Colorize only when asked to, or when writing to a terminal without NO_COLOR
fn should_colorize(output: &Option<PathBuf>, color: ColorChoice) -> bool {
    match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            if std::env::var("NO_COLOR").is_ok() {
                return false;
            }
            match output {
                Some(p) if p.to_str() != Some("-") => false,
                _ => crossterm::tty::IsTty::is_tty(&std::io::stdout()),
            }
        }
    }
}

/// Parse a speed flag, rejecting values the controller would refuse
pub fn parse_speed(raw: &str) -> Result<f64> {
    let speed: f64 = raw.parse().with_context(|| format!("Invalid speed '{}'", raw))?;
    if !(speed.is_finite() && speed > 0.0) {
        bail!("Speed must be a positive number, got {}", raw);
    }
    Ok(speed)
}
