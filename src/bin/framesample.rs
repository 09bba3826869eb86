use std::{fs, io::Write as _, path::PathBuf, sync::Arc};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use framesample::{
    CaptureHost, ProgressCallback, ProgressInfo, Sample, SamplerOptions, SamplingMode,
    SamplingPlan, TimeRange,
};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;

const CLI_AFTER_HELP: &str = "Examples:\n  framesample plan --start 0:00:10 --end 0:00:20 --max-samples 50\n  framesample plan --start 10 --end 11.5 --json\n  framesample simulate --start 0 --end 60 --fps 24 --out schedule.csv --progress\n  framesample completions zsh > _framesample";

#[derive(Debug, Parser)]
#[command(
    name = "framesample",
    version,
    about = "Plan bounded frame-sampling schedules over video time ranges",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Parser, Clone, Default)]
struct GlobalOptions {
    /// Show additional logging output.
    #[arg(long)]
    verbose: bool,

    /// Show a progress bar where supported.
    #[arg(long)]
    progress: bool,

    /// Allow overwriting existing output files.
    #[arg(long)]
    overwrite: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the sampling schedule for a time range.
    #[command(
        about = "Print the sampling schedule for a range",
        after_help = "Examples:\n  framesample plan --start 0:00:10 --end 0:00:20\n  framesample plan --start 10 --end 11.5 --max-samples 50 --json"
    )]
    Plan {
        /// Range start (seconds or [HH:]MM:SS[.frac] timecode).
        #[arg(long)]
        start: String,

        /// Range end (seconds or [HH:]MM:SS[.frac] timecode).
        #[arg(long)]
        end: String,

        /// Maximum number of samples in the schedule.
        #[arg(long, default_value_t = framesample::DEFAULT_MAX_SAMPLES)]
        max_samples: u64,

        /// Short-range threshold in seconds; ranges at or under it are
        /// captured frame by frame.
        #[arg(long, default_value_t = framesample::DEFAULT_SHORT_THRESHOLD)]
        threshold: f64,

        /// Output the schedule as machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// Drive a synthetic constant-rate player through the export driver.
    #[command(
        about = "Simulate an export against a synthetic player",
        after_help = "Examples:\n  framesample simulate --start 0 --end 60 --fps 24\n  framesample simulate --start 10 --end 11.5 --fps 30 --out schedule.csv"
    )]
    Simulate {
        /// Range start (seconds or [HH:]MM:SS[.frac] timecode).
        #[arg(long)]
        start: String,

        /// Range end (seconds or [HH:]MM:SS[.frac] timecode).
        #[arg(long)]
        end: String,

        /// Frame rate of the synthetic player.
        #[arg(long, default_value_t = 30.0)]
        fps: f64,

        /// Media duration in seconds; frame stepping past it signals
        /// end-of-stream. Defaults to unbounded.
        #[arg(long)]
        media_duration: Option<f64>,

        /// Maximum number of samples to capture.
        #[arg(long, default_value_t = framesample::DEFAULT_MAX_SAMPLES)]
        max_samples: u64,

        /// Short-range threshold in seconds.
        #[arg(long, default_value_t = framesample::DEFAULT_SHORT_THRESHOLD)]
        threshold: f64,

        /// Write the captured schedule as CSV (index,timestamp).
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Generate shell completions.
    #[command(about = "Generate shell completions")]
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Parse `SS[.frac]`, `MM:SS[.frac]`, or `HH:MM:SS[.frac]` into seconds.
fn parse_timecode(value: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let parts: Vec<&str> = value.split(':').collect();
    let seconds = match parts.as_slice() {
        [seconds] => seconds.parse::<f64>()?,
        [minutes, seconds] => minutes.parse::<f64>()? * 60.0 + seconds.parse::<f64>()?,
        [hours, minutes, seconds] => {
            hours.parse::<f64>()? * 3600.0
                + minutes.parse::<f64>()? * 60.0
                + seconds.parse::<f64>()?
        }
        _ => return Err(format!("unrecognized timecode: {value}").into()),
    };
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(format!("timecode must be a non-negative time: {value}").into());
    }
    Ok(seconds)
}

fn parse_range(start: &str, end: &str) -> Result<TimeRange, Box<dyn std::error::Error>> {
    Ok(TimeRange::new(parse_timecode(start)?, parse_timecode(end)?)?)
}

fn ensure_writable_path(
    path: &std::path::Path,
    overwrite: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() && !overwrite {
        return Err(format!(
            "output file already exists: {} (use --overwrite)",
            path.display()
        )
        .into());
    }
    Ok(())
}

/// A constant-rate stand-in for a real player.
///
/// `seek` positions the playhead exactly; `advance_frame` steps `1 / fps`
/// seconds forward, signalling end-of-stream past `media_duration`.
struct SimulatedPlayer {
    position: f64,
    frame_interval: f64,
    media_duration: Option<f64>,
    captured: Vec<Sample>,
}

impl SimulatedPlayer {
    fn new(fps: f64, media_duration: Option<f64>) -> Self {
        Self {
            position: 0.0,
            frame_interval: 1.0 / fps,
            media_duration,
            captured: Vec::new(),
        }
    }
}

impl CaptureHost for SimulatedPlayer {
    fn seek(&mut self, timestamp: f64) -> Result<(), String> {
        self.position = timestamp;
        Ok(())
    }

    fn advance_frame(&mut self) -> Option<f64> {
        let next = self.position + self.frame_interval;
        if self.media_duration.is_some_and(|duration| next > duration) {
            return None;
        }
        self.position = next;
        Some(next)
    }

    fn capture(&mut self, sample: &Sample) -> Result<(), String> {
        self.captured.push(*sample);
        Ok(())
    }
}

/// Bridges the library's progress callback onto an indicatif bar.
struct BarProgress {
    bar: ProgressBar,
}

impl ProgressCallback for BarProgress {
    fn on_progress(&self, info: &ProgressInfo) {
        self.bar.set_position(info.current);
        if let Some(timestamp) = info.current_timestamp {
            self.bar.set_message(format!("{timestamp:.3}s"));
        }
    }
}

fn mode_name(mode: SamplingMode) -> &'static str {
    match mode {
        SamplingMode::EveryFrame => "every-frame",
        SamplingMode::FixedStep => "fixed-step",
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.global.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Plan {
            start,
            end,
            max_samples,
            threshold,
            json,
        } => {
            let range = parse_range(&start, &end)?;
            let plan = SamplingPlan::build(range, max_samples, threshold)?;

            let samples: Vec<Sample> = match plan.mode() {
                // Pure arithmetic; safe to enumerate up front.
                SamplingMode::FixedStep => plan.sequence(range, || None::<f64>).collect(),
                // Host-dependent; there is no schedule to enumerate.
                SamplingMode::EveryFrame => Vec::new(),
            };

            if json {
                let payload = json!({
                    "mode": mode_name(plan.mode()),
                    "step_seconds": plan.step(),
                    "max_samples": plan.max_samples(),
                    "range": {
                        "start_seconds": range.start(),
                        "end_seconds": range.end(),
                    },
                    "samples": samples
                        .iter()
                        .map(|sample| {
                            json!({
                                "index": sample.index,
                                "timestamp_seconds": sample.timestamp,
                            })
                        })
                        .collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!(
                    "mode={} range={:.3}s..{:.3}s budget={}",
                    mode_name(plan.mode()),
                    range.start(),
                    range.end(),
                    plan.max_samples(),
                );
                match plan.step() {
                    Some(step) => {
                        println!("step={step:.4}s samples={}", samples.len());
                        for sample in &samples {
                            println!("  #{:04} {:.4}s", sample.index, sample.timestamp);
                        }
                    }
                    None => {
                        println!(
                            "short range: capture every decoded frame (up to {})",
                            plan.max_samples()
                        );
                    }
                }
            }
        }
        Commands::Simulate {
            start,
            end,
            fps,
            media_duration,
            max_samples,
            threshold,
            out,
        } => {
            if !fps.is_finite() || fps <= 0.0 {
                return Err("--fps must be a positive number".into());
            }

            let range = parse_range(&start, &end)?;
            let mut options = SamplerOptions::new()
                .with_max_samples(max_samples)
                .with_short_threshold(threshold);

            let progress_bar = if cli.global.progress {
                let pb = ProgressBar::new(max_samples);
                let style = ProgressStyle::with_template(
                    "{spinner:.green} {bar:40.cyan/blue} {pos}/{len} {msg}",
                )?;
                pb.set_style(style.progress_chars("##-"));
                options = options.with_progress(Arc::new(BarProgress { bar: pb.clone() }));
                Some(pb)
            } else {
                None
            };

            let mut player = SimulatedPlayer::new(fps, media_duration);
            let captured = framesample::export::export_with_options(&mut player, range, &options)?;

            if let Some(pb) = progress_bar {
                pb.finish_with_message("done");
            }

            if let Some(path) = out {
                ensure_writable_path(&path, cli.global.overwrite)?;
                let mut file = fs::File::create(&path)?;
                writeln!(file, "index,timestamp_seconds")?;
                for sample in &player.captured {
                    writeln!(file, "{},{:.6}", sample.index, sample.timestamp)?;
                }
                println!("{} {}", "saved".green().bold(), path.display());
            }

            println!(
                "{} {}",
                "success:".green().bold(),
                format!(
                    "Captured {captured} sample(s) from {:.3}s..{:.3}s at {fps} fps",
                    range.start(),
                    range.end(),
                )
                .green()
            );
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "framesample", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
