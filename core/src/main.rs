//! Notesynth CLI - Play the Master Note Synthesizer demo in a terminal
//!
//! # Commands
//!
//! ```bash
//! notesynth generate --syllabus outline.pdf --material week1.pdf --subject "Linear Algebra"
//! notesynth check --material slides.pptx --material photo.gif
//! notesynth steps                   # Show the simulated step table
//! notesynth config                  # Show the effective configuration
//! ```
//!
//! Files are only inspected for name and size, exactly like the page does.

use clap::{Parser, Subcommand};
use notesynth::activity::{drain, ActivityEntry};
use notesynth::{
    drive, DriveOutcome, FileRef, GenerationTicket, ManualTimer, Session, SlotKind, SynthConfig,
    Timer, TokioTimer, ACTIVITY, DISCLOSURE, STEPS, STEP_TITLES,
};
use std::path::{Path, PathBuf};
use tokio::sync::broadcast::Receiver;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "notesynth")]
#[command(about = "Master Note Synthesizer demo runner", long_about = None)]
struct Cli {
    /// Log more (-v: info, -vv: debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulated generation and write the placeholder notes
    Generate {
        /// Syllabus file (.pdf, .doc, .docx, .txt)
        #[arg(short, long)]
        syllabus: PathBuf,

        /// Study material file, repeat for several
        #[arg(short, long = "material", required = true)]
        materials: Vec<PathBuf>,

        /// Subject name
        #[arg(long)]
        subject: String,

        /// Optional course code
        #[arg(short, long)]
        course_code: Option<String>,

        /// Directory for the downloaded file (default: current directory)
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Skip the delays
        #[arg(long)]
        instant: bool,
    },

    /// Validate files against the upload rules without generating
    Check {
        /// Syllabus file to check
        #[arg(short, long)]
        syllabus: Option<PathBuf>,

        /// Study material files to check
        #[arg(short, long = "material")]
        materials: Vec<PathBuf>,
    },

    /// Show the simulated step table
    Steps {
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration as JSON
    Config,
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = tracing_init(cli.verbose) {
        eprintln!("⚠️  Logging disabled: {}", e);
    }

    let result = match cli.command {
        Commands::Generate {
            syllabus,
            materials,
            subject,
            course_code,
            output,
            instant,
        } => cmd_generate(&syllabus, &materials, subject, course_code, &output, instant).await,

        Commands::Check { syllabus, materials } => cmd_check(syllabus.as_deref(), &materials),

        Commands::Steps { json } => cmd_steps(json),

        Commands::Config => cmd_config(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

/// Default filter for a verbosity level. Activity entries are already
/// printed by the commands, so their log copies stay off.
fn default_filter(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    format!("{},notesynth::activity=off", level)
}

fn tracing_init(verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    tracing_log::LogTracer::init()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

async fn cmd_generate(
    syllabus: &Path,
    materials: &[PathBuf],
    subject: String,
    course_code: Option<String>,
    output: &Path,
    instant: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut feed = ACTIVITY.subscribe();
    let mut session = Session::new(SynthConfig::from_env());

    eprintln!("📚 Syllabus: {}", syllabus.display());
    session.select_syllabus(vec![FileRef::from_path(syllabus)?]);
    print_activity(&mut feed);

    eprintln!("📄 Study materials: {}", materials.len());
    let refs = materials
        .iter()
        .map(|p| FileRef::from_path(p))
        .collect::<Result<Vec<_>, _>>()?;
    session.add_materials(refs);
    print_activity(&mut feed);

    session.set_subject_name(subject);
    if let Some(code) = course_code {
        session.set_course_code(code);
    }

    let ticket = session.begin_generation()?;
    eprintln!("\n⚙️  Synthesizing...");
    print_activity(&mut feed);

    // Ctrl-C stops the run where it is
    let token = ticket.cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    });

    let outcome = if instant {
        run_pipeline(&mut session, &ticket, &ManualTimer::new(), &mut feed).await
    } else {
        run_pipeline(&mut session, &ticket, &TokioTimer, &mut feed).await
    };

    if let DriveOutcome::Cancelled(state) = outcome {
        return Err(format!("Generation cancelled at {}% ({})", state.progress(), state.status()).into());
    }

    let document = session.download()?;
    let path = document.save_to(output)?;
    print_activity(&mut feed);

    eprintln!("\n💾 Notes written to: {}", path.display());
    eprintln!("ℹ️  {}", DISCLOSURE);
    eprintln!("\n✨ Done!");
    Ok(())
}

async fn run_pipeline<T: Timer>(
    session: &mut Session,
    ticket: &GenerationTicket,
    timer: &T,
    feed: &mut Receiver<ActivityEntry>,
) -> DriveOutcome {
    drive(ticket.start, ticket.timing, timer, &ticket.cancel, |state| {
        if let Err(e) = session.enter(state) {
            log::warn!("Ignoring pipeline transition: {}", e);
        }
        print_activity(feed);
    })
    .await
}

fn cmd_check(syllabus: Option<&Path>, materials: &[PathBuf]) -> Result<(), Box<dyn std::error::Error>> {
    if syllabus.is_none() && materials.is_empty() {
        return Err("Nothing to check: pass --syllabus and/or --material".into());
    }

    let mut session = Session::new(SynthConfig::from_env());
    let mut rejected = 0;

    let mut offers: Vec<(SlotKind, &Path)> = Vec::new();
    if let Some(path) = syllabus {
        offers.push((SlotKind::Syllabus, path));
    }
    offers.extend(materials.iter().map(|p| (SlotKind::Materials, p.as_path())));

    for (slot, path) in offers {
        let file = FileRef::from_path(path)?;
        let label = format!("{} ({:.2}MB)", file.name, file.size_mb());
        let report = session.offer(slot, vec![file]);

        if report.is_clean() {
            eprintln!("✅ {:?} {}", slot, label);
        } else if let Some(err) = report.rejected.first() {
            rejected += 1;
            eprintln!("❌ {:?} {}: {}", slot, label, err);
        } else {
            eprintln!("⚠️  {:?} {}: list full", slot, label);
        }
    }

    eprintln!("\n📊 Results: {} rejected", rejected);

    if rejected > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_steps(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&STEPS)?);
        return Ok(());
    }

    let config = SynthConfig::from_env();
    for (step, title) in STEPS.iter().zip(STEP_TITLES) {
        println!("  {:>3}%  {:<16} {}", step.progress, title, step.status);
    }
    println!(
        "\n  {}ms between steps, {}ms settle delay",
        config.step_delay_ms, config.settle_delay_ms
    );
    Ok(())
}

fn cmd_config() -> Result<(), Box<dyn std::error::Error>> {
    let config = SynthConfig::from_env();
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn print_activity(feed: &mut Receiver<ActivityEntry>) {
    for entry in drain(feed) {
        eprintln!("{}", entry.render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_shown_by_default() {
        let filter = default_filter(0);
        assert!(filter.starts_with("warn,"));
        assert!(EnvFilter::try_new(&filter).is_ok());
    }

    #[test]
    fn test_verbosity_raises_level() {
        assert!(default_filter(1).starts_with("info,"));
        assert!(default_filter(2).starts_with("debug,"));
        assert!(default_filter(5).starts_with("debug,"));
        assert!(default_filter(2).ends_with("notesynth::activity=off"));
    }

    #[test]
    fn test_verbose_flag_is_global() {
        let cli = Cli::try_parse_from(["notesynth", "config", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Config));
    }
}
