// CourseLens - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Optional headless check of a course file
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use courselens::app;
pub use courselens::core;
pub use courselens::platform;
pub use courselens::ui;
pub use courselens::util;

use clap::Parser;
use std::path::PathBuf;

/// CourseLens - Browse, filter and sort course catalogues.
///
/// Open a JSON file holding an array of course records and narrow it down
/// by department, level, credits and instructor.
#[derive(Parser, Debug)]
#[command(name = "CourseLens", version, about)]
struct Cli {
    /// Course file to open at startup (JSON array of course records).
    path: Option<PathBuf>,

    /// Initial sort order (id-asc, id-desc, title-asc, title-desc,
    /// sem-earliest, sem-latest, none).
    #[arg(short = 's', long = "sort")]
    sort: Option<String>,

    /// Directory containing config.toml (overrides the platform default).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Validate the course file, print a summary and exit without a window.
    #[arg(long = "check", requires = "path")]
    check: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its [logging] level can apply.
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_dir);
    let (config, config_warnings) = platform::config::load_config(&config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %config_dir.display(),
        "CourseLens starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    let sort_mode = match cli.sort.as_deref() {
        Some(raw) => raw.parse::<core::sort::SortMode>().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Ignoring --sort; using configured default");
            config.default_sort
        }),
        None => config.default_sort,
    };

    if cli.check {
        if let Some(path) = cli.path.as_deref() {
            let code = match run_check(path, config.max_file_size) {
                Ok(()) => 0,
                Err(e) => {
                    tracing::debug!(error = %e, "Check failed");
                    1
                }
            };
            std::process::exit(code);
        }
    }

    let mut state = app::state::AppState::new(&config, cli.debug);
    state.sort_mode = sort_mode;
    state.pending_load = cli.path;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([760.0, 480.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::CourseLensApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch CourseLens GUI: {e}");
        std::process::exit(1);
    }
}

/// Load `path` the same way the GUI does and report the outcome.
///
/// Successes go to stdout; a failure prints the user-facing message to
/// stderr and is returned for the exit code.
fn run_check(path: &std::path::Path, max_bytes: u64) -> util::error::Result<()> {
    let parsed = app::loader::load_file(path, max_bytes).map_err(|e| {
        eprintln!("{}: {}", path.display(), e.user_message());
        e
    })?;
    println!(
        "{}: {} course(s) loaded, {} rejected",
        path.display(),
        parsed.courses.len(),
        parsed.rejected
    );
    for diagnostic in &parsed.diagnostics {
        println!("  {diagnostic}");
    }
    Ok(())
}
