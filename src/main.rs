// craneyard: crate-yard crane simulator with step-by-step replay

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use craneyard::crane::constants::{BYTES_PER_MIB, DEFAULT_SNAPSHOT_LIMIT};
use craneyard::crane::engine::{Crane, CraneMode};
use craneyard::logging;
use craneyard::parser::document::parse_document;
use craneyard::ui::App;

#[derive(Parser)]
#[command(
    name = "craneyard",
    version,
    about = "Rearrange a crate yard with a crane and replay every move"
)]
struct Cli {
    /// Puzzle file: diagram, blank line, then `move N from A to B` lines
    file: PathBuf,

    /// How multi-crate moves reorder crates
    #[arg(short, long, value_enum, default_value_t = CraneMode::SingleCrate)]
    mode: CraneMode,

    /// Print the final yard and top crates instead of opening the viewer
    #[arg(short, long)]
    print: bool,

    /// Memory budget for the replay history, in MiB
    #[arg(long, default_value_t = DEFAULT_SNAPSHOT_LIMIT / BYTES_PER_MIB)]
    snapshot_limit_mib: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init();

    if !cli.file.exists() {
        eprintln!("Error: File '{}' not found", cli.file.display());
        std::process::exit(1);
    }

    let text = fs::read_to_string(&cli.file)?;

    let puzzle = match parse_document(&text) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("Parse error in {}: {}", cli.file.display(), e);
            std::process::exit(1);
        }
    };

    let snapshot_limit = cli.snapshot_limit_mib.saturating_mul(BYTES_PER_MIB);
    let mut crane = Crane::with_snapshot_limit(snapshot_limit);
    let run_error = crane
        .operate_over(puzzle.yard)
        .execute(&puzzle.instructions, cli.mode)
        .err();

    if cli.print {
        if let Some(e) = run_error {
            eprintln!("Crane error: {}", e);
            std::process::exit(1);
        }
        if let Some(yard) = crane.yard() {
            println!("{}", yard);
            println!();
            println!("{}", yard.top_message());
        }
        return Ok(());
    }

    if let Some(e) = &run_error {
        tracing::warn!(error = %e, "run stopped early; replaying partial history");
    }
    if !crane.is_recording() {
        tracing::warn!(
            recorded = crane.total_snapshots(),
            moves = crane.moves_applied(),
            "snapshot limit reached; the viewer cannot show the final yard"
        );
    }

    // Rewind to the beginning for the viewer
    if let Err(e) = crane.rewind_to_start() {
        tracing::warn!(error = %e, "failed to rewind to start");
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(crane, puzzle.instructions, cli.mode, run_error);
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
