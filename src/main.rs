use loopmaze::{MazeGenerator, RecursiveBacktracking, generators::get_rng};
use tracing_appender::non_blocking::WorkerGuard;

/// Log to a file so the summary on stdout stays clean. `DEBUG=1` turns on per-phase logs.
fn init_logging() -> WorkerGuard {
    let level = match std::env::var("DEBUG") {
        Ok(val) if val == "1" => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    };
    let file_appender = tracing_appender::rolling::never(".", "loopmaze.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(level)
        .with_ansi(false)
        .init();
    guard
}

fn main() -> std::process::ExitCode {
    let _guard = init_logging();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let dims = args
        .by_ref()
        .take(2)
        .filter_map(|s| s.parse::<u16>().ok())
        .collect::<Vec<_>>();
    if dims.len() != 2 {
        eprintln!("Usage: loopmaze <width> <height> [seed]");
        return std::process::ExitCode::FAILURE;
    }
    let (width, height) = (dims[0], dims[1]);
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());

    let generator = RecursiveBacktracking::default();
    let finish = (width.saturating_sub(1), height.saturating_sub(1));
    tracing::info!(
        "Generating {}x{} maze with {} (loop density: {}, seed: {:?})",
        width,
        height,
        generator,
        generator.config().loop_density,
        seed
    );

    match generator.generate(width, height, finish, &mut get_rng(seed)) {
        Ok(maze) => {
            let passages = maze.passage_count();
            let loops = passages + 1 - maze.grid().len();
            tracing::info!("Generated maze with {} passages", passages);
            println!(
                "{}x{} maze: {} passages ({} loops), finish at {:?}",
                maze.width(),
                maze.height(),
                passages,
                loops,
                maze.finish()
            );
            std::process::ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("Generation failed: {}", err);
            eprintln!("{}", err);
            std::process::ExitCode::FAILURE
        }
    }
}
