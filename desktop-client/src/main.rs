mod app;
mod canvas;
mod colors;
mod config;
mod constants;
mod headless;
mod input;
mod sinks;

use clap::{Parser, ValueEnum};
use eframe::egui;
use snake_common::config::Validate;
use snake_common::log;
use snake_common::logger::init_logger;
use snake_common::version::VERSION;

use crate::app::SnakeApp;
use crate::config::get_config_store;
use crate::constants::{WINDOW_MARGIN, WINDOW_TITLE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PlayMode {
    One,
    Two,
}

#[derive(Parser, Debug)]
#[command(name = "snake_arena", version = VERSION, about = "Snake arena with an AI rival")]
struct Args {
    /// Skip the menu and start straight away in this mode
    #[arg(long, value_enum)]
    mode: Option<PlayMode>,

    /// Board width, a multiple of 10
    #[arg(long)]
    width: Option<i32>,

    /// Board height, a multiple of 10
    #[arg(long)]
    height: Option<i32>,

    /// Seed for food placement and AI spawning
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    /// Run without a window, players steered by the greedy autopilot
    #[arg(long, default_value_t = false)]
    headless: bool,

    /// Stop a headless game after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    #[arg(long, default_value_t = false)]
    use_log_prefix: bool,

    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "Arena".to_string());
    init_logger(prefix, args.verbose);

    let mut config = get_config_store(args.config.as_deref()).load()?;
    if let Some(width) = args.width {
        config.settings.board.width = width;
    }
    if let Some(height) = args.height {
        config.settings.board.height = height;
    }
    if let Some(mode) = args.mode {
        config.settings.two_player = mode == PlayMode::Two;
    }
    config.validate()?;

    log!("Snake Arena v{}", VERSION);

    if args.headless {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let report = runtime.block_on(headless::run(config, args.seed, args.max_ticks))?;
        match report.summary {
            Some(summary) => log!(
                "Game over: {} {} after {} ticks, outcome {:?}",
                summary.crashed,
                summary.reason,
                summary.ticks,
                summary.outcome
            ),
            None => log!("Stopped after {} ticks", report.ticks),
        }
        return Ok(());
    }

    let board = config.settings.board;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                board.width as f32 + WINDOW_MARGIN[0],
                board.height as f32 + WINDOW_MARGIN[1],
            ])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    let autostart = args.mode.map(|mode| mode == PlayMode::Two);
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(config, args.seed, autostart)))),
    )?;

    Ok(())
}
