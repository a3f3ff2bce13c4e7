//! Drawer Hunt entry point
//!
//! A terminal host for the session engine: lists the scattered items and
//! forwards the numbers typed on stdin as clicks.
//!
//! Usage: `drawer-hunt [seed] [--catalog items.json] [--settings settings.json]`

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use drawer_hunt::{
    Bounds, ClickOutcome, Clock, ConfigError, DrawerView, ItemCatalog, RoundState, Session,
    Settings,
};

/// Drawer size the terminal host pretends to have
const DRAWER_WIDTH: f32 = 800.0;
const DRAWER_HEIGHT: f32 = 600.0;

struct Args {
    seed: u64,
    catalog: Option<String>,
    settings: Option<String>,
}

fn parse_args() -> Args {
    let mut args = Args {
        seed: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0),
        catalog: None,
        settings: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--catalog" => args.catalog = iter.next(),
            "--settings" => args.settings = iter.next(),
            other => match other.parse() {
                Ok(seed) => args.seed = seed,
                Err(_) => log::warn!("Ignoring unknown argument: {}", other),
            },
        }
    }
    args
}

fn load_catalog(path: Option<&str>) -> Result<ItemCatalog, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(ItemCatalog::drawer());
    };
    let json = std::fs::read_to_string(path)?;
    let catalog = ItemCatalog::from_json(&json).map_err(ConfigError::from)?;
    log::info!("Loaded {} items from {}", catalog.len(), path);
    Ok(catalog)
}

fn render(view: &DrawerView) {
    println!();
    for (index, item) in view.items().iter().enumerate() {
        println!(
            "  {:>2}. {} {:<14} at ({:>6.1}, {:>6.1}) rot {:>5.1}°",
            index + 1,
            item.icon,
            item.name,
            item.position.x,
            item.position.y,
            item.rotation_degrees
        );
    }
    let (message, _) = view.message();
    println!(
        "Clicks: {}  Time: {}  Found: {}",
        view.clicks_text(),
        view.timer_text(),
        view.found_text()
    );
    if !message.is_empty() {
        println!("{}", message);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args();
    let settings = match args.settings.as_deref() {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let catalog = load_catalog(args.catalog.as_deref())?;

    let mut session = Session::seeded(catalog, settings, args.seed)?;
    let mut view = DrawerView::new(settings.item_footprint_size);
    let bounds = Bounds::new(DRAWER_WIDTH, DRAWER_HEIGHT)?;
    log::info!("Game initialized with seed: {}", args.seed);

    session.start_round(bounds, &mut view)?;
    render(&view);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Pick an item number, [n]ew game or [q]uit > ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let now = session.clock().now();
        session.tick(now, &mut view);
        view.advance(now);

        match line.trim() {
            "q" | "quit" => break,
            "n" | "new" => {
                session.start_round(bounds, &mut view)?;
                log::info!("Started new game");
            }
            input => {
                let Some(item_id) = input
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|index| view.items().get(index))
                    .map(|item| item.item_id)
                else {
                    println!("No item {:?}", input);
                    continue;
                };
                if !view.try_click(item_id, now) {
                    continue;
                }
                match session.register_click(item_id, &mut view) {
                    Ok(ClickOutcome::Found(score)) => {
                        log::info!("Round won: {} clicks, {}s", score.clicks, score.seconds)
                    }
                    Ok(_) => {}
                    // Stray input must not end a running game
                    Err(e) => log::error!("{}", e),
                }
            }
        }

        render(&view);
        if session.current_state() == RoundState::Won {
            println!("Type n for a new game.");
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Drawer Hunt starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("drawer-hunt: {}", e);
        std::process::exit(1);
    }
}
