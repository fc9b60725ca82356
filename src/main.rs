//! pautilib demo
//!
//! Loads grid and angle settings (defaults if no path is given), prints how the
//! configured grid maps coordinates onto row-major storage, then steps an angle
//! toward a target on the configured interval.

use pautilib::{List2, Settings};

fn main() {
    env_logger::init();
    log::info!("pautilib demo starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    if let Err(e) = run(&settings) {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run(settings: &Settings) -> pautilib::Result<()> {
    let accessor = settings.accessor()?;
    println!(
        "{}x{} grid, {:?}, origin at {:?}, {}",
        accessor.width(),
        accessor.height(),
        accessor.order(),
        accessor.order().origin_corner(),
        if accessor.is_zero_indexed() { "zero-indexed" } else { "one-indexed" }
    );

    // Label every cell with its own coordinates, then print storage rows
    let mut cells = vec![String::new(); accessor.len()];
    for (index, cell) in cells.iter_mut().enumerate() {
        if let Some((c1, c2)) = accessor.coordinates_of(index) {
            *cell = format!("({c1},{c2})");
        }
    }
    let list = List2::new(cells, accessor)?;
    for row in 0..accessor.height() {
        let start = row * accessor.width();
        let line: Vec<&str> = (start..start + accessor.width())
            .map(|i| list.at_index(i).map(String::as_str))
            .collect::<pautilib::Result<_>>()?;
        println!("  {}", line.join(" "));
    }

    let interval = settings.angle_interval();
    let step = interval.diameter() / 24.0;
    let target = interval.start() + interval.diameter() * 0.1;
    let mut current = interval.start() + interval.diameter() * 0.8;
    println!(
        "Approaching {:.3} from {:.3} on [{:.3}, {:.3})",
        target,
        current,
        interval.start(),
        interval.end()
    );
    while current != target {
        current = interval.approach(current, target, step, true);
        println!("  {:.3}", current);
    }

    log::info!("pautilib demo done");
    Ok(())
}
