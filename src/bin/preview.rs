//! Text preview of the year grid.
//!
//! Prints the dot grid for a date (today by default) using `#` for past
//! days, `@` for the given day and `.` for days still ahead, followed by
//! the progress stats.
//!
//! Run with:
//!     cargo run --bin lifecal-preview -- 2024-02-29 32

use chrono::{Local, NaiveDate};
use lifecal::config::GridConfig;
use lifecal::layout::compute_grid_layout;
use lifecal::year::{classify_dot, compute_snapshot, DotState};
use log::error;

fn symbol(state: DotState) -> char {
    match state {
        DotState::Past => '#',
        DotState::Current => '@',
        DotState::Future => '.',
    }
}

fn usage() -> ! {
    eprintln!("usage: lifecal-preview [YYYY-MM-DD] [columns]");
    std::process::exit(2);
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let date = match args.next() {
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d").unwrap_or_else(|e| {
            error!("bad date {:?}: {}", s, e);
            usage()
        }),
        None => Local::now().date_naive(),
    };
    let columns = match args.next() {
        Some(s) => s.parse::<u32>().unwrap_or_else(|_| usage()),
        None => GridConfig::default().columns,
    };

    let snapshot = compute_snapshot(&date);
    // Cell positions do not depend on the bounding rectangle.
    let layout = match compute_grid_layout(snapshot.total_days, columns, 1.0, 1.0) {
        Ok(l) => l,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut rows = vec![vec![' '; layout.columns as usize]; layout.rows as usize];
    for (day, _) in layout.dots() {
        let (col, row) = layout.position(day - 1);
        rows[row as usize][col as usize] = symbol(classify_dot(day, snapshot.day_of_year));
    }

    for row in rows {
        let line: String = row
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let line = line.trim_end();
        if !line.is_empty() {
            println!("{}", line);
        }
    }
    println!();
    println!(
        "{}  day {}/{}  {} days left  {:.1}%",
        date,
        snapshot.day_of_year,
        snapshot.total_days,
        snapshot.days_left,
        snapshot.progress_percent
    );
}
