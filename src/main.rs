//! file: main.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:44:30 Sunday
//! brief: minefield window, mines are previewed then hidden

use gpui_mines::app;

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();

    if let Err(err) = app::run() {
        log::error!("{err:#}");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
