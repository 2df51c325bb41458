use life_board::{
    draw::{self, App},
    Board, Game,
};

use std::io::{stdin, BufRead};

use anyhow::{Context, Result};
use clap::{value_t, Arg};
use tracing::info;

fn main() -> Result<()> {
    init_tracing()?;

    let matches = clap::App::new("life_board")
        .about("Conway's Game of Life on a bounded board. Reads the seed pattern from stdin.")
        .arg(
            Arg::with_name("generations")
                .long("generations")
                .takes_value(true)
                .default_value("150000")
                .help("number of generations to run"),
        )
        .arg(
            Arg::with_name("delay")
                .long("delay")
                .takes_value(true)
                .default_value("450")
                .help("milliseconds between frames in interactive mode"),
        )
        .arg(
            Arg::with_name("headless")
                .long("headless")
                .help("run without the terminal screen and print the final board"),
        )
        .get_matches();

    let generations = value_t!(matches, "generations", u64)?;
    let delay = value_t!(matches, "delay", u64)?;
    let headless = matches.is_present("headless") || !stdout_is_tty();

    let mut board: Board = readlines()?.parse().context("invalid seed pattern")?;
    board.freeze();
    info!(rows = board.row_count(), cols = board.column_count(), alive = board.count_of_alive_cells(), "board seeded");

    let mut game = Game::new(board);
    if headless {
        let outcome = game.start(generations);
        print!("{}", game.board());
        println!("killed={} revived={}", outcome.cells_killed(), outcome.cells_revived());
    } else {
        draw::run(App::new(game, generations, delay))?;
    }
    Ok(())
}

fn init_tracing() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("life_board=warn"))?;
    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(filter),
    )?;
    Ok(())
}

fn stdout_is_tty() -> bool {
    // SAFETY: isatty only inspects the descriptor.
    unsafe { libc::isatty(libc::STDOUT_FILENO) == 1 }
}

/// Pattern lines up to the first blank line or EOF.
fn readlines() -> Result<String> {
    let mut s = String::new();
    for w in stdin().lock().lines() {
        let w = w.context("can't read pattern from stdin")?;
        if w.is_empty() {
            break
        }
        s.push_str(&w);
        s.push('\n')
    }
    Ok(s)
}
