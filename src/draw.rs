use std::{
    io::{stdout, Write},
    time::Duration,
    thread,
    sync::{
        Arc,
        Mutex,
        atomic::{ AtomicBool, AtomicU64, Ordering },
        mpsc,
    },
};

use anyhow::{anyhow, bail, Context, Result};
use crossterm::{
    terminal::{ self, EnterAlternateScreen, LeaveAlternateScreen, enable_raw_mode, disable_raw_mode, SetTitle, },
    cursor::{ SavePosition, RestorePosition, Show, Hide },
    execute,
    event::{
        self,
        Event,
        KeyModifiers,
        KeyCode, KeyEventKind,
    },
};
use tracing::{debug, trace};

use crate::{board::Board, game::Game, outcome::Outcome};

/// Frame delays in milliseconds, fastest first.
static DELAYS: [u64; 14] = [1, 10, 20, 40, 60, 100, 150, 200, 300, 450, 800, 1200, 1500, 2000];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Rect{
    w: u16, // cols
    h: u16, // rows
}

/// What the tick thread hands to the screen: the board before generation
/// `generation` runs, plus everything killed and revived up to that point.
#[derive(Debug, Clone)]
pub struct Frame {
    pub board: Board,
    pub generation: u64,
    pub total: Outcome,
}

pub struct App {
    game: Mutex<Game>,
    should_exit: AtomicBool,
    pause: AtomicBool,
    maxgen: AtomicU64,
    upd_timeout: AtomicU64,
}

impl Rect {
    #[inline]
    pub fn new(width: u16, height: u16) -> Self {
        Rect{w: width, h: height}
    }

    pub fn term_size() -> Result<Self> {
        let (width, height) = terminal::size().context("can't read terminal size")?;
        Ok(Rect{w: width, h: height})
    }

    /// Screen space a board needs, status line included.
    pub fn for_board(board: &Board) -> Self {
        let w = u16::try_from(board.column_count()).unwrap_or(u16::MAX);
        let h = u16::try_from(board.row_count()).unwrap_or(u16::MAX);
        Rect{w, h: h.saturating_add(1)}
    }

    #[inline]
    pub fn w(&self) -> u16 {
        self.w
    }

    #[inline]
    pub fn h(&self) -> u16 {
        self.h
    }

    #[inline]
    pub fn fits_in(&self, outer: &Rect) -> bool {
        self.w <= outer.w && self.h <= outer.h
    }
}

impl App {

    #[inline]
    pub fn new(game: Game, maxgen: u64, upd_timeout: u64) -> Self {
        App {
            game: Mutex::new(game),
            should_exit: false.into(),
            pause: false.into(),
            maxgen: maxgen.into(),
            upd_timeout: upd_timeout.into(),
        }
    }

    #[inline]
    pub fn maxgen(&self) -> u64 {
        self.maxgen.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn should_exit(&self) -> bool {
        self.should_exit.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn pause(&self) -> bool {
        self.pause.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn upd_timeout(&self) -> u64 {
        self.upd_timeout.load(Ordering::Relaxed)
    }

    fn exit(&self) {
        self.should_exit.store(true, Ordering::Relaxed)
    }

    fn board_rect(&self) -> Result<Rect> {
        let game = self.game.lock().map_err(|_| anyhow!("game lock poisoned"))?;
        Ok(Rect::for_board(game.board()))
    }
}

/// Plays the game on the terminal until the generation cap or the user quits.
pub fn run(a: App) -> Result<()> {
    let terminal = Rect::term_size()?;
    let size = a.board_rect()?;
    if !size.fits_in(&terminal) {
        bail!(
            "board needs {}x{} characters but the terminal is {}x{}",
            size.w(), size.h(), terminal.w(), terminal.h(),
        );
    }

    with_screen(runup, || draw(a), shutdown)
}

/// Runs `body` between `setup` and `teardown`. Once `setup` has been tried
/// `teardown` always runs, so a setup that fails halfway is still undone.
/// The first error wins.
fn with_screen<T>(
    setup: impl FnOnce() -> Result<()>,
    body: impl FnOnce() -> Result<T>,
    teardown: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let d = setup().and_then(|_| body());
    let t = teardown();
    let v = d?;
    t?;
    Ok(v)
}

fn runup() -> Result<()> {
    execute!(std::io::stderr(), EnterAlternateScreen, SetTitle("Life a game"), Hide)?;
    enable_raw_mode()?;
    clear()?;
    execute!(stdout(), SavePosition)?;
    Ok(())
}

fn shutdown() -> Result<()> {
    let left = execute!(std::io::stderr(), LeaveAlternateScreen, Show);
    let raw = disable_raw_mode();
    left?;
    raw?;
    Ok(())
}

fn draw(a: App) -> Result<()> {
    let (tx, rx) = mpsc::sync_channel::<Frame>(1);
    let a = Arc::new(a);

    let arc_ticks = Arc::clone(&a);
    let arc_keys = Arc::clone(&a);

    let ticks = thread::Builder::new().name("Tick machine".into()).spawn(move || -> Result<()> {
        let mut game = arc_ticks.game.lock().map_err(|_| anyhow!("game lock poisoned"))?;
        tick(&mut game, arc_ticks.maxgen(), &tx, &arc_ticks.should_exit);
        Ok(())
    })?;

    let keys = thread::Builder::new().name("Keyboard input".into()).spawn(move || {
        let a = arc_keys;
        let mut delay = DELAYS
            .iter()
            .position(|&d| d >= a.upd_timeout())
            .unwrap_or(DELAYS.len() - 1);
        while !a.should_exit() {
            if let Err(e) = hotkeys(&a, &mut delay) {
                debug!("keyboard: {e}");
            }
        }
    })?;

    let shown = show(&a, rx);

    a.exit();
    let keys = keys.join().map_err(|_| anyhow!("keyboard thread panicked"));
    let ticks = ticks.join().map_err(|_| anyhow!("tick thread panicked")).and_then(|t| t);
    shown?;
    keys?;
    ticks
}

/// Sends the board before each of `maxgen` generations and once more after
/// the last one. Stops early once `stop` is set or the screen hangs up.
fn tick(game: &mut Game, maxgen: u64, tx: &mpsc::SyncSender<Frame>, stop: &AtomicBool) {
    let mut total = Outcome::new();
    for generation in 0..=maxgen {
        let frame = Frame { board: game.board().clone(), generation, total };
        if stop.load(Ordering::Relaxed) || tx.send(frame).is_err() {
            break
        }
        if generation < maxgen {
            total += game.iterate();
            trace!(generation, "tick");
        }
    }
}

fn show(a: &App, rx: mpsc::Receiver<Frame>) -> Result<()> {
    while !a.should_exit() {
        if a.pause() {
            sleep_ms(50);
            continue
        }

        let Ok(frame) = rx.recv() else {
            break
        };

        sleep_ms(a.upd_timeout());
        clear()?;
        print!("{}", render(&frame));
        stdout().flush()?;
    }
    Ok(())
}

fn render(frame: &Frame) -> String {
    let board = &frame.board;
    let mut s = String::with_capacity((board.column_count() + 2) * (board.row_count() + 1));
    for c in board.cells() {
        s.push(if c.is_alive() { '#' } else { ' ' });
        if c.column() + 1 == board.column_count() {
            s.push_str("\n\r");
        }
    }
    s.push_str(&format!(
        "gen {}  alive {}  killed {}  revived {}  [p]ause [j/k] speed [q]uit",
        frame.generation,
        board.count_of_alive_cells(),
        frame.total.cells_killed(),
        frame.total.cells_revived(),
    ));
    s
}

fn clear() -> Result<()> {
    use terminal::{ Clear, ClearType };

    execute!(stdout(), Clear(ClearType::Purge))?;
    execute!(stdout(), RestorePosition)?;
    Ok(())
}

fn sleep_ms(t: u64) {
    thread::sleep(Duration::from_millis(t))
}


fn hotkeys(a: &App, delay: &mut usize) -> Result<()> {
    if event::poll(Duration::from_millis(150))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    if key.code == KeyCode::Char('c') {
                        a.exit();
                    }
                } else {
                    match key.code {
                        KeyCode::Char('q') => a.exit(),
                        KeyCode::Char('p') => {
                            let p = a.pause();
                            a.pause.store(!p, Ordering::Relaxed);
                        },
                        KeyCode::Char('j') => {
                            *delay = delay.saturating_sub(1);
                            a.upd_timeout.store(DELAYS[*delay], Ordering::Relaxed);
                        },
                        KeyCode::Char('k') => {
                            *delay = (*delay + 1).min(DELAYS.len() - 1);
                            a.upd_timeout.store(DELAYS[*delay], Ordering::Relaxed);
                        },
                        _ => {},
                    }
                }
            }
        }
    }
    Ok(())
}
