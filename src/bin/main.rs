use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
    thread,
};

use anyhow::{Context, Result};
use clap::Parser;
use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};
use embassy_time::Timer;
use log::{debug, info};
use steady_core::{
    app::{InputResult, ReaderSession},
    content::{Granularity, Tokens},
    input::InputEvent,
    settings::{Budgets, DISPLAY_WIDTH, ReaderConfig},
};

use console::ConsoleSink;
use deadline::DeadlineTimer;
use keys::QueuedInput;

#[path = "main/console.rs"]
mod console;
#[path = "main/deadline.rs"]
mod deadline;
#[path = "main/keys.rs"]
mod keys;

const KEY_QUEUE_DEPTH: usize = 16;

static KEYS: Channel<CriticalSectionRawMutex, InputEvent, KEY_QUEUE_DEPTH> = Channel::new();

type TerminalSession = ReaderSession<QueuedInput, ConsoleSink, DeadlineTimer>;

/// Paced reader: shows a text a few words at a time at a steady speed.
#[derive(Debug, Parser)]
#[command(name = "steady", version)]
struct Cli {
    /// Text file to read.
    file: PathBuf,
    /// Maximum number of characters per line.
    #[arg(short = 'c', long = "chars", default_value_t = 30)]
    chars: u16,
    /// Maximum number of words per line.
    #[arg(short = 'w', long, default_value_t = 2)]
    words: u8,
    /// Number of lines per frame.
    #[arg(short = 'l', long, default_value_t = 1)]
    lines: u8,
    /// Initial reading speed in words per minute.
    #[arg(short = 's', long, default_value_t = 250)]
    wpm: u16,
    /// Split the text on every space instead of on line breaks only.
    #[arg(long)]
    per_word: bool,
    /// Write log records to this file. Without it they are discarded,
    /// since the reader owns the whole terminal.
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let target: Box<dyn io::Write + Send> = match path {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?,
        ),
        None => Box::new(io::sink()),
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(target))
        .init();
    Ok(())
}

fn prepare(cli: &Cli) -> Result<TerminalSession> {
    let text = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let granularity = if cli.per_word {
        Granularity::Whitespace
    } else {
        Granularity::LineBreaks
    };
    let tokens = Tokens::from_text(&text, granularity)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("file {} has no words", cli.file.display()))?;

    let config = ReaderConfig {
        wpm: cli.wpm,
        budgets: Budgets {
            words: cli.words,
            lines: cli.lines,
            width: cli.chars,
        },
        ..ReaderConfig::default()
    };
    let title = cli.file.display().to_string();
    let session = ReaderSession::new(
        tokens,
        config,
        DISPLAY_WIDTH,
        QueuedInput::new(&KEYS),
        ConsoleSink::new(title, DISPLAY_WIDTH),
        DeadlineTimer::new(),
    )
    .map_err(anyhow::Error::msg)?;

    for warning in session.config_warnings() {
        eprintln!("steady: {warning}");
    }
    Ok(session)
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let cli = Cli::parse();
    let setup = init_logging(cli.log.as_deref())
        .and_then(|()| prepare(&cli))
        .and_then(|session| {
            console::enter().context("failed to set up the terminal")?;
            Ok(session)
        });
    let mut session = match setup {
        Ok(session) => session,
        Err(err) => {
            eprintln!("steady: {err:#}");
            std::process::exit(1);
        }
    };

    thread::spawn(|| keys::forward_keys(&KEYS));
    info!("reader started file={}", cli.file.display());

    session.start();
    loop {
        let event = match session.timer().armed() {
            Some(armed) => match select(KEYS.receive(), Timer::at(armed.at)).await {
                Either::First(event) => Some(event),
                Either::Second(()) => {
                    session.timer_mut().fired(armed.epoch);
                    session.on_timer(armed.epoch);
                    None
                }
            },
            None => Some(KEYS.receive().await),
        };

        let Some(event) = event else {
            continue;
        };
        debug!("input: {:?}", event);
        if session.apply_input_event(event) == InputResult::Quit
            || session.process_inputs() == InputResult::Quit
        {
            break;
        }
    }

    console::leave();
    std::process::exit(0);
}
