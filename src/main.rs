mod command;
mod runner;
use crate::command::{Arguments, Command, USAGE};
use crate::runner::Run;
use anyhow::Context;
use gridsnake::config::Config;
use gridsnake::GameSession;
use log::{error, info, warn};
use rand::Rng;
use simplelog::{ColorChoice, TermLogger, TerminalMode, WriteLogger};
use std::io::{self, ErrorKind, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match Command::from_env() {
        Ok(Command::Run(args)) => match run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => match e.downcast_ref::<io::Error>() {
                Some(ioe) if ioe.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
                _ => {
                    eprintln!("gridsnake: {e:?}");
                    ExitCode::FAILURE
                }
            },
        },
        Ok(Command::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprintln!("Run `gridsnake --help` for usage.");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    init_logging(&args)?;
    let mut config = match args.config {
        Some(ref path) => Config::load(path, false),
        None => Config::default_path().and_then(|path| Config::load(&path, true)),
    }
    .context("failed to load configuration")?;
    if !args.save {
        config.files.save_high_score = false;
    }
    config.board = args.board_config(config.board);
    let high_score = match config.load_high_score() {
        Ok(hs) => hs,
        Err(e) => {
            warn!("{:#}", anyhow::Error::new(e));
            None
        }
    };
    let mut session = GameSession::new(
        &config.board,
        config.intervals.to_intervals(),
        high_score,
    )
    .context("failed to set up game")?;
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let report = Run {
        ai_mode: args.ai_mode,
        board: config.board,
        seed,
        script: args.moves,
        max_steps: args.max_steps,
    }
    .play(&mut session)
    .context("game ended abnormally")?;
    if report.new_high_score {
        info!("Saving new high score {}", session.high_score());
        if let Err(e) = config.save_high_score(session.high_score()) {
            error!("{:#}", anyhow::Error::new(e));
        }
    }
    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", report.summary())?;
    }
    out.flush()?;
    Ok(())
}

fn init_logging(args: &Arguments) -> anyhow::Result<()> {
    let level = args.log_level();
    let logcfg = simplelog::Config::default();
    if let Some(ref path) = args.log_file {
        let fp = fs_err::File::create(path).context("failed to open log file")?;
        WriteLogger::init(level, logcfg, fp)?;
    } else {
        TermLogger::init(level, logcfg, TerminalMode::Stderr, ColorChoice::Auto)?;
    }
    Ok(())
}
