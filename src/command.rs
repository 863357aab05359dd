use crate::runner::Script;
use gridsnake::{consts, AiMode, BoardConfig};
use std::path::PathBuf;

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Run(Arguments),
    Help,
    Version,
}

impl Command {
    pub(crate) fn from_env() -> Result<Command, lexopt::Error> {
        Command::from_parser(lexopt::Parser::from_env())
    }

    fn from_parser(mut parser: lexopt::Parser) -> Result<Command, lexopt::Error> {
        use lexopt::prelude::*;
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('a') | Long("ai") => args.ai_mode = parser.value()?.parse()?,
                Short('s') | Long("seed") => args.seed = Some(parser.value()?.parse()?),
                Short('c') | Long("config") => args.config = Some(parser.value()?.into()),
                Long("width") => args.width = Some(parser.value()?.parse()?),
                Long("height") => args.height = Some(parser.value()?.parse()?),
                Long("cell-size") => args.cell_size = Some(parser.value()?.parse()?),
                Short('m') | Long("moves") => args.moves = parser.value()?.parse()?,
                Long("max-steps") => args.max_steps = parser.value()?.parse()?,
                Long("json") => args.json = true,
                Long("no-save") => args.save = false,
                Short('v') | Long("verbose") => args.verbosity = args.verbosity.saturating_add(1),
                Long("log-file") => args.log_file = Some(parser.value()?.into()),
                Short('h') | Long("help") => return Ok(Command::Help),
                Short('V') | Long("version") => return Ok(Command::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(args))
    }
}

/// Options for a single headless game
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) ai_mode: AiMode,
    /// Seed for food placement; random if not given
    pub(crate) seed: Option<u64>,
    pub(crate) config: Option<PathBuf>,
    pub(crate) width: Option<u32>,
    pub(crate) height: Option<u32>,
    pub(crate) cell_size: Option<u32>,
    /// Directions fed to a human-steered snake, one per step
    pub(crate) moves: Script,
    pub(crate) max_steps: u64,
    pub(crate) json: bool,
    /// Whether a new high score may be written to disk
    pub(crate) save: bool,
    pub(crate) verbosity: u8,
    pub(crate) log_file: Option<PathBuf>,
}

impl Arguments {
    /// Apply any board dimensions given on the command line on top of those
    /// from the configuration file
    pub(crate) fn board_config(&self, mut board: BoardConfig) -> BoardConfig {
        if let Some(width) = self.width {
            board.width = width;
        }
        if let Some(height) = self.height {
            board.height = height;
        }
        if let Some(cell_size) = self.cell_size {
            board.cell_size = cell_size;
        }
        board
    }

    pub(crate) fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

impl Default for Arguments {
    fn default() -> Arguments {
        Arguments {
            ai_mode: AiMode::default(),
            seed: None,
            config: None,
            width: None,
            height: None,
            cell_size: None,
            moves: Script::default(),
            max_steps: consts::DEFAULT_MAX_STEPS,
            json: false,
            save: true,
            verbosity: 0,
            log_file: None,
        }
    }
}

pub(crate) static USAGE: &str = "\
Usage: gridsnake [OPTIONS]

Play one game of snake without a display and report the result.

Options:
  -a, --ai <none|greedy|lookahead>
                        Who steers the snake [default: none]
  -s, --seed <INT>      Seed for food placement [default: random]
  -c, --config <PATH>   Read configuration from the given file
      --width <PX>      Board width in pixels
      --height <PX>     Board height in pixels
      --cell-size <PX>  Edge length of a cell in pixels
  -m, --moves <SCRIPT>  Directions for a human-steered snake, one letter
                        (U, D, L, R, or . for none) per step
      --max-steps <INT> Stop after this many steps [default: 10000]
      --json            Output a JSON report
      --no-save         Do not write a new high score to disk
  -v, --verbose         Log more details (repeatable)
      --log-file <PATH> Write logs to the given file instead of stderr
  -h, --help            Show this help and exit
  -V, --version         Show the program version and exit
";
