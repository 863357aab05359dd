mod board;
pub mod collision;
mod direction;
pub mod food;
mod snake;
pub mod step;
pub use self::board::{Board, BoardConfig, BoardError, Cell};
pub use self::collision::Collision;
pub use self::direction::Direction;
pub use self::food::SpawnError;
pub use self::snake::Snake;
pub use self::step::StepOutcome;
use crate::ai::{AiMode, Autopilot, Pilot, Surroundings};
use crate::consts;
use enum_map::{enum_map, EnumMap};
use log::{debug, info, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// A single-player game of snake, from mode selection through game over.
///
/// The session never reads the clock or the keyboard itself: the caller
/// reports elapsed time and the latest directional input via
/// [`GameSession::tick()`], and the session moves the snake whenever a full
/// tick interval has accumulated.
#[derive(Clone, Debug)]
pub struct GameSession {
    state: SessionState,
    intervals: TickIntervals,
    high_score: u32,
    ai_mode: AiMode,
    autopilot: Autopilot,
    board: Board,
    snake: Snake,
    /// `None` once the snake has filled the board
    food: Option<Cell>,
    score: u32,
    /// The direction applied on the most recent step
    heading: Direction,
    /// The most recent human input not yet applied
    queued: Option<Direction>,
    /// Time accumulated toward the next step
    timer: Duration,
    steps: u64,
    rng: ChaCha12Rng,
}

impl GameSession {
    /// Create a session sitting at the menu.  A missing high score is treated
    /// as zero.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `config` does not describe a usable board.
    pub fn new(
        config: &BoardConfig,
        intervals: TickIntervals,
        high_score: Option<u32>,
    ) -> Result<GameSession, GameError> {
        let mut session = GameSession::start(
            AiMode::default(),
            config,
            0,
            intervals,
            high_score.unwrap_or_default(),
        )?;
        session.state = SessionState::Menu;
        Ok(session)
    }

    fn start(
        ai_mode: AiMode,
        config: &BoardConfig,
        seed: u64,
        intervals: TickIntervals,
        high_score: u32,
    ) -> Result<GameSession, GameError> {
        let board = Board::new(config)?;
        let snake = Snake::new(board.center());
        let mut rng = ChaCha12Rng::seed_from_u64(seed);
        let food = food::spawn(&board, &snake, &mut rng)?;
        Ok(GameSession {
            state: SessionState::Playing,
            intervals,
            high_score,
            ai_mode,
            autopilot: ai_mode.autopilot(snake.len()),
            board,
            snake,
            food: Some(food),
            score: 0,
            heading: Direction::Right,
            queued: None,
            timer: Duration::ZERO,
            steps: 0,
            rng,
        })
    }

    /// Start a new game steered by `ai_mode` on a board described by `config`,
    /// with food placement driven by a random number generator seeded with
    /// `seed`.  The high score carries over from the previous game.
    ///
    /// A new game can only be started from the menu; a finished game must be
    /// acknowledged first.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the session is not at the menu or if `config` does not
    /// describe a usable board.  The session is left unchanged in either case.
    pub fn reset(
        &mut self,
        ai_mode: AiMode,
        config: &BoardConfig,
        seed: u64,
    ) -> Result<SessionState, GameError> {
        if self.state != SessionState::Menu {
            return Err(GameError::NotAtMenu(self.state));
        }
        *self = GameSession::start(ai_mode, config, seed, self.intervals, self.high_score)?;
        info!(
            "Started {}x{} game with AI mode {ai_mode} and seed {seed}",
            self.board.width(),
            self.board.height()
        );
        Ok(self.state)
    }

    /// Let `elapsed` time pass.  If a full tick interval has accumulated, the
    /// snake takes one step.
    ///
    /// When the snake is steered by a human, `input` is the direction most
    /// recently requested (if any).  A request to reverse direction is
    /// ignored.  Requests made between steps are remembered until the next
    /// step, with later requests replacing earlier ones.  When an autopilot is
    /// steering, `input` is ignored.
    ///
    /// Nothing happens unless the session is [`SessionState::Playing`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the snake has filled the board so that no food can be
    /// placed.  The final piece of food still counts toward the score, the
    /// game is over, and there is no food on the board afterwards.
    pub fn tick(
        &mut self,
        elapsed: Duration,
        input: Option<Direction>,
    ) -> Result<TickOutcome, GameError> {
        let Some(mut food) = self.food.filter(|_| self.state == SessionState::Playing) else {
            return Ok(TickOutcome::Idle);
        };
        if let Some(d) = input.filter(|_| self.ai_mode == AiMode::None) {
            if d == self.heading.reverse() {
                debug!("Ignoring request to reverse from {:?} to {d:?}", self.heading);
            } else {
                self.queued = Some(d);
            }
        }
        let interval = self.intervals.get(self.ai_mode);
        self.timer = self.timer.saturating_add(elapsed);
        if self.timer < interval {
            return Ok(TickOutcome::Idle);
        }
        self.timer -= interval;
        if self.timer >= interval {
            trace!("Dropping {:?} of tick backlog", self.timer);
            self.timer = Duration::ZERO;
        }
        self.heading = self.resolve_direction(food);
        self.steps += 1;
        let r = step::step(
            &self.board,
            &mut self.snake,
            &mut food,
            self.heading,
            &mut self.rng,
        );
        self.food = r.is_ok().then_some(food);
        match r {
            Ok(StepOutcome::Moved) => Ok(TickOutcome::Continue),
            Ok(StepOutcome::Ate) => {
                self.score += consts::SCORE_PER_FOOD;
                self.autopilot.food_eaten(self.snake.len());
                debug!(
                    "Ate food; score is now {}, next food at ({}, {})",
                    self.score, food.col, food.row
                );
                Ok(TickOutcome::FoodEaten)
            }
            Ok(StepOutcome::Collided(collision)) => {
                info!(
                    "Game over after {} steps: hit {collision:?} heading {:?} with score {}",
                    self.steps, self.heading, self.score
                );
                self.end_game();
                Ok(TickOutcome::GameOver)
            }
            Err(e) => {
                self.score += consts::SCORE_PER_FOOD;
                info!(
                    "Game over after {} steps: board is full with score {}",
                    self.steps, self.score
                );
                self.end_game();
                Err(e.into())
            }
        }
    }

    /// Determine the direction for the coming step, ensuring it is not a
    /// reversal of the current heading
    fn resolve_direction(&mut self, food: Cell) -> Direction {
        let queued = self.queued.take();
        let view = Surroundings {
            board: &self.board,
            snake: &self.snake,
            food,
            heading: self.heading,
        };
        match self.autopilot.choose(&view).or(queued) {
            Some(d) if d == self.heading.reverse() => {
                debug!("Refusing to reverse from {:?} to {d:?}", self.heading);
                self.heading
            }
            Some(d) => d,
            None => self.heading,
        }
    }

    fn end_game(&mut self) {
        self.state = SessionState::GameOver;
        if self.record_score(self.score) {
            info!("New high score: {}", self.score);
        }
    }

    /// Acknowledge a finished game and return to the menu.  Does nothing
    /// unless the session is [`SessionState::GameOver`].
    pub fn acknowledge(&mut self) -> SessionState {
        if self.state == SessionState::GameOver {
            self.state = SessionState::Menu;
        }
        self.state
    }

    /// Record `score` as the high score if it beats the current one.  Returns
    /// `true` if the high score changed.
    pub fn record_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn ai_mode(&self) -> AiMode {
        self.ai_mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// The current food cell, or `None` if the snake has filled the board
    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The direction applied on the most recent step
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Number of steps taken in the current game
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// The time between steps in the current mode
    pub fn interval(&self) -> Duration {
        self.intervals.get(self.ai_mode)
    }

    /// Capture the current state of the session for display or reporting
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            ai_mode: self.ai_mode,
            board: self.board,
            snake: self.snake.cells().collect(),
            food: self.food,
            heading: self.heading,
            score: self.score,
            high_score: self.high_score,
            steps: self.steps,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionState {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// The result of a call to [`GameSession::tick()`]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TickOutcome {
    /// No step was due, or the session is not playing
    Idle,
    /// The snake moved without eating
    Continue,
    /// The snake ate the food and grew
    FoodEaten,
    /// The snake crashed
    GameOver,
}

/// Time between steps for each [`AiMode`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TickIntervals(EnumMap<AiMode, Duration>);

impl TickIntervals {
    pub fn new(human: Duration, greedy: Duration, lookahead: Duration) -> TickIntervals {
        TickIntervals(enum_map! {
            AiMode::None => human,
            AiMode::Greedy => greedy,
            AiMode::Lookahead => lookahead,
        })
    }

    pub fn get(&self, mode: AiMode) -> Duration {
        self.0[mode]
    }

    pub fn set(&mut self, mode: AiMode, interval: Duration) {
        self.0[mode] = interval;
    }
}

impl Default for TickIntervals {
    fn default() -> TickIntervals {
        TickIntervals::new(
            consts::HUMAN_TICK_PERIOD,
            consts::GREEDY_TICK_PERIOD,
            consts::LOOKAHEAD_TICK_PERIOD,
        )
    }
}

/// A read-only copy of a session's state
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Snapshot {
    pub state: SessionState,
    pub ai_mode: AiMode,
    pub board: Board,
    /// The snake's cells, head first
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    pub heading: Direction,
    pub score: u32,
    pub high_score: u32,
    pub steps: u64,
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum GameError {
    #[error("a new game can only be started from the menu, not while {0:?}")]
    NotAtMenu(SessionState),
    #[error("invalid board configuration")]
    Board(#[from] BoardError),
    #[error("failed to place food")]
    Spawn(#[from] SpawnError),
}
