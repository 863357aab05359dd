//! Automated steering of the snake
mod greedy;
mod lookahead;
pub use self::greedy::Greedy;
pub use self::lookahead::{accessible_space, space_weight, Lookahead};
use crate::game::{Board, Cell, Direction, Snake};
use enum_dispatch::enum_dispatch;
use enum_map::Enum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which strategy steers the snake
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Enum, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AiMode {
    /// The snake is steered by a human
    #[default]
    None,
    /// Head for the food, sidestepping immediate obstacles
    Greedy,
    /// Weigh distance to food against the room left to manoeuvre
    Lookahead,
}

impl AiMode {
    pub fn iter() -> impl Iterator<Item = AiMode> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AiMode::None => "none",
            AiMode::Greedy => "greedy",
            AiMode::Lookahead => "lookahead",
        }
    }

    /// Construct a fresh pilot for this mode, steering a snake of the given
    /// length
    pub fn autopilot(self, snake_len: usize) -> Autopilot {
        match self {
            AiMode::None => Manual.into(),
            AiMode::Greedy => Greedy.into(),
            AiMode::Lookahead => Lookahead::new(snake_len).into(),
        }
    }
}

impl fmt::Display for AiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AiMode {
    type Err = ParseAiModeError;

    fn from_str(s: &str) -> Result<AiMode, ParseAiModeError> {
        AiMode::iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseAiModeError)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("invalid AI mode; expected \"none\", \"greedy\", or \"lookahead\"")]
pub struct ParseAiModeError;

/// Everything a pilot may look at when choosing the next direction
#[derive(Clone, Copy, Debug)]
pub struct Surroundings<'a> {
    pub board: &'a Board,
    pub snake: &'a Snake,
    pub food: Cell,
    /// The direction applied on the most recent step
    pub heading: Direction,
}

#[enum_dispatch]
pub trait Pilot {
    /// Choose the direction for the next step.  `None` means the pilot has no
    /// opinion and the direction should come from human input.
    ///
    /// Pilots never fail: if every direction is fatal, they keep going in the
    /// current direction.
    fn choose(&self, view: &Surroundings<'_>) -> Option<Direction>;

    /// Inform the pilot that the snake has just eaten and is now `snake_len`
    /// segments long
    fn food_eaten(&mut self, _snake_len: usize) {}
}

/// A pilot for each [`AiMode`]
#[enum_dispatch(Pilot)]
#[derive(Clone, Debug, PartialEq)]
pub enum Autopilot {
    Manual,
    Greedy,
    Lookahead,
}

/// The pilot for [`AiMode::None`], which leaves steering to the human
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Manual;

impl Pilot for Manual {
    fn choose(&self, _view: &Surroundings<'_>) -> Option<Direction> {
        None
    }
}
