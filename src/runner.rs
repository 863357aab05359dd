use gridsnake::{
    AiMode, BoardConfig, Direction, GameError, GameSession, SessionState, Snapshot, TickOutcome,
};
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

/// A sequence of directional inputs, one per step.  `None` entries mean no
/// key was pressed before that step.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Script(Vec<Option<Direction>>);

impl Script {
    pub(crate) fn moves(&self) -> impl Iterator<Item = Option<Direction>> + '_ {
        self.0.iter().copied()
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    /// Parse a string of direction initials (`U`, `D`, `L`, `R`, in either
    /// case) and `.` placeholders.  Whitespace is ignored.
    fn from_str(s: &str) -> Result<Script, ScriptError> {
        let mut moves = Vec::with_capacity(s.len());
        for (position, ch) in s.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            } else if ch == '.' {
                moves.push(None);
            } else if let Some(d) = Direction::from_initial(ch) {
                moves.push(Some(d));
            } else {
                return Err(ScriptError { ch, position });
            }
        }
        Ok(Script(moves))
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("invalid move {ch:?} at position {position}; expected one of U, D, L, R, or .")]
pub(crate) struct ScriptError {
    ch: char,
    position: usize,
}

/// Everything needed to play a single game from start to finish
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Run {
    pub(crate) ai_mode: AiMode,
    pub(crate) board: BoardConfig,
    pub(crate) seed: u64,
    pub(crate) script: Script,
    pub(crate) max_steps: u64,
}

impl Run {
    /// Start a new game in `session` and drive it until the snake crashes,
    /// fills the board, or has taken `max_steps` steps.  Each tick reports
    /// exactly one interval of elapsed time, so every tick takes one step.  A
    /// game cut short by the step limit still counts toward the high score.
    pub(crate) fn play(&self, session: &mut GameSession) -> Result<RunReport, GameError> {
        let previous_high_score = session.high_score();
        session.reset(self.ai_mode, &self.board, self.seed)?;
        let interval = session.interval();
        let mut moves = self.script.moves();
        let mut finish = Finish::StepLimit;
        while session.state() == SessionState::Playing && session.steps() < self.max_steps {
            let input = moves.next().flatten();
            match session.tick(interval, input) {
                Ok(TickOutcome::GameOver) => finish = Finish::GameOver,
                Ok(_) => (),
                Err(GameError::Spawn(_)) => finish = Finish::BoardFull,
                Err(e) => return Err(e),
            }
        }
        if finish == Finish::StepLimit {
            session.record_score(session.score());
        }
        Ok(RunReport {
            seed: self.seed,
            finish,
            new_high_score: session.high_score() > previous_high_score,
            snapshot: session.snapshot(),
        })
    }
}

/// How a headless game came to an end
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Finish {
    GameOver,
    BoardFull,
    StepLimit,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub(crate) struct RunReport {
    pub(crate) seed: u64,
    pub(crate) finish: Finish,
    pub(crate) new_high_score: bool,
    #[serde(flatten)]
    pub(crate) snapshot: Snapshot,
}

impl RunReport {
    pub(crate) fn summary(&self) -> String {
        let what = match self.finish {
            Finish::GameOver => "Game over",
            Finish::BoardFull => "Board filled",
            Finish::StepLimit => "Step limit reached",
        };
        let mut s = format!(
            "{what} after {} steps ({} AI, seed {}): score {}, length {}, high score {}",
            self.snapshot.steps,
            self.snapshot.ai_mode,
            self.seed,
            self.snapshot.score,
            self.snapshot.snake.len(),
            self.snapshot.high_score,
        );
        if self.new_high_score {
            s.push_str(" (new!)");
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsnake::{Cell, TickIntervals};
    use rstest::rstest;

    fn session(high_score: Option<u32>) -> GameSession {
        GameSession::new(&BoardConfig::default(), TickIntervals::default(), high_score).unwrap()
    }

    fn run(ai_mode: AiMode, board: BoardConfig, script: &str, max_steps: u64) -> Run {
        Run {
            ai_mode,
            board,
            seed: 0x5EED,
            script: script.parse().unwrap(),
            max_steps,
        }
    }

    #[test]
    fn parse_script() {
        let script = "Ur. d\nL".parse::<Script>().unwrap();
        assert_eq!(
            script.moves().collect::<Vec<_>>(),
            [
                Some(Direction::Up),
                Some(Direction::Right),
                None,
                Some(Direction::Down),
                Some(Direction::Left),
            ]
        );
    }

    #[test]
    fn parse_empty_script() {
        assert_eq!("".parse::<Script>(), Ok(Script::default()));
    }

    #[test]
    fn parse_bad_script() {
        let e = "UU?".parse::<Script>().unwrap_err();
        assert_eq!(e, ScriptError { ch: '?', position: 2 });
        assert_eq!(
            e.to_string(),
            "invalid move '?' at position 2; expected one of U, D, L, R, or ."
        );
    }

    #[test]
    fn drive_into_wall() {
        let board = BoardConfig {
            width: 60,
            height: 60,
            cell_size: 20,
        };
        let mut session = session(None);
        let report = run(AiMode::None, board, "", 100)
            .play(&mut session)
            .unwrap();
        assert_eq!(report.finish, Finish::GameOver);
        assert_eq!(report.snapshot.state, SessionState::GameOver);
        assert_eq!(report.snapshot.steps, 2);
        assert_eq!(report.snapshot.snake[0], Cell::new(2, 1));
    }

    #[test]
    fn step_limit() {
        let mut session = session(None);
        let report = run(AiMode::None, BoardConfig::default(), "DR", 5)
            .play(&mut session)
            .unwrap();
        assert_eq!(report.finish, Finish::StepLimit);
        assert_eq!(report.snapshot.state, SessionState::Playing);
        assert_eq!(report.snapshot.steps, 5);
        assert_eq!(report.snapshot.snake[0], Cell::new(24, 13));
        assert!(!report.new_high_score);
    }

    #[rstest]
    #[case(AiMode::Greedy)]
    #[case(AiMode::Lookahead)]
    fn autopilot_scores(#[case] ai_mode: AiMode) {
        let board = BoardConfig {
            width: 200,
            height: 200,
            cell_size: 20,
        };
        let mut session = session(Some(0));
        let report = run(ai_mode, board, "LLLL", 2000)
            .play(&mut session)
            .unwrap();
        assert!(report.snapshot.score >= 10);
        assert_eq!(report.snapshot.score % 10, 0);
        assert!(report.new_high_score);
        assert_eq!(report.snapshot.high_score, report.snapshot.score);
        assert!(report
            .snapshot
            .food
            .is_some_and(|f| !report.snapshot.snake.contains(&f)));
    }

    #[test]
    fn fill_the_board() {
        let board = BoardConfig {
            width: 40,
            height: 40,
            cell_size: 20,
        };
        let mut session = session(Some(20));
        let report = run(AiMode::Greedy, board, "", 100)
            .play(&mut session)
            .unwrap();
        assert_eq!(report.finish, Finish::BoardFull);
        assert_eq!(report.snapshot.state, SessionState::GameOver);
        assert_eq!(report.snapshot.snake.len(), 4);
        assert_eq!(report.snapshot.food, None);
        assert_eq!(report.snapshot.score, 30);
        assert_eq!(report.snapshot.high_score, 30);
        assert!(report.new_high_score);
        assert!(report.summary().starts_with("Board filled after "));
    }

    #[test]
    fn summary() {
        let board = BoardConfig {
            width: 60,
            height: 60,
            cell_size: 20,
        };
        let mut session = session(Some(500));
        let report = run(AiMode::None, board, "", 100)
            .play(&mut session)
            .unwrap();
        let score = report.snapshot.score;
        assert_eq!(
            report.summary(),
            format!(
                "Game over after 2 steps (none AI, seed 24301): score {score}, length {}, high score 500",
                report.snapshot.snake.len()
            )
        );
    }
}
