use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::game::{EndReason, GameSession, StepOutcome};
use crate::grid::Direction;

pub enum Phase {
    Idle,
    Running(GameSession),
    GameOver {
        session: GameSession,
        reason: EndReason,
        final_score: u32,
    },
}

pub struct App {
    config: GameConfig,
    rng: StdRng,
    phase: Phase,
    exit: bool,
}

impl App {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        App {
            config,
            rng: StdRng::seed_from_u64(seed),
            phase: Phase::Idle,
            exit: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    pub fn start_game(&mut self) {
        let seed = self.rng.gen();
        info!(
            "game started: seed {}, grid {}x{}, wrap {}",
            seed, self.config.grid_count, self.config.grid_count, self.config.wrap_enabled
        );
        self.phase = Phase::Running(GameSession::new(&self.config, seed));
    }

    /// Calls the current game off. A no-op unless a game is running.
    pub fn end_game(&mut self) {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        self.phase = match phase {
            Phase::Running(session) => {
                let final_score = session.score();
                info!("game aborted at score {}", final_score);
                Phase::GameOver {
                    session,
                    reason: EndReason::Aborted,
                    final_score,
                }
            }
            other => other,
        };
    }

    /// Advances the running game by one tick. Outside of a running game the
    /// clock has nothing to drive.
    pub fn on_tick(&mut self) {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        self.phase = match phase {
            Phase::Running(mut session) => match session.step() {
                StepOutcome::Moved | StepOutcome::Ate => Phase::Running(session),
                StepOutcome::Ended(reason) => {
                    let final_score = session.score();
                    info!("game over: {:?}, final score {}", reason, final_score);
                    Phase::GameOver {
                        session,
                        reason,
                        final_score,
                    }
                }
            },
            other => other,
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if is_ctrl_c(&key) {
            self.exit = true;
            return;
        }

        let steer = match key.code {
            KeyCode::Left | KeyCode::Char('a') => Some(Direction::Left),
            KeyCode::Up | KeyCode::Char('w') => Some(Direction::Up),
            KeyCode::Right | KeyCode::Char('d') => Some(Direction::Right),
            KeyCode::Down | KeyCode::Char('s') => Some(Direction::Down),
            _ => None,
        };
        if let Some(direction) = steer {
            // Steering only means something while a game is running.
            if let Phase::Running(session) = &mut self.phase {
                session.request_direction(direction);
            }
            return;
        }

        match (&self.phase, key.code) {
            (Phase::Idle | Phase::GameOver { .. }, KeyCode::Char(' ')) => self.start_game(),
            (Phase::Running(_), KeyCode::Char('q')) => self.end_game(),
            (Phase::Idle | Phase::GameOver { .. }, KeyCode::Char('q')) | (_, KeyCode::Esc) => {
                self.exit = true
            }
            _ => {}
        }
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(GameConfig::default(), 7)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_starts_idle() {
        let app = app();
        assert!(matches!(app.phase(), Phase::Idle));
        assert!(!app.should_exit());
    }

    #[test]
    fn test_space_starts_a_game() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char(' ')));
        assert!(matches!(app.phase(), Phase::Running(_)));
    }

    #[test]
    fn test_ticks_are_ignored_while_idle() {
        let mut app = app();
        app.on_tick();
        assert!(matches!(app.phase(), Phase::Idle));
    }

    #[test]
    fn test_steering_is_ignored_outside_a_running_game() {
        let mut app = app();
        app.handle_key(key(KeyCode::Left));
        assert!(matches!(app.phase(), Phase::Idle));
        app.start_game();
        app.end_game();
        app.handle_key(key(KeyCode::Up));
        assert!(matches!(
            app.phase(),
            Phase::GameOver {
                reason: EndReason::Aborted,
                ..
            }
        ));
    }

    #[test]
    fn test_abort_keeps_the_final_board_and_score() {
        let mut app = app();
        app.start_game();
        app.handle_key(key(KeyCode::Char('q')));
        match app.phase() {
            Phase::GameOver {
                session,
                reason,
                final_score,
            } => {
                assert_eq!(*reason, EndReason::Aborted);
                assert_eq!(*final_score, session.score());
            }
            _ => panic!("expected the game to be over"),
        }
    }

    #[test]
    fn test_end_game_is_idempotent() {
        let mut app = app();
        app.end_game();
        assert!(matches!(app.phase(), Phase::Idle));
        app.start_game();
        app.end_game();
        app.end_game();
        assert!(matches!(
            app.phase(),
            Phase::GameOver {
                reason: EndReason::Aborted,
                ..
            }
        ));
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut app = app();
        app.start_game();
        app.end_game();
        app.handle_key(key(KeyCode::Char(' ')));
        match app.phase() {
            Phase::Running(session) => assert_eq!(session.score(), 0),
            _ => panic!("expected a fresh game"),
        }
    }

    #[test]
    fn test_running_into_a_wall_ends_the_game() {
        let mut app = App::new(
            GameConfig {
                wrap_enabled: false,
                ..GameConfig::default()
            },
            7,
        );
        app.start_game();
        // Heading left from the centre of a 14-cell grid: seven moves reach
        // the edge, the eighth hits the wall.
        for _ in 0..8 {
            app.on_tick();
        }
        assert!(matches!(
            app.phase(),
            Phase::GameOver {
                reason: EndReason::WallCollision,
                ..
            }
        ));
    }

    #[test]
    fn test_game_over_stops_the_clock() {
        let mut app = app();
        app.start_game();
        app.end_game();
        app.on_tick();
        assert!(matches!(
            app.phase(),
            Phase::GameOver {
                reason: EndReason::Aborted,
                ..
            }
        ));
    }

    #[test]
    fn test_quit_keys() {
        let mut escaped = app();
        escaped.handle_key(key(KeyCode::Esc));
        assert!(escaped.should_exit());

        let mut interrupted = app();
        interrupted.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(interrupted.should_exit());

        // The first q only aborts the running game; the second quits.
        let mut quit = app();
        quit.start_game();
        quit.handle_key(key(KeyCode::Char('q')));
        assert!(!quit.should_exit());
        quit.handle_key(key(KeyCode::Char('q')));
        assert!(quit.should_exit());
    }

    #[test]
    fn test_same_app_seed_reproduces_games() {
        let mut first = app();
        let mut second = app();
        first.start_game();
        second.start_game();
        for _ in 0..10 {
            first.on_tick();
            second.on_tick();
        }
        match (first.phase(), second.phase()) {
            (Phase::Running(a), Phase::Running(b)) => {
                assert_eq!(a.head(), b.head());
                assert_eq!(a.score(), b.score());
            }
            _ => panic!("both games should still be running"),
        }
    }
}
