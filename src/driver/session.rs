//! Single-threaded game session.
//!
//! `Driver` funnels scheduler ticks and key presses into one engine in
//! sequence. It owns the high-score store and replaces the engine for each
//! new game attempt.

use super::event::{DriverEvent, Key, Notice};
use super::scheduler::Scheduler;
use crate::core::{DriverConfig, GameRng};
use crate::games::number_match::{MatchEngine, MatchEngineBuilder};
use crate::rules::NumberEngine;
use crate::store::HighScoreStore;

/// Where the session is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Engine built, waiting for the first aim.
    Waiting,
    Playing,
    /// Game over, waiting for play-again or quit.
    Finished,
    Quit,
}

/// Glyph for the remaining lives.
#[must_use]
pub fn lives_glyph(lives: u8) -> char {
    match lives {
        3 => '≡',
        2 => '=',
        _ => '-',
    }
}

/// Play line: missile, lives glyph, invaders.
#[must_use]
pub fn status_line(engine: &impl NumberEngine) -> String {
    let mut line = String::new();
    line.push(engine.missile());
    line.push(lives_glyph(engine.lives()));
    line.push_str(&engine.invaders());
    line
}

/// Cooperative driver for one player.
pub struct Driver<S> {
    config: DriverConfig,
    store: S,
    rng: GameRng,
    engine: MatchEngine<S>,
    scheduler: Scheduler,
    phase: Phase,
}

impl<S: HighScoreStore + Clone> Driver<S> {
    /// Create a session; `seed` reproduces every game attempt in it.
    pub fn new(config: DriverConfig, store: S, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let engine = Self::build_engine(&config, &store, &mut rng);
        let scheduler = Scheduler::new(
            config.difficulty.advance_interval_ms(),
            config.refresh_interval_ms,
        );
        log::debug!("session created at difficulty {}", config.difficulty);

        Self {
            config,
            store,
            rng,
            engine,
            scheduler,
            phase: Phase::Waiting,
        }
    }

    fn build_engine(config: &DriverConfig, store: &S, rng: &mut GameRng) -> MatchEngine<S> {
        MatchEngineBuilder::new()
            .config(config.engine.clone())
            .build(rng.fork().seed(), store.clone())
    }

    pub fn engine(&self) -> &MatchEngine<S> {
        &self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Handle a key press at `now_ms`.
    pub fn press(&mut self, key: Key, now_ms: u64) -> Vec<Notice> {
        self.dispatch(DriverEvent::Key(key), now_ms)
    }

    /// Run every tick due at `now_ms`.
    ///
    /// A stage transition restarts the cadences at `now_ms`, so at most one
    /// transition happens per call. Stops once the game is over.
    pub fn pump(&mut self, now_ms: u64) -> Vec<Notice> {
        let mut notices = Vec::new();
        while self.phase == Phase::Playing {
            let Some(tick) = self.scheduler.next_due(now_ms) else {
                break;
            };
            notices.extend(self.dispatch(tick.into(), now_ms));
        }
        notices
    }

    /// Dispatch one event into the session.
    pub fn dispatch(&mut self, event: DriverEvent, now_ms: u64) -> Vec<Notice> {
        let mut notices = Vec::new();

        match (self.phase, event) {
            (Phase::Quit, _) | (_, DriverEvent::Key(Key::Other)) => {}
            (_, DriverEvent::Key(Key::Quit)) => {
                log::debug!("exiting game");
                self.scheduler.stop();
                self.phase = Phase::Quit;
            }
            (Phase::Waiting, DriverEvent::Key(Key::Aim)) => {
                notices.push(Notice::Started {
                    high_score: self.engine.high_score(),
                    invader_count: self.engine.invader_count(),
                    missile_count: self.engine.missile_count(),
                });
                self.phase = Phase::Playing;
                self.scheduler.start(now_ms);
                self.engine.aim();
            }
            (Phase::Waiting, _) => {}
            (Phase::Playing, DriverEvent::Key(Key::Aim)) => self.engine.aim(),
            (Phase::Playing, DriverEvent::Key(Key::Fire)) => {
                self.engine.attack();
                self.after_engine_call(now_ms, &mut notices);
            }
            (Phase::Playing, DriverEvent::AdvanceTick) => {
                self.engine.advance();
                self.after_engine_call(now_ms, &mut notices);
            }
            (Phase::Playing, DriverEvent::RefreshTick) => {
                notices.push(Notice::Frame(status_line(&self.engine)));
            }
            (Phase::Finished, DriverEvent::Key(Key::Aim)) => {
                self.engine = Self::build_engine(&self.config, &self.store, &mut self.rng);
                self.phase = Phase::Waiting;
            }
            (Phase::Finished, _) => {}
        }

        notices
    }

    /// React to flags raised by the last engine call.
    fn after_engine_call(&mut self, now_ms: u64, notices: &mut Vec<Notice>) {
        if self.engine.game_over() {
            self.scheduler.stop();
            self.phase = Phase::Finished;
            notices.push(Notice::GameOver(self.engine.snapshot()));
        } else if self.engine.stage_over() {
            notices.push(Notice::StageSummary(self.engine.snapshot()));
            self.engine.set_stage_over(false);
            self.scheduler.start(now_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_lives_glyphs() {
        assert_eq!(lives_glyph(3), '≡');
        assert_eq!(lives_glyph(2), '=');
        assert_eq!(lives_glyph(1), '-');
        assert_eq!(lives_glyph(0), '-');
    }

    #[test]
    fn test_waits_for_first_aim() {
        let mut driver = Driver::new(DriverConfig::default(), MemoryStore::new(), 42);
        assert_eq!(driver.phase(), Phase::Waiting);

        assert!(driver.press(Key::Fire, 0).is_empty());
        assert!(driver.pump(10_000).is_empty());
        assert_eq!(driver.engine().missiles_remaining(), 30);

        let notices = driver.press(Key::Aim, 10_000);
        assert_eq!(driver.phase(), Phase::Playing);
        assert_eq!(
            notices,
            vec![Notice::Started {
                high_score: "000000".to_string(),
                invader_count: "16".to_string(),
                missile_count: "30".to_string(),
            }]
        );
        assert_eq!(driver.engine().missile(), '0');
    }

    #[test]
    fn test_refresh_frame() {
        let mut driver = Driver::new(DriverConfig::default(), MemoryStore::new(), 42);
        driver.press(Key::Aim, 0);

        let notices = driver.pump(200);
        let expected = format!("0≡{}", driver.engine().invaders());
        assert_eq!(notices, vec![Notice::Frame(expected)]);
    }

    #[test]
    fn test_first_attempt_uses_forked_seed() {
        let mut driver = Driver::new(DriverConfig::default(), MemoryStore::new(), 42);
        let seed = GameRng::new(42).fork().seed();
        let mut expected = MatchEngine::new(seed, MemoryStore::new());

        for _ in 0..5 {
            driver.engine.advance();
            expected.advance();
        }
        assert_eq!(driver.engine().invaders(), expected.invaders());
        assert_eq!(driver.engine().invaders_remaining(), expected.invaders_remaining());
    }

    #[test]
    fn test_quit_stops_everything() {
        let mut driver = Driver::new(DriverConfig::default(), MemoryStore::new(), 42);
        driver.press(Key::Aim, 0);
        driver.press(Key::Quit, 100);

        assert_eq!(driver.phase(), Phase::Quit);
        assert!(!driver.scheduler().is_running());
        assert!(driver.pump(100_000).is_empty());
        assert!(driver.press(Key::Aim, 100_000).is_empty());
    }
}
