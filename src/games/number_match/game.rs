//! Number match engine.

use smallvec::SmallVec;

use super::bonus::RecentKills;
use super::scoring::kill_points;
use super::supply::{DigitSource, InvaderSupply};
use crate::core::{slot_char, EngineConfig, GameRng, Slot, Symbol, EMPTY_CHAR};
use crate::rules::NumberEngine;
use crate::store::{format_score, HighScoreStore};

/// Window storage; inline for the classic six slots.
pub type Window = SmallVec<[Slot; 8]>;

/// Builder for creating a `MatchEngine`.
pub struct MatchEngineBuilder {
    config: EngineConfig,
    digits: Option<Box<dyn DigitSource>>,
}

impl Default for MatchEngineBuilder {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            digits: None,
        }
    }
}

impl MatchEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Draw invaders from `source` instead of a seeded RNG.
    pub fn digits(mut self, source: impl DigitSource + 'static) -> Self {
        self.digits = Some(Box::new(source));
        self
    }

    /// Build an engine positioned at the start of stage 1.
    ///
    /// `seed` feeds the invader RNG unless a digit source was supplied.
    pub fn build<S: HighScoreStore>(self, seed: u64, store: S) -> MatchEngine<S> {
        assert!(self.config.window_width > 0, "Window must have at least one slot");

        let digits: Box<dyn DigitSource> = match self.digits {
            Some(digits) => digits,
            None => Box::new(GameRng::new(seed)),
        };

        let mut engine = MatchEngine {
            lives: self.config.starting_lives,
            config: self.config,
            store,
            digits,
            supply: InvaderSupply::default(),
            window: Window::new(),
            recent: RecentKills::new(),
            missile: None,
            missile_cursor: 0,
            missiles_remaining: 0,
            score: 0,
            stage: 0,
            game_over: false,
            stage_over: false,
        };
        engine.begin_stage(1);
        engine
    }
}

/// One game attempt.
///
/// Owns the invader line, missiles, score, stage and lives. Discard it and
/// build a new one to play again.
pub struct MatchEngine<S> {
    config: EngineConfig,
    store: S,
    digits: Box<dyn DigitSource>,

    // === Invaders ===
    supply: InvaderSupply,
    /// Index 0 is the front slot.
    window: Window,
    recent: RecentKills,

    // === Missiles ===
    missile: Option<Symbol>,
    /// Index into `Symbol::CYCLE` used by the next `aim()`.
    missile_cursor: usize,
    missiles_remaining: u32,

    // === Progress ===
    score: u32,
    stage: u32,
    lives: u8,
    game_over: bool,
    stage_over: bool,
}

impl<S: HighScoreStore> MatchEngine<S> {
    /// Fresh engine with the default configuration.
    pub fn new(seed: u64, store: S) -> Self {
        MatchEngineBuilder::new().build(seed, store)
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the high-score store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // === Typed state ===

    pub fn score_value(&self) -> u32 {
        self.score
    }

    pub fn stage_number(&self) -> u32 {
        self.stage
    }

    pub fn missiles_remaining(&self) -> u32 {
        self.missiles_remaining
    }

    /// Invaders not yet pulled into the window.
    pub fn invaders_remaining(&self) -> u32 {
        self.supply.remaining()
    }

    /// Visible slots, front first.
    pub fn window(&self) -> &[Slot] {
        &self.window
    }

    /// Current missile, `None` before the first aim.
    pub fn missile_symbol(&self) -> Option<Symbol> {
        self.missile
    }

    /// Occupied window slots plus invaders still queued.
    ///
    /// A visible command ship counts here even though it never came from
    /// the supply.
    pub fn total_invaders(&self) -> u32 {
        let visible = self.window.iter().filter(|slot| slot.is_some()).count() as u32;
        visible + self.supply.remaining()
    }

    // === Stage setup ===

    /// Start `stage` with full invader and missile allotments.
    fn begin_stage(&mut self, stage: u32) {
        self.stage = stage;
        log::debug!("stage: {stage}");

        self.missiles_remaining = self.config.missiles_per_stage;
        self.missile_cursor = 0;

        self.fill_invaders(self.config.invaders_per_stage);
    }

    /// Replay the current stage after an overrun.
    ///
    /// Keeps the same number of invaders as were left and does NOT refill
    /// missiles.
    fn retry_stage(&mut self) {
        let total = self.total_invaders();
        log::debug!("retrying stage {} with {total} invaders", self.stage);

        self.missile_cursor = 0;
        self.fill_invaders(total);
    }

    /// Draw `count` invaders and rebuild the window with only the rear
    /// slot populated.
    fn fill_invaders(&mut self, count: u32) {
        log::debug!("number of invaders: {count}");

        self.supply.refill(count, self.digits.as_mut());
        self.recent.reset();

        self.window.clear();
        self.window.extend(std::iter::repeat(None).take(self.config.window_width - 1));
        let rear = self.next_slot();
        self.window.push(rear);
    }

    fn next_slot(&mut self) -> Slot {
        let bonus = self.recent.bonus_earned();
        self.supply.next_slot(bonus)
    }

    // === Outcomes ===

    /// Save the score if it beats the stored high score.
    ///
    /// Store failures are logged and otherwise ignored.
    fn save_high_score(&mut self) {
        let best = match self.store.read_high_score() {
            Ok(best) => best,
            Err(err) => {
                log::warn!("could not read high score: {err}");
                0
            }
        };
        if self.score > best {
            self.write_high_score(self.score);
        }
    }

    fn write_high_score(&mut self, value: u32) {
        if let Err(err) = self.store.write_high_score(value) {
            log::warn!("could not save high score {}: {err}", format_score(value));
        }
    }

    fn end_game(&mut self) {
        self.game_over = true;
        log::info!(
            "game over at stage {} with score {}",
            self.stage,
            format_score(self.score)
        );
    }

    /// The front invader reached the player.
    fn overrun(&mut self) {
        log::debug!("killed");

        self.stage_over = true;
        self.lives = self.lives.saturating_sub(1);

        if self.lives > 0 {
            self.retry_stage();
        } else {
            self.end_game();
        }

        self.save_high_score();
    }

    /// Every invader of the stage is gone.
    fn stage_cleared(&mut self) {
        self.stage_over = true;

        let next = self.stage + 1;
        if next >= self.config.max_stage {
            self.end_game();
        } else {
            self.begin_stage(next);
        }

        self.save_high_score();
    }
}

impl<S: HighScoreStore> NumberEngine for MatchEngine<S> {
    fn advance(&mut self) {
        if self.game_over {
            return;
        }

        if self.window[0].is_none() {
            self.window.remove(0);
            let rear = self.next_slot();
            self.window.push(rear);
        } else {
            self.overrun();
        }
    }

    fn aim(&mut self) {
        self.missile = Some(Symbol::CYCLE[self.missile_cursor]);
        self.missile_cursor = (self.missile_cursor + 1) % Symbol::CYCLE.len();
    }

    fn attack(&mut self) {
        if self.game_over || self.missiles_remaining == 0 {
            return;
        }

        let hit = self.missile.and_then(|missile| {
            self.window
                .iter()
                .position(|slot| *slot == Some(missile))
                .map(|position| (missile, position))
        });

        let Some((target, position)) = hit else {
            self.missiles_remaining -= 1;
            if self.missiles_remaining == 0 {
                log::debug!("out of missiles");
                self.end_game();
                self.save_high_score();
            }
            return;
        };

        self.score += kill_points(&self.config, target, position, self.stage);
        self.recent.record(position);

        self.window.remove(position);
        let rear = self.next_slot();
        self.window.push(rear);

        if self.total_invaders() == 0 {
            self.stage_cleared();
        }
    }

    fn clear_high_score(&mut self) {
        self.write_high_score(0);
    }

    fn game_over(&self) -> bool {
        self.game_over
    }

    fn stage_over(&self) -> bool {
        self.stage_over
    }

    fn set_stage_over(&mut self, stage_over: bool) {
        self.stage_over = stage_over;
    }

    fn lives(&self) -> u8 {
        self.lives
    }

    fn score(&self) -> String {
        format_score(self.score)
    }

    fn stage(&self) -> String {
        self.stage.to_string()
    }

    fn missile(&self) -> char {
        self.missile.map_or(EMPTY_CHAR, Symbol::to_char)
    }

    fn missile_count(&self) -> String {
        self.missiles_remaining.to_string()
    }

    fn invader_count(&self) -> String {
        self.config.invaders_per_stage.to_string()
    }

    fn invaders(&self) -> String {
        self.window.iter().copied().map(slot_char).collect()
    }

    fn high_score(&self) -> String {
        match self.store.read_high_score() {
            Ok(value) => format_score(value),
            Err(err) => {
                log::warn!("could not read high score: {err}");
                format_score(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::number_match::ScriptedDigits;
    use crate::store::MemoryStore;

    fn aim_at<S: HighScoreStore>(engine: &mut MatchEngine<S>, target: Symbol) {
        for _ in 0..Symbol::CYCLE.len() {
            engine.aim();
            if engine.missile_symbol() == Some(target) {
                return;
            }
        }
        panic!("missile never reached {target}");
    }

    fn scripted(digits: &[u8]) -> MatchEngine<MemoryStore> {
        MatchEngineBuilder::new()
            .digits(ScriptedDigits::new(digits))
            .build(0, MemoryStore::new())
    }

    #[test]
    fn test_engine_creation() {
        let engine = MatchEngine::new(42, MemoryStore::new());

        assert_eq!(engine.lives(), 3);
        assert_eq!(engine.score(), "000000");
        assert_eq!(engine.stage(), "1");
        assert_eq!(engine.missile_count(), "30");
        assert_eq!(engine.invader_count(), "16");
        assert_eq!(engine.missile(), ' ');
        assert!(!engine.game_over());
        assert!(!engine.stage_over());

        // One invader at the rear, the rest empty
        assert_eq!(engine.window().len(), 6);
        assert!(engine.window()[..5].iter().all(Option::is_none));
        assert!(engine.window()[5].is_some());
        assert_eq!(engine.invaders_remaining(), 15);
        assert_eq!(engine.total_invaders(), 16);
    }

    #[test]
    fn test_invaders_projection() {
        let engine = scripted(&[7]);
        assert_eq!(engine.invaders(), "     7");
    }

    #[test]
    fn test_advance_shifts_toward_front() {
        let mut engine = scripted(&[1, 2, 3]);
        engine.advance();
        assert_eq!(engine.invaders(), "    12");
        engine.advance();
        assert_eq!(engine.invaders(), "   123");
    }

    #[test]
    fn test_advance_checks_bonus_trigger() {
        let mut engine = scripted(&[1, 2, 3]);
        for position in 0..3 {
            engine.recent.record(position);
        }
        let remaining = engine.invaders_remaining();

        engine.advance();

        assert_eq!(engine.invaders(), "    1∩");
        assert_eq!(engine.invaders_remaining(), remaining);
        assert_eq!(engine.total_invaders(), 17);
    }

    #[test]
    fn test_first_aim_is_zero() {
        let mut engine = scripted(&[1]);
        engine.aim();
        assert_eq!(engine.missile(), '0');
        engine.aim();
        assert_eq!(engine.missile(), '1');
    }

    #[test]
    fn test_aim_reaches_command_ship() {
        let mut engine = scripted(&[1]);
        for _ in 0..11 {
            engine.aim();
        }
        assert_eq!(engine.missile(), '∩');
        engine.aim();
        assert_eq!(engine.missile(), '0');
    }

    #[test]
    fn test_unaimed_attack_spends_missile() {
        let mut engine = scripted(&[0]);
        engine.attack();
        assert_eq!(engine.missiles_remaining(), 29);
        assert_eq!(engine.score_value(), 0);
    }

    #[test]
    fn test_hit_scores_and_replaces() {
        let mut engine = scripted(&[4, 5]);
        aim_at(&mut engine, Symbol::Digit(4));
        engine.attack();

        // Rear kill in stage 1: 10 * (5 + 1)
        assert_eq!(engine.score_value(), 60);
        assert_eq!(engine.missiles_remaining(), 30);
        assert_eq!(engine.invaders(), "     5");
    }

    #[test]
    fn test_first_match_only() {
        let mut engine = scripted(&[3]);
        for _ in 0..5 {
            engine.advance();
        }
        assert_eq!(engine.invaders(), "333333");

        aim_at(&mut engine, Symbol::Digit(3));
        engine.attack();

        // Only the front one is destroyed: 10 * (0 + 1)
        assert_eq!(engine.score_value(), 10);
        assert_eq!(engine.invaders(), "333333");
        assert_eq!(engine.total_invaders(), 15);
    }

    #[test]
    fn test_overrun_costs_life() {
        let mut engine = scripted(&[8]);
        for _ in 0..5 {
            engine.advance();
        }
        engine.advance();

        assert_eq!(engine.lives(), 2);
        assert!(engine.stage_over());
        assert!(!engine.game_over());
        assert_eq!(engine.total_invaders(), 16);
        assert_eq!(engine.invaders(), "     8");
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut engine = MatchEngineBuilder::new()
            .config(EngineConfig::new().with_missiles_per_stage(1))
            .digits(ScriptedDigits::new(&[5]))
            .build(0, MemoryStore::new());

        engine.attack();
        assert!(engine.game_over());

        let before = engine.invaders();
        for _ in 0..10 {
            engine.advance();
        }
        assert_eq!(engine.invaders(), before);
        assert_eq!(engine.lives(), 3);
    }

    #[test]
    fn test_clear_high_score() {
        let store = MemoryStore::with_score(900);
        let mut engine = MatchEngine::new(1, store.clone());

        assert_eq!(engine.high_score(), "000900");
        engine.clear_high_score();
        assert_eq!(engine.high_score(), "000000");
        assert_eq!(store.raw(), "000000");
    }

    #[test]
    fn test_corrupt_store_reads_zero() {
        let engine = MatchEngine::new(1, MemoryStore::with_raw("garbage"));
        assert_eq!(engine.high_score(), "000000");
    }

    #[test]
    fn test_deterministic_seed() {
        let a = MatchEngine::new(99, MemoryStore::new());
        let b = MatchEngine::new(99, MemoryStore::new());
        assert_eq!(a.invaders(), b.invaders());
    }
}
