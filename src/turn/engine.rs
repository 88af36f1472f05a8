//! The turn engine.
//!
//! Owns one `GameSession` and the dice source. Every command checks the
//! phase and its arguments before touching state, so a rejected command
//! leaves the session exactly as it was.

use tracing::{debug, info, warn};

use crate::core::{
    DiceSource, Die, DieId, EngineConfig, EngineError, GameOutcome, GameRng, GameSession,
    LoggedAction, Phase, Player, PlayerId, PlayerSetup, SetupError,
};
use crate::grid::Position;
use crate::history::ReversibleAction;
use crate::launch::{self, LaunchOutcome, VictoryTier};
use crate::placement;

use super::outcome::{TurnOutcome, TurnRejection};

/// Rocket assembly engine.
///
/// Generic over the dice source so tests and puzzles can script rolls.
#[derive(Clone, Debug)]
pub struct TurnEngine<D: DiceSource = GameRng> {
    /// Engine configuration.
    config: EngineConfig,

    /// Where rolls come from.
    dice: D,

    /// The game in progress.
    session: GameSession,
}

impl TurnEngine<GameRng> {
    /// Create an engine rolling from a `GameRng` seeded with `config.seed`.
    pub fn seeded(config: EngineConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self::new(config, rng)
    }
}

impl<D: DiceSource> TurnEngine<D> {
    /// Create an engine in the `Setup` phase.
    pub fn new(config: EngineConfig, dice: D) -> Self {
        Self {
            config,
            dice,
            session: GameSession::default(),
        }
    }

    // === Queries ===

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only view of the session.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.session.phase
    }

    /// The player whose turn it is, if a game is running.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.session.current_player()
    }

    /// Dice rolled this turn, placed or not.
    #[must_use]
    pub fn hand(&self) -> &[Die] {
        &self.session.hand
    }

    /// The dice source.
    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    /// Legal targets for a die showing `die_value`, row-major.
    #[must_use]
    pub fn valid_positions(&self, die_value: u8) -> Vec<Position> {
        let session = &self.session;
        placement::valid_positions(
            die_value,
            &session.grid,
            session.rocket_height,
            session.booster_row_locked,
        )
    }

    /// Could the rocket launch right now?
    #[must_use]
    pub fn can_launch(&self) -> bool {
        launch::can_launch(&self.session.grid)
    }

    /// Body rows that are completely filled.
    #[must_use]
    pub fn completed_rows(&self) -> Vec<u8> {
        placement::completed_rows(&self.session.grid)
    }

    /// Destination the rocket would reach if it launched successfully now.
    #[must_use]
    pub fn victory_tier(&self) -> VictoryTier {
        VictoryTier::for_grid(&self.session.grid)
    }

    // === Commands ===

    /// Seat the roster and start a new game.
    ///
    /// Replaces any session in progress. Player 0 rolls first.
    pub fn start_game(&mut self, roster: Vec<PlayerSetup>) -> Result<(), SetupError> {
        self.config.validate_roster(&roster)?;

        let players: Vec<Player> = roster
            .into_iter()
            .enumerate()
            .map(|(seat, entry)| Player {
                id: PlayerId::new(seat as u8),
                name: entry.name.trim().to_string(),
                dice_count: entry.dice_count,
            })
            .collect();

        info!(
            players = players.len(),
            dice = players.iter().map(|p| p.dice_count).sum::<u32>(),
            "game started"
        );
        self.session = GameSession::new(players);
        Ok(())
    }

    /// Roll the current player's dice.
    ///
    /// Clears the undo history and returns the new hand.
    pub fn start_turn(&mut self) -> Result<&[Die], EngineError> {
        self.require("start_turn", |phase| matches!(phase, Phase::AwaitingRoll))?;
        self.roll_hand();
        Ok(&self.session.hand)
    }

    /// Try to seat `die_id` at `position`.
    ///
    /// Returns `Ok(false)` without changing anything when the placement is
    /// illegal.
    pub fn place_die(&mut self, die_id: DieId, position: Position) -> Result<bool, EngineError> {
        self.require("place_die", |phase| matches!(phase, Phase::InTurn))?;
        let die = self.uncommitted_die(die_id)?;

        let session = &self.session;
        let legal = position.is_body()
            && placement::is_valid_placement(
                position,
                die.value,
                &session.grid,
                session.rocket_height,
                session.booster_row_locked,
            );
        if !legal {
            debug!(%die_id, value = die.value, %position, "illegal placement");
            return Ok(false);
        }

        let session = &mut self.session;
        let action = ReversibleAction::Place {
            die: die.clone(),
            position,
            prior_grid: session.grid.clone(),
            prior_height: session.rocket_height,
            prior_lock: session.booster_row_locked,
        };

        session.grid.place(position, die.committed());
        if die.is_body() {
            session.rocket_height = session.rocket_height.max(position.row());
        } else {
            session.booster_row_locked = true;
        }
        mark_committed(session, die_id);
        session.history.push(action);
        session.record(LoggedAction::Placed {
            die: die_id,
            value: die.value,
            position,
        });

        debug!(
            %die_id,
            value = die.value,
            %position,
            height = session.rocket_height,
            locked = session.booster_row_locked,
            "die placed"
        );
        Ok(true)
    }

    /// Send `die_id` to the fire pile, returning the new pile size.
    ///
    /// Reaching the fire limit ends the game in an explosion at once.
    pub fn discard_to_fire(&mut self, die_id: DieId) -> Result<u8, EngineError> {
        self.require("discard_to_fire", |phase| matches!(phase, Phase::InTurn))?;
        let die = self.uncommitted_die(die_id)?;

        let session = &mut self.session;
        session.history.push(ReversibleAction::Discard {
            die: die.clone(),
            prior_fire_pile: session.fire_pile,
        });
        session.fire_pile += 1;
        mark_committed(session, die_id);
        session.record(LoggedAction::Discarded {
            die: die_id,
            value: die.value,
        });
        debug!(%die_id, value = die.value, fire_pile = session.fire_pile, "die discarded");

        if session.fire_pile >= self.config.fire_limit {
            self.finish(GameOutcome::Explosion);
        }
        Ok(self.session.fire_pile)
    }

    /// Revert the most recent placement or discard of this turn.
    ///
    /// Returns `Ok(false)` when there is nothing to undo.
    pub fn undo_last(&mut self) -> Result<bool, EngineError> {
        self.require("undo_last", |phase| matches!(phase, Phase::InTurn))?;

        let session = &mut self.session;
        let Some(action) = session.history.pop() else {
            return Ok(false);
        };

        let die_id = action.die().id;
        debug!(%die_id, kind = action.kind(), "undo");
        action.revert(session);
        session.record(LoggedAction::Undone { die: die_id });
        Ok(true)
    }

    /// End the current player's turn.
    ///
    /// Unplaced dice carry over as the player's next roll, unless a solo
    /// game has re-rolls disabled, in which case the hand is spent.
    pub fn end_turn(&mut self) -> Result<TurnOutcome, EngineError> {
        self.require("end_turn", |phase| matches!(phase, Phase::InTurn))?;

        if !self.session.committed_this_turn() {
            debug!("end_turn rejected: nothing committed");
            return Ok(TurnOutcome::Rejected(TurnRejection::NothingCommitted));
        }

        let session = &mut self.session;
        let remaining = session.unplaced().count() as u32;
        if let Some(player) = session.players.get_mut(session.current_player_index) {
            player.dice_count = remaining;
        }
        session.record(LoggedAction::TurnEnded { remaining });
        session.history.clear();
        session.hand.clear();
        debug!(player = %session.current_player_id(), remaining, "turn ended");

        if session.fire_pile >= self.config.fire_limit {
            return Ok(TurnOutcome::GameOver(self.finish(GameOutcome::Explosion)));
        }

        let solo = session.players.len() == 1;
        if session.all_out_of_dice() || (solo && !self.config.solo_reroll) {
            if launch::can_launch(&session.grid) {
                info!("all dice spent; launch pending");
                session.phase = Phase::LaunchPending;
                return Ok(TurnOutcome::LaunchPending);
            }
            return Ok(TurnOutcome::GameOver(self.finish(GameOutcome::NoBuildableLayout)));
        }

        if solo {
            self.roll_hand();
            return Ok(TurnOutcome::SoloReroll);
        }

        let count = session.players.len();
        let next = (1..=count)
            .map(|step| (session.current_player_index + step) % count)
            .find(|&index| session.players[index].has_dice())
            .unwrap_or(session.current_player_index);
        session.current_player_index = next;
        session.phase = Phase::AwaitingRoll;

        let next_id = session.current_player_id();
        debug!(player = %next_id, "next player");
        Ok(TurnOutcome::NextPlayer(next_id))
    }

    /// Roll every booster.
    ///
    /// Returns `NotReady` without changing anything when the rocket cannot
    /// launch. A failed launch sacrifices one booster to the fire pile,
    /// unlocks the booster row and forfeits this turn's undo history.
    pub fn attempt_launch(&mut self) -> Result<LaunchOutcome, EngineError> {
        self.require("attempt_launch", |phase| {
            matches!(phase, Phase::AwaitingRoll | Phase::InTurn | Phase::LaunchPending)
        })?;

        if !self.can_launch() {
            debug!("launch attempted before the rocket is ready");
            return Ok(LaunchOutcome::NotReady);
        }

        let tier = self.victory_tier();
        let roll = launch::resolve(&mut self.session.grid, &mut self.dice);
        self.session.record(LoggedAction::Launched {
            rolls: roll.rolls.clone(),
            success: roll.success,
        });

        if roll.success {
            info!(rolls = ?roll.rolls, %tier, "launch succeeded");
            self.finish(GameOutcome::Victory {
                tier,
                rolls: roll.rolls.clone(),
            });
            return Ok(LaunchOutcome::Success {
                rolls: roll.rolls,
                tier,
            });
        }

        let Some((sacrificed, _)) = roll.sacrificed else {
            return Ok(LaunchOutcome::NotReady);
        };

        let session = &mut self.session;
        session.fire_pile += 1;
        session.booster_row_locked = false;
        session.history.clear();
        let fire_pile = session.fire_pile;
        info!(rolls = ?roll.rolls, %sacrificed, fire_pile, "launch failed");

        let exploded = fire_pile >= self.config.fire_limit;
        if exploded {
            self.finish(GameOutcome::Explosion);
        } else if self.session.phase == Phase::LaunchPending && !self.can_launch() {
            self.finish(GameOutcome::NoBuildableLayout);
        }

        Ok(LaunchOutcome::Failure {
            rolls: roll.rolls,
            sacrificed,
            fire_pile,
            exploded,
        })
    }

    /// Discard the session and return to `Setup`.
    pub fn reset_game(&mut self) {
        info!("game reset");
        self.session = GameSession::default();
    }

    // === Internals ===

    /// Fail with an error unless the phase satisfies `allowed`.
    fn require(&self, command: &'static str, allowed: impl Fn(&Phase) -> bool) -> Result<(), EngineError> {
        let err = match &self.session.phase {
            Phase::GameOver(outcome) => EngineError::GameOver(outcome.clone()),
            phase if allowed(phase) => return Ok(()),
            phase => EngineError::WrongPhase {
                command,
                phase: phase.clone(),
            },
        };
        warn!(%err, "command rejected");
        Err(err)
    }

    /// Clone of an uncommitted die from the hand.
    fn uncommitted_die(&self, die_id: DieId) -> Result<Die, EngineError> {
        let err = match self.session.hand_die(die_id) {
            Some(die) if !die.placed => return Ok(die.clone()),
            Some(_) => EngineError::DieAlreadyCommitted(die_id),
            None => EngineError::UnknownDie(die_id),
        };
        warn!(%err, "command rejected");
        Err(err)
    }

    /// Start a turn for the current player: new hand, empty history.
    fn roll_hand(&mut self) {
        let session = &mut self.session;
        let Some((owner, name, count)) = session
            .current_player()
            .map(|p| (p.id, p.name.clone(), p.dice_count))
        else {
            return;
        };

        session.advance_turn();
        session.history.clear();
        session.hand.clear();
        for _ in 0..count {
            let id = session.alloc_die_id();
            session.hand.push(Die::new(id, self.dice.roll(), owner, name.as_str()));
        }

        let values: Vec<u8> = session.hand.iter().map(|d| d.value).collect();
        debug!(player = %owner, turn = session.turn_number, ?values, "dice rolled");
        session.record(LoggedAction::Rolled { values });
        session.phase = Phase::InTurn;
    }

    /// Enter `GameOver`, returning the outcome.
    fn finish(&mut self, outcome: GameOutcome) -> GameOutcome {
        info!(%outcome, turn = self.session.turn_number, fire_pile = self.session.fire_pile, "game over");
        self.session.history.clear();
        self.session.phase = Phase::GameOver(outcome.clone());
        outcome
    }
}

fn mark_committed(session: &mut GameSession, die_id: DieId) {
    if let Some(die) = session.hand.iter_mut().find(|d| d.id == die_id) {
        die.placed = true;
    }
}
