//! Game session: the single aggregate the engine mutates.
//!
//! ## GameSession
//!
//! Everything observable about a game in progress:
//! - Players, turn order, and the dice each will roll next
//! - The rocket grid, its height, and the booster lock
//! - The fire pile
//! - The current hand and its undo history
//! - The phase and the action log
//!
//! ## Phase
//!
//! ```text
//! Setup -> AwaitingRoll -> InTurn -> AwaitingRoll (next player)
//!                                 -> LaunchPending
//!                                 -> GameOver(outcome)
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, LoggedAction};
use super::die::{Die, DieId};
use super::player::{Player, PlayerId};
use crate::grid::RocketGrid;
use crate::history::HistoryStack;
use crate::launch::{LaunchRolls, VictoryTier};

/// How a game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// A booster rolled a 6.
    Victory { tier: VictoryTier, rolls: LaunchRolls },

    /// The fire pile filled up.
    Explosion,

    /// Every player ran out of dice and the rocket cannot launch.
    NoBuildableLayout,
}

impl GameOutcome {
    /// Did the rocket make it?
    #[must_use]
    pub fn is_victory(&self) -> bool {
        matches!(self, GameOutcome::Victory { .. })
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Victory { tier, .. } => write!(f, "victory: {tier}"),
            GameOutcome::Explosion => write!(f, "explosion"),
            GameOutcome::NoBuildableLayout => write!(f, "no buildable layout"),
        }
    }
}

/// Where the session is in the turn cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No game started (or the game was reset).
    #[default]
    Setup,

    /// The current player has not rolled yet.
    AwaitingRoll,

    /// The current player holds rolled dice.
    InTurn,

    /// Nobody has dice left, but the rocket can still launch.
    LaunchPending,

    /// Terminal.
    GameOver(GameOutcome),
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Setup => write!(f, "in setup"),
            Phase::AwaitingRoll => write!(f, "awaiting roll"),
            Phase::InTurn => write!(f, "in turn"),
            Phase::LaunchPending => write!(f, "launch pending"),
            Phase::GameOver(outcome) => write!(f, "game over ({outcome})"),
        }
    }
}

/// The full state of one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    // === Players ===
    /// Seated players in turn order.
    pub players: Vec<Player>,

    /// Index into `players` of whose turn it is.
    pub current_player_index: usize,

    // === Rocket ===
    /// The assembled rocket.
    pub grid: RocketGrid,

    /// Highest row holding a body die (0 when none).
    pub rocket_height: u8,

    /// Set once a booster is placed; cleared by a failed launch.
    pub booster_row_locked: bool,

    /// Dice burnt so far.
    pub fire_pile: u8,

    // === Turn ===
    /// Dice rolled this turn, placed or not.
    pub hand: Vec<Die>,

    /// Undo history for this turn.
    pub history: HistoryStack,

    /// Current phase.
    pub phase: Phase,

    /// Turn number (0 before the first roll).
    pub turn_number: u32,

    /// Every logged action, oldest first.
    pub log: Vector<ActionRecord>,

    action_sequence: u32,
    next_die_id: u32,
}

impl GameSession {
    /// Create a session awaiting the first roll.
    #[must_use]
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            phase: Phase::AwaitingRoll,
            ..Self::default()
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Seat of the player whose turn it is.
    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        PlayerId::new(self.current_player_index as u8)
    }

    /// Is the game over?
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// The outcome, once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        match &self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Allocate a new die ID.
    pub fn alloc_die_id(&mut self) -> DieId {
        let id = DieId(self.next_die_id);
        self.next_die_id += 1;
        id
    }

    /// Look up a die in the current hand.
    #[must_use]
    pub fn hand_die(&self, id: DieId) -> Option<&Die> {
        self.hand.iter().find(|d| d.id == id)
    }

    /// Dice in hand not yet placed or discarded.
    pub fn unplaced(&self) -> impl Iterator<Item = &Die> {
        self.hand.iter().filter(|d| !d.placed)
    }

    /// Has at least one die been committed this turn?
    #[must_use]
    pub fn committed_this_turn(&self) -> bool {
        self.hand.iter().any(|d| d.placed)
    }

    /// Do all players have zero dice left?
    #[must_use]
    pub fn all_out_of_dice(&self) -> bool {
        self.players.iter().all(|p| !p.has_dice())
    }

    /// Begin a new turn: bump the turn counter and reset sequencing.
    pub fn advance_turn(&mut self) {
        self.turn_number += 1;
        self.action_sequence = 0;
    }

    /// Append to the action log under the current player and turn.
    pub fn record(&mut self, action: LoggedAction) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        let record = ActionRecord::new(self.current_player_id(), action, self.turn_number, sequence);
        self.log.push_back(record);
    }
}
