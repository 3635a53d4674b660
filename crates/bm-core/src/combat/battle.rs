//! The battle state machine and its presentation loop

use std::fmt;
use std::time::Duration;

use crate::action::BattleAction;
use crate::config::GameConfig;
use crate::error::InputError;
use crate::interface::{Clock, Frontend, format_time_left};
use crate::object::Inventory;

use super::{Capabilities, Fighter, player_fighter, ransomware_fighter};

/// How a battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// The RANSOMWARE was EXTRACTed
    Won,
    /// The deadline passed while unsandboxed
    LostTimeout,
    /// The player DANCEd themselves to death
    LostSelfHarm,
    /// The RANSOMWARE's payload finished the player off
    Defeated,
    /// The player left the battle
    Exited,
}

impl BattleOutcome {
    pub const fn is_loss(&self) -> bool {
        matches!(
            self,
            BattleOutcome::LostTimeout | BattleOutcome::LostSelfHarm | BattleOutcome::Defeated
        )
    }
}

/// Something that happened during a turn, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleEvent {
    ExtractAttempted,
    /// No pointer dereferencer
    CannotLocateMemory,
    /// Missing memory read or write access
    CannotAlterMemory,
    /// No OS override capability
    AlterationDenied,
    Extracted { damage: i32, remaining: i32 },
    DidNothing,
    DanceAttempted,
    DanceFailed,
    SelfHarm { damage: i32, remaining: i32 },
    PayloadAttempted,
    PayloadHit { damage: i32, remaining: i32 },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::ExtractAttempted => f.write_str("You attempt to EXTRACT the RANSOMWARE..."),
            BattleEvent::CannotLocateMemory => f.write_str(
                "Unable to locate relavent memory to alter; you lack the capabilities",
            ),
            BattleEvent::CannotAlterMemory => {
                f.write_str("Unable to alter relavent memory; you lack the capabilities")
            }
            BattleEvent::AlterationDenied => {
                f.write_str("Memory alteration denied; you lack sufficent privileges")
            }
            BattleEvent::Extracted { damage, remaining } => write!(
                f,
                "You complete partial code EXTRACTion, dealing {damage} dmg ({remaining} hp remaining)"
            ),
            BattleEvent::DidNothing => f.write_str("You do absolutely NOTHING..."),
            BattleEvent::DanceAttempted => f.write_str("You attempt a funny DANCE..."),
            BattleEvent::DanceFailed => {
                f.write_str("You are an antivirus, you have no means to DANCE")
            }
            BattleEvent::SelfHarm { damage, remaining } => write!(
                f,
                "In the process you corrupted your own data, dealing {damage} dmg ({remaining} hp remaining)"
            ),
            BattleEvent::PayloadAttempted => {
                f.write_str("The RANSOMWARE attempts to deliver a payload...")
            }
            BattleEvent::PayloadHit { damage, remaining } => write!(
                f,
                "You were hit with a viral payload, dealing {damage} dmg ({remaining} hp remaining)"
            ),
        }
    }
}

/// Result of a single turn
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Turn {
    pub events: Vec<BattleEvent>,
    /// Set when the turn ended the battle
    pub outcome: Option<BattleOutcome>,
}

impl Turn {
    fn end(mut self, outcome: BattleOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }
}

/// Fight between the player and the RANSOMWARE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Battle {
    player: Fighter,
    ransomware: Fighter,
    capabilities: Capabilities,
}

impl Battle {
    /// Set up a battle from the items the player failed to collect
    pub fn new(remaining: &Inventory, config: &GameConfig) -> Self {
        Self::with_fighters(
            player_fighter(config),
            ransomware_fighter(remaining, config),
            Capabilities::from_remaining(remaining),
        )
    }

    pub fn with_fighters(player: Fighter, ransomware: Fighter, capabilities: Capabilities) -> Self {
        Self {
            player,
            ransomware,
            capabilities,
        }
    }

    pub fn player(&self) -> &Fighter {
        &self.player
    }

    pub fn ransomware(&self) -> &Fighter {
        &self.ransomware
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Whether the deadline has ended the battle
    ///
    /// A sandboxed player is immune to the deadline.
    pub fn timed_out(&self, now: Duration, deadline: Duration) -> bool {
        !self.capabilities.sandboxed && now >= deadline
    }

    /// Play one player action and the RANSOMWARE's reply
    pub fn turn(&mut self, action: BattleAction) -> Turn {
        let mut turn = Turn::default();

        match action {
            BattleAction::Extract => {
                turn.events.push(BattleEvent::ExtractAttempted);

                if !self.capabilities.dereferencer {
                    turn.events.push(BattleEvent::CannotLocateMemory);
                } else if !self.capabilities.memory_alteration {
                    turn.events.push(BattleEvent::CannotAlterMemory);
                } else if !self.capabilities.admin_privileges {
                    turn.events.push(BattleEvent::AlterationDenied);
                } else {
                    let damage = self.player.attack(&mut self.ransomware);
                    turn.events.push(BattleEvent::Extracted {
                        damage,
                        remaining: self.ransomware.health,
                    });
                    if self.ransomware.is_dead() {
                        return turn.end(BattleOutcome::Won);
                    }
                }
            }
            BattleAction::Nothing => turn.events.push(BattleEvent::DidNothing),
            BattleAction::Dance => {
                turn.events.push(BattleEvent::DanceAttempted);
                turn.events.push(BattleEvent::DanceFailed);

                let damage = self.player.take_hit(self.player.damage);
                turn.events.push(BattleEvent::SelfHarm {
                    damage,
                    remaining: self.player.health,
                });
                if self.player.is_dead() {
                    return turn.end(BattleOutcome::LostSelfHarm);
                }
            }
            BattleAction::Exit => return turn.end(BattleOutcome::Exited),
        }

        turn.events.push(BattleEvent::PayloadAttempted);
        let damage = self.ransomware.attack(&mut self.player);
        turn.events.push(BattleEvent::PayloadHit {
            damage,
            remaining: self.player.health,
        });
        if self.player.is_dead() {
            return turn.end(BattleOutcome::Defeated);
        }

        turn
    }
}

/// Pause before a move so the fight reads like one
fn move_delay<F: Frontend>(frontend: &mut F, config: &GameConfig) {
    frontend.pause(config.battle_move_delay);
    frontend.blank_line();
}

/// Play out the battle against the RANSOMWARE
///
/// The win screen is shown here. Losing endings are left to the caller.
pub fn run_battle<F: Frontend, C: Clock>(
    frontend: &mut F,
    clock: &C,
    remaining: &Inventory,
    deadline: Duration,
    config: &GameConfig,
) -> Result<BattleOutcome, InputError> {
    let mut battle = Battle::new(remaining, config);
    let keys = BattleAction::keys();
    log::debug!(
        "battle started: {:?}, {} vs {}",
        battle.capabilities(),
        battle.player(),
        battle.ransomware()
    );

    frontend.clear();
    frontend.print_line("The RANSOMWARE", true);
    frontend.blank_line();
    frontend.print_line("You have located the RANSOMWARE infecting the computer", true);
    frontend.print_line("EXTRACT it from the system as soon as possible", true);
    frontend.print_line("There is no other option", true);
    frontend.blank_line();
    frontend.await_player(true)?;

    loop {
        let now = clock.now();
        if battle.timed_out(now, deadline) {
            log::debug!("battle timed out");
            return Ok(BattleOutcome::LostTimeout);
        }

        frontend.clear();
        frontend.print_line("The RANSOMWARE", true);
        if !battle.capabilities().sandboxed {
            frontend.print_line(&format_time_left(deadline, now), true);
        }
        frontend.blank_line();
        frontend.print_line(&battle.player().to_string(), false);
        frontend.print_line(&battle.ransomware().to_string(), false);
        frontend.blank_line();
        for action in BattleAction::ALL {
            if action == BattleAction::Exit {
                frontend.blank_line();
            }
            frontend.print_line(action.label(), false);
        }

        let Some(action) = frontend.choose(&keys)?.and_then(BattleAction::from_key) else {
            return Ok(BattleOutcome::Exited);
        };

        let turn = battle.turn(action);
        for event in &turn.events {
            move_delay(frontend, config);
            frontend.print_line(&event.to_string(), false);
        }

        match turn.outcome {
            Some(BattleOutcome::Exited) => return Ok(BattleOutcome::Exited),
            Some(BattleOutcome::Won) => {
                move_delay(frontend, config);
                frontend.clear();
                frontend.print_line("Congratulations", true);
                frontend.blank_line();
                frontend.print_line("You have successfully EXTRACTed the RANSOMWARE", true);
                frontend.blank_line();
                frontend.await_player(true)?;
                return Ok(BattleOutcome::Won);
            }
            Some(outcome) => {
                log::debug!("battle lost: {outcome:?}");
                move_delay(frontend, config);
                return Ok(outcome);
            }
            None => {
                move_delay(frontend, config);
                frontend.await_player(false)?;
            }
        }
    }
}
