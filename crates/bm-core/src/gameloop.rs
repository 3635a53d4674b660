//! Main game loop
//!
//! A session is one PLAY through: the player explores the generated map
//! against the clock until they reach the RANSOMWARE, run out of time, or
//! EXIT.

use std::time::Duration;

use crate::action::Command;
use crate::combat::{BattleOutcome, run_battle};
use crate::config::GameConfig;
use crate::dungeon::{GeneratedMap, Map, System, SystemId, generate_map, scan_neighbours, try_scan};
use crate::error::{GenerationError, InputError};
use crate::interface::{Clock, Frontend, LineRenderer, format_time_left};
use crate::object::{Inventory, Item, ItemKind, generate_required_items};
use crate::rng::RandomSource;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The RANSOMWARE was reached; the battle decided the rest
    Battle(BattleOutcome),
    /// Time ran out while exploring
    LostTimeout,
    /// The player EXITed
    Exited,
}

impl SessionOutcome {
    pub const fn is_loss(&self) -> bool {
        match self {
            SessionOutcome::Battle(outcome) => outcome.is_loss(),
            SessionOutcome::LostTimeout => true,
            SessionOutcome::Exited => false,
        }
    }

    pub const fn is_win(&self) -> bool {
        matches!(self, SessionOutcome::Battle(BattleOutcome::Won))
    }
}

/// What entering a system led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrival {
    /// Keep exploring
    Explore,
    /// The RANSOMWARE lives here
    Battle,
    /// The deadline has passed
    TimedOut,
}

/// Deadline for a session started at `start` with `kinds` items to find
pub fn deadline_for(start: Duration, kinds: usize, seconds_per_system: u64) -> Duration {
    let budget = seconds_per_system.saturating_mul(kinds as u64);
    start.saturating_add(Duration::from_secs(budget))
}

/// Roll the required items and generate a map for them
pub fn new_game<R: RandomSource>(
    config: &GameConfig,
    rng: &mut R,
) -> Result<GeneratedMap, GenerationError> {
    let required = generate_required_items(rng);
    generate_map(&required, config, rng)
}

/// Exploration state of one session
#[derive(Debug, Clone)]
pub struct Session {
    map: Map,
    inventory: Inventory,
    /// Items still needed to beat the RANSOMWARE
    remaining: Inventory,
    current: SystemId,
    deadline: Duration,
}

impl Session {
    /// Start a session on a generated map
    ///
    /// The deadline is fixed here and never recalculated.
    pub fn new(generated: GeneratedMap, start: Duration, config: &GameConfig) -> Self {
        let deadline = deadline_for(start, generated.placed.len(), config.seconds_per_system);
        let current = generated.map.root();

        Self {
            map: generated.map,
            inventory: Inventory::new(),
            remaining: generated.placed,
            current,
            deadline,
        }
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Items collected so far
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn remaining(&self) -> &Inventory {
        &self.remaining
    }

    pub fn current(&self) -> SystemId {
        self.current
    }

    pub fn current_system(&self) -> &System {
        &self.map[self.current]
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Enter the current system
    ///
    /// Checks the deadline, then the RANSOMWARE, and otherwise auto-scans the
    /// system. The auto-scan never fails.
    pub fn arrive<R: RandomSource>(&mut self, now: Duration, rng: &mut R) -> Arrival {
        if now >= self.deadline {
            return Arrival::TimedOut;
        }
        if self.current_system().holds_boss() {
            return Arrival::Battle;
        }

        try_scan(&mut self.map[self.current], false, 0, rng);
        Arrival::Explore
    }

    /// Commands the player can pick in the current system, in menu order
    pub fn available_commands(&self) -> Vec<Command> {
        let system = self.current_system();
        let mut commands: Vec<Command> = system
            .neighbours()
            .map(|(direction, _)| Command::Move(direction))
            .collect();

        if system.item.is_collectible() {
            commands.push(Command::Take);
        }
        commands.extend([Command::Scan, Command::Inventory, Command::Exit]);
        commands
    }

    /// Apply a command, returning the outcome if it ends the session
    pub fn apply<R: RandomSource>(
        &mut self,
        command: Command,
        config: &GameConfig,
        rng: &mut R,
    ) -> Option<SessionOutcome> {
        match command {
            Command::Move(direction) => match self.current_system().neighbour(direction) {
                Some(next) => self.current = next,
                None => log::debug!("nothing {direction} of {:?}", self.current),
            },
            Command::Take => self.take(),
            Command::Scan => {
                scan_neighbours(&mut self.map, self.current, config.scan_fail_chance, rng);
            }
            Command::Inventory => {}
            Command::Exit => return Some(SessionOutcome::Exited),
        }
        None
    }

    /// Move one unit of the current system's item into the inventory
    fn take(&mut self) {
        let system = &mut self.map[self.current];
        let kind = system.item;
        if !kind.is_collectible() {
            return;
        }

        system.item = ItemKind::None;
        self.inventory.add(Item::one(kind));
        self.remaining.remove(kind, 1);
        log::debug!("took {kind}, {} kinds remaining", self.remaining.len());
    }
}

/// Show the collected and the remaining items
pub fn display_inventory<F: Frontend>(
    frontend: &mut F,
    inventory: &Inventory,
    remaining: &Inventory,
) -> Result<(), InputError> {
    frontend.clear();
    frontend.print_line("INVENTORY:", true);
    frontend.blank_line();
    print_items(frontend, inventory, "Empty...");
    frontend.blank_line();
    frontend.print_line("Remaining Items:", true);
    frontend.blank_line();
    print_items(frontend, remaining, "Everything needed has been found...");
    frontend.blank_line();
    frontend.await_player(true)
}

fn print_items<F: LineRenderer>(frontend: &mut F, items: &Inventory, placeholder: &str) {
    if items.is_empty() {
        frontend.print_line(placeholder, true);
        return;
    }
    for item in items.iter() {
        frontend.print_line(&format!("- {}: {}", item.kind, item.quantity), true);
    }
}

/// Draw the exploration screen for the current system
fn render_system<F: Frontend>(frontend: &mut F, session: &Session, now: Duration) {
    let system = session.current_system();

    frontend.clear();
    frontend.print_line(&system.label(), true);
    frontend.print_line(&format_time_left(session.deadline(), now), true);
    frontend.blank_line();

    for (direction, id) in system.neighbours() {
        let neighbour = &session.map()[id];
        let line = neighbour
            .scan_result
            .annotate(&direction.describe(&neighbour.name()));
        frontend.print_line(&line, false);
    }
    if system.item.is_collectible() {
        frontend.print_line(&format!("There is a [{}]. (T)AKE it?", system.item), false);
    }

    frontend.blank_line();
    frontend.print_line("(S)CAN the neighboring systems", false);
    frontend.print_line("Open the (I)NVENTORY", false);
    frontend.print_line("(E)XIT game", false);
}

/// Play a session on a generated map until it ends
///
/// Losing endings are left to the caller.
pub fn run_session<F: Frontend, C: Clock, R: RandomSource>(
    frontend: &mut F,
    clock: &C,
    rng: &mut R,
    config: &GameConfig,
    generated: GeneratedMap,
) -> Result<SessionOutcome, InputError> {
    let mut session = Session::new(generated, clock.now(), config);
    log::debug!(
        "session started with {} items to find, deadline {:?}",
        session.remaining().len(),
        session.deadline()
    );

    loop {
        let now = clock.now();
        match session.arrive(now, rng) {
            Arrival::TimedOut => {
                log::debug!("session timed out");
                return Ok(SessionOutcome::LostTimeout);
            }
            Arrival::Battle => {
                let outcome = run_battle(
                    frontend,
                    clock,
                    session.remaining(),
                    session.deadline(),
                    config,
                )?;
                return Ok(SessionOutcome::Battle(outcome));
            }
            Arrival::Explore => {}
        }

        render_system(frontend, &session, now);

        let commands = session.available_commands();
        let keys: Vec<char> = commands.iter().map(Command::key).collect();
        let Some(command) = frontend.choose(&keys)?.and_then(Command::from_key) else {
            log::warn!("no valid action possible, leaving the session");
            return Ok(SessionOutcome::Exited);
        };

        match command {
            Command::Scan => {
                frontend.blank_line();
                frontend.print_line("SCANning...", false);
                frontend.pause(config.scan_time);
            }
            Command::Inventory => {
                display_inventory(frontend, session.inventory(), session.remaining())?;
            }
            _ => {}
        }

        if let Some(outcome) = session.apply(command, config, rng) {
            return Ok(outcome);
        }
    }
}
