//! Player action system
//!
//! Commands available while exploring and actions available in battle,
//! with the menu keys that select them.

use crate::dungeon::Direction;

/// Player command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Travel to the neighbour in a direction
    Move(Direction),
    /// Pick up the item of the current system
    Take,
    /// SCAN the neighbouring systems
    Scan,
    /// Open the INVENTORY view
    Inventory,
    /// EXIT the session
    Exit,
}

impl Command {
    /// Menu key for this command
    pub const fn key(&self) -> char {
        match self {
            Command::Move(direction) => direction.key(),
            Command::Take => 't',
            Command::Scan => 's',
            Command::Inventory => 'i',
            Command::Exit => 'e',
        }
    }

    /// Command bound to a menu key
    pub fn from_key(key: char) -> Option<Command> {
        match key.to_ascii_lowercase() {
            't' => Some(Command::Take),
            's' => Some(Command::Scan),
            'i' => Some(Command::Inventory),
            'e' => Some(Command::Exit),
            key => Direction::ALL
                .into_iter()
                .find(|d| d.key() == key)
                .map(Command::Move),
        }
    }
}

/// Moves the player can make on their turn in battle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleAction {
    Extract,
    Nothing,
    Dance,
    Exit,
}

impl BattleAction {
    pub const ALL: [BattleAction; 4] = [
        BattleAction::Extract,
        BattleAction::Nothing,
        BattleAction::Dance,
        BattleAction::Exit,
    ];

    pub const fn key(&self) -> char {
        match self {
            BattleAction::Extract => 'x',
            BattleAction::Nothing => 'n',
            BattleAction::Dance => 'd',
            BattleAction::Exit => 'e',
        }
    }

    /// Menu text, with the key in parentheses
    pub const fn label(&self) -> &'static str {
        match self {
            BattleAction::Extract => "E(X)TRACT",
            BattleAction::Nothing => "Do (N)OTHING",
            BattleAction::Dance => "Do a funny (D)ANCE",
            BattleAction::Exit => "(E)XIT game",
        }
    }

    pub fn from_key(key: char) -> Option<BattleAction> {
        let key = key.to_ascii_lowercase();
        BattleAction::ALL.into_iter().find(|a| a.key() == key)
    }

    /// Keys for every action, in menu order
    pub fn keys() -> Vec<char> {
        BattleAction::ALL.iter().map(BattleAction::key).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_keys_round_trip() {
        let commands = [
            Command::Move(Direction::Up),
            Command::Move(Direction::Down),
            Command::Move(Direction::Left),
            Command::Move(Direction::Right),
            Command::Take,
            Command::Scan,
            Command::Inventory,
            Command::Exit,
        ];
        for command in commands {
            assert_eq!(Command::from_key(command.key()), Some(command));
        }
    }

    #[test]
    fn test_command_from_unknown_key() {
        assert_eq!(Command::from_key('q'), None);
        assert_eq!(Command::from_key('U'), Some(Command::Move(Direction::Up)));
    }

    #[test]
    fn test_battle_action_keys() {
        assert_eq!(BattleAction::keys(), vec!['x', 'n', 'd', 'e']);
        assert_eq!(BattleAction::from_key('X'), Some(BattleAction::Extract));
        assert_eq!(BattleAction::from_key('t'), None);
    }
}
