//! Endings and warnings shown around a session

use std::io::{BufRead, Write};
use std::time::Duration;

use bm_core::combat::BattleOutcome;
use bm_core::dungeon::GeneratedMap;
use bm_core::error::InputError;
use bm_core::interface::LineRenderer;
use bm_core::{RandomSource, SessionOutcome};

use crate::terminal::Terminal;

const SPAM_ROUNDS: usize = 15;
const SPAM_LENGTH: usize = 1000;
const SPAM_FRAME_DELAY: Duration = Duration::from_millis(100);

const GAME_OVER: &str = "GAME OVER GAME OVER GAME OVER";
const TAUNT: &str = "All Your systems are belong to us";
const SMIRK: &str = ";;;;;;;;)))))";

/// A random printable ASCII character, excluding space
pub fn random_character<R: RandomSource>(rng: &mut R) -> char {
    char::from(rng.range_inclusive(0x21, 0x7E) as u8)
}

/// Replace a random number of characters with random ones
pub fn garble<R: RandomSource>(text: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let replacements = rng.range_inclusive(0, chars.len() as u32);
    for _ in 0..replacements {
        let index = rng.rn2(chars.len() as u32) as usize;
        chars[index] = random_character(rng);
    }
    chars.into_iter().collect()
}

/// Flip every letter to upper or lower case at random
pub fn annoying_case<R: RandomSource>(text: &str, rng: &mut R) -> String {
    text.chars()
        .map(|c| {
            if rng.percent(50) {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

/// Whether an outcome ends with the lose sequence, and whether it is the
/// winking variant reserved for dancing yourself to death
pub fn lose_sequence_for(outcome: SessionOutcome) -> Option<bool> {
    outcome
        .is_loss()
        .then_some(outcome == SessionOutcome::Battle(BattleOutcome::LostSelfHarm))
}

/// Explain that the map came out smaller than planned
pub fn show_generation_warning<L: LineRenderer>(
    renderer: &mut L,
    generated: &GeneratedMap,
) -> Result<(), InputError> {
    renderer.clear();
    renderer.print_line("WARNING: Unable to generate enough systems!", false);
    renderer.print_line(
        &format!(
            "Could only place {} items from a pool of {}",
            generated.placed.len(),
            generated.requested
        ),
        false,
    );
    renderer.print_line(
        &format!(
            "There are only {} systems avalible in total for generation",
            generated.stats.systems_generated
        ),
        false,
    );
    renderer.print_line("Please notify the developer(s) so they can fix it", false);
    renderer.print_line(
        "The game should still run fine, so feel free to continue PLAYing",
        false,
    );
    renderer.blank_line();
    renderer.await_player(false)
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Flood the screen, then gloat
    ///
    /// `funny` swaps the random noise for winks.
    pub fn play_lose_sequence<G: RandomSource>(
        &mut self,
        funny: bool,
        rng: &mut G,
    ) -> Result<(), InputError> {
        let frame_delay = if self.print_delay().is_zero() {
            Duration::ZERO
        } else {
            SPAM_FRAME_DELAY
        };

        self.clear();
        for _ in 0..SPAM_ROUNDS {
            // Bell first; not every terminal rings it
            let mut spam = String::from('\x07');
            for _ in 0..SPAM_LENGTH {
                if funny {
                    spam.push_str(";)");
                } else {
                    spam.push(random_character(rng));
                }
            }
            self.write_raw(&spam);
            self.pause(frame_delay);
        }

        self.clear();
        for _ in 0..rng.range_inclusive(5, 10) {
            self.print_line(&garble(GAME_OVER, rng), true);
        }
        self.blank_line();
        self.print_line(&annoying_case(TAUNT, rng), true);
        self.blank_line();

        for _ in 0..rng.range_inclusive(20, 40) {
            self.write_raw(SMIRK);
            self.pause(self.print_delay());
        }
        self.write_raw("\n");
        self.blank_line();

        self.await_player(true)
    }
}
