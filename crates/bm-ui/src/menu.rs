//! Start menu and the screens reachable from it

use bm_core::VERSION_STRING;
use bm_core::error::InputError;
use bm_core::interface::{Frontend, LineRenderer};
use strum::{Display, EnumIter, IntoEnumIterator};

pub const LOGO: [&str; 8] = [
    r" ______  __________________ _______  _______  _______           _______  _______ ",
    r"(  ___ \ \__   __/\__   __/(       )(  ___  )(  ____ \|\     /|(  ____ \(  ____ )",
    r"| (   ) )   ) (      ) (   | () () || (   ) || (    \/| )   ( || (    \/| (    )|",
    r"| (__/ /    | |      | |   | || || || (___) || (_____ | (___) || (__    | (____)|",
    r"|  __ (     | |      | |   | |(_)| ||  ___  |(_____  )|  ___  ||  __)   |     __)",
    r"| (  \ \    | |      | |   | |   | || (   ) |      ) || (   ) || (      | (\ (   ",
    r"| )___) )___) (___   | |   | )   ( || )   ( |/\____) || )   ( || (____/\| ) \ \__",
    r"|/ \___/ \_______/   )_(   |/     \||/     \|\_______)|/     \|(_______/|/   \__/",
];

/// Entries of the start menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum StartMenuChoice {
    #[strum(to_string = "(P)LAY")]
    Play,
    #[strum(to_string = "(I)NSTRUCTIONS")]
    Instructions,
    #[strum(to_string = "(A)BOUT")]
    About,
    #[strum(to_string = "(L)ICENSE")]
    License,
    #[strum(to_string = "(E)XIT")]
    Exit,
}

impl StartMenuChoice {
    pub const fn key(&self) -> char {
        match self {
            StartMenuChoice::Play => 'p',
            StartMenuChoice::Instructions => 'i',
            StartMenuChoice::About => 'a',
            StartMenuChoice::License => 'l',
            StartMenuChoice::Exit => 'e',
        }
    }

    pub fn from_key(key: char) -> Option<StartMenuChoice> {
        let key = key.to_ascii_lowercase();
        StartMenuChoice::iter().find(|choice| choice.key() == key)
    }
}

/// Show the start menu until the player picks PLAY or EXIT
///
/// The INSTRUCTIONS, ABOUT and LICENSE screens are handled here.
pub fn run_start_menu<F: Frontend>(frontend: &mut F) -> Result<StartMenuChoice, InputError> {
    let keys: Vec<char> = StartMenuChoice::iter().map(|c| c.key()).collect();

    loop {
        frontend.clear();
        for line in LOGO {
            frontend.print_line(line, true);
        }
        frontend.blank_line();
        frontend.print_line(VERSION_STRING, true);
        frontend.blank_line();
        frontend.print_line(
            "Type and enter the character in paranthesis to select an option.",
            true,
        );
        frontend.blank_line();
        for choice in StartMenuChoice::iter() {
            frontend.print_line(&choice.to_string(), true);
        }

        let Some(choice) = frontend.choose(&keys)?.and_then(StartMenuChoice::from_key) else {
            continue;
        };
        log::debug!("start menu: {choice:?}");

        match choice {
            StartMenuChoice::Play | StartMenuChoice::Exit => return Ok(choice),
            StartMenuChoice::Instructions => show_instructions(frontend)?,
            StartMenuChoice::About => show_about(frontend)?,
            StartMenuChoice::License => show_license(frontend)?,
        }
    }
}

/// Clear, then print a heading and centred paragraphs separated by blank
/// lines, then wait for ENTER
fn show_text_screen<L: LineRenderer>(
    renderer: &mut L,
    heading: &str,
    paragraphs: &[&str],
) -> Result<(), InputError> {
    renderer.clear();
    renderer.print_line(heading, true);
    renderer.blank_line();
    for paragraph in paragraphs {
        renderer.print_line(paragraph, true);
        renderer.blank_line();
    }
    renderer.await_player(true)
}

pub fn show_instructions<L: LineRenderer>(renderer: &mut L) -> Result<(), InputError> {
    show_text_screen(
        renderer,
        "INSTRUCTIONS",
        &[
            "You are an antivirus trying to rid a computer of a RANSOMWARE before it takes \
             over the system. There is a finite amount of time before the system is fully \
             infected",
            "In order to defeat it, you must find all items before you find the RANSOMWARE. \
             If you do not, you will not be able to EXTRACT it and you will lose.",
            "Each system (room) contains an item, which you can move to; UP, DOWN, LEFT, AND \
             RIGHT. Keep in mind that the map is NOT 2D; Moving RIGHT, UP, LEFT, and DOWN \
             will lead to a different room than the one you started in. The map is 'Spiky' \
             so-to-speak.",
            "You have a SCANner to aid in figuring out which rooms contain items and which \
             have RANSOMWARE. Using the SCANner will reveal what the surronding rooms \
             contain, and the room you are currently in will be automatically SCANned for \
             you. But beware: SCANning takes time. Also, occasionaly a SCAN will fail and \
             need to be repeated.",
            "Good luck",
        ],
    )
}

pub fn show_about<L: LineRenderer>(renderer: &mut L) -> Result<(), InputError> {
    show_text_screen(
        renderer,
        "ABOUT",
        &[
            "As part of some garbage that doesn't matter, I needed to create a text-based \
             adventure game where you visit various rooms to gather items. If you get all \
             the items before you meet the boss, you win, else, you lose.",
            "I had decided to massively overcomplicate said game and make it something \
             somewhat special. I can't stand going through the effort of making something \
             and doing it half-baked.",
            "Anyways, have fun",
        ],
    )
}

pub fn show_license<L: LineRenderer>(renderer: &mut L) -> Result<(), InputError> {
    show_text_screen(
        renderer,
        "LICENSE",
        &[
            "Copyright (C) 2024 ona-li-toki-e-jan-Epiphany-tawa-mi.",
            "This program is free software: you can redistribute it and/or modify it under \
             the terms of the GNU General Public License as published by the Free Software \
             Foundation, either version 3 of the License, or (at your option) any later \
             version.",
            "This program is distributed in the hope that it will be useful, but WITHOUT ANY \
             WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A \
             PARTICULAR PURPOSE. See the GNU General Public License for more details.",
            "You should have received a copy of the GNU General Public License along with \
             this program. If not, see http://www.gnu.org/licenses/.",
            "Source (GitHub):",
            "https://github.com/ona-li-toki-e-jan-Epiphany-tawa-mi/BitMasher/",
        ],
    )
}
