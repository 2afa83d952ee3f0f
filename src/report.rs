use colored::Colorize;

use crate::domain::preference_map::{Pairing, PreferenceMap};

pub fn print_preferences(preferences: &PreferenceMap) {
    println!("{}", "Preferences".bold());
    for (player, opponents) in preferences.iter() {
        println!("  {} → {}", player.cyan(), opponents.join(", "));
    }
}

/// One line per pair, in the order players appear in `order`
pub fn print_pairing(pairing: &Pairing, order: &PreferenceMap) {
    println!("{}", "Pairings".bold());
    for (a, b) in pairing_lines(pairing, order) {
        println!("  {} {} {}", a.green(), "vs".dimmed(), b.green());
    }
}

fn pairing_lines<'a>(pairing: &'a Pairing, order: &'a PreferenceMap) -> Vec<(&'a str, &'a str)> {
    let mut seen: Vec<&str> = Vec::new();
    let mut lines = Vec::new();
    for player in order.players() {
        if seen.contains(&player) {
            continue;
        }
        if let Some(partner) = pairing.partner_of(player) {
            seen.push(player);
            seen.push(partner);
            lines.push((player, partner));
        }
    }
    lines
}
