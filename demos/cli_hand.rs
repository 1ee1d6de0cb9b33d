//! CLI card hand example.

#![allow(clippy::missing_docs_in_private_items)]

extern crate alloc;

use alloc::sync::Arc;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cardhand::{
    Ability, CardDefinition, CardDetails, CardFace, DetailView, Evolution, HandController,
    HandOptions, HandView, Origin, Rarity, TextSink,
};

struct TerminalHand;

impl HandView for TerminalHand {
    fn render_hand(&mut self, faces: &[CardFace]) {
        if faces.is_empty() {
            return;
        }
        println!();
        for (slot, face) in faces.iter().enumerate() {
            println!(
                "[{slot}] {} | HP {} | ATK {} | {} {} {}",
                colorize(&face.name, "1"),
                face.health,
                face.attack,
                face.origin_icon,
                face.rarity_icon,
                face.evolution_icon
            );
            if !face.description.is_empty() {
                println!("    {}", colorize(&face.description, "90"));
            }
        }
        println!();
    }

    fn set_actions_visible(&mut self, visible: bool) {
        if visible {
            println!("{}", colorize("[e]xecute [v]iew details", "32"));
        }
    }

    fn set_slot_scale(&mut self, _slot: usize, _scale: f32) {}

    fn set_visible(&mut self, visible: bool) {
        if visible {
            println!("Back to hand.");
        }
    }
}

struct TerminalDetails;

impl DetailView for TerminalDetails {
    fn show_details(&mut self, details: &CardDetails) {
        println!("\n== {} ==", details.face.name);
        for line in [
            &details.origin,
            &details.rarity,
            &details.evolution,
            &details.health,
            &details.attack,
            &details.ability,
        ] {
            println!("{line}");
        }
        println!("[b]ack\n");
    }

    fn hide(&mut self) {}

    fn set_scale(&mut self, _scale: f32) {}
}

struct TerminalText;

impl TextSink for TerminalText {
    fn set_text(&mut self, text: &str) {
        println!("\n{}\n", colorize(text, "33"));
    }
}

fn main() {
    println!("Card hand CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = HandOptions::default().with_seed(seed);
    let mut controller = HandController::new(
        TerminalHand,
        Some(TerminalDetails),
        Some(TerminalText),
        card_pool(),
        options,
    );

    if let Err(err) = controller.start() {
        println!("Draw error: {err}");
        return;
    }

    loop {
        let input = prompt_line("Slot number, [r]edraw, [d]eselect, or [q]uit: ");
        let result = match input.as_str() {
            "q" | "quit" => break,
            "r" | "redraw" => controller.start().map(|_| ()),
            "d" | "deselect" => {
                controller.deselect();
                Ok(())
            }
            "e" | "execute" => controller.execute_selected().map(|_| ()),
            "v" | "view" => controller.view_selected_details(),
            "b" | "back" => {
                controller.close_details();
                Ok(())
            }
            other => match other.parse::<usize>() {
                Ok(slot) => controller.click(slot),
                Err(_) => {
                    println!("Unknown command.");
                    continue;
                }
            },
        };

        if let Err(err) = result {
            println!("Error: {err}");
        }
    }
}

fn card_pool() -> Vec<Arc<CardDefinition>> {
    let wolf = CardDefinition::new("Wolf")
        .with_description("Hunts in packs.")
        .with_origin(Origin::Air)
        .with_stats(3, 2)
        .shared();

    vec![
        CardDefinition::new("Golem")
            .with_description("Stone given purpose.")
            .with_origin(Origin::Earth)
            .with_rarity(Rarity::Rare)
            .with_evolution(Evolution::II)
            .with_stats(10, 4)
            .with_ability(Ability::Heal { amount: 3.0 })
            .shared(),
        CardDefinition::new("Tidecaller")
            .with_origin(Origin::Water)
            .with_rarity(Rarity::Epic)
            .with_stats(5, 3)
            .with_ability(Ability::Stun { turns: 2 })
            .shared(),
        CardDefinition::new("Den Mother")
            .with_origin(Origin::Air)
            .with_rarity(Rarity::Uncommon)
            .with_stats(6, 1)
            .with_ability(Ability::Spawn {
                target: Some(Arc::clone(&wolf)),
                amount: 2,
            })
            .shared(),
        CardDefinition::new("Ember Imp")
            .with_origin(Origin::Fire)
            .with_rarity(Rarity::Mythical)
            .with_evolution(Evolution::III)
            .with_stats(2, 7)
            .shared(),
        wolf,
    ]
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    // End of input quits.
    if matches!(io::stdin().read_line(&mut input), Ok(0) | Err(_)) {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
