//! Test Fixtures
//!
//! Provides small reference documents shaped like the real compendia:
//! class descriptions keyed by slug-friendly names, class features with a
//! `Class Features` bucket and nested subclasses, and races with traits
//! sections holding bolded-header paragraphs.

use serde_json::json;

use crate::core::reference::{
    ClassDescriptionDocument, ClassFeatureDocument, RaceDocument, ReferenceLibrary,
};

// =============================================================================
// Document Fixtures
// =============================================================================

/// Class-description document with one intro, one plain-name intro and a
/// handful of subclass and feature entries.
pub fn class_descriptions() -> ClassDescriptionDocument {
    serde_json::from_value(json!({
        "Barbarian": {
            "The Barbarian": "A fierce warrior who can enter a battle rage.",
            "Rage": "In battle, you fight with primal ferocity.",
            "Path of the Berserker": "For some barbarians, rage is a means to an end.",
            "Frenzy": "You can go into a frenzy when you rage."
        },
        "Paladin": {
            "Paladin": "A holy warrior bound to a sacred oath.",
            "Divine Smite": "When you hit a creature with a melee weapon attack, you can expend a spell slot.",
            "Channel Divinity: Turn the Unholy": "You censure fiends and undead."
        },
        "Wizard": {
            "The Wizard": "A scholarly magic-user.",
            "Arcane Recovery": "You can regain some of your magical energy by studying your spellbook."
        }
    }))
    .expect("class description fixture is valid")
}

/// Class-feature document covering the base bucket, a nested subclass, a
/// subclass beside `Class Features`, and a class with no bucket at all.
pub fn class_features() -> ClassFeatureDocument {
    serde_json::from_value(json!({
        "Fighter": {
            "Class Features": {
                "Fighting Style": "You adopt a particular style of fighting as your specialty.",
                "Second Wind": {"content": "You have a limited well of stamina."},
                "Action Surge": {
                    "content": ["You can push yourself beyond your normal limits.", "Once you use this feature, you must rest."],
                    "table": {"Level": ["2nd", "17th"], "Uses": ["1", "2"]}
                },
                "Champion": {
                    "Improved Critical": "Your weapon attacks score a critical hit on a roll of 19 or 20."
                }
            }
        },
        "Paladin": {
            "Class Features": {
                "Divine Sense": "The presence of strong evil registers on your senses.",
                "Channel Divinity": "Your oath allows you to channel divine energy."
            },
            "Oath of Devotion": {
                "Channel Divinity: Sacred Weapon": "You can imbue one weapon with positive energy.",
                "Channel Divinity: Turn the Unholy": "You censure fiends and undead."
            }
        },
        "Rogue": {
            "Sneak Attack": "You know how to strike subtly and exploit a foe's distraction.",
            "Thieves\u{2019} Cant": "A secret mix of dialect, jargon, and code."
        }
    }))
    .expect("class feature fixture is valid")
}

/// Race document with base races, nested subraces and an overriding trait.
pub fn races() -> RaceDocument {
    serde_json::from_value(json!({
        "Races": {
            "Dwarf": {
                "content": ["Kingdoms rich in ancient grandeur..."],
                "Dwarf Traits": {
                    "content": [
                        "Your dwarf character has an assortment of inborn abilities.",
                        "***Darkvision.*** Accustomed to life underground, you have superior vision in dark conditions.",
                        "***Dwarven Resilience.*** You have advantage on saving throws against poison."
                    ],
                    "Hill Dwarf": {
                        "content": ["***Dwarven Toughness.*** Your hit point maximum increases by 1."]
                    }
                }
            },
            "Elf": {
                "Elf Traits": {
                    "content": ["***Darkvision.*** You can see in dim light within 60 feet.", "***Trance.*** Elves don't need to sleep."],
                    "Drow": {
                        "content": ["***Darkvision.*** 120 feet.", "***Sunlight Sensitivity.*** Disadvantage in direct sunlight."]
                    }
                }
            },
            "Halfling": {
                "Halfling Traits": {
                    "content": ["***Lucky.*** When you roll a 1, you can reroll the die."],
                    "Lightfoot": {
                        "content": ["***Naturally Stealthy.*** You can attempt to hide even when obscured only by a larger creature."]
                    }
                }
            }
        }
    }))
    .expect("race fixture is valid")
}

/// A library over all three fixture documents.
pub fn library() -> ReferenceLibrary {
    ReferenceLibrary::new(class_descriptions(), class_features(), races())
}
