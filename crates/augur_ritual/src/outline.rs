//! Seven-step ritual outline templated from a correspondence.

use augur_base::{Entity, Intent};
use serde::{Deserialize, Serialize};

use crate::correspondence::Correspondence;

/// One step of a ritual outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RitualStep {
    pub phase: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RitualStep {
    fn new(phase: &str, action: String) -> Self {
        Self {
            phase: phase.to_string(),
            action,
            notes: None,
        }
    }

    fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }
}

/// Step titles, in outline order.
pub const STEP_PHASES: [&str; 7] = [
    "Timing & Preparation",
    "Sacred Space Setup",
    "Focus Statement / Intention Setting",
    "Symbolic Actions",
    "Meditation / Visualization",
    "Journaling",
    "Closing & Gratitude",
];

fn first_joined(items: &[String], n: usize, sep: &str) -> String {
    items
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(sep)
}

/// What the focus statement names: intent label, else first entity name.
fn focus_subject<'a>(intent: Option<&'a Intent>, entities: &'a [Entity]) -> &'a str {
    intent
        .map(|i| i.label.as_str())
        .filter(|label| !label.is_empty())
        .or_else(|| entities.first().map(|e| e.name.as_str()))
        .unwrap_or("your intention")
}

/// Build the seven-step outline for a correspondence and match.
pub fn build_ritual_outline(
    correspondence: &Correspondence,
    intent: Option<&Intent>,
    entities: &[Entity],
) -> Vec<RitualStep> {
    let c = correspondence;
    let subject = focus_subject(intent, entities);
    let entity_note = if entities.is_empty() {
        String::new()
    } else {
        let names: Vec<&str> = entities.iter().map(|e| e.name.as_str()).collect();
        format!(" Call upon the energies of {} for support.", names.join(", "))
    };

    let colors = first_joined(&c.colors, 2, " and ");
    let stones = first_joined(&c.stones, 2, " or ");
    let herbs = first_joined(&c.herbs, 2, " and ");
    let scent = first_joined(&c.scents, 1, ", ");

    let mut prep_notes = format!("Element: {} | Sphere: {}", c.element, c.sphere);
    if let Some(planet) = c.planet.as_deref().filter(|p| !p.is_empty()) {
        prep_notes.push_str(" | Planet: ");
        prep_notes.push_str(planet);
    }
    let tarot_note = c
        .tarot_cards
        .first()
        .map(|card| format!("Optional: place the {card} card on your altar as a focal image."));

    vec![
        RitualStep::new(
            STEP_PHASES[0],
            format!(
                "Begin during {}. Cleanse yourself and your space. Gather {colors} candles, \
                 {stones} stones, and {herbs} herbs as focal points for your working.",
                c.timing
            ),
        )
        .with_notes(Some(prep_notes)),
        RitualStep::new(
            STEP_PHASES[1],
            format!(
                "Create a sacred circle or altar space facing the direction most aligned with \
                 your intent. Arrange your gathered materials. Light incense of {scent} to \
                 purify the atmosphere and signal your intention to begin."
            ),
        ),
        RitualStep::new(
            STEP_PHASES[2],
            format!(
                "State clearly and with feeling: \"I open this space with the intention of \
                 {subject}.\" Breathe deeply three times, fully inhabiting your purpose.{entity_note}"
            ),
        ),
        RitualStep::new(
            STEP_PHASES[3],
            format!(
                "Hold your chosen stones in your hands. Light a {colors} candle, watching the \
                 flame as a symbol of your focused will. If you have herbs, you may burn them \
                 safely or arrange them on your altar. Let the symbols work on your unconscious \
                 mind."
            ),
        )
        .with_notes(tarot_note),
        RitualStep::new(
            STEP_PHASES[4],
            "Close your eyes and visualize your intention fully realized. See it, feel it, \
             sense it as already present. Spend at least 5\u{2013}10 minutes in this state, \
             letting the vision take on depth and texture."
                .to_string(),
        ),
        RitualStep::new(
            STEP_PHASES[5],
            "After your meditation, write freely about what you experienced\u{2014}images, feelings, \
             insights, resistances. Note the date, moon phase, and any notable symbols that \
             arose. Your journal becomes a record of your practice."
                .to_string(),
        ),
        RitualStep::new(
            STEP_PHASES[6],
            "Thank any energies, archetypes, or entities you invoked. Extinguish candles \
             respectfully (rather than blowing them out). Close your circle. Allow yourself a \
             moment of stillness before returning to ordinary awareness."
                .to_string(),
        ),
    ]
}
