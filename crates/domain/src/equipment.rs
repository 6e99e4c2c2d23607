use std::{collections::BTreeSet, fmt, slice::Iter};

use log::warn;

use crate::{Property, text};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Equipment {
    Barbell,
    Bench,
    Cable,
    Dumbbell,
    EzBar,
    Kettlebell,
    LegPress,
    Machine,
    PullUpBar,
    ResistanceBand,
    SmithMachine,
    SquatRack,
    TrapBar,
}

impl Equipment {
    /// Word sequences that refer to this equipment.
    #[must_use]
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Equipment::Barbell => &["barbell", "barbells", "bar", "bb"],
            Equipment::Bench => &["bench", "flat bench", "incline bench"],
            Equipment::Cable => &["cable", "cables", "cable machine", "cable station"],
            Equipment::Dumbbell => &["dumbbell", "dumbbells", "db", "dbs"],
            Equipment::EzBar => &["ez", "ez bar", "ez curl bar", "z bar"],
            Equipment::Kettlebell => &["kettlebell", "kettlebells", "kb"],
            Equipment::LegPress => &["leg press", "leg press machine"],
            Equipment::Machine => &["machine", "machines"],
            Equipment::PullUpBar => &["pull up bar", "pullup bar", "chin up bar", "chinup bar"],
            Equipment::ResistanceBand => &["band", "bands", "resistance band", "resistance bands"],
            Equipment::SmithMachine => &["smith", "smith machine"],
            Equipment::SquatRack => &["squat rack", "power rack", "rack"],
            Equipment::TrapBar => &["trap bar", "hex bar", "trap"],
        }
    }

    /// Finds all equipment mentioned in `text`.
    ///
    /// At every position the longest matching alias wins, so "pull up bar" is a pull-up bar
    /// rather than a barbell.
    #[must_use]
    pub fn scan(text: &str) -> BTreeSet<Equipment> {
        let words = text::words(text);
        let mut result = BTreeSet::new();
        let mut i = 0;

        while i < words.len() {
            match longest_alias_at(&words[i..]) {
                Some((equipment, len)) => {
                    result.insert(equipment);
                    i += len;
                }
                None => i += 1,
            }
        }

        result
    }

    /// Parses a comma separated list of equipment such as `"barbell, cable machine"`.
    ///
    /// Items that name no known equipment are skipped.
    #[must_use]
    pub fn parse_list(text: &str) -> BTreeSet<Equipment> {
        text.split([',', ';', '\n'])
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .flat_map(|item| {
                let found = Equipment::scan(item);
                if found.is_empty() {
                    warn!("ignoring unknown equipment \"{item}\"");
                }
                found
            })
            .collect()
    }
}

fn longest_alias_at(words: &[String]) -> Option<(Equipment, usize)> {
    Equipment::iter()
        .flat_map(|equipment| {
            equipment
                .aliases()
                .iter()
                .map(move |alias| (*equipment, text::words(alias)))
        })
        .filter(|(_, alias)| alias.len() <= words.len() && words[..alias.len()] == alias[..])
        .map(|(equipment, alias)| (equipment, alias.len()))
        .max_by_key(|(_, len)| *len)
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 13] = [
            Equipment::Barbell,
            Equipment::Bench,
            Equipment::Cable,
            Equipment::Dumbbell,
            Equipment::EzBar,
            Equipment::Kettlebell,
            Equipment::LegPress,
            Equipment::Machine,
            Equipment::PullUpBar,
            Equipment::ResistanceBand,
            Equipment::SmithMachine,
            Equipment::SquatRack,
            Equipment::TrapBar,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Bench => "Bench",
            Equipment::Cable => "Cable",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::EzBar => "EZ Bar",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::LegPress => "Leg Press",
            Equipment::Machine => "Machine",
            Equipment::PullUpBar => "Pull-Up Bar",
            Equipment::ResistanceBand => "Resistance Band",
            Equipment::SmithMachine => "Smith Machine",
            Equipment::SquatRack => "Squat Rack",
            Equipment::TrapBar => "Trap Bar",
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
