use std::{collections::BTreeSet, fmt, slice::Iter, str::FromStr, sync::LazyLock};

use chrono::NaiveDate;

use crate::{Equipment, Property, Weight, WorkoutLog, WorkoutType, text};

/// Minimum similarity for a fuzzy catalog match.
pub const MIN_SIMILARITY: f32 = 0.8;

/// Lookup of exercise names in a catalog of known exercises.
///
/// Only `lookup` must be provided. The remaining operations derive weights, equipment and
/// display names from it and fall back to keyword heuristics for names the catalog does not
/// know.
pub trait ExerciseCatalog {
    fn lookup(&self, text: &str) -> Option<CatalogMatch<'_>>;

    fn beginner_weight(&self, name: &str) -> BeginnerWeight {
        match self.lookup(name) {
            Some(m) => {
                let weight = m.entry.beginner_weight();
                let reasoning = match weight {
                    Some(weight) => format!("Beginner weight for {}: {weight} lb", m.entry.name),
                    None => format!("{} is a bodyweight exercise", m.entry.name),
                };
                BeginnerWeight {
                    weight,
                    weight_class: m.entry.weight_class,
                    canonical_name: Some(m.entry.name.to_string()),
                    reasoning,
                }
            }
            None => {
                let weight_class = WeightClass::infer(name);
                let weight = weight_class.default_weight();
                let reasoning = match weight {
                    Some(weight) => format!("Default for {weight_class} exercises: {weight} lb"),
                    None => "Bodyweight exercise".to_string(),
                };
                BeginnerWeight {
                    weight,
                    weight_class,
                    canonical_name: None,
                    reasoning,
                }
            }
        }
    }

    /// Equipment needed to perform an exercise.
    ///
    /// Exact matches use the equipment tagged in the catalog. For approximate matches and
    /// unknown names the equipment mentioned in the name itself takes precedence.
    fn required_equipment(&self, name: &str) -> BTreeSet<Equipment> {
        let mentioned = Equipment::scan(name);
        match self.lookup(name) {
            Some(m) if m.kind.is_exact() || mentioned.is_empty() => {
                m.entry.equipment.iter().copied().collect()
            }
            _ => mentioned,
        }
    }

    /// Canonical name for exact name or alias matches, otherwise the input in title case.
    fn normalize_name(&self, name: &str) -> String {
        match self.lookup(name) {
            Some(m) if m.kind.is_exact() => m.entry.name.to_string(),
            _ => text::title_case(name.trim()),
        }
    }

    fn exercise_info(&self, name: &str, history: &[WorkoutLog]) -> ExerciseInfo {
        let found = self.lookup(name);
        let beginner_weight = self.beginner_weight(name);
        let display_name = found.as_ref().map_or_else(
            || text::title_case(name.trim()),
            |m| m.entry.name.to_string(),
        );
        let last_performed = history
            .iter()
            .filter(|log| {
                log.exercises
                    .iter()
                    .any(|e| e.name.is_same(name) || e.name.is_same(&display_name))
            })
            .map(|log| log.date)
            .max();

        ExerciseInfo {
            in_catalog: found.is_some(),
            muscles: found
                .as_ref()
                .map(|m| m.entry.muscles.to_vec())
                .unwrap_or_default(),
            equipment: self.required_equipment(name),
            category: found
                .as_ref()
                .map_or_else(|| beginner_weight.weight_class.category(), |m| m.entry.category),
            name: display_name,
            beginner_weight,
            first_time: last_performed.is_none(),
            last_performed,
        }
    }
}

/// The catalog of exercises compiled into the library.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

impl ExerciseCatalog for BuiltinCatalog {
    fn lookup(&self, text: &str) -> Option<CatalogMatch<'_>> {
        lookup(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogMatch<'a> {
    pub entry: &'a CatalogEntry,
    pub kind: MatchKind,
    pub score: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Canonical,
    Alias,
    Contained,
    Similar,
}

impl MatchKind {
    #[must_use]
    pub fn is_exact(self) -> bool {
        matches!(self, MatchKind::Canonical | MatchKind::Alias)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BeginnerWeight {
    pub weight: Option<Weight>,
    pub weight_class: WeightClass,
    pub canonical_name: Option<String>,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseInfo {
    pub name: String,
    pub in_catalog: bool,
    pub muscles: Vec<MuscleGroup>,
    pub equipment: BTreeSet<Equipment>,
    pub category: Category,
    pub beginner_weight: BeginnerWeight,
    pub first_time: bool,
    pub last_performed: Option<NaiveDate>,
}

#[derive(Debug, PartialEq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub variations: &'static [&'static str],
    pub muscles: &'static [MuscleGroup],
    pub equipment: &'static [Equipment],
    pub category: Category,
    pub weight_class: WeightClass,
    beginner_weight: Option<f32>,
}

impl CatalogEntry {
    #[must_use]
    pub fn beginner_weight(&self) -> Option<Weight> {
        self.beginner_weight.map(Weight::rounded)
    }

    fn names(&self) -> impl Iterator<Item = (&'static str, MatchKind)> {
        std::iter::once((self.name, MatchKind::Canonical))
            .chain(self.variations.iter().map(|v| (*v, MatchKind::Alias)))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Compound,
    Isolation,
    Bodyweight,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 3] = [Category::Compound, Category::Isolation, Category::Bodyweight];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Compound => "Compound",
            Category::Isolation => "Isolation",
            Category::Bodyweight => "Bodyweight",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WeightClass {
    CompoundUpper,
    CompoundLower,
    IsolationUpper,
    IsolationLower,
    CableMachine,
    Bodyweight,
}

const BODYWEIGHT_KEYWORDS: [&str; 12] = [
    "push up", "pushup", "pull up", "pullup", "chin up", "chinup", "dip", "plank", "burpee",
    "sit up", "situp", "bodyweight",
];
const ISOLATION_LOWER_KEYWORDS: [&str; 5] = [
    "leg extension",
    "leg curl",
    "calf raise",
    "hamstring curl",
    "hip abduction",
];
const CABLE_MACHINE_KEYWORDS: [&str; 2] = ["cable", "machine"];
const COMPOUND_LOWER_KEYWORDS: [&str; 7] = [
    "squat",
    "deadlift",
    "lunge",
    "leg press",
    "hip thrust",
    "step up",
    "rdl",
];
const COMPOUND_UPPER_KEYWORDS: [&str; 2] = ["press", "row"];

impl WeightClass {
    /// Classifies an exercise that is not in the catalog by the keywords in its name.
    #[must_use]
    pub fn infer(name: &str) -> WeightClass {
        let words = text::words(name);
        if text::contains_any(&words, &BODYWEIGHT_KEYWORDS) {
            WeightClass::Bodyweight
        } else if text::contains_any(&words, &ISOLATION_LOWER_KEYWORDS) {
            WeightClass::IsolationLower
        } else if text::contains_any(&words, &CABLE_MACHINE_KEYWORDS) {
            WeightClass::CableMachine
        } else if text::contains_any(&words, &COMPOUND_LOWER_KEYWORDS) {
            WeightClass::CompoundLower
        } else if text::contains_any(&words, &COMPOUND_UPPER_KEYWORDS) {
            WeightClass::CompoundUpper
        } else {
            WeightClass::IsolationUpper
        }
    }

    #[must_use]
    pub fn default_weight(self) -> Option<Weight> {
        let lbs = match self {
            WeightClass::CompoundUpper => 45.0,
            WeightClass::CompoundLower => 65.0,
            WeightClass::IsolationUpper => 15.0,
            WeightClass::IsolationLower => 40.0,
            WeightClass::CableMachine => 30.0,
            WeightClass::Bodyweight => return None,
        };
        Some(Weight::rounded(lbs))
    }

    #[must_use]
    pub fn category(self) -> Category {
        match self {
            WeightClass::CompoundUpper | WeightClass::CompoundLower => Category::Compound,
            WeightClass::IsolationUpper | WeightClass::IsolationLower | WeightClass::CableMachine => {
                Category::Isolation
            }
            WeightClass::Bodyweight => Category::Bodyweight,
        }
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            WeightClass::CompoundUpper => "upper body compound",
            WeightClass::CompoundLower => "lower body compound",
            WeightClass::IsolationUpper => "upper body isolation",
            WeightClass::IsolationLower => "lower body isolation",
            WeightClass::CableMachine => "cable and machine",
            WeightClass::Bodyweight => "bodyweight",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Core,
}

impl MuscleGroup {
    /// Workout types that train this muscle group.
    #[must_use]
    pub fn workout_types(self) -> &'static [WorkoutType] {
        match self {
            MuscleGroup::Chest | MuscleGroup::Shoulders => &[WorkoutType::Push],
            MuscleGroup::Back => &[WorkoutType::Pull],
            MuscleGroup::Legs => &[WorkoutType::Legs],
            MuscleGroup::Arms => &[WorkoutType::Push, WorkoutType::Pull],
            MuscleGroup::Core => &[],
        }
    }
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 6] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Arms,
            MuscleGroup::Legs,
            MuscleGroup::Core,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Core => "Core",
        }
    }
}

impl FromStr for MuscleGroup {
    type Err = MuscleGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MuscleGroup::iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| MuscleGroupError::Unknown(s.trim().to_string()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MuscleGroupError {
    #[error("Unknown muscle group: {0}")]
    Unknown(String),
}

/// Looks up a name in the built-in catalog.
///
/// Candidates are tried in order: exact canonical name, exact alias, canonical name or alias
/// contained as whole words (longest wins), edit distance similarity (best wins).
#[must_use]
pub fn lookup(text: &str) -> Option<CatalogMatch<'static>> {
    let normalized = text::normalize(text);
    if normalized.is_empty() {
        return None;
    }

    if let Some((_, entry, kind)) = INDEX.iter().find(|(name, _, _)| *name == normalized) {
        return Some(CatalogMatch {
            entry: *entry,
            kind: *kind,
            score: 1.0,
        });
    }

    let words = text::words(text);
    let contained = INDEX
        .iter()
        .filter(|(name, _, _)| text::contains_phrase(&words, name))
        .max_by(|a, b| {
            let len_a = (a.0.split(' ').count(), a.0.len());
            let len_b = (b.0.split(' ').count(), b.0.len());
            len_a.cmp(&len_b).then(std::cmp::Ordering::Greater)
        });
    if let Some((_, entry, _)) = contained {
        return Some(CatalogMatch {
            entry: *entry,
            kind: MatchKind::Contained,
            score: 1.0,
        });
    }

    INDEX
        .iter()
        .map(|(name, entry, _)| (text::similarity(&normalized, name), *entry))
        .filter(|(score, _)| *score >= MIN_SIMILARITY)
        .max_by(|a, b| a.0.total_cmp(&b.0).then(std::cmp::Ordering::Greater))
        .map(|(score, entry)| CatalogMatch {
            entry,
            kind: MatchKind::Similar,
            score,
        })
}

#[must_use]
pub fn entries() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Normalized canonical names and aliases in catalog order.
static INDEX: LazyLock<Vec<(String, &'static CatalogEntry, MatchKind)>> = LazyLock::new(|| {
    let mut index = CATALOG
        .iter()
        .flat_map(|entry| {
            entry
                .names()
                .map(move |(name, kind)| (text::normalize(name), entry, kind))
        })
        .collect::<Vec<_>>();
    // Canonical names take precedence over aliases of other entries.
    index.sort_by_key(|(_, _, kind)| *kind != MatchKind::Canonical);
    index
});

static CATALOG: [CatalogEntry; 38] = [
    CatalogEntry {
        name: "Barbell Bench Press",
        variations: &["Bench Press", "BB Bench", "BB Bench Press", "Flat Bench Press"],
        muscles: &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Arms],
        equipment: &[Equipment::Barbell, Equipment::Bench],
        category: Category::Compound,
        weight_class: WeightClass::CompoundUpper,
        beginner_weight: Some(45.0),
    },
    CatalogEntry {
        name: "Dumbbell Bench Press",
        variations: &["DB Bench", "DB Bench Press", "Dumbbell Press", "Flat Dumbbell Press"],
        muscles: &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Arms],
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        category: Category::Compound,
        weight_class: WeightClass::CompoundUpper,
        beginner_weight: Some(20.0),
    },
    CatalogEntry {
        name: "Incline Dumbbell Press",
        variations: &["Incline DB Press", "Incline Dumbbell Bench Press", "Incline Press"],
        muscles: &[MuscleGroup::Chest, MuscleGroup::Shoulders],
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        category: Category::Compound,
        weight_class: WeightClass::CompoundUpper,
        beginner_weight: Some(20.0),
    },
    CatalogEntry {
        name: "Overhead Press",
        variations: &["OHP", "Military Press", "Barbell Overhead Press", "Standing Press"],
        muscles: &[MuscleGroup::Shoulders, MuscleGroup::Arms],
        equipment: &[Equipment::Barbell],
        category: Category::Compound,
        weight_class: WeightClass::CompoundUpper,
        beginner_weight: Some(45.0),
    },
    CatalogEntry {
        name: "Dumbbell Shoulder Press",
        variations: &["DB Shoulder Press", "Seated Dumbbell Press", "Shoulder Press"],
        muscles: &[MuscleGroup::Shoulders, MuscleGroup::Arms],
        equipment: &[Equipment::Dumbbell],
        category: Category::Compound,
        weight_class: WeightClass::CompoundUpper,
        beginner_weight: Some(15.0),
    },
    CatalogEntry {
        name: "Lateral Raise",
        variations: &["Side Raise", "Lateral Raises", "Dumbbell Lateral Raise", "DB Lateral Raise"],
        muscles: &[MuscleGroup::Shoulders],
        equipment: &[Equipment::Dumbbell],
        category: Category::Isolation,
        weight_class: WeightClass::IsolationUpper,
        beginner_weight: Some(10.0),
    },
    CatalogEntry {
        name: "Cable Fly",
        variations: &["Cable Flyes", "Cable Crossover", "Cable Chest Fly"],
        muscles: &[MuscleGroup::Chest],
        equipment: &[Equipment::Cable],
        category: Category::Isolation,
        weight_class: WeightClass::CableMachine,
        beginner_weight: Some(20.0),
    },
    CatalogEntry {
        name: "Tricep Pushdown",
        variations: &["Triceps Pushdown", "Cable Pushdown", "Rope Pushdown"],
        muscles: &[MuscleGroup::Arms],
        equipment: &[Equipment::Cable],
        category: Category::Isolation,
        weight_class: WeightClass::CableMachine,
        beginner_weight: Some(30.0),
    },
    CatalogEntry {
        name: "Overhead Tricep Extension",
        variations: &["Tricep Extension", "Triceps Extension", "Overhead Triceps Extension"],
        muscles: &[MuscleGroup::Arms],
        equipment: &[Equipment::Dumbbell],
        category: Category::Isolation,
        weight_class: WeightClass::IsolationUpper,
        beginner_weight: Some(15.0),
    },
    CatalogEntry {
        name: "Dips",
        variations: &["Dip", "Chest Dips", "Parallel Bar Dips"],
        muscles: &[MuscleGroup::Chest, MuscleGroup::Arms],
        equipment: &[],
        category: Category::Bodyweight,
        weight_class: WeightClass::Bodyweight,
        beginner_weight: None,
    },
    CatalogEntry {
        name: "Push Ups",
        variations: &["Push Up", "Pushups", "Pushup"],
        muscles: &[MuscleGroup::Chest, MuscleGroup::Arms],
        equipment: &[],
        category: Category::Bodyweight,
        weight_class: WeightClass::Bodyweight,
        beginner_weight: None,
    },
    CatalogEntry {
        name: "Pull Ups",
        variations: &["Pull Up", "Pullups", "Pullup"],
        muscles: &[MuscleGroup::Back, MuscleGroup::Arms],
        equipment: &[Equipment::PullUpBar],
        category: Category::Bodyweight,
        weight_class: WeightClass::Bodyweight,
        beginner_weight: None,
    },
    CatalogEntry {
        name: "Chin Ups",
        variations: &["Chin Up", "Chinups", "Chinup"],
        muscles: &[MuscleGroup::Back, MuscleGroup::Arms],
        equipment: &[Equipment::PullUpBar],
        category: Category::Bodyweight,
        weight_class: WeightClass::Bodyweight,
        beginner_weight: None,
    },
    CatalogEntry {
        name: "Lat Pulldown",
        variations: &["Lat Pull Down", "Lat Pulldowns", "Cable Pulldown", "Wide Grip Pulldown"],
        muscles: &[MuscleGroup::Back, MuscleGroup::Arms],
        equipment: &[Equipment::Cable],
        category: Category::Compound,
        weight_class: WeightClass::CableMachine,
        beginner_weight: Some(50.0),
    },
    CatalogEntry {
        name: "Barbell Row",
        variations: &["Bent Over Row", "BB Row", "Pendlay Row", "Barbell Bent Over Row"],
        muscles: &[MuscleGroup::Back, MuscleGroup::Arms],
        equipment: &[Equipment::Barbell],
        category: Category::Compound,
        weight_class: WeightClass::CompoundUpper,
        beginner_weight: Some(65.0),
    },
    CatalogEntry {
        name: "Dumbbell Row",
        variations: &["DB Row", "One Arm Dumbbell Row", "Single Arm Dumbbell Row"],
        muscles: &[MuscleGroup::Back, MuscleGroup::Arms],
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        category: Category::Compound,
        weight_class: WeightClass::CompoundUpper,
        beginner_weight: Some(25.0),
    },
    CatalogEntry {
        name: "Seated Cable Row",
        variations: &["Cable Row", "Seated Row", "Low Row"],
        muscles: &[MuscleGroup::Back, MuscleGroup::Arms],
        equipment: &[Equipment::Cable],
        category: Category::Compound,
        weight_class: WeightClass::CableMachine,
        beginner_weight: Some(50.0),
    },
    CatalogEntry {
        name: "Face Pull",
        variations: &["Face Pulls", "Cable Face Pull", "Rope Face Pull"],
        muscles: &[MuscleGroup::Shoulders, MuscleGroup::Back],
        equipment: &[Equipment::Cable],
        category: Category::Isolation,
        weight_class: WeightClass::CableMachine,
        beginner_weight: Some(20.0),
    },
    CatalogEntry {
        name: "Barbell Curl",
        variations: &["BB Curl", "Straight Bar Curl", "Barbell Bicep Curl"],
        muscles: &[MuscleGroup::Arms],
        equipment: &[Equipment::Barbell],
        category: Category::Isolation,
        weight_class: WeightClass::IsolationUpper,
        beginner_weight: Some(30.0),
    },
    CatalogEntry {
        name: "Dumbbell Curl",
        variations: &["DB Curl", "Bicep Curl", "Biceps Curl", "Dumbbell Bicep Curl"],
        muscles: &[MuscleGroup::Arms],
        equipment: &[Equipment::Dumbbell],
        category: Category::Isolation,
        weight_class: WeightClass::IsolationUpper,
        beginner_weight: Some(15.0),
    },
    CatalogEntry {
        name: "Hammer Curl",
        variations: &["Hammer Curls", "DB Hammer Curl", "Dumbbell Hammer Curl"],
        muscles: &[MuscleGroup::Arms],
        equipment: &[Equipment::Dumbbell],
        category: Category::Isolation,
        weight_class: WeightClass::IsolationUpper,
        beginner_weight: Some(15.0),
    },
    CatalogEntry {
        name: "Deadlift",
        variations: &["Conventional Deadlift", "Barbell Deadlift", "BB Deadlift"],
        muscles: &[MuscleGroup::Back, MuscleGroup::Legs],
        equipment: &[Equipment::Barbell],
        category: Category::Compound,
        weight_class: WeightClass::CompoundLower,
        beginner_weight: Some(95.0),
    },
    CatalogEntry {
        name: "Squat",
        variations: &["Back Squat", "Barbell Squat", "BB Squat", "Barbell Back Squat"],
        muscles: &[MuscleGroup::Legs, MuscleGroup::Core],
        equipment: &[Equipment::Barbell, Equipment::SquatRack],
        category: Category::Compound,
        weight_class: WeightClass::CompoundLower,
        beginner_weight: Some(65.0),
    },
    CatalogEntry {
        name: "Front Squat",
        variations: &["Barbell Front Squat", "BB Front Squat"],
        muscles: &[MuscleGroup::Legs, MuscleGroup::Core],
        equipment: &[Equipment::Barbell, Equipment::SquatRack],
        category: Category::Compound,
        weight_class: WeightClass::CompoundLower,
        beginner_weight: Some(45.0),
    },
    CatalogEntry {
        name: "Romanian Deadlift",
        variations: &["RDL", "Stiff Leg Deadlift", "Barbell RDL"],
        muscles: &[MuscleGroup::Legs, MuscleGroup::Back],
        equipment: &[Equipment::Barbell],
        category: Category::Compound,
        weight_class: WeightClass::CompoundLower,
        beginner_weight: Some(65.0),
    },
    CatalogEntry {
        name: "Leg Press",
        variations: &["Leg Press Machine", "Sled Leg Press"],
        muscles: &[MuscleGroup::Legs],
        equipment: &[Equipment::LegPress],
        category: Category::Compound,
        weight_class: WeightClass::CompoundLower,
        beginner_weight: Some(90.0),
    },
    CatalogEntry {
        name: "Goblet Squat",
        variations: &["Dumbbell Squat", "DB Squat", "Kettlebell Goblet Squat"],
        muscles: &[MuscleGroup::Legs],
        equipment: &[Equipment::Dumbbell],
        category: Category::Compound,
        weight_class: WeightClass::CompoundLower,
        beginner_weight: Some(25.0),
    },
    CatalogEntry {
        name: "Walking Lunges",
        variations: &["Lunges", "Lunge", "Dumbbell Lunges", "DB Lunges"],
        muscles: &[MuscleGroup::Legs],
        equipment: &[Equipment::Dumbbell],
        category: Category::Compound,
        weight_class: WeightClass::CompoundLower,
        beginner_weight: Some(15.0),
    },
    CatalogEntry {
        name: "Bulgarian Split Squat",
        variations: &["Split Squat", "Rear Foot Elevated Split Squat", "BSS"],
        muscles: &[MuscleGroup::Legs],
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        category: Category::Compound,
        weight_class: WeightClass::CompoundLower,
        beginner_weight: Some(15.0),
    },
    CatalogEntry {
        name: "Hip Thrust",
        variations: &["Barbell Hip Thrust", "Hip Thrusts", "Glute Bridge"],
        muscles: &[MuscleGroup::Legs],
        equipment: &[Equipment::Barbell, Equipment::Bench],
        category: Category::Compound,
        weight_class: WeightClass::CompoundLower,
        beginner_weight: Some(65.0),
    },
    CatalogEntry {
        name: "Leg Extension",
        variations: &["Leg Extensions", "Quad Extension", "Leg Extension Machine"],
        muscles: &[MuscleGroup::Legs],
        equipment: &[Equipment::Machine],
        category: Category::Isolation,
        weight_class: WeightClass::IsolationLower,
        beginner_weight: Some(40.0),
    },
    CatalogEntry {
        name: "Leg Curl",
        variations: &["Hamstring Curl", "Lying Leg Curl", "Seated Leg Curl", "Leg Curls"],
        muscles: &[MuscleGroup::Legs],
        equipment: &[Equipment::Machine],
        category: Category::Isolation,
        weight_class: WeightClass::IsolationLower,
        beginner_weight: Some(40.0),
    },
    CatalogEntry {
        name: "Calf Raise",
        variations: &["Calf Raises", "Standing Calf Raise", "Seated Calf Raise"],
        muscles: &[MuscleGroup::Legs],
        equipment: &[Equipment::Machine],
        category: Category::Isolation,
        weight_class: WeightClass::IsolationLower,
        beginner_weight: Some(50.0),
    },
    CatalogEntry {
        name: "Plank",
        variations: &["Front Plank", "Planks", "Forearm Plank"],
        muscles: &[MuscleGroup::Core],
        equipment: &[],
        category: Category::Bodyweight,
        weight_class: WeightClass::Bodyweight,
        beginner_weight: None,
    },
    CatalogEntry {
        name: "Hanging Leg Raise",
        variations: &["Hanging Leg Raises", "Hanging Knee Raise"],
        muscles: &[MuscleGroup::Core],
        equipment: &[Equipment::PullUpBar],
        category: Category::Bodyweight,
        weight_class: WeightClass::Bodyweight,
        beginner_weight: None,
    },
    CatalogEntry {
        name: "Cable Crunch",
        variations: &["Kneeling Cable Crunch", "Cable Crunches"],
        muscles: &[MuscleGroup::Core],
        equipment: &[Equipment::Cable],
        category: Category::Isolation,
        weight_class: WeightClass::CableMachine,
        beginner_weight: Some(40.0),
    },
    CatalogEntry {
        name: "Kettlebell Swing",
        variations: &["KB Swing", "Kettlebell Swings", "Russian Kettlebell Swing"],
        muscles: &[MuscleGroup::Legs, MuscleGroup::Back],
        equipment: &[Equipment::Kettlebell],
        category: Category::Compound,
        weight_class: WeightClass::CompoundLower,
        beginner_weight: Some(25.0),
    },
    CatalogEntry {
        name: "Band Pull Apart",
        variations: &["Band Pull Aparts", "Resistance Band Pull Apart"],
        muscles: &[MuscleGroup::Shoulders, MuscleGroup::Back],
        equipment: &[Equipment::ResistanceBand],
        category: Category::Isolation,
        weight_class: WeightClass::Bodyweight,
        beginner_weight: None,
    },
];
