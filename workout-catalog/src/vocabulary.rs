//! Fixed mappings from free-exercise-db vocabulary to the controlled vocabulary.
//!
//! Keys are the exact lowercase strings used upstream. Lookups are
//! case-sensitive; a term that is not listed maps to `None` and the
//! attribute is simply left off the exercise.

use crate::types::AttributeValue;

/// Which mapping table a source term is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    Category,
    Muscle,
    Equipment,
    Mechanic,
}

impl Vocabulary {
    /// Look up `term` in this table.
    pub fn map(&self, term: &str) -> Option<AttributeValue> {
        match self {
            Self::Category => map_category(term),
            Self::Muscle => map_muscle(term),
            Self::Equipment => map_equipment(term),
            Self::Mechanic => map_mechanic(term),
        }
    }
}

/// Exercise category → `TYPE` value.
pub fn map_category(term: &str) -> Option<AttributeValue> {
    use AttributeValue::*;
    let value = match term {
        "cardio" => Cardio,
        "olympic weightlifting" => Weightlifting,
        "plyometrics" => Plyometrics,
        "powerlifting" => Powerlifting,
        "strength" => Strength,
        "stretching" => Stretching,
        "strongman" => Strongman,
        _ => return None,
    };
    Some(value)
}

/// Muscle → `PRIMARY_MUSCLE` / `SECONDARY_MUSCLE` value.
///
/// Lower and middle back both collapse to `BACK`.
pub fn map_muscle(term: &str) -> Option<AttributeValue> {
    use AttributeValue::*;
    let value = match term {
        "abdominals" => Abdominals,
        "abductors" => Abductors,
        "adductors" => Adductors,
        "biceps" => Biceps,
        "calves" => Calves,
        "chest" => Chest,
        "forearms" => Forearms,
        "glutes" => Glutes,
        "hamstrings" => Hamstrings,
        "lats" => Lats,
        "lower back" | "middle back" => Back,
        "neck" => Neck,
        "quadriceps" => Quadriceps,
        "shoulders" => Shoulders,
        "traps" => Traps,
        "triceps" => Triceps,
        _ => return None,
    };
    Some(value)
}

/// Equipment → `EQUIPMENT` value.
pub fn map_equipment(term: &str) -> Option<AttributeValue> {
    use AttributeValue::*;
    let value = match term {
        "bands" => Bands,
        "barbell" => Barbell,
        "body only" => BodyOnly,
        "cable" => Cable,
        "dumbbell" => Dumbbell,
        "e-z curl bar" => EzBar,
        "exercise ball" => SwissBall,
        "foam roll" => FoamRoll,
        "kettlebells" => Kettlebells,
        "machine" => Machine,
        "medicine ball" => MedicineBall,
        "other" => Other,
        _ => return None,
    };
    Some(value)
}

/// Mechanic → `MECHANICS_TYPE` value.
pub fn map_mechanic(term: &str) -> Option<AttributeValue> {
    match term {
        "compound" => Some(AttributeValue::Compound),
        "isolation" => Some(AttributeValue::Isolation),
        _ => None,
    }
}
