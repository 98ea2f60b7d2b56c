//! Data model types for the exercise catalog.
//!
//! These types cover both sides of the import: the upstream
//! free-exercise-db records as they appear in JSON, and the persisted
//! catalog schema (exercises, attribute names, attribute values, links,
//! import tracking).

use serde::{Deserialize, Deserializer, Serialize};

// ── Source Records ──────────────────────────────────────────────────────────

/// One exercise as published by free-exercise-db.
///
/// Only `name` is required. Every other field falls back to its empty value
/// when absent or `null` so a sparse record still imports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub force: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub mechanic: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub primary_muscles: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub secondary_muscles: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Paths relative to the image base URL, e.g. `Air_Bike/0.jpg`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
}

/// Treat an explicit JSON `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ── Exercise ────────────────────────────────────────────────────────────────

/// A persisted catalog exercise.
///
/// Display name, description and slug are stored once per locale. The
/// importer has no translation step, so both locales carry the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub name_en: String,
    pub description: String,
    pub description_en: String,
    pub slug: String,
    pub slug_en: String,
    pub full_video_image_url: Option<String>,
    pub created_at: String,
}

// ── Attributes ──────────────────────────────────────────────────────────────

/// Axis of classification an attribute value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeName {
    Type,
    PrimaryMuscle,
    SecondaryMuscle,
    Equipment,
    MechanicsType,
}

impl AttributeName {
    pub const ALL: [AttributeName; 5] = [
        Self::Type,
        Self::PrimaryMuscle,
        Self::SecondaryMuscle,
        Self::Equipment,
        Self::MechanicsType,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Type => "TYPE",
            Self::PrimaryMuscle => "PRIMARY_MUSCLE",
            Self::SecondaryMuscle => "SECONDARY_MUSCLE",
            Self::Equipment => "EQUIPMENT",
            Self::MechanicsType => "MECHANICS_TYPE",
        }
    }

    /// Parse the stored form back into an enumerant. Unknown names yield `None`.
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.as_str() == s)
    }
}

/// Controlled-vocabulary value. Attribute values are always one of these;
/// free-form source text never reaches the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeValue {
    // Muscles
    Abdominals,
    Abductors,
    Adductors,
    Back,
    Biceps,
    Calves,
    Chest,
    Forearms,
    Glutes,
    Hamstrings,
    Lats,
    Neck,
    Quadriceps,
    Shoulders,
    Traps,
    Triceps,

    // Equipment
    Bands,
    Barbell,
    BodyOnly,
    Cable,
    Dumbbell,
    EzBar,
    FoamRoll,
    Kettlebells,
    Machine,
    MedicineBall,
    Other,
    SwissBall,

    // Exercise types
    Cardio,
    Plyometrics,
    Powerlifting,
    Strength,
    Stretching,
    Strongman,
    Weightlifting,

    // Mechanics
    Compound,
    Isolation,
}

impl AttributeValue {
    pub const ALL: [AttributeValue; 37] = [
        Self::Abdominals,
        Self::Abductors,
        Self::Adductors,
        Self::Back,
        Self::Biceps,
        Self::Calves,
        Self::Chest,
        Self::Forearms,
        Self::Glutes,
        Self::Hamstrings,
        Self::Lats,
        Self::Neck,
        Self::Quadriceps,
        Self::Shoulders,
        Self::Traps,
        Self::Triceps,
        Self::Bands,
        Self::Barbell,
        Self::BodyOnly,
        Self::Cable,
        Self::Dumbbell,
        Self::EzBar,
        Self::FoamRoll,
        Self::Kettlebells,
        Self::Machine,
        Self::MedicineBall,
        Self::Other,
        Self::SwissBall,
        Self::Cardio,
        Self::Plyometrics,
        Self::Powerlifting,
        Self::Strength,
        Self::Stretching,
        Self::Strongman,
        Self::Weightlifting,
        Self::Compound,
        Self::Isolation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abdominals => "ABDOMINALS",
            Self::Abductors => "ABDUCTORS",
            Self::Adductors => "ADDUCTORS",
            Self::Back => "BACK",
            Self::Biceps => "BICEPS",
            Self::Calves => "CALVES",
            Self::Chest => "CHEST",
            Self::Forearms => "FOREARMS",
            Self::Glutes => "GLUTES",
            Self::Hamstrings => "HAMSTRINGS",
            Self::Lats => "LATS",
            Self::Neck => "NECK",
            Self::Quadriceps => "QUADRICEPS",
            Self::Shoulders => "SHOULDERS",
            Self::Traps => "TRAPS",
            Self::Triceps => "TRICEPS",
            Self::Bands => "BANDS",
            Self::Barbell => "BARBELL",
            Self::BodyOnly => "BODY_ONLY",
            Self::Cable => "CABLE",
            Self::Dumbbell => "DUMBBELL",
            Self::EzBar => "EZ_BAR",
            Self::FoamRoll => "FOAM_ROLL",
            Self::Kettlebells => "KETTLEBELLS",
            Self::Machine => "MACHINE",
            Self::MedicineBall => "MEDICINE_BALL",
            Self::Other => "OTHER",
            Self::SwissBall => "SWISS_BALL",
            Self::Cardio => "CARDIO",
            Self::Plyometrics => "PLYOMETRICS",
            Self::Powerlifting => "POWERLIFTING",
            Self::Strength => "STRENGTH",
            Self::Stretching => "STRETCHING",
            Self::Strongman => "STRONGMAN",
            Self::Weightlifting => "WEIGHTLIFTING",
            Self::Compound => "COMPOUND",
            Self::Isolation => "ISOLATION",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// A stored attribute name row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeNameRow {
    pub id: i64,
    pub name: AttributeName,
}

/// A stored attribute value row, scoped to one attribute name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeValueRow {
    pub id: i64,
    pub attribute_name_id: i64,
    pub value: AttributeValue,
}

/// Join row linking an exercise to one attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseAttribute {
    pub id: i64,
    pub exercise_id: i64,
    pub attribute_name_id: i64,
    pub attribute_value_id: i64,
}

// ── Import Tracking ─────────────────────────────────────────────────────────

/// Log entry for one import run.
#[derive(Debug, Clone)]
pub struct ImportLog {
    pub id: i64,
    pub source_type: String,
    pub source_name: String,
    pub imported_at: String,
    pub records_created: i64,
    pub records_skipped: i64,
    pub records_failed: i64,
}
