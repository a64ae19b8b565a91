use serde::{Deserialize, Serialize};

/// Label rendered when the classifier returns a code outside the species table
pub const UNKNOWN_SPECIES_LABEL: &str = "Không xác định";

/// Prefix of every prediction result line
pub const RESULT_PREFIX: &str = "Loài chim cánh cụt được dự đoán là: ";

/// Island a penguin was observed on
///
/// Biscoe is the baseline category of the one-hot layout, so it shares the
/// all-zero encoding with any unrecognised value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Island {
    Biscoe,
    Dream,
    Torgersen,
    Other,
}

impl Island {
    /// Exact, case-sensitive match against the training categories
    pub fn parse(value: &str) -> Self {
        match value {
            "Biscoe" => Island::Biscoe,
            "Dream" => Island::Dream,
            "Torgersen" => Island::Torgersen,
            _ => Island::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
    Other,
}

impl Sex {
    pub fn parse(value: &str) -> Self {
        match value {
            "female" => Sex::Female,
            "male" => Sex::Male,
            _ => Sex::Other,
        }
    }
}

/// Species the classifier distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    Adelie,
    Chinstrap,
    Gentoo,
}

impl Species {
    /// Map an encoded class back to a species
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Species::Adelie),
            1 => Some(Species::Chinstrap),
            2 => Some(Species::Gentoo),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Species::Adelie => "Adelie",
            Species::Chinstrap => "Chinstrap",
            Species::Gentoo => "Gentoo",
        }
    }
}

/// Species label for an encoded class, falling back to the unknown label
pub fn species_label(code: i64) -> &'static str {
    Species::from_code(code)
        .map(|species| species.name())
        .unwrap_or(UNKNOWN_SPECIES_LABEL)
}

/// One penguin as submitted through the form, after type coercion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenguinMeasurements {
    pub bill_length_mm: f64,
    pub bill_depth_mm: f64,
    pub flipper_length_mm: f64,
    pub body_mass_g: f64,
    pub island: Island,
    pub sex: Sex,
    /// Kept as submitted; only "2008" and "2009" carry a one-hot column
    pub year: String,
}

/// Entry of the prediction history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub species: String,
    pub text: String,
    pub predicted_at: chrono::DateTime<chrono::Utc>,
}

impl PredictionRecord {
    pub fn new(species: impl Into<String>) -> Self {
        let species = species.into();
        Self {
            text: format!("{}{}", RESULT_PREFIX, species),
            species,
            predicted_at: chrono::Utc::now(),
        }
    }
}
