use derive_more::{Display, Into};

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// A load in pounds.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);

    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..2000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Clamps into the valid range and rounds to one decimal place.
    #[must_use]
    pub fn rounded(value: f32) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self((value.clamp(0.0, 1999.9) * 10.0).round() / 10.0)
    }

    #[must_use]
    pub fn lbs(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.replace(',', ".").trim().parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 1999.9 lb")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Set {
    pub reps: Reps,
    pub weight: Option<Weight>,
}

impl Set {
    pub fn new(reps: u32, weight: Option<f32>) -> Result<Self, SetError> {
        Ok(Self {
            reps: Reps::new(reps)?,
            weight: weight.map(Weight::new).transpose()?,
        })
    }

    /// Returns the load if the set was performed with a positive weight.
    #[must_use]
    pub fn load(&self) -> Option<Weight> {
        self.weight.filter(|w| w.is_positive())
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn volume_load(&self) -> f32 {
        self.weight
            .map_or(0.0, |w| u32::from(self.reps) as f32 * w.lbs())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SetError {
    #[error(transparent)]
    Reps(#[from] RepsError),
    #[error(transparent)]
    Weight(#[from] WeightError),
}
