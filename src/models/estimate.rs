use super::appointment::parse_number;
use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Tattoo size categories known to the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TattooSize {
    Small,
    Medium,
    Large,
    XLarge,
}

impl TattooSize {
    pub const ALL: [TattooSize; 4] = [Self::Small, Self::Medium, Self::Large, Self::XLarge];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "xlarge" => Some(Self::XLarge),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            TattooSize::Small => "small",
            TattooSize::Medium => "medium",
            TattooSize::Large => "large",
            TattooSize::XLarge => "xlarge",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            TattooSize::Small => 0.8,
            TattooSize::Medium => 1.0,
            TattooSize::Large => 1.3,
            TattooSize::XLarge => 1.6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TattooSize::Small => "Small (2-4 inches)",
            TattooSize::Medium => "Medium (4-6 inches)",
            TattooSize::Large => "Large (6-8 inches)",
            TattooSize::XLarge => "X-Large (8+ inches)",
        }
    }

    /// Typical price band shown in the pricing guide.
    pub fn price_band(&self) -> &'static str {
        match self {
            TattooSize::Small => "$80-200",
            TattooSize::Medium => "$200-500",
            TattooSize::Large => "$500-1000",
            TattooSize::XLarge => "$1000+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
    Detailed,
}

impl Complexity {
    pub const ALL: [Complexity; 4] = [
        Self::Simple,
        Self::Moderate,
        Self::Complex,
        Self::Detailed,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "simple" => Some(Self::Simple),
            "moderate" => Some(Self::Moderate),
            "complex" => Some(Self::Complex),
            "detailed" => Some(Self::Detailed),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Moderate => "moderate",
            Complexity::Complex => "complex",
            Complexity::Detailed => "detailed",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Complexity::Simple => 0.9,
            Complexity::Moderate => 1.0,
            Complexity::Complex => 1.3,
            Complexity::Detailed => 1.5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Simple => "Simple (minimal detail)",
            Complexity::Moderate => "Moderate (some detail)",
            Complexity::Complex => "Complex (high detail)",
            Complexity::Detailed => "Very Detailed (intricate)",
        }
    }
}

/// Inputs of the price calculator form. Size and complexity stay as raw
/// keys: unknown keys are priced with a neutral multiplier. Hours and rate
/// accept any finite number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateDraft {
    pub size: String,
    pub complexity: String,
    pub hours: f64,
    pub hourly_rate: f64,
}

impl EstimateDraft {
    pub const FORM: &'static str = "estimate";
    pub const FIELDS: [&'static str; 4] = ["size", "complexity", "hours", "rate"];

    pub fn with_rate(hourly_rate: f64) -> Self {
        Self {
            size: String::new(),
            complexity: String::new(),
            hours: 0.0,
            hourly_rate,
        }
    }

    pub fn set_field(&mut self, field: &str, value: &str) -> AppResult<()> {
        match field {
            "size" => self.size = value.to_string(),
            "complexity" => self.complexity = value.to_string(),
            "hours" => self.hours = parse_number(Self::FORM, field, value)?,
            "rate" | "hourly_rate" => self.hourly_rate = parse_number(Self::FORM, field, value)?,
            _ => return Err(AppError::invalid_field(Self::FORM, field, value)),
        }
        Ok(())
    }
}
