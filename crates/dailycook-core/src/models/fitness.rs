// ABOUTME: Fitness goals with their accepted recipe tags, and drink categories
// ABOUTME: Provides goal tips and category descriptions shown beside engine results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

use crate::errors::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fitness goal used to filter recipes by their tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Calorie deficit with protein preserved
    FatLoss,
    /// Calorie surplus with high protein
    MuscleGain,
    /// Balanced intake
    Maintenance,
}

impl FitnessGoal {
    /// All goals in display order
    pub const ALL: [Self; 3] = [Self::FatLoss, Self::MuscleGain, Self::Maintenance];

    /// Recipe tags accepted for this goal
    #[must_use]
    pub const fn tags(&self) -> &'static [&'static str] {
        match self {
            Self::FatLoss => &["fat_loss", "low_fat", "low_calorie", "high_protein"],
            Self::MuscleGain => &["muscle_gain", "high_protein"],
            Self::Maintenance => &["maintenance", "balanced"],
        }
    }

    /// Daily tip shown with goal listings
    #[must_use]
    pub const fn tip(&self) -> &'static str {
        match self {
            Self::FatLoss => {
                "Focus on high protein, low calorie foods. Avoid hidden sugars and processed foods."
            }
            Self::MuscleGain => {
                "Consume protein within 30 mins post-workout. Aim for 1.6-2.2g protein per kg bodyweight."
            }
            Self::Maintenance => "Balance your macros and listen to your body's hunger cues.",
        }
    }

    /// Wire name of this goal
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FatLoss => "fat_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessGoal {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fat_loss" => Ok(Self::FatLoss),
            "muscle_gain" => Ok(Self::MuscleGain),
            "maintenance" => Ok(Self::Maintenance),
            other => Err(EngineError::invalid_input(format!(
                "unknown fitness goal '{other}'"
            ))),
        }
    }
}

/// Known drink categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrinkCategory {
    /// Smoothies and wellness drinks
    Healthy,
    /// Pre/post workout boosters
    Energy,
    /// Protein shakes
    Protein,
    /// Cleansing drinks
    Detox,
    /// Cooling drinks
    Refreshing,
    /// Classic Indian beverages
    Traditional,
}

impl DrinkCategory {
    /// All categories in display order
    pub const ALL: [Self; 6] = [
        Self::Healthy,
        Self::Energy,
        Self::Protein,
        Self::Detox,
        Self::Refreshing,
        Self::Traditional,
    ];

    /// Wire name of this category
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Energy => "energy",
            Self::Protein => "protein",
            Self::Detox => "detox",
            Self::Refreshing => "refreshing",
            Self::Traditional => "traditional",
        }
    }

    /// Short description shown above a category listing
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Healthy => "Nutrient-rich smoothies and wellness drinks",
            Self::Energy => "Natural energy boosters for pre/post workout",
            Self::Protein => "High-protein shakes for muscle recovery",
            Self::Detox => "Cleansing drinks for digestion and hydration",
            Self::Refreshing => "Cool, hydrating drinks for hot days",
            Self::Traditional => "Classic Indian beverages - lassi, chaas, nimbu pani",
        }
    }

    /// Parse a category filter, treating unknown values as "no filter"
    #[must_use]
    pub fn parse_lenient(value: Option<&str>) -> Option<Self> {
        value.and_then(|v| v.parse().ok())
    }
}

impl fmt::Display for DrinkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrinkCategory {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| EngineError::invalid_input(format!("unknown drink category '{s}'")))
    }
}
