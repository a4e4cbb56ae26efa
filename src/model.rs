use serde::{Deserialize, Serialize};

/// One recipe mentioned in the recommendation context.
///
/// A missing nutrient is `None`, never zero. Consumers that aggregate
/// decide how to treat absence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
}

impl RecipeRecord {
    pub fn new(name: impl Into<String>) -> Self {
        RecipeRecord {
            name: name.into(),
            calories: None,
            protein: None,
        }
    }
}

/// What a reply is about. Every rule answers with exactly one topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    RecipeListing,
    Nutrition,
    Substitution,
    Allergy,
    Cooking,
    MealPrep,
    Budget,
    MealPlan,
    Help,
    Default,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::RecipeListing => "recipe_listing",
            Topic::Nutrition => "nutrition",
            Topic::Substitution => "substitution",
            Topic::Allergy => "allergy",
            Topic::Cooking => "cooking",
            Topic::MealPrep => "meal_prep",
            Topic::Budget => "budget",
            Topic::MealPlan => "meal_plan",
            Topic::Help => "help",
            Topic::Default => "default",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which set of rules a responder runs.
///
/// `Lite` is the reduced responder used where the full chat page is not
/// deployed: substitutions, allergies, cooking, nutrition and the default
/// reply, checked in that order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Standard,
    Lite,
}

impl Profile {
    /// Topics this profile answers besides the default reply, in the order
    /// their rules are checked.
    pub fn topics(&self) -> &'static [Topic] {
        match self {
            Profile::Standard => &[
                Topic::RecipeListing,
                Topic::Nutrition,
                Topic::Substitution,
                Topic::Allergy,
                Topic::Cooking,
                Topic::MealPrep,
                Topic::Budget,
                Topic::MealPlan,
                Topic::Help,
            ],
            Profile::Lite => &[
                Topic::Substitution,
                Topic::Allergy,
                Topic::Cooking,
                Topic::Nutrition,
            ],
        }
    }
}

impl std::str::FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Profile::Standard),
            "lite" => Ok(Profile::Lite),
            other => Err(format!(
                "Unknown profile '{}', expected 'standard' or 'lite'",
                other
            )),
        }
    }
}
