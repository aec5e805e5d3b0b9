use serde::{Deserialize, Serialize};

pub type CategoryId = u32;
pub type RecipeId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub count: u32,
}

/// One ingredient line. Data files mix plain strings with `{name, amount}`
/// objects, so both shapes deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ingredient {
    Text(String),
    Measured {
        #[serde(default)]
        name: String,
        #[serde(default)]
        amount: Option<String>,
    },
}

impl Ingredient {
    pub fn display_text(&self) -> String {
        match self {
            Ingredient::Text(text) => text.clone(),
            Ingredient::Measured { name, amount } => match amount.as_deref() {
                Some(amount) if !amount.is_empty() => format!("{amount} {name}"),
                _ => name.clone(),
            },
        }
    }
}

/// Entry of a recipe's `related` list: either an id to resolve against the
/// catalog or a full record embedded in the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelatedRef {
    Id(RecipeId),
    Recipe(Box<Recipe>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub gradient: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub notes: Option<Vec<String>>,
    #[serde(default)]
    pub related: Option<Vec<RelatedRef>>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub description: String,
}

impl Recipe {
    /// Image reference when one is present and not blank.
    pub fn image_ref(&self) -> Option<&str> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|image| !image.is_empty())
    }

    pub fn has_notes(&self) -> bool {
        self.notes.as_ref().is_some_and(|notes| !notes.is_empty())
    }

    pub fn rating_label(&self) -> String {
        format_rating(self.rating)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturedMain {
    pub id: RecipeId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Featured {
    #[serde(default)]
    pub main: Option<FeaturedMain>,
    #[serde(default)]
    pub side: Vec<RecipeId>,
}

/// Integral ratings print without a fraction (`5`), others in shortest form
/// (`4.8`).
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 && rating.is_finite() {
        format!("{:.0}", rating)
    } else {
        rating.to_string()
    }
}
