//! Feed ingredients and the validated catalog.

use crate::error::{CoreError, CoreResult};
use crate::numeric::ensure_non_negative;
use crate::nutrient::Nutrient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single feed ingredient: identity, price, nutrient density and
/// agronomic intake bounds.
///
/// Densities are per kg of dry matter; an absent nutrient kind counts as
/// density zero. Bounds are kg/animal/day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub key: String,
    /// Price per kg of dry matter
    pub price: f64,
    /// Nutrient density per kg, keyed by nutrient kind
    pub density: BTreeMap<Nutrient, f64>,
    pub min_kg: f64,
    pub max_kg: f64,
}

impl Ingredient {
    pub fn new(
        key: impl Into<String>,
        price: f64,
        density: impl IntoIterator<Item = (Nutrient, f64)>,
        min_kg: f64,
        max_kg: f64,
    ) -> Self {
        Self {
            key: key.into(),
            price,
            density: density.into_iter().collect(),
            min_kg,
            max_kg,
        }
    }

    /// Density for a nutrient kind; zero when the kind is not listed.
    pub fn density(&self, nutrient: Nutrient) -> f64 {
        self.density.get(&nutrient).copied().unwrap_or(0.0)
    }

    fn validate(&self) -> CoreResult<()> {
        if self.key.is_empty() {
            return Err(CoreError::InvalidArg {
                what: "ingredient key must be non-empty",
            });
        }
        ensure_non_negative(self.price, "ingredient price")?;
        for &d in self.density.values() {
            ensure_non_negative(d, "nutrient density")?;
        }
        ensure_non_negative(self.min_kg, "ingredient min_kg")?;
        ensure_non_negative(self.max_kg, "ingredient max_kg")?;
        if self.min_kg > self.max_kg {
            return Err(CoreError::InvertedInterval {
                what: "ingredient bounds",
                min: self.min_kg,
                max: self.max_kg,
            });
        }
        Ok(())
    }
}

/// Read-only collection of ingredients, validated at construction.
///
/// Built once at process start and shared freely; nothing mutates it
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    ingredients: Vec<Ingredient>,
}

impl Catalog {
    pub fn new(ingredients: Vec<Ingredient>) -> CoreResult<Self> {
        if ingredients.is_empty() {
            return Err(CoreError::InvalidArg {
                what: "catalog must contain at least one ingredient",
            });
        }
        for ing in &ingredients {
            ing.validate()?;
        }
        for (i, a) in ingredients.iter().enumerate() {
            if ingredients[i + 1..].iter().any(|b| b.key == a.key) {
                return Err(CoreError::InvalidArg {
                    what: "catalog contains a duplicate ingredient key",
                });
            }
        }
        Ok(Self { ingredients })
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter()
    }

    pub fn get(&self, key: &str) -> CoreResult<&Ingredient> {
        self.ingredients
            .iter()
            .find(|ing| ing.key == key)
            .ok_or_else(|| CoreError::UnknownIngredient {
                key: key.to_string(),
            })
    }

    /// The four-ingredient dairy catalog the engine ships with.
    pub fn dairy_default() -> Self {
        use Nutrient::*;
        let ingredients = vec![
            Ingredient::new(
                "maize_bran",
                570.0,
                [
                    (MetabolizableEnergy, 2.8),
                    (CrudeProtein, 90.0),
                    (Calcium, 0.5),
                    (Phosphorus, 3.0),
                ],
                1.0,
                6.0,
            ),
            Ingredient::new(
                "cottonseed",
                3000.0,
                [
                    (MetabolizableEnergy, 3.2),
                    (CrudeProtein, 230.0),
                    (Calcium, 2.0),
                    (Phosphorus, 11.0),
                ],
                0.5,
                3.0,
            ),
            Ingredient::new(
                "brewers_grain",
                528.0,
                [
                    (MetabolizableEnergy, 2.6),
                    (CrudeProtein, 250.0),
                    (Calcium, 1.5),
                    (Phosphorus, 5.0),
                ],
                0.5,
                4.0,
            ),
            Ingredient::new(
                "grass_silage",
                550.0,
                [
                    (MetabolizableEnergy, 2.2),
                    (CrudeProtein, 80.0),
                    (Calcium, 5.0),
                    (Phosphorus, 3.0),
                ],
                2.0,
                8.0,
            ),
        ];
        // Static data; validation cannot fail here.
        Self { ingredients }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dairy_default_has_four_ingredients() {
        let catalog = Catalog::dairy_default();
        assert_eq!(catalog.len(), 4);
        let maize = catalog.get("maize_bran").unwrap();
        assert_eq!(maize.price, 570.0);
        assert_eq!(maize.density(Nutrient::CrudeProtein), 90.0);
        assert_eq!(maize.min_kg, 1.0);
        assert_eq!(maize.max_kg, 6.0);
    }

    #[test]
    fn missing_density_reads_as_zero() {
        let ing = Ingredient::new("straw", 100.0, [(Nutrient::MetabolizableEnergy, 1.5)], 0.0, 2.0);
        assert_eq!(ing.density(Nutrient::Calcium), 0.0);
    }

    #[test]
    fn rejects_inverted_bounds() {
        let ing = Ingredient::new("bad", 100.0, [], 3.0, 1.0);
        let err = Catalog::new(vec![ing]).unwrap_err();
        assert!(matches!(err, CoreError::InvertedInterval { .. }));
    }

    #[test]
    fn rejects_negative_price() {
        let ing = Ingredient::new("bad", -1.0, [], 0.0, 1.0);
        assert!(Catalog::new(vec![ing]).is_err());
    }

    #[test]
    fn rejects_duplicate_keys() {
        let a = Ingredient::new("hay", 100.0, [], 0.0, 1.0);
        let b = Ingredient::new("hay", 200.0, [], 0.0, 2.0);
        assert!(Catalog::new(vec![a, b]).is_err());
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(Catalog::new(vec![]).is_err());
    }

    #[test]
    fn unknown_key_is_an_error() {
        let catalog = Catalog::dairy_default();
        assert!(matches!(
            catalog.get("sawdust"),
            Err(CoreError::UnknownIngredient { .. })
        ));
    }
}
