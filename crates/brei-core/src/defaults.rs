use crate::book::RecipeMap;
use crate::ingredient::Ingredient;

type DefaultRecipe = (&'static str, &'static [(&'static str, f64)]);

const DEFAULT_RECIPES: &[DefaultRecipe] = &[
    (
        "Haferbrei",
        &[
            ("Wasser (ml)", 200.0),
            ("Haferflocken (g)", 50.0),
            ("Milch (ml)", 100.0),
            ("Banane (g)", 50.0),
            ("Zimt (g)", 2.0),
            ("Zucker (g)", 5.0),
            ("Salz (g)", 1.0),
        ],
    ),
    (
        "Reisbrei",
        &[
            ("Wasser (ml)", 250.0),
            ("Reis (g)", 60.0),
            ("Milch (ml)", 80.0),
            ("Apfel (g)", 50.0),
            ("Vanille (g)", 2.0),
            ("Zucker (g)", 5.0),
            ("Salz (g)", 1.0),
        ],
    ),
    (
        "Grießbrei",
        &[
            ("Milch (ml)", 250.0),
            ("Grieß (g)", 40.0),
            ("Zucker (g)", 5.0),
            ("Salz (g)", 1.0),
            ("Butter (g)", 10.0),
        ],
    ),
    (
        "Maisbrei",
        &[
            ("Wasser (ml)", 200.0),
            ("Maisgrieß (g)", 50.0),
            ("Milch (ml)", 50.0),
            ("Salz (g)", 1.0),
        ],
    ),
    (
        "Hirsebrei",
        &[
            ("Wasser (ml)", 200.0),
            ("Hirse (g)", 50.0),
            ("Milch (ml)", 50.0),
            ("Zucker (g)", 5.0),
            ("Salz (g)", 1.0),
        ],
    ),
    (
        "Buchweizenbrei",
        &[
            ("Wasser (ml)", 200.0),
            ("Buchweizen (g)", 50.0),
            ("Milch (ml)", 50.0),
            ("Zucker (g)", 5.0),
            ("Salz (g)", 1.0),
        ],
    ),
    (
        "Dinkelbrei",
        &[
            ("Wasser (ml)", 200.0),
            ("Dinkelgrieß (g)", 50.0),
            ("Milch (ml)", 50.0),
            ("Zucker (g)", 5.0),
            ("Zimt (g)", 2.0),
            ("Salz (g)", 1.0),
        ],
    ),
    (
        "Quinoabrei",
        &[
            ("Wasser (ml)", 200.0),
            ("Quinoa (g)", 50.0),
            ("Milch (ml)", 50.0),
            ("Zucker (g)", 5.0),
            ("Salz (g)", 1.0),
        ],
    ),
    (
        "Kokosbrei",
        &[
            ("Milch (ml)", 200.0),
            ("Kokosraspeln (g)", 40.0),
            ("Zucker (g)", 5.0),
            ("Salz (g)", 1.0),
        ],
    ),
    (
        "Mandelbrei",
        &[
            ("Milch (ml)", 200.0),
            ("Mandelmehl (g)", 40.0),
            ("Zucker (g)", 5.0),
            ("Salz (g)", 1.0),
        ],
    ),
];

/// The built-in recipe set used on first start and whenever the persisted
/// recipes cannot be read.
pub fn default_recipes() -> RecipeMap {
    DEFAULT_RECIPES
        .iter()
        .map(|(name, ingredients)| {
            let ingredients = ingredients
                .iter()
                .map(|(ingredient, menge)| Ingredient::new(*ingredient, *menge))
                .collect();
            (name.to_string(), ingredients)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_default_recipes() {
        let recipes = default_recipes();
        assert_eq!(recipes.len(), 10);
        assert!(recipes.keys().all(|name| name.ends_with("brei")));
    }

    #[test]
    fn test_default_ingredients_are_valid() {
        for (name, ingredients) in default_recipes() {
            assert!(!ingredients.is_empty(), "{name} has no ingredients");
            assert!(ingredients.iter().all(Ingredient::is_valid), "{name}");
        }
    }

    #[test]
    fn test_haferbrei_order_preserved() {
        let recipes = default_recipes();
        let names: Vec<&str> = recipes["Haferbrei"]
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Wasser (ml)",
                "Haferflocken (g)",
                "Milch (ml)",
                "Banane (g)",
                "Zimt (g)",
                "Zucker (g)",
                "Salz (g)",
            ]
        );
    }
}
