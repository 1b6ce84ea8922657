//! Recipe store, seeded with the built-in recipes
//!
//! Names are unique and kept in insertion order: the seeds first, then user
//! additions in the order they were added.

use crate::error::{KitchenError, Result};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl Recipe {
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn ingredients_text(&self) -> String {
        format!("Ingredients:\n{}", self.ingredients.join("\n"))
    }

    pub fn steps_text(&self) -> String {
        format!("Steps:\n{}", self.steps.join("\n"))
    }
}

/// Built-in recipe: (name, ingredients, steps)
type SeedRecipe = (&'static str, &'static [&'static str], &'static [&'static str]);

pub const SEED_RECIPES: &[SeedRecipe] = &[
    (
        "Fried Rice",
        &[
            "Rice: 2 cups",
            "Mixed vegetables: 1 cup",
            "Eggs: 2",
            "Garlic: 2 cloves",
            "Soy sauce: 2 tablespoons",
            "Oil: 2 tablespoons",
        ],
        &[
            "Heat oil in a large skillet over medium heat.",
            "Add garlic and sauté until fragrant.",
            "Add mixed vegetables and cook until tender.",
            "Push the vegetables to the side and pour beaten eggs into the skillet.",
            "Scramble the eggs until fully cooked.",
            "Add cooked rice to the skillet and stir to combine.",
            "Pour soy sauce and stir everything together.",
            "Cook for another 2-3 minutes and serve hot.",
        ],
    ),
    (
        "Spaghetti Bolognese",
        &[
            "Spaghetti: 200g",
            "Ground beef: 500g",
            "Tomato sauce: 2 cups",
            "Onion: 1",
            "Garlic: 2 cloves",
            "Olive oil: 2 tablespoons",
        ],
        &[
            "Cook spaghetti according to package instructions.",
            "Heat oil in a large skillet over medium heat.",
            "Add chopped onion and garlic, sauté until translucent.",
            "Add ground beef, cook until browned.",
            "Stir in tomato sauce, simmer for 10 minutes.",
            "Serve sauce over spaghetti.",
        ],
    ),
    (
        "Pancakes",
        &[
            "Flour: 1 cup",
            "Milk: 1 cup",
            "Egg: 1",
            "Baking powder: 1 tablespoon",
            "Salt: 1/2 teaspoon",
            "Butter: 2 tablespoons",
        ],
        &[
            "In a large bowl, mix flour, baking powder, and salt.",
            "Add milk and egg, whisk until smooth.",
            "Heat a skillet over medium heat, melt butter.",
            "Pour batter into the skillet, cook until bubbles form.",
            "Flip and cook until golden brown.",
            "Serve with syrup.",
        ],
    ),
    (
        "Caesar Salad",
        &[
            "Romaine lettuce: 1 head",
            "Croutons: 1 cup",
            "Parmesan cheese: 1/2 cup",
            "Caesar dressing: 1/2 cup",
            "Chicken breast: 1",
            "Olive oil: 1 tablespoon",
        ],
        &[
            "Grill chicken breast until cooked through, slice.",
            "Chop romaine lettuce and place in a large bowl.",
            "Add croutons and Parmesan cheese.",
            "Toss with Caesar dressing.",
            "Top with sliced chicken.",
            "Serve immediately.",
        ],
    ),
    (
        "Chili Con Carne",
        &[
            "Ground beef: 500g",
            "Kidney beans: 1 can",
            "Tomato sauce: 2 cups",
            "Onion: 1",
            "Garlic: 2 cloves",
            "Chili powder: 2 tablespoons",
        ],
        &[
            "Heat oil in a large pot over medium heat.",
            "Add chopped onion and garlic, sauté until translucent.",
            "Add ground beef, cook until browned.",
            "Stir in kidney beans, tomato sauce, and chili powder.",
            "Simmer for 20 minutes.",
            "Serve hot.",
        ],
    ),
    (
        "Omelette",
        &[
            "Eggs: 3",
            "Milk: 1/4 cup",
            "Salt: 1/2 teaspoon",
            "Pepper: 1/4 teaspoon",
            "Cheese: 1/2 cup",
            "Ham: 1/2 cup",
        ],
        &[
            "Whisk eggs, milk, salt, and pepper in a bowl.",
            "Heat a skillet over medium heat, pour in the egg mixture.",
            "Cook until edges start to set, add cheese and ham.",
            "Fold the omelette in half, cook until cheese melts.",
            "Serve hot.",
        ],
    ),
];

#[derive(Debug, Clone)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl RecipeStore {
    /// Store containing only the built-in recipes.
    pub fn seeded() -> Self {
        let recipes = SEED_RECIPES
            .iter()
            .map(|(name, ingredients, steps)| Recipe {
                name: name.to_string(),
                ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
                steps: steps.iter().map(|s| s.to_string()).collect(),
            })
            .collect::<Vec<_>>();
        debug!(count = recipes.len(), "Recipe store seeded");
        Self { recipes }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.recipes.iter().any(|r| r.name == name)
    }

    pub fn get(&self, name: &str) -> Result<&Recipe> {
        self.recipes
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| KitchenError::not_found(name))
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Recipe> {
        self.recipes
            .iter_mut()
            .find(|r| r.name == name)
            .ok_or_else(|| KitchenError::not_found(name))
    }

    /// Insert an empty recipe. Empty and duplicate names are rejected.
    pub fn add(&mut self, name: &str) -> Result<()> {
        if name.is_empty() || self.contains(name) {
            return Err(KitchenError::AlreadyExists(name.to_string()));
        }
        self.recipes.push(Recipe::empty(name));
        info!(recipe = name, "Recipe added");
        Ok(())
    }

    /// Recipe names in insertion order.
    pub fn list(&self) -> Vec<&str> {
        self.recipes.iter().map(|r| r.name.as_str()).collect()
    }

    /// Append `"item: measurement"` to a recipe's ingredient list.
    pub fn add_ingredient(&mut self, recipe: &str, item: &str, measurement: &str) -> Result<()> {
        if item.is_empty() {
            return Err(KitchenError::EmptyField("Ingredient"));
        }
        if measurement.is_empty() {
            return Err(KitchenError::EmptyField("Measurement"));
        }
        let entry = format!("{}: {}", item, measurement);
        self.get_mut(recipe)?.ingredients.push(entry);
        debug!(recipe, item, measurement, "Ingredient added");
        Ok(())
    }

    pub fn add_step(&mut self, recipe: &str, step: &str) -> Result<()> {
        if step.is_empty() {
            return Err(KitchenError::EmptyField("Step"));
        }
        self.get_mut(recipe)?.steps.push(step.to_string());
        debug!(recipe, "Step added");
        Ok(())
    }
}
