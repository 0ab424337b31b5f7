/// A default recipe inserted into an empty catalog.
#[derive(Debug, Clone, Copy)]
pub struct SeedRecipe {
    pub title: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub prep_time: &'static str,
    pub servings: u32,
    pub tags: &'static [&'static str],
}

pub const SEED_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        title: "Lemon Garlic Pasta",
        author: "Alex",
        description: "A bright, quick pasta with lemon zest, garlic, olive oil, and parmesan.",
        prep_time: "20 min",
        servings: 2,
        tags: &["Quick", "Vegetarian"],
    },
    SeedRecipe {
        title: "Spiced Chickpea Bowl",
        author: "Sam",
        description: "Roasted chickpeas, herbed rice, cucumber salad, and tahini drizzle.",
        prep_time: "30 min",
        servings: 3,
        tags: &["High Protein", "Meal Prep"],
    },
    SeedRecipe {
        title: "Berry Yogurt Parfait",
        author: "Nina",
        description: "Layers of Greek yogurt, berries, granola, and honey.",
        prep_time: "10 min",
        servings: 1,
        tags: &["Breakfast", "No Cook"],
    },
];
