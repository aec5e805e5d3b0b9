use cookbook_core::{Catalog, Recipe, RecipeId};

pub const SAMPLE_CATALOG: &str = r#"{
    "categories": [
        {"id": 1, "name": "Noodles", "count": 2},
        {"id": 2, "name": "Curry", "count": 1},
        {"id": 3, "name": "Soup", "count": 1}
    ],
    "recipes": [
        {
            "id": 1, "name": "Pad Thai", "category": "Noodles", "rating": 4.8,
            "time": "30 min", "servings": 2, "difficulty": "Easy",
            "description": "Stir-fried rice noodles with tamarind.",
            "gradient": "from-orange-400 to-red-500",
            "ingredients": [{"name": "rice noodles", "amount": "200 g"}, "2 eggs"],
            "instructions": ["Soak the noodles", "Fry everything"],
            "notes": ["Use fresh bean sprouts"],
            "related": [3, 42, {"id": 9, "name": "Mango Sticky Rice", "category": "Dessert", "time": "40 min"}]
        },
        {
            "id": 2, "name": "Green Curry", "category": "Curry", "rating": 4.5,
            "time": "45 min", "image": "./images/green-curry.jpg",
            "instructions": ["Fry the paste", "Add coconut milk"]
        },
        {"id": 3, "name": "Boat Noodles", "category": "Noodles", "rating": 4.2, "time": "60 min"},
        {"id": 4, "name": "Tom Yum", "category": "Soup", "rating": 5, "time": "25 min"}
    ],
    "popular": [3, 1, 4],
    "featured": {"main": {"id": 2}, "side": [4]}
}"#;

pub fn sample_catalog() -> Catalog {
    Catalog::from_json_str(SAMPLE_CATALOG).expect("sample catalog parses")
}

pub fn recipe(id: RecipeId, name: &str, category: &str) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        category: category.to_string(),
        rating: 4.0,
        time: "20 min".to_string(),
        image: None,
        gradient: None,
        ingredients: Vec::new(),
        instructions: Vec::new(),
        notes: None,
        related: None,
        servings: None,
        difficulty: String::new(),
        description: String::new(),
    }
}
