//! The restaurant's static menu catalogue.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fried,
    Rice,
    Soup,
    Drink,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Fried => "fried",
            Category::Rice => "rice",
            Category::Soup => "soup",
            Category::Drink => "drink",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fried" => Ok(Category::Fried),
            "rice" => Ok(Category::Rice),
            "soup" => Ok(Category::Soup),
            "drink" => Ok(Category::Drink),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: Category,
}

impl MenuItem {
    pub fn new(id: &str, name: &str, price: f64, category: Category) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            category,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Items in `category`, or the whole menu for `None`.
    pub fn by_category(&self, category: Option<Category>) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| category.is_none_or(|c| item.category == c))
            .collect()
    }

    pub fn price_of(&self, name: &str) -> Option<f64> {
        self.find_by_name(name).map(|item| item.price)
    }
}

impl Default for Menu {
    fn default() -> Self {
        use Category::*;
        Self::new(vec![
            MenuItem::new("1", "Omelet", 50.0, Fried),
            MenuItem::new("2", "Fried Chicken", 50.0, Fried),
            MenuItem::new("3", "Crab Fried Rice", 50.0, Rice),
            MenuItem::new("4", "Fried Shrimp Cake", 50.0, Fried),
            MenuItem::new("5", "Spicy Shrimp Soup", 50.0, Soup),
            MenuItem::new("6", "Rice", 50.0, Rice),
            MenuItem::new("7", "Water", 50.0, Drink),
            MenuItem::new("8", "Cocacola", 50.0, Drink),
            MenuItem::new("9", "Ice", 50.0, Drink),
        ])
    }
}
