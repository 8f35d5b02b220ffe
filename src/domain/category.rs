use serde::{Deserialize, Serialize};

/// The fixed set of expense categories. Inputs outside this set are
/// rejected before they ever reach the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Food,
    Rent,
    Utilities,
    Transport,
    Shopping,
    Subscriptions,
    Dining,
    Miscellaneous,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Rent,
        Category::Utilities,
        Category::Transport,
        Category::Shopping,
        Category::Subscriptions,
        Category::Dining,
        Category::Miscellaneous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Rent => "Rent",
            Category::Utilities => "Utilities",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Subscriptions => "Subscriptions",
            Category::Dining => "Dining",
            Category::Miscellaneous => "Miscellaneous",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Category::Food),
            "rent" => Some(Category::Rent),
            "utilities" => Some(Category::Utilities),
            "transport" => Some(Category::Transport),
            "shopping" => Some(Category::Shopping),
            "subscriptions" => Some(Category::Subscriptions),
            "dining" => Some(Category::Dining),
            "miscellaneous" => Some(Category::Miscellaneous),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
