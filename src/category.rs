use tracing::warn;

use crate::store::Quote;

/// The known quote categories, each bound to one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Proverbs,
    TongueTwisters,
    Literature,
    Programming,
    Humor,
    Multilingual,
    Typewriters,
}

impl Category {
    /// Declaration order; indexes match the enum discriminants.
    pub const ALL: [Category; 7] = [
        Category::Proverbs,
        Category::TongueTwisters,
        Category::Literature,
        Category::Programming,
        Category::Humor,
        Category::Multilingual,
        Category::Typewriters,
    ];

    /// Exact-match lookup on the label captured from the source.
    pub fn from_label(label: &str) -> Option<Category> {
        match label {
            "Proverbs" => Some(Category::Proverbs),
            "TongueTwisters" => Some(Category::TongueTwisters),
            "Literature" => Some(Category::Literature),
            "Programming" => Some(Category::Programming),
            "Humor" => Some(Category::Humor),
            "Multilingual" => Some(Category::Multilingual),
            "Typewriters" => Some(Category::Typewriters),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Proverbs => "Proverbs",
            Category::TongueTwisters => "TongueTwisters",
            Category::Literature => "Literature",
            Category::Programming => "Programming",
            Category::Humor => "Humor",
            Category::Multilingual => "Multilingual",
            Category::Typewriters => "Typewriters",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Category::Proverbs => "proverbs.json",
            Category::TongueTwisters => "tongue_twisters.json",
            Category::Literature => "literature.json",
            Category::Programming => "programming.json",
            Category::Humor => "humor.json",
            Category::Multilingual => "multilingual.json",
            Category::Typewriters => "typewriters.json",
        }
    }
}

/// Route quotes into per-category buckets, in `Category::ALL` order.
/// Quotes with an unrecognized category label are dropped with a warning.
pub fn bucket(quotes: Vec<Quote>) -> Vec<(Category, Vec<Quote>)> {
    let mut buckets: Vec<(Category, Vec<Quote>)> =
        Category::ALL.iter().map(|c| (*c, Vec::new())).collect();

    for quote in quotes {
        match Category::from_label(&quote.category) {
            Some(cat) => buckets[cat as usize].1.push(quote),
            None => warn!("Unknown category: {}", quote.category),
        }
    }

    buckets
}
