// Excerpt of a hardcoded quote table, in the shape the migration scans for.

fn default_quotes() -> Vec<Quote> {
    vec![
        Quote {
            text: "The early bird might get the worm, but the second mouse gets the cheese.".to_string(),
            source: "English wisdom".to_string(),
            difficulty: QuoteDifficulty::Easy,
            category: QuoteCategory::Proverbs,
            origin: "English".to_string(),
        },
        Quote {
            text: "A smooth sea never made a skilled sailor.".to_string(),
            source: "Franklin D. Roosevelt".to_string(),
            difficulty: QuoteDifficulty::Easy,
            category: QuoteCategory::Proverbs,
            origin: "English".to_string(),
        },
        Quote {
            text: "Six sitting scientists sorted sixty slippery snakes successfully.".to_string(),
            source: "Traditional".to_string(),
            difficulty: QuoteDifficulty::Hard,
            category: QuoteCategory::TongueTwisters,
            origin: "English".to_string(),
        },
        Quote {
            text: "There are only two hard things in computer science: cache invalidation and naming things.".to_string(),
            source: "Phil Karlton".to_string(),
            difficulty: QuoteDifficulty::Medium,
            category: QuoteCategory::Programming,
            origin: "English".to_string(),
        },
        Quote {
            text: "It was the best of times, it was the worst of times.".to_string(),
            source: "Charles Dickens, A Tale of Two Cities".to_string(),
            difficulty: QuoteDifficulty::Medium,
            category: QuoteCategory::Literature,
            origin: "English".to_string(),
        },
        Quote {
            text: "La plume de ma tante est sur le bureau de mon oncle.".to_string(),
            source: "French exercise".to_string(),
            difficulty: QuoteDifficulty::Medium,
            category: QuoteCategory::Multilingual,
            origin: "French".to_string(),
        },
        // Newer category, unknown to the seven-file layout
        Quote {
            text: "asdf jkl; asdf jkl; asdf jkl;".to_string(),
            source: "Home row drill".to_string(),
            difficulty: QuoteDifficulty::Easy,
            category: QuoteCategory::Lessons,
            origin: "English".to_string(),
        },
        // Missing origin field; the scan skips this one
        Quote {
            text: "The quick brown fox jumps over the lazy dog.".to_string(),
            source: "Pangram".to_string(),
            difficulty: QuoteDifficulty::Easy,
            category: QuoteCategory::Typewriters,
        },
    ]
}
