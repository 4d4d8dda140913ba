//! Catalog operations

use crate::catalog::{Level, Text};
use crate::error::StorageError;
use crate::storage::Store;

/// Loads the whole catalog from the store's texts file.
pub fn load_texts(store: &Store) -> Result<Vec<Text>, StorageError> {
    store.load_texts()
}

/// Texts of the given level, in file order.
pub fn filter_by_level(texts: &[Text], level: Level) -> Vec<&Text> {
    texts
        .iter()
        .filter(|text| text.level == level.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_line;

    fn catalog() -> Vec<Text> {
        [
            "A1||Erster||eins",
            "B1||Mitte||zwei",
            "A1||Zweiter||drei",
            "X9||Fremd||vier",
        ]
        .into_iter()
        .filter_map(parse_line)
        .collect()
    }

    #[test]
    fn test_filter_preserves_file_order() {
        let texts = catalog();
        let a1: Vec<&str> = filter_by_level(&texts, Level::A1)
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(a1, vec!["Erster", "Zweiter"]);
    }

    #[test]
    fn test_filter_without_matches_is_empty() {
        assert!(filter_by_level(&catalog(), Level::C1).is_empty());
        assert!(filter_by_level(&[], Level::A1).is_empty());
    }
}
