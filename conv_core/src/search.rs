//! # Cross-Search
//!
//! Free-text lookup over two disjoint collections: calculators and converter
//! categories. The caller names the collection of the page it is on; matches
//! from the other collection come back separately so the UI can offer them
//! when the current section has nothing.
//!
//! Matching is case-insensitive substring containment over the title,
//! description, category, keywords and, for converters, every unit label and
//! symbol. Results keep declared table order; nothing is ranked.
//!
//! ## Example
//!
//! ```rust
//! use conv_core::search::{search, SearchKind};
//!
//! let results = search("npsh", SearchKind::Converter);
//! assert!(results.primary_results.is_empty());
//! assert!(results.show_cross_results);
//! assert_eq!(results.cross_results[0].href, "/calculators/npsh");
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::calculations::CalculatorKind;
use crate::registry::{UnitRegistry, REGISTRY};
use crate::units::QuantityCategory;

/// Index over the built-in registry and calculator catalog
pub static SEARCH_INDEX: Lazy<SearchIndex> =
    Lazy::new(|| SearchIndex::build(&REGISTRY, &CalculatorKind::ALL));

/// Which collection an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    Calculator,
    Converter,
}

impl SearchKind {
    /// The other collection
    pub fn other(&self) -> Self {
        match self {
            SearchKind::Calculator => SearchKind::Converter,
            SearchKind::Converter => SearchKind::Calculator,
        }
    }
}

/// One indexable calculator or converter page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchableEntry {
    pub title: String,
    pub description: String,
    pub href: String,
    pub kind: SearchKind,
    /// Topic or quantity name
    pub category: String,
    /// Lowercase tag tokens
    pub keywords: Vec<String>,
    /// Unit labels and symbols, lowercased (converters only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unit_terms: Vec<String>,
}

impl SearchableEntry {
    /// Entry for a calculator catalog item
    pub fn from_calculator(kind: CalculatorKind) -> Self {
        let meta = kind.metadata();
        SearchableEntry {
            title: meta.title.to_string(),
            description: meta.description.to_string(),
            href: kind.href(),
            kind: SearchKind::Calculator,
            category: meta.topic.to_string(),
            keywords: meta.keywords.iter().map(|k| k.to_lowercase()).collect(),
            unit_terms: Vec::new(),
        }
    }

    /// Entry for a converter category
    pub fn from_category(category: &QuantityCategory) -> Self {
        let unit_terms = category
            .units
            .iter()
            .flat_map(|u| [u.display_label.to_lowercase(), u.symbol.to_lowercase()])
            .collect();
        SearchableEntry {
            title: format!("{} Converter", category.name),
            description: format!("Convert between units of {}.", category.name.to_lowercase()),
            href: format!("/converters/{}", category.id),
            kind: SearchKind::Converter,
            category: category.name.clone(),
            keywords: category.keywords.clone(),
            unit_terms,
        }
    }

    /// True when the lowercase `needle` is contained in any searchable field
    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.keywords.iter().any(|k| k.to_lowercase().contains(needle))
            || self.unit_terms.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// Three-part result of a cross-search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matches in the caller's collection
    pub primary_results: Vec<SearchableEntry>,
    /// Matches in the other collection
    pub cross_results: Vec<SearchableEntry>,
    /// Primary is empty and cross is not
    pub show_cross_results: bool,
}

/// Two independent indices behind one query function.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    calculators: Vec<SearchableEntry>,
    converters: Vec<SearchableEntry>,
}

impl SearchIndex {
    /// Build from a registry and a calculator catalog
    pub fn build(registry: &UnitRegistry, calculators: &[CalculatorKind]) -> Self {
        SearchIndex {
            calculators: calculators.iter().map(|k| SearchableEntry::from_calculator(*k)).collect(),
            converters: registry.categories().iter().map(SearchableEntry::from_category).collect(),
        }
    }

    /// Build from prepared entries; each lands in the collection named by its `kind`
    pub fn from_entries(entries: impl IntoIterator<Item = SearchableEntry>) -> Self {
        let (calculators, converters) = entries
            .into_iter()
            .partition(|e| e.kind == SearchKind::Calculator);
        SearchIndex { calculators, converters }
    }

    /// Entries of one collection in declared order
    pub fn entries(&self, kind: SearchKind) -> &[SearchableEntry] {
        match kind {
            SearchKind::Calculator => &self.calculators,
            SearchKind::Converter => &self.converters,
        }
    }

    /// Run a query with no result limit
    pub fn search(&self, query: &str, primary_kind: SearchKind) -> SearchResults {
        self.search_limited(query, primary_kind, None)
    }

    /// Run a query, truncating each list to `max_results` when given
    pub fn search_limited(&self, query: &str, primary_kind: SearchKind, max_results: Option<usize>) -> SearchResults {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return SearchResults::default();
        }

        let primary_results = matching(self.entries(primary_kind), &needle, max_results);
        let cross_results = matching(self.entries(primary_kind.other()), &needle, max_results);
        let show_cross_results = primary_results.is_empty() && !cross_results.is_empty();

        SearchResults {
            primary_results,
            cross_results,
            show_cross_results,
        }
    }
}

/// Query the built-in index
pub fn search(query: &str, primary_kind: SearchKind) -> SearchResults {
    SEARCH_INDEX.search(query, primary_kind)
}

fn matching(entries: &[SearchableEntry], needle: &str, max_results: Option<usize>) -> Vec<SearchableEntry> {
    entries
        .iter()
        .filter(|e| e.matches(needle))
        .take(max_results.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_npsh_falls_back_to_calculators() {
        let results = search("npsh", SearchKind::Converter);
        assert!(results.primary_results.is_empty());
        assert!(results.show_cross_results);
        assert_eq!(results.cross_results.len(), 1);
        assert_eq!(results.cross_results[0].kind, SearchKind::Calculator);
        assert_eq!(results.cross_results[0].title, "NPSH Available");
    }

    #[test]
    fn test_empty_query() {
        for kind in [SearchKind::Calculator, SearchKind::Converter] {
            for query in ["", "   ", "\t\n"] {
                let results = search(query, kind);
                assert_eq!(results, SearchResults::default());
            }
        }
    }

    #[test]
    fn test_case_insensitive_unit_symbol_match() {
        let results = search("KPA", SearchKind::Converter);
        assert_eq!(results.primary_results.len(), 1);
        assert_eq!(results.primary_results[0].href, "/converters/pressure");
        assert!(!results.show_cross_results);
    }

    #[test]
    fn test_unit_label_match() {
        let results = search("gallon per minute", SearchKind::Converter);
        assert_eq!(results.primary_results[0].href, "/converters/flow");
    }

    #[test]
    fn test_both_collections_match() {
        // "pump" is a flow keyword and a calculator topic
        let results = search("pump", SearchKind::Calculator);
        assert!(!results.primary_results.is_empty());
        assert!(!results.cross_results.is_empty());
        assert!(!results.show_cross_results);
    }

    #[test]
    fn test_declared_order_preserved() {
        let results = search("pipe", SearchKind::Calculator);
        let hrefs: Vec<_> = results.primary_results.iter().map(|e| e.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec!["/calculators/pipe-velocity", "/calculators/reynolds-number", "/calculators/pressure-drop"]
        );
    }

    #[test]
    fn test_no_match_anywhere() {
        let results = search("zzzz-nothing", SearchKind::Calculator);
        assert!(results.primary_results.is_empty());
        assert!(results.cross_results.is_empty());
        assert!(!results.show_cross_results);
    }

    #[test]
    fn test_result_limit() {
        let all = SEARCH_INDEX.search("e", SearchKind::Converter);
        assert!(all.primary_results.len() > 2);
        let limited = SEARCH_INDEX.search_limited("e", SearchKind::Converter, Some(2));
        assert_eq!(limited.primary_results, all.primary_results[..2].to_vec());
    }

    #[test]
    fn test_custom_entry_terms_match_any_case() {
        let entry = SearchableEntry {
            title: "Suction Check".to_string(),
            description: String::new(),
            href: "/calculators/suction-check".to_string(),
            kind: SearchKind::Calculator,
            category: "Pumps".to_string(),
            keywords: vec!["NPSH".to_string()],
            unit_terms: vec!["Metre Head".to_string()],
        };
        let index = SearchIndex::from_entries(vec![entry]);

        let results = index.search("npsh", SearchKind::Calculator);
        assert_eq!(results.primary_results.len(), 1);
        assert_eq!(index.search("metre head", SearchKind::Calculator).primary_results.len(), 1);
    }

    #[test]
    fn test_unit_count_is_not_searchable() {
        // pressure has 13 units; no unit, label or keyword contains "13"
        let results = search("13", SearchKind::Converter);
        assert!(results.primary_results.is_empty(), "{:?}", results.primary_results);
    }

    #[test]
    fn test_from_entries_partitions_by_kind() {
        let calc = SearchableEntry::from_calculator(CalculatorKind::Npsh);
        let conv = SearchableEntry::from_category(REGISTRY.category("mass").unwrap());
        let index = SearchIndex::from_entries(vec![conv, calc]);
        assert_eq!(index.entries(SearchKind::Calculator).len(), 1);
        assert_eq!(index.entries(SearchKind::Converter).len(), 1);
    }
}
