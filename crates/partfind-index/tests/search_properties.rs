//! Property tests for index build and query semantics.

use partfind_index::{tokenize, unique_tokens, MatchPolicy, Query, QueryEngine, SearchIndex};
use proptest::prelude::*;

fn entry_strategy() -> impl Strategy<Value = String> {
    // Part-description-like text: words, digits, and punctuation.
    "[A-Za-z0-9 /._-]{0,24}"
}

fn entries_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(entry_strategy(), 0..24)
}

fn unicode_entry_strategy() -> impl Strategy<Value = String> {
    // Letters whose lowercase form differs in length or script: dotted
    // capital I, Kelvin sign, slashed O, accented E, sharp s.
    "[A-Za-z0-9 /\u{130}\u{212A}\u{D8}\u{C9}\u{DF}-]{0,24}"
}

proptest! {
    #[test]
    fn every_entry_token_finds_its_entry(entries in entries_strategy()) {
        let index = SearchIndex::build(&entries);

        for entry in &entries {
            for token in tokenize(entry) {
                let results = index.search(token.as_str());
                prop_assert!(
                    results.contains(&entry.as_str()),
                    "token {:?} did not retrieve {:?}", token, entry
                );
            }
        }
    }

    #[test]
    fn empty_query_is_always_empty(entries in entries_strategy()) {
        let index = SearchIndex::build(&entries);
        prop_assert!(index.search("").is_empty());
    }

    #[test]
    fn empty_index_never_matches(query in entry_strategy()) {
        let index = SearchIndex::build(Vec::<String>::new());
        prop_assert!(index.search(&query).is_empty());
    }

    #[test]
    fn rebuild_matches_single_build(entries in entries_strategy(), query in entry_strategy()) {
        let fresh = SearchIndex::build(&entries);
        let mut rebuilt = SearchIndex::build(&entries);
        rebuilt.rebuild(&entries);

        prop_assert_eq!(fresh.search(&query), rebuilt.search(&query));
    }

    #[test]
    fn query_case_does_not_matter(entries in entries_strategy(), query in entry_strategy()) {
        let index = SearchIndex::build(&entries);
        prop_assert_eq!(
            index.search(&query.to_uppercase()),
            index.search(&query.to_lowercase())
        );
    }

    #[test]
    fn lowercased_query_finds_the_same_entries(
        entries in prop::collection::vec(unicode_entry_strategy(), 0..24),
        query in unicode_entry_strategy(),
    ) {
        let index = SearchIndex::build(&entries);
        prop_assert_eq!(index.search(&query), index.search(&query.to_lowercase()));

        for entry in &entries {
            if !unique_tokens(entry).is_empty() {
                prop_assert!(index.search(&entry.to_lowercase()).contains(&entry.as_str()));
            }
        }
    }

    #[test]
    fn postings_point_at_entries_holding_the_token(entries in entries_strategy()) {
        let index = SearchIndex::build(&entries);

        for entry in &entries {
            for token in unique_tokens(entry) {
                for &id in index.postings().postings(token.as_str()) {
                    let text = index.entry(id);
                    prop_assert!(text.is_some(), "posting {:?} past the entry table", id);
                    prop_assert!(text.is_some_and(|t| unique_tokens(t).contains(&token)));
                }
            }
        }
    }

    #[test]
    fn results_contain_every_query_token(entries in entries_strategy(), query in entry_strategy()) {
        let index = SearchIndex::build(&entries);
        let wanted = unique_tokens(&query);

        for hit in index.search(&query) {
            let have = unique_tokens(hit);
            for token in &wanted {
                prop_assert!(have.contains(token));
            }
        }
    }

    #[test]
    fn results_are_in_position_order(entries in entries_strategy(), query in entry_strategy()) {
        let index = SearchIndex::build(&entries);

        for policy in [MatchPolicy::AllTokens, MatchPolicy::SlashAlternatives] {
            let engine = QueryEngine::new(&index).with_policy(policy);
            let positions: Vec<u32> = engine
                .search(&Query::new(query.clone()))
                .iter()
                .map(|r| r.position)
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn repeated_tokens_collapse(entries in entries_strategy(), word in "[a-z0-9]{1,6}") {
        let index = SearchIndex::build(&entries);
        let doubled = format!("{word} {word}");
        prop_assert_eq!(index.search(&doubled), index.search(&word));
    }
}

#[test]
fn connector_example() {
    let index = SearchIndex::build(["10-PIN CONNECTOR", "10-PIN HEADER", "20-PIN CONNECTOR"]);

    assert_eq!(index.search("10 connector"), vec!["10-PIN CONNECTOR"]);
    assert_eq!(
        index.search("pin"),
        vec!["10-PIN CONNECTOR", "10-PIN HEADER", "20-PIN CONNECTOR"]
    );
    assert!(index.search("99").is_empty());
    assert_eq!(index.search("pin pin"), index.search("pin"));
}

#[test]
fn dotted_capital_i_matches_in_either_case() {
    let index = SearchIndex::build(["İSTANBUL CABLE", "ISTANBUL CABLE", "10\u{212A} RESISTOR"]);

    assert_eq!(index.search("İSTANBUL"), vec!["İSTANBUL CABLE"]);
    assert_eq!(index.search(&"İSTANBUL".to_lowercase()), vec!["İSTANBUL CABLE"]);
    assert_eq!(index.search("10k resistor"), vec!["10\u{212A} RESISTOR"]);
}
