use nodescope_engine::{filter, paginate, sort};
use nodescope_testing::assertions::{
    assert_ordered_subset, assert_permutation, assert_sorted_stable,
};
use nodescope_testing::strategies;
use nodescope_types::{NodeRecord, SortConfig, SortDirection, SortKey, ViewState};
use proptest::prelude::*;

proptest! {
    #[test]
    fn filter_returns_matching_subset(
        nodes in strategies::nodes(60),
        term in strategies::search_term(),
    ) {
        let filtered = filter::apply(&nodes, &term);
        prop_assert!(assert_ordered_subset(&nodes, &filtered).is_ok());

        let needle = term.to_lowercase();
        for row in &filtered {
            prop_assert!(row.operator.to_lowercase().contains(&needle));
        }
        let expected = nodes
            .iter()
            .filter(|n| n.operator.to_lowercase().contains(&needle))
            .count();
        prop_assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn empty_term_keeps_everything(nodes in strategies::nodes(60)) {
        let filtered = filter::apply(&nodes, "");
        prop_assert_eq!(filtered.len(), nodes.len());
        prop_assert!(assert_ordered_subset(&nodes, &filtered).is_ok());
    }

    #[test]
    fn sort_is_stable_permutation(
        nodes in strategies::nodes(80),
        config in strategies::sort_config(),
    ) {
        let input: Vec<&NodeRecord> = nodes.iter().collect();
        let ordered = sort::apply(&input, config);
        prop_assert!(assert_permutation(&input, &ordered).is_ok());
        let checked = assert_sorted_stable(&input, &ordered, config);
        prop_assert!(checked.is_ok(), "{:?}", checked);
    }

    #[test]
    fn repeated_toggle_cycles_asc_desc_asc(
        nodes in strategies::nodes(80),
        key in proptest::sample::select(SortKey::ALL.to_vec()),
    ) {
        let input: Vec<&NodeRecord> = nodes.iter().collect();
        let first = ViewState::default()
            .with_sort(SortConfig::new(next_key(key), SortDirection::Asc))
            .with_sort_toggled(key);
        let second = first.with_sort_toggled(key);
        let third = second.with_sort_toggled(key);

        prop_assert_eq!(first.sort, SortConfig::new(key, SortDirection::Asc));
        prop_assert_eq!(second.sort, SortConfig::new(key, SortDirection::Desc));
        prop_assert_eq!(third.sort, first.sort);

        let asc = sort::apply(&input, first.sort);
        let desc = sort::apply(&input, second.sort);
        let again = sort::apply(&input, third.sort);

        prop_assert!(asc.iter().zip(&again).all(|(a, b)| std::ptr::eq(*a, *b)));
        let checked = assert_sorted_stable(&input, &desc, second.sort);
        prop_assert!(checked.is_ok(), "{:?}", checked);

        // Operators are unique, so descending is exactly ascending reversed
        if key == SortKey::Operator {
            prop_assert!(asc.iter().rev().zip(&desc).all(|(a, b)| std::ptr::eq(*a, *b)));
        }
    }

    #[test]
    fn pages_concatenate_to_input(
        len in 0usize..650,
        size in strategies::page_size(),
        requested in 0usize..20,
    ) {
        let rows: Vec<usize> = (0..len).collect();

        let page = paginate::apply(&rows, requested, size);
        prop_assert!(page.info.page >= 1 && page.info.page <= page.info.total_pages);

        let mut rebuilt = Vec::with_capacity(len);
        for n in 1..=page.info.total_pages {
            let page = paginate::apply(&rows, n, size);
            prop_assert_eq!(page.info.page, n);
            prop_assert!(page.rows.len() <= size.get());
            rebuilt.extend_from_slice(page.rows);
        }
        prop_assert_eq!(rebuilt, rows);
    }
}

fn next_key(key: SortKey) -> SortKey {
    let index = SortKey::ALL.iter().position(|k| *k == key).unwrap_or(0);
    SortKey::ALL[(index + 1) % SortKey::ALL.len()]
}
