//! Property-based tests for view pipeline invariants.

use creatorview::pipeline::{build_view_model, ViewOptions};
use creatorview::records::{
    derive_metrics, filter_and_sort, filter_creators, sort_creators, Creator, SortDirection,
    SortKey,
};
use proptest::prelude::*;

fn creator_strategy() -> impl Strategy<Value = (String, u64, u32, bool)> {
    (
        "[A-Za-z]{1,6}",
        0u64..50,
        0u32..10_000,
        any::<bool>(),
    )
}

fn dataset_strategy() -> impl Strategy<Value = Vec<Creator>> {
    prop::collection::vec(creator_strategy(), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, followers, cents, active))| {
                Creator::new(
                    i as u64,
                    name,
                    followers,
                    f64::from(cents) / 100.0,
                    active,
                    "2025-01-01",
                )
            })
            .collect()
    })
}

fn key_strategy() -> impl Strategy<Value = Option<SortKey>> {
    prop_oneof![
        Just(None),
        Just(Some(SortKey::Followers)),
        Just(Some(SortKey::Revenue)),
    ]
}

fn direction_strategy() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)]
}

fn options_strategy() -> impl Strategy<Value = ViewOptions> {
    (
        "[a-z]{0,2}",
        any::<bool>(),
        key_strategy(),
        direction_strategy(),
        1i64..8,
    )
        .prop_map(|(search, active_only, sort_key, sort_direction, page_size)| ViewOptions {
            search,
            active_only,
            sort_key,
            sort_direction,
            page: 1,
            page_size,
        })
}

proptest! {
    #[test]
    fn filter_is_idempotent(data in dataset_strategy(), search in "[a-z]{0,2}", active in any::<bool>()) {
        let once = filter_creators(&data, &search, active);
        let twice = filter_creators(&once, &search, active);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sort_is_total_order(data in dataset_strategy(), key in prop_oneof![Just(SortKey::Followers), Just(SortKey::Revenue)], direction in direction_strategy()) {
        let sorted = sort_creators(&data, Some(key), direction);
        prop_assert_eq!(sorted.len(), data.len());

        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (va, vb) = match key {
                SortKey::Followers => (a.followers as f64, b.followers as f64),
                SortKey::Revenue => (a.revenue, b.revenue),
            };
            match direction {
                SortDirection::Asc => prop_assert!(va <= vb),
                SortDirection::Desc => prop_assert!(va >= vb),
            }
            if va == vb {
                prop_assert!(a.name.to_lowercase() <= b.name.to_lowercase());
            }
        }
    }

    #[test]
    fn unsorted_preserves_order(data in dataset_strategy(), direction in direction_strategy()) {
        let result = sort_creators(&data, None, direction);
        prop_assert_eq!(&result, &data);
    }

    #[test]
    fn pages_cover_sorted_set(data in dataset_strategy(), options in options_strategy()) {
        let expected = filter_and_sort(&data, &options.criteria(), &options.sort_spec());
        let first = build_view_model(&data, &options).unwrap();

        let mut concatenated = Vec::new();
        for page in 1..=first.pagination.total_pages as i64 {
            let vm = build_view_model(&data, &options.clone().with_page(page)).unwrap();
            concatenated.extend(vm.rows);
        }
        prop_assert_eq!(concatenated, expected);
    }

    #[test]
    fn metrics_independent_of_page(data in dataset_strategy(), options in options_strategy(), page in -3i64..20) {
        let vm = build_view_model(&data, &options.clone().with_page(page)).unwrap();
        let expected = derive_metrics(&filter_creators(&data, &options.search, options.active_only));
        prop_assert_eq!(vm.metrics, expected);
    }

    #[test]
    fn page_always_in_bounds(data in dataset_strategy(), options in options_strategy(), page in any::<i64>()) {
        let vm = build_view_model(&data, &options.with_page(page)).unwrap();
        let meta = vm.pagination;

        prop_assert!(meta.page >= 1);
        prop_assert!(meta.page <= meta.total_pages.max(1));
        prop_assert!(vm.rows.len() <= meta.page_size);
        prop_assert_eq!(meta.has_next, meta.page < meta.total_pages);
        prop_assert_eq!(meta.has_prev, meta.page > 1);
    }

    #[test]
    fn pipeline_does_not_mutate(data in dataset_strategy(), options in options_strategy()) {
        let before = data.clone();
        let _ = build_view_model(&data, &options);
        prop_assert_eq!(data, before);
    }
}
