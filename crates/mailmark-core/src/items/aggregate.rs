//! Building query items from definitions, live results and the baseline.

use super::model::QueryItem;
use crate::Result;
use crate::query::{Category, QueryDefinition, resolve_query};
use crate::results::{LiveResult, ResultIndex};

/// Build one item per definition, in order.
///
/// Counts come from `live`. Deltas are measured against `baseline`; a query
/// with no baseline entry is compared against its own current counts, so it
/// starts at a zero delta instead of jumping by its full count.
///
/// # Errors
///
/// Returns [`crate::Error::Configuration`] if any definition's query cannot be
/// resolved. No items are returned in that case.
pub fn build(
    definitions: &[QueryDefinition],
    category: Category,
    live: &[LiveResult],
    baseline: &[LiveResult],
) -> Result<Vec<QueryItem>> {
    let live = ResultIndex::new(live);
    let baseline = ResultIndex::new(baseline);

    definitions
        .iter()
        .map(|definition| {
            let query = resolve_query(definition, category)?;
            let name = definition.name.clone().or_else(|| match category {
                Category::Maildir => definition.maildir.clone(),
                Category::Bookmark => None,
            });

            let (count, unread) = live
                .get(&query)
                .map_or((0, 0), |result| (result.count, result.unread));
            let (base_count, base_unread) = baseline
                .get(&query)
                .map_or((count, unread), |result| (result.count, result.unread));

            Ok(QueryItem {
                name,
                query,
                key: definition.key,
                count,
                unread,
                delta_count: i64::from(count) - i64::from(base_count),
                delta_unread: i64::from(unread) - i64::from(base_unread),
                favorite: definition.favorite,
                hide: definition.hide,
                hide_unread: definition.hide_unread,
            })
        })
        .collect()
}

/// Make sure exactly one item is the favorite.
///
/// Marks the first item when none is; leaves the items alone otherwise.
pub fn ensure_favorite(items: &mut [QueryItem]) {
    if items.iter().any(|item| item.favorite) {
        return;
    }
    if let Some(first) = items.first_mut() {
        first.favorite = true;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Error;
    use crate::query::QueryLiteral;

    fn inbox() -> QueryDefinition {
        QueryDefinition::bookmark("Inbox", "flag:unread").with_key('u')
    }

    mod build_tests {
        use super::*;

        #[test]
        fn first_delivery_has_zero_delta() {
            let live = [LiveResult::new("flag:unread", 10, 3)];
            let items = build(&[inbox()], Category::Bookmark, &live, &live).unwrap();

            assert_eq!(items.len(), 1);
            let item = &items[0];
            assert_eq!(item.name.as_deref(), Some("Inbox"));
            assert_eq!(item.key, Some('u'));
            assert_eq!((item.count, item.unread), (10, 3));
            assert_eq!((item.delta_count, item.delta_unread), (0, 0));
        }

        #[test]
        fn delta_against_baseline() {
            let baseline = [LiveResult::new("flag:unread", 10, 3)];
            let live = [LiveResult::new("flag:unread", 12, 5)];
            let items = build(&[inbox()], Category::Bookmark, &live, &baseline).unwrap();

            assert_eq!((items[0].count, items[0].unread), (12, 5));
            assert_eq!((items[0].delta_count, items[0].delta_unread), (2, 2));
        }

        #[test]
        fn negative_delta() {
            let baseline = [LiveResult::new("flag:unread", 10, 3)];
            let live = [LiveResult::new("flag:unread", 9, 0)];
            let items = build(&[inbox()], Category::Bookmark, &live, &baseline).unwrap();
            assert_eq!((items[0].delta_count, items[0].delta_unread), (-1, -3));
        }

        #[test]
        fn missing_baseline_entry_uses_current_counts() {
            let live = [LiveResult::new("flag:unread", 40, 7)];
            let items = build(&[inbox()], Category::Bookmark, &live, &[]).unwrap();
            assert_eq!((items[0].delta_count, items[0].delta_unread), (0, 0));
            assert_eq!(items[0].unread, 7);
        }

        #[test]
        fn missing_live_entry_counts_zero() {
            let items = build(&[inbox()], Category::Bookmark, &[], &[]).unwrap();
            assert_eq!((items[0].count, items[0].unread), (0, 0));
        }

        #[test]
        fn maildir_query_and_name_from_path() {
            let live = [LiveResult::new("maildir:\"/Archive\"", 120, 1)];
            let items =
                build(&[QueryDefinition::maildir("/Archive")], Category::Maildir, &live, &[])
                    .unwrap();

            assert_eq!(items[0].query, "maildir:\"/Archive\"");
            assert_eq!(items[0].name.as_deref(), Some("/Archive"));
            assert_eq!(items[0].count, 120);
        }

        #[test]
        fn maildir_explicit_name_wins() {
            let def = QueryDefinition::maildir("/work/inbox").with_name("Work");
            let items = build(&[def], Category::Maildir, &[], &[]).unwrap();
            assert_eq!(items[0].name.as_deref(), Some("Work"));
        }

        #[test]
        fn unnamed_bookmark_keeps_no_name() {
            let def = QueryDefinition {
                query: Some("tag:todo".into()),
                ..QueryDefinition::default()
            };
            let items = build(&[def], Category::Bookmark, &[], &[]).unwrap();
            assert!(items[0].name.is_none());
        }

        #[test]
        fn flags_are_copied() {
            let def = inbox().with_favorite().with_hide().with_hide_unread();
            let items = build(&[def], Category::Bookmark, &[], &[]).unwrap();
            assert!(items[0].favorite && items[0].hide && items[0].hide_unread);
        }

        #[test]
        fn order_is_preserved() {
            let defs = [
                QueryDefinition::bookmark("B", "b"),
                QueryDefinition::bookmark("A", "a"),
                QueryDefinition::bookmark("C", "c"),
            ];
            let items = build(&defs, Category::Bookmark, &[], &[]).unwrap();
            let names: Vec<_> = items.iter().filter_map(|i| i.name.as_deref()).collect();
            assert_eq!(names, ["B", "A", "C"]);
        }

        #[test]
        fn one_bad_definition_aborts_category() {
            let defs = [
                inbox(),
                QueryDefinition::bookmark("Bad", QueryLiteral::Bytes(vec![0xc3, 0x28])),
            ];
            let err = build(&defs, Category::Bookmark, &[], &[]).unwrap_err();
            assert!(matches!(err, Error::Configuration(_)));
        }
    }

    mod favorite_tests {
        use proptest::prelude::*;

        use super::*;

        fn items(favorites: &[bool]) -> Vec<QueryItem> {
            let defs: Vec<_> = favorites
                .iter()
                .enumerate()
                .map(|(i, &favorite)| QueryDefinition {
                    favorite,
                    ..QueryDefinition::bookmark(format!("b{i}"), format!("q{i}"))
                })
                .collect();
            build(&defs, Category::Bookmark, &[], &[]).unwrap()
        }

        #[test]
        fn first_becomes_favorite() {
            let mut list = items(&[false, false, false]);
            ensure_favorite(&mut list);
            assert!(list[0].favorite);
            assert!(!list[1].favorite && !list[2].favorite);
        }

        #[test]
        fn existing_favorite_is_kept() {
            let mut list = items(&[false, true, false]);
            ensure_favorite(&mut list);
            assert!(!list[0].favorite);
            assert!(list[1].favorite);
        }

        #[test]
        fn empty_is_unchanged() {
            let mut list: Vec<QueryItem> = Vec::new();
            ensure_favorite(&mut list);
            assert!(list.is_empty());
        }

        proptest! {
            #[test]
            fn exactly_one_favorite_when_none_or_one_given(
                len in 0usize..8,
                chosen in prop::option::of(0usize..8),
            ) {
                let flags: Vec<bool> = (0..len).map(|i| Some(i) == chosen).collect();
                let mut list = items(&flags);
                ensure_favorite(&mut list);

                let favorites = list.iter().filter(|i| i.favorite).count();
                prop_assert_eq!(favorites, usize::from(len > 0));
                if let Some(c) = chosen.filter(|&c| c < len) {
                    prop_assert!(list[c].favorite);
                }
            }
        }
    }

    proptest! {
        #[test]
        fn deltas_are_current_minus_baseline(
            c in 0u32..10_000, u in 0u32..10_000,
            bc in 0u32..10_000, bu in 0u32..10_000,
        ) {
            let live = [LiveResult::new("flag:unread", c, u)];
            let baseline = [LiveResult::new("flag:unread", bc, bu)];
            let items = build(&[inbox()], Category::Bookmark, &live, &baseline).unwrap();
            prop_assert_eq!(items[0].delta_count, i64::from(c) - i64::from(bc));
            prop_assert_eq!(items[0].delta_unread, i64::from(u) - i64::from(bu));
        }

        #[test]
        fn build_is_deterministic(c in 0u32..500, u in 0u32..500) {
            let live = [LiveResult::new("flag:unread", c, u)];
            let first = build(&[inbox()], Category::Bookmark, &live, &[]).unwrap();
            let second = build(&[inbox()], Category::Bookmark, &live, &[]).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
