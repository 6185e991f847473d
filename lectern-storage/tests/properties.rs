//! Property tests for the record store's update and ordering contracts.

use lectern_model::{Row, Table};
use lectern_storage::{Direction, RecordStore, SeedData};
use lectern_types::{NoLatency, RecordId, SystemClock};
use proptest::prelude::*;
use serde_json::Value;
use std::sync::Arc;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn column_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["title", "excerpt", "status", "category", "price", "author"])
        .prop_map(str::to_string)
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(Value::from),
        "[a-z ]{0,12}".prop_map(Value::String),
    ]
}

fn row_strategy() -> impl Strategy<Value = Row> {
    prop::collection::btree_map(column_strategy(), value_strategy(), 0..6)
        .prop_map(|m| m.into_iter().collect())
}

fn timestamp_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of((0i64..2_000_000_000, 0u32..1000).prop_map(|(secs, millis)| {
        chrono::DateTime::from_timestamp(secs, millis * 1_000_000)
            .unwrap()
            .to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true)
    }))
}

proptest! {
    /// update(T, R.id, P) == {...R, ...P}
    #[test]
    fn update_preserves_unpatched_fields(original in row_strategy(), patch in row_strategy()) {
        let rt = runtime();
        rt.block_on(async {
            let store = RecordStore::empty();
            let inserted = store.insert(Table::Books, original).await.unwrap();
            let id = RecordId::parse(inserted["id"].as_str().unwrap()).unwrap();

            let updated = store.update(Table::Books, id, patch.clone()).await.unwrap();

            let mut expected = inserted.clone();
            for (k, v) in patch {
                expected.insert(k, v);
            }
            prop_assert_eq!(&updated, &expected);

            let stored = store.select(Table::Books).eq("id", id).await.unwrap();
            prop_assert_eq!(stored, vec![expected]);
            Ok(())
        })?;
    }

    /// Every created_at is ≥ the next one when ordered descending.
    #[test]
    fn descending_order_is_non_increasing(stamps in prop::collection::vec(timestamp_strategy(), 0..20)) {
        let rows: Vec<Row> = stamps
            .iter()
            .enumerate()
            .map(|(i, stamp)| {
                let mut row = Row::new();
                row.insert("n".into(), Value::from(i));
                row.insert(
                    "created_at".into(),
                    stamp.clone().map_or(Value::Null, Value::String),
                );
                row
            })
            .collect();
        let seed = SeedData::empty().with_rows(Table::Articles, rows);
        let store = RecordStore::new(seed, Arc::new(NoLatency), Arc::new(SystemClock));

        let rt = runtime();
        let ordered = rt
            .block_on(store.select(Table::Articles).order("created_at", Direction::Descending).into_future())
            .unwrap();
        prop_assert_eq!(ordered.len(), stamps.len());

        let parsed: Vec<Option<chrono::DateTime<chrono::Utc>>> = ordered
            .iter()
            .map(|r| r["created_at"].as_str().map(|s| s.parse().unwrap()))
            .collect();
        for pair in parsed.windows(2) {
            match (pair[0], pair[1]) {
                (Some(a), Some(b)) => prop_assert!(a >= b),
                (Some(_), None) => prop_assert!(false, "null after a timestamp"),
                _ => {}
            }
        }
    }

    /// Deleting an id that was never inserted leaves every table unchanged.
    #[test]
    fn delete_of_unknown_id_is_a_no_op(rows in prop::collection::vec(row_strategy(), 0..8)) {
        let seed = SeedData::empty().with_rows(Table::Books, rows.clone());
        let store = RecordStore::new(seed, Arc::new(NoLatency), Arc::new(SystemClock));

        let rt = runtime();
        rt.block_on(async {
            let deleted = store.delete(Table::Books, RecordId::new()).await.unwrap();
            prop_assert!(deleted.success);
            prop_assert_eq!(store.select(Table::Books).await.unwrap(), rows);
            Ok(())
        })?;
    }
}
