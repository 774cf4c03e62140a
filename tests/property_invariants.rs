use std::collections::BTreeMap;

use proptest::prelude::*;
use tempfile::TempDir;

use stockbook::{
    core::store::{InventoryStore, StoreError},
    types::Quantity,
};

#[derive(Debug, Clone)]
enum Action {
    Add { item_idx: u8, quantity: i16 },
    AddEmpty { quantity: i16 },
    Remove { item_idx: u8, quantity: i16 },
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0u8..12, -20i16..200).prop_map(|(item_idx, quantity)| Action::Add { item_idx, quantity }),
        (-20i16..200).prop_map(|quantity| Action::AddEmpty { quantity }),
        (0u8..12, -50i16..200)
            .prop_map(|(item_idx, quantity)| Action::Remove { item_idx, quantity }),
    ]
}

fn item_name(idx: u8) -> String {
    format!("item-{idx}")
}

proptest! {
    #[test]
    fn random_sequences_match_model_and_keep_invariants(actions in prop::collection::vec(action_strategy(), 1..200)) {
        let mut store = InventoryStore::new();
        let mut model = BTreeMap::<String, Quantity>::new();

        for action in actions {
            match action {
                Action::Add { item_idx, quantity } => {
                    let item = item_name(item_idx);
                    let quantity = Quantity::from(quantity);
                    store.add(&item, quantity, None);
                    if quantity > 0 {
                        *model.entry(item).or_insert(0) += quantity;
                    }
                }
                Action::AddEmpty { quantity } => {
                    store.add("", Quantity::from(quantity), None);
                }
                Action::Remove { item_idx, quantity } => {
                    let item = item_name(item_idx);
                    let quantity = Quantity::from(quantity);
                    let result = store.remove(&item, quantity);
                    match model.get_mut(&item) {
                        Some(current) => {
                            prop_assert_eq!(result, Ok(()));
                            *current -= quantity;
                            if *current <= 0 {
                                model.remove(&item);
                            }
                        }
                        None => {
                            prop_assert_eq!(result, Err(StoreError::ItemNotFound(item.clone())));
                        }
                    }
                }
            }

            for (item, quantity) in store.iter() {
                prop_assert!(!item.is_empty());
                prop_assert!(quantity > 0);
            }
            prop_assert_eq!(store.len(), model.len());
            for (item, quantity) in &model {
                prop_assert_eq!(store.get_quantity(item), *quantity);
            }
        }
    }

    #[test]
    fn add_accumulates(q1 in 0i64..1_000_000, q2 in 0i64..1_000_000) {
        let mut store = InventoryStore::new();
        store.add("widget", q1, None);
        store.add("widget", q2, None);
        prop_assert_eq!(store.get_quantity("widget"), q1 + q2);
    }

    #[test]
    fn persistence_round_trip_preserves_store(entries in prop::collection::vec((0u8..30, 1i64..10_000), 0..40)) {
        let mut store = InventoryStore::new();
        for (idx, quantity) in entries {
            store.add(&item_name(idx), quantity, None);
        }

        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("inventory.json");
        store.save_to(&path).expect("save");

        let mut reloaded = InventoryStore::new();
        reloaded.load_from(&path).expect("load");
        prop_assert_eq!(reloaded, store);
    }
}
