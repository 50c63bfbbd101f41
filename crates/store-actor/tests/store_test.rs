use async_trait::async_trait;
use std::collections::HashMap;
use store_actor::{StoreActor, StoreEntity};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Bin {
    id: u32,
    label: String,
    units: u32,
}

#[derive(Debug)]
struct BinCreate {
    label: String,
    units: u32,
}

#[derive(Debug)]
struct BinUpdate {
    label: Option<String>,
}

#[derive(Debug)]
enum BinQuery {
    All,
    NonEmpty,
}

#[derive(Debug)]
enum BinAction {
    CountUnits,
}

#[derive(Debug)]
enum BinBatch {
    /// Withdraw units from several bins; all lines or none.
    Withdraw(Vec<(u32, u32)>),
}

#[derive(Debug, thiserror::Error)]
enum BinError {
    #[error("Bin not found: {0}")]
    NotFound(u32),
    #[error("Not enough units in bin {0}")]
    NotEnoughUnits(u32),
}

#[async_trait]
impl StoreEntity for Bin {
    type Id = u32;
    type Create = BinCreate;
    type Update = BinUpdate;
    type Query = BinQuery;
    type Action = BinAction;
    type ActionResult = u32;
    type Batch = BinBatch;
    type BatchResult = ();
    type Context = ();
    type Error = BinError;

    fn from_create_params(id: u32, params: BinCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            label: params.label,
            units: params.units,
        })
    }

    async fn on_update(&mut self, update: BinUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(label) = update.label {
            self.label = label;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: BinAction, _ctx: &()) -> Result<u32, Self::Error> {
        match action {
            BinAction::CountUnits => Ok(self.units),
        }
    }

    fn matches(&self, query: &BinQuery) -> bool {
        match query {
            BinQuery::All => true,
            BinQuery::NonEmpty => self.units > 0,
        }
    }

    fn apply_batch(
        store: &mut HashMap<u32, Self>,
        batch: BinBatch,
        _ctx: &(),
    ) -> Result<(), Self::Error> {
        match batch {
            BinBatch::Withdraw(lines) => {
                // Validate every line before touching any bin.
                for (id, amount) in &lines {
                    let bin = store.get(id).ok_or(BinError::NotFound(*id))?;
                    if bin.units < *amount {
                        return Err(BinError::NotEnoughUnits(*id));
                    }
                }
                for (id, amount) in lines {
                    if let Some(bin) = store.get_mut(&id) {
                        bin.units -= amount;
                    }
                }
                Ok(())
            }
        }
    }
}

// --- Tests ---

#[tokio::test]
async fn full_store_lifecycle() {
    let (actor, client) = StoreActor::<Bin>::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create
    let id: u32 = client
        .create(BinCreate {
            label: "A".into(),
            units: 12,
        })
        .await
        .unwrap();
    assert_eq!(id, 1); // first id is 1

    // 2. Action
    let units: u32 = client
        .perform_action(id, BinAction::CountUnits)
        .await
        .unwrap();
    assert_eq!(units, 12);

    // 3. Update
    let updated = client
        .update(
            id,
            BinUpdate {
                label: Some("B".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.label, "B");

    // 4. Delete
    client.delete(id).await.unwrap();
    let gone = client.get(id).await.unwrap();
    assert!(gone.is_none());
}

#[tokio::test]
async fn find_filters_and_sorts_by_id() {
    let (actor, client) = StoreActor::<Bin>::new(10);
    tokio::spawn(actor.run(()));

    for (label, units) in [("A", 3), ("B", 0), ("C", 7)] {
        client
            .create(BinCreate {
                label: label.into(),
                units,
            })
            .await
            .unwrap();
    }

    let all = client.find(BinQuery::All).await.unwrap();
    assert_eq!(all.len(), 3);
    let ids: Vec<u32> = all.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let non_empty = client.find(BinQuery::NonEmpty).await.unwrap();
    let labels: Vec<&str> = non_empty.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["A", "C"]);
}

#[tokio::test]
async fn batch_is_all_or_nothing() {
    let (actor, client) = StoreActor::<Bin>::new(10);
    tokio::spawn(actor.run(()));

    let a = client
        .create(BinCreate {
            label: "A".into(),
            units: 10,
        })
        .await
        .unwrap();
    let b = client
        .create(BinCreate {
            label: "B".into(),
            units: 2,
        })
        .await
        .unwrap();

    // Second line exceeds bin B; nothing may change.
    let result = client
        .execute_batch(BinBatch::Withdraw(vec![(a, 5), (b, 3)]))
        .await;
    assert!(result.is_err());

    let bin_a = client.get(a).await.unwrap().unwrap();
    let bin_b = client.get(b).await.unwrap().unwrap();
    assert_eq!(bin_a.units, 10);
    assert_eq!(bin_b.units, 2);

    // Valid batch applies every line.
    client
        .execute_batch(BinBatch::Withdraw(vec![(a, 5), (b, 2)]))
        .await
        .unwrap();
    assert_eq!(client.get(a).await.unwrap().unwrap().units, 5);
    assert_eq!(client.get(b).await.unwrap().unwrap().units, 0);
}
