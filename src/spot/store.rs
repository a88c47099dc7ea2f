use super::{NewSpot, Spot};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use time::OffsetDateTime;
use tracing::warn;

/// Append-only, insertion ordered collection of spots.
///
/// Ids of locally added spots are derived from the wall clock in milliseconds
/// and forced to grow monotonically. Id assignment and append happen under a
/// single lock, so concurrent `add` calls can't produce duplicate ids.
#[derive(Default)]
pub struct SpotStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    spots: Vec<Spot>,
    ids: HashSet<String>,
    last_id_ms: i64,
}

impl SpotStore {
    pub fn new() -> Self {
        SpotStore::default()
    }

    pub fn list(&self) -> Vec<Spot> {
        self.lock().spots.clone()
    }

    pub fn add(&self, candidate: NewSpot) -> Spot {
        self.add_at(candidate, now_ms())
    }

    fn add_at(&self, candidate: NewSpot, now_ms: i64) -> Spot {
        let mut inner = self.lock();
        let mut id_ms = now_ms.max(inner.last_id_ms.saturating_add(1));
        while inner.ids.contains(&id_ms.to_string()) {
            id_ms += 1;
        }
        inner.last_id_ms = id_ms;
        let spot = candidate.with_id(id_ms.to_string());
        inner.ids.insert(spot.id.clone());
        inner.spots.push(spot.clone());
        spot
    }

    /// Bulk load path. Keeps the incoming order and drops records with a
    /// blank or already known id. Returns the number of appended spots.
    pub fn extend(&self, spots: Vec<Spot>) -> usize {
        let now_ms = now_ms();
        let mut inner = self.lock();
        let mut appended = 0;
        for spot in spots {
            if spot.id.trim().is_empty() {
                warn!(name = spot.name, "Skipping spot without id");
                continue;
            }
            if !inner.ids.insert(spot.id.clone()) {
                warn!(id = spot.id, "Skipping spot with duplicate id");
                continue;
            }
            // Ids from the future are opaque, collisions are still avoided
            // through the id set
            if let Some(id_ms) = spot.id.parse::<i64>().ok().filter(|it| *it <= now_ms) {
                inner.last_id_ms = inner.last_id_ms.max(id_ms);
            }
            inner.spots.push(spot);
            appended += 1;
        }
        appended
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn now_ms() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}
