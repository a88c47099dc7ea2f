use super::spot_source::SpotSource;
use crate::category::Category;
use crate::db;
use crate::db::conf::schema::Conf;
use crate::form::{SpotIntakeForm, ValidationErrors};
use crate::map::{LatLng, MapSettings, MapView};
use crate::spot::{Spot, SpotStore};
use deadpool_sqlite::Pool;
use futures_util::future;
use std::sync::OnceLock;
use tracing::{error, info, warn};

/// Application scoped owner of the spot store and the categories, shared by
/// every server worker.
pub struct Session {
    store: SpotStore,
    categories: OnceLock<Vec<Category>>,
    settings: MapSettings,
    persist_spots: bool,
}

impl Session {
    pub fn new(conf: &Conf) -> Self {
        Session {
            store: SpotStore::new(),
            categories: OnceLock::new(),
            settings: MapSettings::from(conf),
            persist_spots: conf.persist_spots,
        }
    }

    /// Initial load: remote spots first, then the locally persisted ones.
    /// Categories are set once, later loads keep the first set.
    pub async fn load(&self, source: &SpotSource, pool: &Pool) {
        let (spots, categories) =
            future::join(source.fetch_spots(), source.fetch_categories()).await;
        let mut added = self.store.extend(spots);
        if self.persist_spots {
            match db::spot::queries::select_all(pool).await {
                Ok(spots) => added += self.store.extend(spots),
                Err(e) => error!(error = %e, "Failed to read persisted spots"),
            }
        }
        let categories_count = categories.len();
        if self.categories.set(categories).is_err() {
            warn!("Categories are already loaded, ignoring the new set");
        }
        info!(spots = added, categories = categories_count, "Loaded session");
    }

    pub fn spots(&self) -> Vec<Spot> {
        self.store.list()
    }

    /// Empty until the initial load completes.
    pub fn categories(&self) -> Vec<Category> {
        self.categories.get().cloned().unwrap_or_default()
    }

    pub fn map_view(&self, category: &str, hidden_layers: &[String]) -> MapView {
        let mut view = MapView::new(self.settings.clone());
        view.load(self.store.list(), self.categories());
        view.select_category(category);
        view.set_hidden_layers(hidden_layers.iter().cloned());
        view
    }

    /// Opens the intake form at `at` and submits it. Persisting is best
    /// effort: the spot stays in the store if the write fails.
    pub async fn add_spot(
        &self,
        form: &SpotIntakeForm,
        at: LatLng,
        pool: &Pool,
    ) -> Result<Spot, ValidationErrors> {
        let mut view = self.map_view("", &[]);
        view.secondary_click(at);
        let spot = view.submit_intake(form, &self.store)?;
        if self.persist_spots {
            if let Err(e) = db::spot::queries::insert(spot.clone(), pool).await {
                error!(id = spot.id, error = %e, "Failed to persist spot");
            }
        }
        Ok(spot)
    }

    #[cfg(test)]
    pub fn mock(spots: Vec<Spot>, categories: Vec<Category>) -> Session {
        let session = Session::new(&Conf::mock());
        session.store.extend(spots);
        let _ = session.categories.set(categories);
        session
    }
}
