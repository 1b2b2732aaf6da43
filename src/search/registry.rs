use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use uuid::Uuid;

use super::view::{Projection, SearchView};
use crate::error::{AppError, AppResult};

/// Views untouched for this long are dropped on the next insert
pub const VIEW_IDLE_TTL: Duration = Duration::from_secs(60 * 60);

struct Entry {
    view: SearchView,
    touched: Instant,
}

/// Live search views keyed by view id.
///
/// The lock guards the map; each view is only ever mutated by requests
/// carrying its own id.
pub struct SearchViews {
    views: RwLock<HashMap<Uuid, Entry>>,
    idle_ttl: Duration,
}

impl Default for SearchViews {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchViews {
    pub fn new() -> Self {
        Self::with_idle_ttl(VIEW_IDLE_TTL)
    }

    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            views: RwLock::new(HashMap::new()),
            idle_ttl,
        }
    }

    pub async fn insert(&self, view: SearchView) -> (Uuid, Projection) {
        let id = Uuid::new_v4();
        let projection = view.projection();
        let now = Instant::now();

        let mut views = self.views.write().await;
        let before = views.len();
        views.retain(|_, entry| now.duration_since(entry.touched) < self.idle_ttl);
        let pruned = before - views.len();
        if pruned > 0 {
            tracing::debug!(pruned, "Pruned idle search views");
        }
        views.insert(id, Entry { view, touched: now });

        (id, projection)
    }

    /// Reading a view counts as activity and keeps it alive
    pub async fn projection(&self, id: Uuid) -> AppResult<Projection> {
        let mut views = self.views.write().await;
        let entry = views.get_mut(&id).ok_or_else(|| not_found(id))?;
        entry.touched = Instant::now();
        Ok(entry.view.projection())
    }

    /// Run a mutation against one view and return its fresh projection
    pub async fn update<F>(&self, id: Uuid, f: F) -> AppResult<Projection>
    where
        F: FnOnce(&mut SearchView),
    {
        let mut views = self.views.write().await;
        let entry = views.get_mut(&id).ok_or_else(|| not_found(id))?;
        f(&mut entry.view);
        entry.touched = Instant::now();
        Ok(entry.view.projection())
    }

    pub async fn remove(&self, id: Uuid) -> AppResult<()> {
        self.views
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    pub async fn len(&self) -> usize {
        self.views.read().await.len()
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Search view {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;
    use crate::search::controller::RadiusInput;

    fn empty_view() -> SearchView {
        SearchView::new(vec![], &MapConfig::default())
    }

    #[tokio::test]
    async fn test_insert_update_remove() {
        let views = SearchViews::new();
        let (id, initial) = views.insert(empty_view()).await;
        assert!(!initial.radius.enabled);

        let toggled = views
            .update(id, |view| {
                view.toggle();
                view.set_radius(RadiusInput::Number(3.0));
            })
            .await
            .unwrap();
        assert!(toggled.radius.enabled);
        assert_eq!(toggled.radius.radius_km, 3.0);
        assert_eq!(views.projection(id).await.unwrap(), toggled);

        views.remove(id).await.unwrap();
        assert!(matches!(views.projection(id).await, Err(AppError::NotFound(_))));
        assert!(matches!(views.remove(id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_views_are_independent() {
        let views = SearchViews::new();
        let (a, _) = views.insert(empty_view()).await;
        let (b, _) = views.insert(empty_view()).await;

        views.update(a, |view| {
            view.toggle();
        })
        .await
        .unwrap();

        assert!(views.projection(a).await.unwrap().radius.enabled);
        assert!(!views.projection(b).await.unwrap().radius.enabled);
    }

    #[tokio::test]
    async fn test_idle_views_are_pruned_on_insert() {
        let views = SearchViews::with_idle_ttl(Duration::ZERO);
        let (first, _) = views.insert(empty_view()).await;
        let (second, _) = views.insert(empty_view()).await;

        assert_eq!(views.len().await, 1);
        assert!(views.projection(first).await.is_err());
        assert!(views.projection(second).await.is_ok());
    }

    #[tokio::test]
    async fn test_polled_view_survives_pruning() {
        let views = SearchViews::with_idle_ttl(Duration::from_millis(300));
        let (polled, _) = views.insert(empty_view()).await;
        let (idle, _) = views.insert(empty_view()).await;

        tokio::time::sleep(Duration::from_millis(200)).await;
        views.projection(polled).await.unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;
        views.insert(empty_view()).await;

        assert_eq!(views.len().await, 2);
        assert!(views.projection(polled).await.is_ok());
        assert!(matches!(views.projection(idle).await, Err(AppError::NotFound(_))));
    }
}
