use crate::catalog::Catalog;
use crate::clients::{InventoryClient, MenuClient, OrderClient};
use crate::reports::ReportAggregator;
use crate::{inventory_actor, menu_actor, order_actor};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("cannot prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("actor task failed: {0}")]
    ActorTask(#[from] JoinError),
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> LifecycleError {
    let path = path.to_path_buf();
    move |source| LifecycleError::DataDir { path, source }
}

/// Creates `dir` if needed and seeds each missing collection file with `[]`.
///
/// Existing files are left alone, even if they are empty or unreadable; loading
/// deals with those.
pub fn prepare_data_dir(dir: &Path) -> Result<(), LifecycleError> {
    std::fs::create_dir_all(dir).map_err(io_err(dir))?;
    for name in [
        inventory_actor::FILE_NAME,
        menu_actor::FILE_NAME,
        order_actor::FILE_NAME,
    ] {
        let path = dir.join(name);
        if !path.exists() {
            std::fs::write(&path, "[]").map_err(io_err(&path))?;
            info!(path = %path.display(), "Seeded empty collection");
        }
    }
    Ok(())
}

/// The running store actors and their clients.
///
/// ```ignore
/// let system = CafeSystem::start(Path::new("data"))?;
///
/// let coffee = system.inventory_client.create_item(coffee).await?;
/// let order = system.order_client.create_order(order).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CafeSystem {
    pub inventory_client: InventoryClient,
    pub menu_client: MenuClient,
    pub order_client: OrderClient,

    /// Actor tasks, awaited on shutdown.
    handles: Vec<JoinHandle<()>>,
}

impl CafeSystem {
    /// Prepares `data_dir`, loads every collection and spawns the actors.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn start(data_dir: &Path) -> Result<Self, LifecycleError> {
        prepare_data_dir(data_dir)?;

        // 1. Load collections
        let (inventory_actor, inventory) =
            inventory_actor::open(data_dir.join(inventory_actor::FILE_NAME));
        let (menu_actor, menu) = menu_actor::open(data_dir.join(menu_actor::FILE_NAME));
        let (order_actor, orders) = order_actor::open(data_dir.join(order_actor::FILE_NAME));

        let inventory_client = InventoryClient::new(inventory);
        let menu_client = MenuClient::new(menu);
        let order_client = OrderClient::new(orders);

        // 2. Start actors with their context
        let handles = vec![
            tokio::spawn(inventory_actor.run(())),
            tokio::spawn(menu_actor.run(inventory_client.clone())),
            tokio::spawn(order_actor.run((menu_client.clone(), inventory_client.clone()))),
        ];

        info!(dir = %data_dir.display(), "Cafe system started");
        Ok(Self {
            inventory_client,
            menu_client,
            order_client,
            handles,
        })
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(
            self.inventory_client.clone(),
            self.menu_client.clone(),
            self.order_client.clone(),
        )
    }

    pub fn reports(&self) -> ReportAggregator {
        ReportAggregator::new(self.order_client.clone(), self.menu_client.clone())
    }

    /// Drops the clients and waits for every actor to drain its queue and exit.
    ///
    /// Clients cloned elsewhere (for example into the HTTP state) must be dropped too,
    /// or this waits for them.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down cafe system");

        // The order actor holds menu and inventory clients in its context, so it has to
        // stop before the other two can.
        drop(self.order_client);
        drop(self.menu_client);
        drop(self.inventory_client);

        for handle in self.handles.into_iter().rev() {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("Cafe system shutdown complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::EntityClient;

    #[test]
    fn prepare_seeds_missing_files_only() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("nested").join("data");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(data.join(menu_actor::FILE_NAME), "[{\"kept\":true}]").unwrap();

        prepare_data_dir(&data).unwrap();

        assert_eq!(
            std::fs::read_to_string(data.join(inventory_actor::FILE_NAME)).unwrap(),
            "[]"
        );
        assert_eq!(
            std::fs::read_to_string(data.join(menu_actor::FILE_NAME)).unwrap(),
            "[{\"kept\":true}]"
        );
        assert!(data.join(order_actor::FILE_NAME).exists());
    }

    #[test]
    fn prepare_reports_unusable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = prepare_data_dir(&blocker.join("data")).unwrap_err();
        assert!(matches!(err, LifecycleError::DataDir { .. }));
    }

    #[tokio::test]
    async fn test_start_and_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let system = CafeSystem::start(dir.path()).unwrap();
        assert!(system.order_client.list().await.unwrap().is_empty());
        system.shutdown().await.unwrap();
    }
}
