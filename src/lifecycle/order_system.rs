use crate::clients::{OrderClient, QueueClient, VerificationClient};
use crate::clock::{SharedClock, SystemClock};
use crate::config::Config;
use crate::menu::Menu;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// The runtime orchestrator for the ordering core.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the queue, order, order item and
///   verification actors
/// - **Dependency Wiring**: the order actor receives the queue client and the clock as
///   its run context
/// - **Housekeeping**: a sweeper task that purges used and expired verification codes
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(&Config::default());
///
/// let receipt = system.order_client.create_order(request).await?;
/// let details = system.order_client.get_order(receipt.order_id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    pub order_client: OrderClient,

    /// Direct access to the counter, for inspection.
    pub queue_client: QueueClient,

    pub verification_client: VerificationClient,

    pub menu: Arc<Menu>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,

    sweeper: JoinHandle<()>,
}

impl OrderSystem {
    /// Starts the system on the wall clock. Must be called inside a Tokio runtime.
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Starts the system on `clock`; tests pass a [`ManualClock`](crate::clock::ManualClock)
    /// to move across midnight.
    pub fn with_clock(config: &Config, clock: SharedClock) -> Self {
        let buffer = config.channel_buffer;
        let menu = Arc::new(Menu::default());

        // 1. Create actors (no dependencies yet)
        let (queue_actor, queue_client) = crate::queue_actor::new(buffer);
        let (order_actor, orders) = crate::order_actor::new(buffer);
        let (item_actor, item_client) = crate::order_item_actor::new(buffer);
        let (verification_actor, verification_client) =
            crate::verification_actor::new(buffer, clock.clone(), config.otp_ttl);

        // 2. Start actors with injected context
        let queue_handle = tokio::spawn(queue_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run((queue_client.clone(), clock)));
        let item_handle = tokio::spawn(item_actor.run(()));
        let verification_handle = tokio::spawn(verification_actor.run(()));

        let order_client = OrderClient::new(orders, item_client, menu.clone(), config.total_policy);

        // 3. Background housekeeping
        let sweeper = tokio::spawn(sweep_verification_codes(
            verification_client.clone(),
            config.otp_sweep_interval,
        ));

        info!(
            buffer,
            total_policy = ?config.total_policy,
            "Order system started"
        );

        Self {
            order_client,
            queue_client,
            verification_client,
            menu,
            handles: vec![order_handle, item_handle, queue_handle, verification_handle],
            sweeper,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Stops the sweeper, drops the clients so every actor sees its channel close, and
    /// waits for the actor tasks. Clones of the clients handed out earlier (for example
    /// to the HTTP router) must be dropped first, or this waits for them.
    ///
    /// Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        self.sweeper.abort();
        let _ = self.sweeper.await;

        drop(self.order_client);
        drop(self.queue_client);
        drop(self.verification_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

async fn sweep_verification_codes(client: VerificationClient, every: Duration) {
    let mut interval = tokio::time::interval(every);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        match client.purge_unusable().await {
            Ok(0) => {}
            Ok(removed) => info!(removed, "Swept verification codes"),
            Err(e) => warn!(error = %e, "Verification sweep failed"),
        }
    }
}
