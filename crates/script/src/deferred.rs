//! One-shot deferred demo load.
//!
//! Each call to [`load_data`] is an independent instance with its own timer;
//! there is no cancellation and no way to observe the value early. The
//! failure branch exists in the signature but nothing here triggers it.

use std::fmt::{self, Display, Formatter};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time;

/// Fixed delay before the demo load resolves.
pub const LOAD_DELAY: Duration = Duration::from_secs(1);

/// Failure descriptor for the demo load.
#[derive(Debug)]
pub struct LoadError {
    message: String,
}

impl LoadError {
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for LoadError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.message)
    }
}

impl std::error::Error for LoadError {}

/// Resolve the fixed success string after [`LOAD_DELAY`], never earlier.
pub async fn load_data() -> Result<String, LoadError> {
    time::sleep(LOAD_DELAY).await;
    Ok(String::from("Data loaded successfully!"))
}

/// Fire-and-forget variant: spawn the load onto the runtime and log the
/// outcome when it completes.
pub fn spawn_load_data() -> JoinHandle<()> {
    tokio::spawn(async {
        match load_data().await {
            Ok(message) => log::info!("{message}"),
            Err(error) => log::error!("Error loading data: {:#}", anyhow::Error::from(error)),
        }
    })
}
