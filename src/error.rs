//! Composition errors
//!
//! Raised only while the dashboard binds its widgets at startup. Render
//! failures are not wrapped here; they reach the host as the widget reported them.

use thiserror::Error;

use crate::dashboard::Region;

#[derive(Error, Debug)]
pub enum CompositionError {
    /// A widget's construction entry point failed
    #[error("failed to mount {region} widget")]
    Mount {
        region: Region,
        #[source]
        source: anyhow::Error,
    },
}

impl CompositionError {
    /// Region whose widget could not be mounted
    pub fn region(&self) -> Region {
        match self {
            Self::Mount { region, .. } => *region,
        }
    }
}
