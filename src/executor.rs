// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sequential application of one intent across many lights.
//!
//! Each light gets exactly one call and its own outcome. A failure on one
//! light never stops the others, and nothing is rolled back. Calls are
//! strictly sequential, with a short pause between them when more than one
//! light is targeted so the bridge's embedded server is not flooded.

use std::time::Duration;

use crate::command::Intent;
use crate::error::Result;
use crate::protocol::{Bridge, LightResult};
use crate::state::Light;
use crate::types::LightId;

/// Per-light outcomes, in target order.
///
/// Duplicated targets appear once per occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultMap(Vec<(LightId, LightResult)>);

impl ResultMap {
    /// Returns the number of recorded outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if every light accepted the change.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.0.iter().all(|(_, result)| result.success)
    }

    /// Returns the first outcome recorded for `id`.
    #[must_use]
    pub fn get(&self, id: &LightId) -> Option<&LightResult> {
        self.0.iter().find(|(k, _)| k == id).map(|(_, r)| r)
    }

    /// Returns the outcomes as a slice, in target order.
    #[must_use]
    pub fn as_slice(&self) -> &[(LightId, LightResult)] {
        &self.0
    }

    /// Iterates over outcomes in target order.
    pub fn iter(&self) -> impl Iterator<Item = &(LightId, LightResult)> {
        self.0.iter()
    }

    fn push(&mut self, id: LightId, result: LightResult) {
        self.0.push((id, result));
    }
}

impl FromIterator<(LightId, LightResult)> for ResultMap {
    fn from_iter<I: IntoIterator<Item = (LightId, LightResult)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Applies intents and reads states across a list of lights.
///
/// # Examples
///
/// ```no_run
/// use hue_client::command::Intent;
/// use hue_client::executor::BatchExecutor;
/// use hue_client::protocol::BridgeClient;
///
/// # async fn example() -> hue_client::Result<()> {
/// let client = BridgeClient::new("192.168.1.2", "my-username")?;
/// let targets = vec!["1".into(), "2".into()];
/// let results = BatchExecutor::new()
///     .apply(&targets, &Intent::SetPower(true), &client)
///     .await?;
/// assert_eq!(results.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BatchExecutor {
    delay: Duration,
}

impl Default for BatchExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchExecutor {
    /// Pause between successive calls in a multi-light batch.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);

    /// Creates an executor with the default inter-call delay.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
        }
    }

    /// Sets the pause between successive calls.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Applies `intent` to every target, in order.
    ///
    /// The payload is built once up front, so an invalid hex color fails the
    /// whole batch before any light is touched. After that every target is
    /// attempted; a transport error on one light is recorded as that light's
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns an error only when the intent itself cannot be turned into a
    /// payload (invalid color, unsupported xy).
    pub async fn apply<B: Bridge>(
        &self,
        targets: &[LightId],
        intent: &Intent,
        bridge: &B,
    ) -> Result<ResultMap> {
        let payload = intent.to_payload()?;
        let mut results = ResultMap::default();

        tracing::info!(%intent, lights = targets.len(), "Applying intent");

        for (i, id) in targets.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.delay).await;
            }

            let result = match bridge.put_light_state(id, &payload).await {
                Ok(result) => result,
                Err(e) => LightResult::failed(e.to_string()),
            };

            if result.success {
                tracing::debug!(light = %id, "Light updated");
            } else {
                tracing::warn!(light = %id, detail = %result.detail, "Light update failed");
            }

            results.push(id.clone(), result);
        }

        Ok(results)
    }

    /// Reads the state of every target, in order.
    ///
    /// # Errors
    ///
    /// Returns the first read error; a report is all-or-nothing.
    pub async fn query<B: Bridge>(
        &self,
        targets: &[LightId],
        bridge: &B,
    ) -> Result<Vec<(LightId, Light)>> {
        let mut lights = Vec::with_capacity(targets.len());

        for (i, id) in targets.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.delay).await;
            }
            let light = bridge.get_light_state(id).await?;
            lights.push((id.clone(), light));
        }

        Ok(lights)
    }
}
