// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light selection.

use crate::error::Result;
use crate::protocol::Bridge;
use crate::types::LightId;

/// Which lights a command targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightSelector {
    /// Every light the bridge knows about.
    All,
    /// An explicit list, in the order given. Duplicates are kept.
    Ids(Vec<LightId>),
}

impl LightSelector {
    /// Parses a light spec: `all` (case-insensitive), a comma-separated list,
    /// or a single id.
    ///
    /// Segments are used verbatim; an unknown id only shows up when the
    /// bridge rejects it.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_client::command::LightSelector;
    /// use hue_client::types::LightId;
    ///
    /// assert_eq!(LightSelector::parse("ALL"), LightSelector::All);
    /// assert_eq!(
    ///     LightSelector::parse("1,2,3"),
    ///     LightSelector::Ids(vec!["1".into(), "2".into(), "3".into()])
    /// );
    /// assert_eq!(LightSelector::parse("7"), LightSelector::Ids(vec![LightId::from("7")]));
    /// ```
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        if spec.eq_ignore_ascii_case("all") {
            Self::All
        } else if spec.contains(',') {
            Self::Ids(spec.split(',').map(LightId::from).collect())
        } else {
            Self::Ids(vec![LightId::from(spec)])
        }
    }

    /// Resolves the selector to an ordered list of light ids.
    ///
    /// `All` asks the bridge for its light list, in the order the bridge
    /// client yields it.
    ///
    /// # Errors
    ///
    /// Propagates bridge errors when resolving `All`; explicit lists never fail.
    pub async fn resolve<B: Bridge>(&self, bridge: &B) -> Result<Vec<LightId>> {
        match self {
            Self::All => {
                let lights = bridge.list_lights().await?;
                Ok(lights.keys().cloned().collect())
            }
            Self::Ids(ids) => Ok(ids.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::fake::FakeBridge;

    fn ids(list: &[&str]) -> Vec<LightId> {
        list.iter().copied().map(LightId::from).collect()
    }

    #[tokio::test]
    async fn comma_list_keeps_order() {
        let bridge = FakeBridge::with_lights(&["1", "2", "3"]);
        let resolved = LightSelector::parse("3,1,2").resolve(&bridge).await.unwrap();
        assert_eq!(resolved, ids(&["3", "1", "2"]));
        assert_eq!(bridge.list_calls.get(), 0);
    }

    #[tokio::test]
    async fn single_id_is_verbatim() {
        let bridge = FakeBridge::default();
        let resolved = LightSelector::parse("7").resolve(&bridge).await.unwrap();
        assert_eq!(resolved, ids(&["7"]));
    }

    #[tokio::test]
    async fn list_segments_are_not_trimmed_or_deduplicated() {
        let bridge = FakeBridge::default();
        let resolved = LightSelector::parse("1, 2,1").resolve(&bridge).await.unwrap();
        assert_eq!(resolved, ids(&["1", " 2", "1"]));
    }

    #[tokio::test]
    async fn all_lists_lights_once() {
        let bridge = FakeBridge::with_lights(&["1", "2", "5"]);
        let resolved = LightSelector::parse("all").resolve(&bridge).await.unwrap();
        assert_eq!(resolved, ids(&["1", "2", "5"]));
        assert_eq!(bridge.list_calls.get(), 1);
    }

    #[test]
    fn all_is_case_insensitive() {
        assert_eq!(LightSelector::parse("aLL"), LightSelector::All);
    }
}
