// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory bridge used by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::{ProtocolError, Result};
use crate::protocol::{Bridge, LightResult, StatePayload};
use crate::state::{Light, LightMap, LightState};
use crate::types::LightId;

/// How the fake bridge answers a write to a given light.
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Reject(&'static str),
    Unreachable,
}

#[derive(Debug, Default)]
pub(crate) struct FakeBridge {
    lights: LightMap,
    replies: HashMap<LightId, Reply>,
    pub(crate) list_calls: Cell<usize>,
    pub(crate) writes: RefCell<Vec<(LightId, StatePayload)>>,
    pub(crate) reads: RefCell<Vec<LightId>>,
}

impl FakeBridge {
    pub(crate) fn with_lights(ids: &[&str]) -> Self {
        let lights = ids
            .iter()
            .map(|id| {
                let light = Light {
                    name: format!("Light {id}"),
                    state: LightState::default(),
                };
                (LightId::from(*id), light)
            })
            .collect();
        Self {
            lights,
            ..Self::default()
        }
    }

    pub(crate) fn reply(mut self, id: &str, reply: Reply) -> Self {
        self.replies.insert(LightId::from(id), reply);
        self
    }
}

impl Bridge for FakeBridge {
    async fn list_lights(&self) -> Result<&LightMap> {
        self.list_calls.set(self.list_calls.get() + 1);
        Ok(&self.lights)
    }

    async fn get_light_state(&self, id: &LightId) -> Result<Light> {
        self.reads.borrow_mut().push(id.clone());
        self.lights
            .get(id)
            .cloned()
            .ok_or_else(|| ProtocolError::Unreachable { status: 404 }.into())
    }

    async fn put_light_state(&self, id: &LightId, state: &StatePayload) -> Result<LightResult> {
        self.writes.borrow_mut().push((id.clone(), state.clone()));
        match self.replies.get(id) {
            None => Ok(LightResult::ok()),
            Some(Reply::Reject(detail)) => Ok(LightResult::failed(*detail)),
            Some(Reply::Unreachable) => Err(ProtocolError::Unreachable { status: 503 }.into()),
        }
    }
}
