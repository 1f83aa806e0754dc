//! Trigger classification for workflow definitions.
//!
//! Only two events matter for documentation: `workflow_call`, which makes a
//! workflow reusable, and `workflow_dispatch`, which allows manual runs. The
//! `on:` key may be a mapping, a single event name or a list of event names.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

use crate::metadata::{InputMap, OutputMap, SecretMap};

const WORKFLOW_CALL: &str = "workflow_call";
const WORKFLOW_DISPATCH: &str = "workflow_dispatch";

/// Contract exposed by a reusable workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReusableTrigger {
    /// Inputs the caller passes.
    pub inputs: InputMap,
    /// Values returned to the caller.
    pub outputs: OutputMap,
    /// Secrets the caller passes.
    pub secrets: SecretMap,
}

/// Manual-dispatch configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DispatchTrigger {
    /// Inputs offered in the run form.
    pub inputs: InputMap,
}

/// How a workflow is started. Decided once while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Declares `workflow_call`.
    Reusable(ReusableTrigger),
    /// Declares `workflow_dispatch` only, or neither event.
    DispatchOnly(DispatchTrigger),
}

impl Default for Trigger {
    fn default() -> Self {
        Self::DispatchOnly(DispatchTrigger::default())
    }
}

impl Trigger {
    /// `workflow_call` wins when both events are declared.
    pub(crate) fn classify(events: DeclaredEvents) -> Self {
        match (events.call, events.dispatch) {
            (Some(call), _) => Self::Reusable(call),
            (None, Some(dispatch)) => Self::DispatchOnly(dispatch),
            (None, None) => Self::default(),
        }
    }
}

/// Events found under `on:`. A key present with a `null` body still counts.
#[derive(Debug, Default)]
pub(crate) struct DeclaredEvents {
    call: Option<ReusableTrigger>,
    dispatch: Option<DispatchTrigger>,
}

impl DeclaredEvents {
    fn declare(&mut self, event: &str) {
        match event {
            WORKFLOW_CALL => {
                self.call.get_or_insert_with(ReusableTrigger::default);
            }
            WORKFLOW_DISPATCH => {
                self.dispatch.get_or_insert_with(DispatchTrigger::default);
            }
            _ => {}
        }
    }
}

impl<'de> Deserialize<'de> for DeclaredEvents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EventsVisitor)
    }
}

struct EventsVisitor;

impl<'de> Visitor<'de> for EventsVisitor {
    type Value = DeclaredEvents;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an event name, a list of event names or a mapping of events")
    }

    fn visit_str<E: de::Error>(self, event: &str) -> Result<Self::Value, E> {
        let mut events = DeclaredEvents::default();
        events.declare(event);
        Ok(events)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut events = DeclaredEvents::default();
        while let Some(event) = seq.next_element::<String>()? {
            events.declare(&event);
        }
        Ok(events)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut events = DeclaredEvents::default();
        while let Some(event) = map.next_key::<String>()? {
            match event.as_str() {
                WORKFLOW_CALL => {
                    let call = map.next_value::<Option<ReusableTrigger>>()?;
                    events.call = Some(call.unwrap_or_default());
                }
                WORKFLOW_DISPATCH => {
                    let dispatch = map.next_value::<Option<DispatchTrigger>>()?;
                    events.dispatch = Some(dispatch.unwrap_or_default());
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(events)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(DeclaredEvents::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(DeclaredEvents::default())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}
