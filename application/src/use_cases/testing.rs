//! Scripted invoker shared by the use case tests

use crate::ports::agent_invoker::{AgentInvoker, GatewayError};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;
use trial_domain::{InvocationRequest, Model};

/// Replies per model id, consumed in order. A model with no script left
/// answers with a 503.
#[derive(Default)]
pub(crate) struct ScriptedInvoker {
    scripts: Mutex<HashMap<String, VecDeque<Result<String, GatewayError>>>>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<InvocationRequest>>,
}

impl ScriptedInvoker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, model: &Model, text: &str) -> Self {
        self.push(model, Ok(text.to_string()))
    }

    pub(crate) fn fail(self, model: &Model, error: GatewayError) -> Self {
        self.push(model, Err(error))
    }

    pub(crate) fn delay(mut self, model: &Model, delay: Duration) -> Self {
        self.delays.insert(model.to_string(), delay);
        self
    }

    fn push(self, model: &Model, result: Result<String, GatewayError>) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .entry(model.to_string())
            .or_default()
            .push_back(result);
        self
    }

    pub(crate) fn calls(&self) -> Vec<InvocationRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn called_models(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|r| r.model().to_string())
            .collect()
    }
}

#[async_trait]
impl AgentInvoker for ScriptedInvoker {
    async fn invoke(&self, request: &InvocationRequest) -> Result<String, GatewayError> {
        let key = request.model().to_string();
        if let Some(delay) = self.delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }
        self.calls.lock().unwrap().push(request.clone());
        self.scripts
            .lock()
            .unwrap()
            .get_mut(&key)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| {
                Err(GatewayError::Remote {
                    status: 503,
                    message: format!("no script for {}", key),
                })
            })
    }
}
