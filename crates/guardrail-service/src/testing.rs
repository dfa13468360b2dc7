//! In-memory identity clients for unit tests.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use guardrail_core::traits::{IdentityClient, IdentityServiceError};

/// Returns queued responses in order (then `Ok`) and records every call.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<(), IdentityServiceError>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_with(err: IdentityServiceError) -> Self {
        let client = Self::new();
        client.push(Err(err));
        client
    }

    pub fn push(&self, response: Result<(), IdentityServiceError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Recorded `(group, user)` pairs.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityClient for ScriptedClient {
    fn provider_type(&self) -> &str {
        "scripted"
    }

    async fn remove_user_from_group(
        &self,
        group_name: &str,
        user_name: &str,
    ) -> Result<(), IdentityServiceError> {
        self.calls
            .lock()
            .unwrap()
            .push((group_name.to_string(), user_name.to_string()));
        self.responses.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

/// A tiny group directory that reports `NotAMember` for absent members.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    groups: Mutex<HashMap<String, HashSet<String>>>,
}

impl InMemoryDirectory {
    pub fn with_member(group: &str, user: &str) -> Self {
        let directory = Self::default();
        directory
            .groups
            .lock()
            .unwrap()
            .entry(group.to_string())
            .or_default()
            .insert(user.to_string());
        directory
    }

    pub fn members(&self, group: &str) -> HashSet<String> {
        self.groups
            .lock()
            .unwrap()
            .get(group)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl IdentityClient for InMemoryDirectory {
    fn provider_type(&self) -> &str {
        "in-memory"
    }

    async fn remove_user_from_group(
        &self,
        group_name: &str,
        user_name: &str,
    ) -> Result<(), IdentityServiceError> {
        let mut groups = self.groups.lock().unwrap();
        let Some(members) = groups.get_mut(group_name) else {
            return Err(IdentityServiceError::EntityNotFound(format!(
                "The group with name {group_name} cannot be found."
            )));
        };
        if members.remove(user_name) {
            Ok(())
        } else {
            Err(IdentityServiceError::NotAMember(format!(
                "{user_name} is not in {group_name}"
            )))
        }
    }
}
