use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use async_trait::async_trait;

use crate::error::{ConfigurationError, Error, Result};

pub struct DescribeInstanceParams<'a> {
    pub region: &'a str,
    pub instance_id: &'a str,
}

pub struct InstanceActionParams<'a> {
    pub region: &'a str,
    pub instance_id: &'a str,
    pub action: InstanceAction,
}

#[async_trait]
pub trait CloudProvider: Send + Sync {
    async fn get_regions(&self) -> Result<Vec<Region>>;
    async fn list_instances(&self, region: &str) -> Result<Vec<InstanceInfo>>;
    async fn describe_instance(
        &self,
        params: &DescribeInstanceParams<'_>,
    ) -> Result<InstanceInfo>;

    /// With `dry_run` set, the provider validates the transition without
    /// performing it and returns an empty change set on success.
    async fn send_instance_action(
        &self,
        params: &InstanceActionParams<'_>,
        dry_run: bool,
    ) -> Result<Vec<InstanceStateChange>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceAction {
    Start,
    Stop,
    Terminate,
}

impl FromStr for InstanceAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "start" => Ok(InstanceAction::Start),
            "stop" => Ok(InstanceAction::Stop),
            "terminate" => Ok(InstanceAction::Terminate),
            e => Err(ConfigurationError::InvalidInstanceAction(e.to_string()).into()),
        }
    }
}

impl Display for InstanceAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let value = match self {
            InstanceAction::Start => "start",
            InstanceAction::Stop => "stop",
            InstanceAction::Terminate => "terminate",
        };
        write!(f, "{}", value)
    }
}

#[derive(Debug, Clone)]
pub struct Region {
    pub name: String,
    pub endpoint: String,
}

#[derive(Debug, Clone)]
pub struct InstanceInfo {
    pub id: String,
    pub region: String,
    pub state: String,
    pub launch_time: Option<String>,
    pub key_name: Option<String>,
    pub public_ip_v4: Option<String>,
}

/// Lifecycle transition reported by the provider in response to an action.
#[derive(Debug, Clone)]
pub struct InstanceStateChange {
    pub instance_id: String,
    pub previous_state: Option<String>,
    pub current_state: Option<String>,
}
