use crate::config::ProvisionerConfig;
use crate::goalstate::build_goal_state;
use crate::schema::{GoalStateOperationReply, GoalStateProvisionerClient};
use anyhow::Context;
use std::io::Write;
use tokio::runtime::Runtime;

pub struct Harness {
    endpoint: String,
}

impl Harness {
    pub fn new(conf: &ProvisionerConfig) -> Self {
        Harness {
            endpoint: format!("http://{}", conf.address),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    //the channel lives only for the duration of one call
    pub async fn push(&self) -> anyhow::Result<GoalStateOperationReply> {
        let logger = slog_scope::logger();
        info!(logger, "connect to provisioner"; "endpoint" => &self.endpoint);
        let mut client = GoalStateProvisionerClient::connect(self.endpoint.clone())
            .await
            .with_context(|| format!("connect to {} failed", self.endpoint))?;

        let goal_state = build_goal_state();
        debug!(logger, "push goal state";
            "vpcs" => goal_state.vpc_states.len(),
            "subnets" => goal_state.subnet_states.len(),
            "ports" => goal_state.port_states.len(),
            "security_groups" => goal_state.security_group_states.len());
        let response = client
            .push_network_resource_states(tonic::Request::new(goal_state))
            .await
            .context("push network resource states failed")?;
        drop(client);

        let reply = response.into_inner();
        info!(logger, "goal state pushed"; "statuses" => reply.operation_statuses.len());
        Ok(reply)
    }

    pub fn run<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let rt = Runtime::new()?;
        let reply = rt.block_on(self.push())?;
        writeln!(out, "{:?}", reply)?;
        Ok(())
    }
}
