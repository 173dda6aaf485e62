use crate::goalstate::build_goal_state;
use crate::schema::{
    GoalState, GoalStateOperationReply, GoalStateOperationStatus, GoalStateProvisioner,
    GoalStateProvisionerServer, OperationStatus, ResourceType,
};
use futures::stream::BoxStream;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::{transport::Server, Code, Request, Response, Status, Streaming};

//answers every resource with SUCCESS, only accepts the harness fixture
pub struct MockProvisioner;

fn operation_status(
    resource_id: &str,
    resource_type: ResourceType,
    operation_type: i32,
) -> GoalStateOperationStatus {
    GoalStateOperationStatus {
        resource_id: resource_id.to_string(),
        resource_type: resource_type as i32,
        operation_type,
        operation_status: OperationStatus::Success as i32,
        ..Default::default()
    }
}

pub fn acknowledge(goal_state: &GoalState) -> GoalStateOperationReply {
    let mut statuses = Vec::new();
    for state in &goal_state.vpc_states {
        let id = state.configuration.as_ref().map_or("", |c| c.id.as_str());
        statuses.push(operation_status(id, ResourceType::Vpc, state.operation_type));
    }
    for state in &goal_state.subnet_states {
        let id = state.configuration.as_ref().map_or("", |c| c.id.as_str());
        statuses.push(operation_status(id, ResourceType::Subnet, state.operation_type));
    }
    for state in &goal_state.port_states {
        let id = state.configuration.as_ref().map_or("", |c| c.id.as_str());
        statuses.push(operation_status(id, ResourceType::Port, state.operation_type));
    }
    for state in &goal_state.security_group_states {
        let id = state.configuration.as_ref().map_or("", |c| c.id.as_str());
        statuses.push(operation_status(
            id,
            ResourceType::Securitygroup,
            state.operation_type,
        ));
    }

    GoalStateOperationReply {
        format_version: goal_state.format_version,
        operation_statuses: statuses,
        message_total_operation_time: 0,
    }
}

#[tonic::async_trait]
impl GoalStateProvisioner for MockProvisioner {
    async fn push_network_resource_states(
        &self,
        request: Request<GoalState>,
    ) -> Result<Response<GoalStateOperationReply>, Status> {
        let goal_state = request.into_inner();
        if goal_state != build_goal_state() {
            return Err(Status::new(
                Code::InvalidArgument,
                "unexpected goal state".to_string(),
            ));
        }
        Ok(Response::new(acknowledge(&goal_state)))
    }

    type PushNetworkResourceStatesStreamStream =
        BoxStream<'static, Result<GoalStateOperationReply, Status>>;

    async fn push_network_resource_states_stream(
        &self,
        _request: Request<Streaming<GoalState>>,
    ) -> Result<Response<Self::PushNetworkResourceStatesStreamStream>, Status> {
        Err(Status::new(
            Code::Unimplemented,
            "streaming push isn't supported".to_string(),
        ))
    }
}

pub fn start_mock_provisioner(rt: &Runtime) -> SocketAddr {
    rt.block_on(async {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(
            Server::builder()
                .add_service(GoalStateProvisionerServer::new(MockProvisioner))
                .serve_with_incoming(TcpListenerStream::new(listener)),
        );
        addr
    })
}
