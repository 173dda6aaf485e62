pub mod alcor {
    tonic::include_proto!("alcor.schema");
}

pub use alcor::{
    goal_state_operation_reply::GoalStateOperationStatus,
    goal_state_provisioner_client::GoalStateProvisionerClient,
    goal_state_provisioner_server::{GoalStateProvisioner, GoalStateProvisionerServer},
    port_configuration::{FixedIp, SecurityGroupId},
    security_group_configuration::{Direction, SecurityGroupRule},
    EtherType, GoalState, GoalStateOperationReply, MessageType, OperationStatus, OperationType,
    PortConfiguration, PortState, Protocol, ResourceType, SecurityGroupConfiguration,
    SecurityGroupState, SubnetConfiguration, SubnetState, VpcConfiguration, VpcState,
};
