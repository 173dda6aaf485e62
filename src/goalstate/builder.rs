use crate::schema::{
    Direction, EtherType, FixedIp, GoalState, MessageType, OperationType, PortConfiguration,
    PortState, Protocol, SecurityGroupConfiguration, SecurityGroupId, SecurityGroupRule,
    SecurityGroupState, SubnetConfiguration, SubnetState, VpcConfiguration, VpcState,
};

const FORMAT_VERSION: u32 = 1;
const REVISION_NUMBER: u32 = 1;

const VPC_ID: &str = "vpc_id1";
const VPC_NAME: &str = "vpc1";
const VPC_CIDR: &str = "10.10.10.0/24";

const SUBNET_ID: &str = "subnet_id1";
const SUBNET_NAME: &str = "subnet1";
const SUBNET_CIDR: &str = "10.10.10.0/24";

const PORT_ID: &str = "port_id1";
const PORT_NAME: &str = "port1";
const PORT_MAC: &str = "7E:04:D0:C9:12:6C";
const PORT_IP: &str = "10.10.10.2";

const SECURITY_GROUP_ID: &str = "security_group_id1";
const SECURITY_GROUP_NAME: &str = "security_group1";
const SECURITY_GROUP_RULE_ID: &str = "security_group_rule_id1";
const RULE_PORT_RANGE: (u32, u32) = (100, 101);
const RULE_REMOTE_IP_PREFIX: &str = "12.12.12.0/24";

pub fn build_vpc_state() -> VpcState {
    VpcState {
        operation_type: OperationType::Create as i32,
        configuration: Some(VpcConfiguration {
            id: VPC_ID.to_string(),
            name: VPC_NAME.to_string(),
            cidr: VPC_CIDR.to_string(),
            ..Default::default()
        }),
    }
}

pub fn build_subnet_state() -> SubnetState {
    SubnetState {
        operation_type: OperationType::Create as i32,
        configuration: Some(SubnetConfiguration {
            id: SUBNET_ID.to_string(),
            name: SUBNET_NAME.to_string(),
            cidr: SUBNET_CIDR.to_string(),
            ..Default::default()
        }),
    }
}

pub fn build_port_state() -> PortState {
    PortState {
        operation_type: OperationType::Create as i32,
        configuration: Some(PortConfiguration {
            format_version: FORMAT_VERSION,
            revision_number: REVISION_NUMBER,
            message_type: MessageType::Full as i32,
            vpc_id: VPC_ID.to_string(),
            id: PORT_ID.to_string(),
            name: PORT_NAME.to_string(),
            mac_address: PORT_MAC.to_string(),
            admin_state_up: true,
            fixed_ips: vec![FixedIp {
                subnet_id: SUBNET_ID.to_string(),
                ip_address: PORT_IP.to_string(),
            }],
            security_group_ids: vec![SecurityGroupId {
                id: SECURITY_GROUP_ID.to_string(),
            }],
            ..Default::default()
        }),
    }
}

pub fn build_security_group_state() -> SecurityGroupState {
    let rule = SecurityGroupRule {
        operation_type: OperationType::Create as i32,
        security_group_id: SECURITY_GROUP_ID.to_string(),
        id: SECURITY_GROUP_RULE_ID.to_string(),
        direction: Direction::Egress as i32,
        ethertype: EtherType::Ipv4 as i32,
        protocol: Protocol::Tcp as i32,
        port_range_min: RULE_PORT_RANGE.0,
        port_range_max: RULE_PORT_RANGE.1,
        remote_ip_prefix: RULE_REMOTE_IP_PREFIX.to_string(),
        ..Default::default()
    };

    SecurityGroupState {
        operation_type: OperationType::Create as i32,
        configuration: Some(SecurityGroupConfiguration {
            format_version: FORMAT_VERSION,
            revision_number: REVISION_NUMBER,
            vpc_id: VPC_ID.to_string(),
            id: SECURITY_GROUP_ID.to_string(),
            name: SECURITY_GROUP_NAME.to_string(),
            security_group_rules: vec![rule],
            ..Default::default()
        }),
    }
}

pub fn build_goal_state() -> GoalState {
    GoalState {
        format_version: FORMAT_VERSION,
        vpc_states: vec![build_vpc_state()],
        subnet_states: vec![build_subnet_state()],
        port_states: vec![build_port_state()],
        security_group_states: vec![build_security_group_state()],
    }
}
