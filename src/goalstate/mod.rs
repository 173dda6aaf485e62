mod builder;

pub use builder::{
    build_goal_state, build_port_state, build_security_group_state, build_subnet_state,
    build_vpc_state,
};
