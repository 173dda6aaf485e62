mod harness;
#[cfg(test)]
mod mock_provisioner;

pub use harness::Harness;
