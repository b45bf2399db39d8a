mod driver_node;
pub use driver_node::*;

#[cfg(test)]
mod driver_node_test;
