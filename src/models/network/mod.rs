mod descriptor;
pub use descriptor::*;

mod named_network;
pub use named_network::*;
