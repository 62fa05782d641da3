mod registry;
pub use registry::*;

mod resolution;
pub use resolution::*;

mod signer;
pub use signer::*;

mod wallet;
pub use wallet::*;
