//! Command implementations for the gus-quant CLI.

mod analyze;
mod init;
mod quantify;

pub use analyze::cmd_analyze;
pub use init::cmd_init;
pub use quantify::{cmd_quantify, QuantifyOptions};
