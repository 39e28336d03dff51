pub mod dispatch;
pub mod jsonrpc;
pub mod registry;
pub mod tools;

pub use dispatch::Dispatcher;
pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use registry::{RegistryError, ToolEntry, ToolRegistry};
