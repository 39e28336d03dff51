pub mod error;
pub mod traits;
pub mod types;

pub use error::ToolError;
pub use traits::ToolHandler;
pub use types::{Content, ToolCallResult, ToolDefinition};
