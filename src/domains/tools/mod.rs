//! Tools domain module.
//!
//! Tools forward a validated request to the broker management API and return
//! the response as text.
//!
//! ## Architecture
//!
//! - `schema.rs` - typed parameter structs turned into input schemas and validated arguments
//! - `descriptor.rs` - the declarative [`ToolDescriptor`] and request building
//! - `definitions/` - the descriptor table, one file per tool group
//! - `registry.rs` - immutable registry and the single dispatch path
//! - `router.rs` - rmcp ToolRouter built from the registry
//! - `error.rs` - validation and tool errors
//!
//! ## Adding a New Tool
//!
//! 1. Declare its parameters as a `#[derive(Deserialize, Serialize, JsonSchema)]`
//!    struct, or reuse one from `definitions/common.rs`
//! 2. Declare a `const` [`ToolDescriptor`] in the matching `definitions/` file
//! 3. List it in `definitions::all_tools()`
//!
//! Registry, router and transports pick it up from there.

pub mod definitions;
pub mod descriptor;
mod error;
mod registry;
pub mod router;
pub mod schema;

pub use descriptor::{PathSegment, QueryFlag, ResponseFormat, ToolDescriptor};
pub use error::{ToolError, ValidationError};
pub use registry::ToolRegistry;
pub use router::build_tool_router;
pub use schema::{Count, Params, ToolInput};
