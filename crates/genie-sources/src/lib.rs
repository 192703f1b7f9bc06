pub mod flatten;
pub mod handler;
pub mod http;
pub mod local;
pub mod memory;

pub use flatten::Flattener;
pub use handler::RemoteTree;
pub use http::{HttpOptions, HttpTree};
pub use local::LocalTree;
pub use memory::MemoryTree;
