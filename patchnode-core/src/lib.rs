pub mod catalog;
mod error;
mod node;
pub mod pin;
pub mod spread;

pub use catalog::{CatalogError, NodeCatalog};
pub use error::NodeError;
pub use node::Node;
pub use pin::{Describe, NodeInfo, PinDirection, PinInfo};
pub use spread::Spread;
