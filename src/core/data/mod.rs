//! Plain data types shared by the resolver, the registry and the loaders.

mod resource;

pub use resource::*;
