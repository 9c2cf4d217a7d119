pub mod backend;
pub mod catalog;
pub mod random;
pub mod scripted;

pub use backend::{CallSource, SourceFactory, SourceKind};
pub use random::RandomSource;
pub use scripted::ScriptedSource;
