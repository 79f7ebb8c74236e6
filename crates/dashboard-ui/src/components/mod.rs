// Primitives
pub mod skeleton;

// Chat
pub mod chat_box;
pub mod chat_skeleton;

// Re-exports for convenience
pub use chat_box::*;
pub use chat_skeleton::*;
pub use skeleton::*;
