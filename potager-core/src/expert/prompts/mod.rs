//! System prompt templates for the answering roles.

pub mod fruit;
pub mod general;
pub mod vegetable;

pub use fruit::render_fruit_system_prompt;
pub use general::render_general_system_prompt;
pub use vegetable::render_vegetable_system_prompt;
