mod use_actions;
mod use_sections;

pub use use_actions::{use_actions, ActionHandles};
pub use use_sections::{use_sections, SectionHandles};
