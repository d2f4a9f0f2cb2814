//! Form primitives shared by every view.

use dioxus::prelude::*;

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Label, Textarea};

pub const COMPONENTS_CSS: Asset = asset!("/src/components/components.css");
