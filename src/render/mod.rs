//! Renderers for the panel's display state.
//!
//! The panel itself only maintains a [`PanelView`](crate::panel::PanelView);
//! these submodules turn a view into something a person can look at:
//!
//! - [`html`]: an escaped HTML fragment (or full page) with tier-classed cards
//! - [`text`]: a plain-text rendition for the terminal

pub mod html;
pub mod text;
