//! Release screen core: section assembly and title bar state.
//!
//! Everything here is a pure function of the current snapshot, so it can be
//! tested without a terminal.

pub mod format;
pub mod marquee;
pub mod overlap;
pub mod sections;
pub mod title_bar;

pub use marquee::Marquee;
pub use overlap::overlap_fraction;
pub use sections::{build_sections, ContentSection, ContentSectionBuilder, SectionError};
pub use title_bar::{compute as compute_title_bar, ShareAction, TitleRenderState, TitleText};
