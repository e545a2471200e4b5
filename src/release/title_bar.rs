//! Collapsing title bar state.
//!
//! A pure function of the details snapshot, the loading flag and the
//! header overlap fraction. Rendering lives in `crate::ui::title_bar`.

use crate::models::ReleaseDetails;

/// Separator between owner and repository on the first title line.
pub const TITLE_SEPARATOR: &str = " / ";

/// Two-line title text plus its opacity.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleText {
    pub owner: String,
    pub repository: String,
    /// Release name, or the tag when unnamed
    pub subtitle: String,
    /// 0.0 is invisible, 1.0 fully opaque
    pub opacity: f32,
}

impl TitleText {
    /// `"{owner} / {name}"`
    pub fn line1(&self) -> String {
        format!("{}{}{}", self.owner, TITLE_SEPARATOR, self.repository)
    }
}

/// Share action payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareAction {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleRenderState {
    pub title: Option<TitleText>,
    pub share: Option<ShareAction>,
}

/// Derive the title bar state.
///
/// The title is hidden while loading or without details. The share action
/// only depends on details being present.
pub fn compute(
    details: Option<&ReleaseDetails>,
    is_loading: bool,
    overlap_fraction: f32,
) -> TitleRenderState {
    let share = details.map(|details| ShareAction {
        url: details.url.clone(),
    });

    let title = match details {
        Some(details) if !is_loading => Some(TitleText {
            owner: details.repository.owner.login.clone(),
            repository: details.repository.name.clone(),
            subtitle: details.display_name().to_string(),
            opacity: clamp_opacity(overlap_fraction),
        }),
        _ => None,
    };

    TitleRenderState { title, share }
}

fn clamp_opacity(fraction: f32) -> f32 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}
