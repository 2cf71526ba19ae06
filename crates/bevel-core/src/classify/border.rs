//! Border profiles.

use serde::{Deserialize, Serialize};

/// Shadow type requested by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowKind {
    None,
    In,
    Out,
    EtchedIn,
    EtchedOut,
    /// A raw value the engine does not know.
    Other(i32),
}

impl From<i32> for ShadowKind {
    fn from(raw: i32) -> Self {
        match raw {
            0 => ShadowKind::None,
            1 => ShadowKind::In,
            2 => ShadowKind::Out,
            3 => ShadowKind::EtchedIn,
            4 => ShadowKind::EtchedOut,
            other => ShadowKind::Other(other),
        }
    }
}

/// Visual treatment of a widget outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderProfile {
    #[default]
    Flat,
    Raised,
    Sunken,
    /// Flat, with a light inner edge on every side.
    Light,
}

/// Border profile for a shadow type. Unknown shadows are flat.
pub fn classify_border(shadow: ShadowKind) -> BorderProfile {
    match shadow {
        ShadowKind::In | ShadowKind::EtchedIn => BorderProfile::Sunken,
        ShadowKind::Out | ShadowKind::EtchedOut => BorderProfile::Raised,
        ShadowKind::None | ShadowKind::Other(_) => BorderProfile::Flat,
    }
}
