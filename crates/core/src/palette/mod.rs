use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Four-color theme for one frame: the sky, the lit moon, the shadow disc
/// carving the phase out of it, and the caption text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub night: Rgb,
    pub moon: Rgb,
    pub shadow: Rgb,
    pub text: Rgb,
}

impl Palette {
    /// Blends every channel of all four colors toward `other` by `f`.
    pub fn lerp(self, other: Palette, f: f32) -> Palette {
        Palette {
            night: self.night.lerp(other.night, f),
            moon: self.moon.lerp(other.moon, f),
            shadow: self.shadow.lerp(other.shadow, f),
            text: self.text.lerp(other.text, f),
        }
    }
}

/// The hand-authored interpolation stops, darkest to lightest. The shadow
/// always matches the night sky so the covered part of the moon disappears
/// into it, and the text always matches the lit moon.
pub const CONTROL_STOPS: [Palette; 4] = [
    Palette {
        night: Rgb::new(17, 27, 61),
        moon: Rgb::new(241, 229, 215),
        shadow: Rgb::new(17, 27, 61),
        text: Rgb::new(241, 229, 215),
    },
    Palette {
        night: Rgb::new(39, 40, 77),
        moon: Rgb::new(245, 209, 166),
        shadow: Rgb::new(39, 40, 77),
        text: Rgb::new(245, 209, 166),
    },
    Palette {
        night: Rgb::new(48, 66, 100),
        moon: Rgb::new(246, 204, 156),
        shadow: Rgb::new(48, 66, 100),
        text: Rgb::new(246, 204, 156),
    },
    Palette {
        night: Rgb::new(96, 117, 151),
        moon: Rgb::new(246, 201, 148),
        shadow: Rgb::new(96, 117, 151),
        text: Rgb::new(246, 201, 148),
    },
];

/// Returns the blended palette for one phase of the cycle.
///
/// The phase is mirrored across the midpoint of the cycle so the sky fades
/// from the first stop up to the last and back again over one full loop.
/// The mirrored position is derived from `min(idx, last - idx)`, which makes
/// the symmetry between `idx` and `last - idx` exact rather than subject to
/// floating-point rounding.
///
/// An empty `stops` slice falls back to [`CONTROL_STOPS`]; out-of-range
/// indices are clamped at both ends. The function is total.
pub fn palette_for_phase(idx: u32, total: u32, stops: &[Palette]) -> Palette {
    let stops = if stops.is_empty() {
        &CONTROL_STOPS[..]
    } else {
        stops
    };

    let last = total.saturating_sub(1).max(1);
    let idx = idx.min(last);
    let mirrored = idx.min(last - idx);
    let u = 2.0 * mirrored as f32 / last as f32;

    let pos = u * (stops.len() - 1) as f32;
    let i0 = (pos.floor() as usize).min(stops.len() - 1);
    let i1 = (i0 + 1).min(stops.len() - 1);
    let f = (pos - i0 as f32).clamp(0.0, 1.0);

    stops[i0].lerp(stops[i1], f)
}
