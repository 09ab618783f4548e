use rand::Rng;

/// Portion of the canvas height that may contain stars. The band stops well
/// above the caption so the text sits on clear sky.
const STAR_BAND: f32 = 0.65;

/// One star for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub diameter: f32,
}

/// Samples a fresh field of `count` stars across the upper band of the
/// canvas. Positions are re-rolled every frame on purpose; the lack of
/// persistence is what makes the sky twinkle.
pub fn scatter<R: Rng>(rng: &mut R, width: u32, height: u32, count: u32) -> Vec<Star> {
    let band = height as f32 * STAR_BAND;
    (0..count)
        .map(|_| Star {
            x: rng.gen_range(0.0..width as f32),
            y: rng.gen_range(0.0..band),
            diameter: rng.gen_range(1.0..2.5),
        })
        .collect()
}
