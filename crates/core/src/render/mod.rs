//! Per-frame compositor: background, stars, the two-disc moon and the
//! caption, in that order, into a [`Framebuffer`].

use embedded_graphics::{
    mono_font::{
        iso_8859_1::{FONT_10X20, FONT_6X10},
        MonoTextStyle,
    },
    prelude::Point,
    primitives::{Circle, Primitive, PrimitiveStyle, PrimitiveStyleBuilder},
    text::{Alignment, Text},
    Drawable,
};
use rand::Rng;

use crate::{
    color::Rgb, config::AppConfig, palette::Palette, phase::AnimationState, raster::Framebuffer,
    stars,
};

/// Moon diameter as a share of the shorter canvas edge.
const MOON_SCALE: f32 = 0.6;
/// Horizontal shadow travel as a share of the moon diameter.
const SHADOW_TRAVEL: f32 = 0.45;
/// Rim circle diameter relative to the moon disc.
const RIM_SCALE: f32 = 1.02;
/// Opacity of the white star dots before pre-blending, out of 255.
const STAR_ALPHA: f32 = 220.0 / 255.0;
/// Opacity of the white help line before pre-blending, out of 255.
const HELP_ALPHA: f32 = 160.0 / 255.0;

/// Paints complete frames for a fixed canvas geometry.
///
/// The renderer is stateless between frames; everything that varies comes in
/// through the state, the palette and the star RNG. Stars are re-scattered
/// on every call, which is what makes them twinkle.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    width: u32,
    height: u32,
    star_count: u32,
    caption: Vec<String>,
    help: String,
}

impl FrameRenderer {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            width: config.canvas.width,
            height: config.canvas.height,
            star_count: config.animation.star_count,
            caption: config.caption.lines.clone(),
            help: config.caption.help.clone(),
        }
    }

    /// Composites one frame. Drawing into the framebuffer cannot fail; the
    /// raster target clips out-of-bounds pixels itself.
    pub fn render<R: Rng>(
        &self,
        frame: &mut Framebuffer,
        state: &AnimationState,
        palette: &Palette,
        rng: &mut R,
    ) {
        frame.fill(palette.night);
        self.draw_stars(frame, palette, rng);
        self.draw_moon(frame, state, palette);
        self.draw_caption(frame, palette);
    }

    fn draw_stars<R: Rng>(&self, frame: &mut Framebuffer, palette: &Palette, rng: &mut R) {
        // White at alpha 220 over a uniform night sky collapses to one
        // opaque color per frame.
        let star_color = palette.night.lerp(Rgb::WHITE, STAR_ALPHA);
        let style = PrimitiveStyle::with_fill(star_color.to_rgb888());
        for star in stars::scatter(rng, self.width, self.height, self.star_count) {
            let diameter = star.diameter.round().max(1.0) as u32;
            Circle::with_center(Point::new(star.x.round() as i32, star.y.round() as i32), diameter)
                .into_styled(style)
                .draw(frame)
                .ok();
        }
    }

    fn draw_moon(&self, frame: &mut Framebuffer, state: &AnimationState, palette: &Palette) {
        let d = self.moon_diameter();
        let center = self.moon_center();

        Circle::with_center(center, d.round() as u32)
            .into_styled(PrimitiveStyle::with_fill(palette.moon.to_rgb888()))
            .draw(frame)
            .ok();

        // Classic two-disc phase: the shadow disc sweeps across the moon and
        // whatever it leaves uncovered is the lit crescent or gibbous shape.
        // Stylized on purpose, not illumination geometry.
        let offset = state.shadow_factor() * SHADOW_TRAVEL * d;
        let shadow_center = Point::new(center.x + offset.round() as i32, center.y);
        Circle::with_center(shadow_center, d.round() as u32)
            .into_styled(PrimitiveStyle::with_fill(palette.shadow.to_rgb888()))
            .draw(frame)
            .ok();

        let rim_color = palette.night.lerp(palette.moon, 0.25);
        let rim_style = PrimitiveStyleBuilder::new()
            .stroke_color(rim_color.to_rgb888())
            .stroke_width(1)
            .build();
        Circle::with_center(center, (d * RIM_SCALE).round() as u32)
            .into_styled(rim_style)
            .draw(frame)
            .ok();
    }

    fn draw_caption(&self, frame: &mut Framebuffer, palette: &Palette) {
        // A nominal type size of 5% of the shorter edge drives the leading
        // and the block position, even though the resident bitmap fonts
        // come in fixed sizes.
        let base = self.width.min(self.height) as f32 * 0.05;
        let leading = base * 1.2;
        let d = self.moon_diameter();
        let center = self.moon_center();
        let y_start = center.y as f32 + d * SHADOW_TRAVEL + leading * 1.2;

        let caption_style = MonoTextStyle::new(&FONT_10X20, palette.text.to_rgb888());
        for (i, line) in self.caption.iter().enumerate() {
            let y = (y_start + i as f32 * leading).round() as i32;
            Text::with_alignment(
                line,
                Point::new((self.width / 2) as i32, y),
                caption_style,
                Alignment::Center,
            )
            .draw(frame)
            .ok();
        }

        let help_color = palette.night.lerp(Rgb::WHITE, HELP_ALPHA);
        let help_style = MonoTextStyle::new(&FONT_6X10, help_color.to_rgb888());
        Text::with_alignment(
            &self.help,
            Point::new((self.width / 2) as i32, (self.height - 20) as i32),
            help_style,
            Alignment::Center,
        )
        .draw(frame)
        .ok();
    }

    fn moon_diameter(&self) -> f32 {
        self.width.min(self.height) as f32 * MOON_SCALE
    }

    fn moon_center(&self) -> Point {
        Point::new(
            (self.width as f32 * 0.5) as i32,
            (self.height as f32 * 0.45) as i32,
        )
    }
}
