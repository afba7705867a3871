use rand::Rng;
use tracing::trace;

use crate::image_pipeline::config::{AssetKind, Palette};
use crate::image_pipeline::glow::types::GlowAccent;

/// Radius of the centre glow on illustrations
pub const CENTER_GLOW_RADIUS: u32 = 100;
/// Number of randomly placed accents on illustrations
pub const RANDOM_ACCENT_COUNT: usize = 3;
/// Inclusive radius range of the random accents
pub const RANDOM_ACCENT_RADIUS: (u32, u32) = (20, 60);

/// Decides where the glows go, in compositing order.
///
/// Logos get a single brand-coloured glow in the centre sized to a third of
/// the shorter side. Illustrations get three dark accents somewhere in the
/// middle half of the canvas followed by a fixed-size centre glow on top.
pub fn plan_accents<R: Rng + ?Sized>(
    kind: AssetKind,
    width: u32,
    height: u32,
    palette: &Palette,
    rng: &mut R,
) -> Vec<GlowAccent> {
    let center = ((width / 2) as i32, (height / 2) as i32);

    match kind {
        AssetKind::Logo => vec![GlowAccent {
            center,
            radius: width.min(height) / 3,
            color: palette.brand,
        }],
        AssetKind::Illustration => {
            let mut accents = Vec::with_capacity(RANDOM_ACCENT_COUNT + 1);
            let (min_radius, max_radius) = RANDOM_ACCENT_RADIUS;

            for _ in 0..RANDOM_ACCENT_COUNT {
                let x = rng.random_range(width / 4..=width * 3 / 4);
                let y = rng.random_range(height / 4..=height * 3 / 4);
                let radius = rng.random_range(min_radius..=max_radius);
                trace!(x, y, radius, "Placed accent");
                accents.push(GlowAccent {
                    center: (x as i32, y as i32),
                    radius,
                    color: palette.brand_dark,
                });
            }

            accents.push(GlowAccent {
                center,
                radius: CENTER_GLOW_RADIUS,
                color: palette.brand,
            });
            accents
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_logo_glow_is_centered() {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(1);
        let accents = plan_accents(AssetKind::Logo, 512, 512, &palette, &mut rng);

        assert_eq!(
            accents,
            vec![GlowAccent {
                center: (256, 256),
                radius: 170,
                color: palette.brand,
            }]
        );
    }

    #[test]
    fn test_logo_radius_uses_shorter_side() {
        let mut rng = StdRng::seed_from_u64(1);
        let accents = plan_accents(AssetKind::Logo, 900, 300, &Palette::default(), &mut rng);
        assert_eq!(accents[0].center, (450, 150));
        assert_eq!(accents[0].radius, 100);
    }

    #[test]
    fn test_illustration_has_three_accents_and_center_glow() {
        let palette = Palette::default();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let accents = plan_accents(AssetKind::Illustration, 800, 600, &palette, &mut rng);

            assert_eq!(accents.len(), RANDOM_ACCENT_COUNT + 1);

            let center = accents.last().unwrap();
            assert_eq!(center.center, (400, 300));
            assert_eq!(center.radius, CENTER_GLOW_RADIUS);
            assert_eq!(center.color, palette.brand);

            for accent in &accents[..RANDOM_ACCENT_COUNT] {
                assert!((200..=600).contains(&accent.center.0));
                assert!((150..=450).contains(&accent.center.1));
                assert!((20..=60).contains(&accent.radius));
                assert_eq!(accent.color, palette.brand_dark);
            }
        }
    }

    #[test]
    fn test_same_seed_same_plan() {
        let palette = Palette::default();
        let a = plan_accents(AssetKind::Illustration, 800, 600, &palette, &mut StdRng::seed_from_u64(9));
        let b = plan_accents(AssetKind::Illustration, 800, 600, &palette, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_tiny_canvas_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(3);
        let accents = plan_accents(AssetKind::Illustration, 1, 1, &Palette::default(), &mut rng);
        assert_eq!(accents.len(), 4);
        assert!(accents.iter().all(|a| a.center == (0, 0)));
    }
}
