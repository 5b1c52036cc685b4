//! Background/ambient color cycle.
//!
//! A closed loop of reference colors is walked one segment at a time. Within a
//! segment the color is eased from `palette[i]` to `palette[(i + 1) % K]`;
//! at every segment boundary it equals the reference color exactly, so the
//! loop never drifts no matter how long it runs.

use crate::color::{Hsl, Rgb};
use crate::config::ColorCycleConfig;
use crate::constants::*;
use crate::error::CoreError;
use crate::scene::ParticleCloud;
use crate::state::{state_cell, StateReader, StateWriter};
use crate::tween::Ease;

/// Colors of the render target that follow the cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AmbientColors {
    pub clear: Rgb,
    pub fog: Rgb,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycleSample {
    /// Segment index: interpolating from `palette[index]` to the next entry.
    pub index: usize,
    /// Eased interpolation factor in \[0, 1\].
    pub t: f32,
    pub color: Rgb,
}

#[derive(Debug)]
pub struct ColorCycle {
    palette: Vec<Rgb>,
    segment_secs: f32,
    ease: Ease,
    index: usize,
    current: Rgb,
    target: Rgb,
    ambient: StateWriter<AmbientColors>,
}

impl ColorCycle {
    pub fn new(config: &ColorCycleConfig) -> Result<Self, CoreError> {
        let first = *config.palette.first().ok_or(CoreError::EmptyPalette)?;
        let d = config.segment_secs;
        if !d.is_finite() || d <= 0.0 {
            return Err(CoreError::InvalidSegmentDuration(d));
        }
        let target = config.palette[1 % config.palette.len()];
        let (ambient, _) = state_cell(AmbientColors {
            clear: first,
            fog: first,
        });
        Ok(Self {
            palette: config.palette.clone(),
            segment_secs: d,
            ease: config.ease,
            index: 0,
            current: first,
            target,
            ambient,
        })
    }

    pub fn len(&self) -> usize {
        self.palette.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palette.is_empty()
    }

    /// Seconds for one full loop through every reference color.
    pub fn period(&self) -> f32 {
        self.segment_secs * self.palette.len() as f32
    }

    pub fn segment_secs(&self) -> f32 {
        self.segment_secs
    }

    pub fn palette(&self) -> &[Rgb] {
        &self.palette
    }

    pub fn ambient_reader(&self) -> StateReader<AmbientColors> {
        self.ambient.reader()
    }

    /// Pure evaluation of the cycle at `elapsed` seconds since it started.
    pub fn sample(&self, elapsed: f32) -> CycleSample {
        let k = self.palette.len();
        let segments = elapsed.max(0.0) / self.segment_secs;
        let whole = segments.floor();
        let index = (whole as u64 % k as u64) as usize;
        let t = self.ease.apply(segments - whole);
        let from = self.palette[index];
        let to = self.palette[(index + 1) % k];
        CycleSample {
            index,
            t,
            color: from.lerp(to, t),
        }
    }

    /// Advance to `elapsed` and publish the new color to the clear and fog
    /// targets.
    pub fn update(&mut self, elapsed: f32) -> CycleSample {
        let s = self.sample(elapsed);
        if s.index != self.index {
            log::debug!("[cycle] segment {} -> {}", self.index, s.index);
        }
        self.index = s.index;
        self.current = s.color;
        self.target = self.palette[(s.index + 1) % self.palette.len()];
        self.ambient.set(AmbientColors {
            clear: s.color,
            fog: s.color,
        });
        s
    }

    pub fn current(&self) -> Rgb {
        self.current
    }

    pub fn target(&self) -> Rgb {
        self.target
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn ambient(&self) -> AmbientColors {
        self.ambient.get()
    }

    /// Update and push the derived color into every dependent surface: clear
    /// color, fog color and, when present, the particle color buffer.
    pub fn propagate(&mut self, elapsed: f32, particles: Option<&mut ParticleCloud>) -> CycleSample {
        let s = self.update(elapsed);
        if let Some(cloud) = particles {
            recolor_particles(&mut cloud.colors, s.color, elapsed);
        }
        s
    }
}

/// Display color of particle `index`: the complement of `base` with a slow
/// per-particle lightness shimmer.
#[inline]
pub fn particle_color(base: Rgb, elapsed: f32, index: usize) -> Rgb {
    shimmer(complement_hue(base), elapsed, index)
}

/// Rewrite a pre-allocated particle color buffer in place.
pub fn recolor_particles(colors: &mut [Rgb], base: Rgb, elapsed: f32) {
    let hue = complement_hue(base);
    for (i, c) in colors.iter_mut().enumerate() {
        *c = shimmer(hue, elapsed, i);
    }
}

#[inline]
fn complement_hue(base: Rgb) -> f32 {
    base.to_hsl().rotate_hue(COMPLEMENT_HUE_SHIFT).h
}

#[inline]
fn shimmer(hue: f32, elapsed: f32, index: usize) -> Rgb {
    let phase = elapsed * PARTICLE_LIGHTNESS_RATE + index as f32 * PARTICLE_LIGHTNESS_PHASE_STEP;
    let lightness = PARTICLE_LIGHTNESS_BASE + PARTICLE_LIGHTNESS_SWING * phase.sin();
    Rgb::from_hsl(Hsl::new(hue, PARTICLE_SATURATION, lightness))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_palette_and_bad_duration() {
        let mut cfg = ColorCycleConfig::default();
        cfg.segment_secs = 0.0;
        assert_eq!(
            ColorCycle::new(&cfg).unwrap_err(),
            CoreError::InvalidSegmentDuration(0.0)
        );
        cfg.palette.clear();
        assert_eq!(ColorCycle::new(&cfg).unwrap_err(), CoreError::EmptyPalette);
    }

    #[test]
    fn single_color_palette_is_constant() {
        let cfg = ColorCycleConfig {
            palette: vec![Rgb::new(0.2, 0.4, 0.6)],
            ..Default::default()
        };
        let cycle = ColorCycle::new(&cfg).unwrap();
        for i in 0..20 {
            assert_eq!(cycle.sample(i as f32 * 0.7).color, Rgb::new(0.2, 0.4, 0.6));
        }
    }

    #[test]
    fn recolor_matches_per_particle_formula() {
        let base = Rgb::new(0.1, 0.3, 0.5);
        let mut buf = vec![Rgb::BLACK; 16];
        recolor_particles(&mut buf, base, 2.5);
        for (i, c) in buf.iter().enumerate() {
            assert_eq!(*c, particle_color(base, 2.5, i));
        }
    }
}
