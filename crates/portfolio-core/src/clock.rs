use instant::Instant;

/// Elapsed-time source for the frame loop and the color cycle.
///
/// Starts at zero when constructed and only ever moves forward; there is no
/// reset.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds since construction.
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_starts_near_zero_and_never_decreases() {
        let clock = Clock::new();
        let mut prev = clock.elapsed();
        assert!(prev >= 0.0 && prev < 1.0);
        for _ in 0..1000 {
            let now = clock.elapsed();
            assert!(now >= prev);
            prev = now;
        }
    }
}
