//! Sources of per-leg weather perturbation.

use std::collections::VecDeque;
use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Wind speed effect on speed through water, knots.
pub const WIND_RANGE: Range<f64> = -1.5..0.5;
/// Wave effect on speed through water, knots.
pub const WAVE_RANGE: Range<f64> = -1.0..-0.2;
/// Current effect on speed over ground, knots.
pub const CURRENT_RANGE: Range<f64> = -2.0..2.0;

/// Speed effects applied to one leg, all in knots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Perturbation {
    pub wind: f64,
    pub wave: f64,
    pub current: f64,
}

impl Perturbation {
    pub const CALM: Perturbation = Perturbation {
        wind: 0.0,
        wave: 0.0,
        current: 0.0,
    };

    pub fn new(wind: f64, wave: f64, current: f64) -> Self {
        Self {
            wind,
            wave,
            current,
        }
    }
}

/// Supplies the perturbation for each leg of a simulated voyage.
pub trait WeatherSource {
    fn next_perturbation(&mut self, leg_index: usize) -> Perturbation;
}

impl<W: WeatherSource + ?Sized> WeatherSource for &mut W {
    fn next_perturbation(&mut self, leg_index: usize) -> Perturbation {
        (**self).next_perturbation(leg_index)
    }
}

/// Uniform random perturbation drawn from [`WIND_RANGE`], [`WAVE_RANGE`] and [`CURRENT_RANGE`].
#[derive(Debug, Clone)]
pub struct RandomWeather<R> {
    rng: R,
}

impl<R: Rng> RandomWeather<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomWeather<StdRng> {
    /// Reproducible weather for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> WeatherSource for RandomWeather<R> {
    fn next_perturbation(&mut self, _leg_index: usize) -> Perturbation {
        Perturbation {
            wind: self.rng.gen_range(WIND_RANGE),
            wave: self.rng.gen_range(WAVE_RANGE),
            current: self.rng.gen_range(CURRENT_RANGE),
        }
    }
}

/// No wind, waves or current.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalmWeather;

impl WeatherSource for CalmWeather {
    fn next_perturbation(&mut self, _leg_index: usize) -> Perturbation {
        Perturbation::CALM
    }
}

/// Replays a fixed list of perturbations in order, then calm.
#[derive(Debug, Clone, Default)]
pub struct ScriptedWeather {
    remaining: VecDeque<Perturbation>,
}

impl ScriptedWeather {
    pub fn new(script: impl IntoIterator<Item = Perturbation>) -> Self {
        Self {
            remaining: script.into_iter().collect(),
        }
    }
}

impl WeatherSource for ScriptedWeather {
    fn next_perturbation(&mut self, _leg_index: usize) -> Perturbation {
        self.remaining.pop_front().unwrap_or(Perturbation::CALM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_draws_stay_in_range() {
        let mut weather = RandomWeather::seeded(7);
        for leg in 0..500 {
            let p = weather.next_perturbation(leg);
            assert!(WIND_RANGE.contains(&p.wind));
            assert!(WAVE_RANGE.contains(&p.wave));
            assert!(CURRENT_RANGE.contains(&p.current));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomWeather::seeded(42);
        let mut b = RandomWeather::seeded(42);
        for leg in 0..10 {
            assert_eq!(a.next_perturbation(leg), b.next_perturbation(leg));
        }
    }

    #[test]
    fn scripted_falls_back_to_calm() {
        let mut weather = ScriptedWeather::new([Perturbation::new(-1.0, -0.5, 1.0)]);
        assert_eq!(weather.next_perturbation(0).current, 1.0);
        assert_eq!(weather.next_perturbation(1), Perturbation::CALM);
    }
}
