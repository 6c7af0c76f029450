// File: crates/chart-core/src/scale.rs
// Summary: Continuous scales mapping data domains to visual ranges: linear (with nice/ticks),
// calendar time, square-root and sequential color.

use chrono::{Datelike, Days, NaiveDate};

use crate::color::Rgb;

/// A mapping from a data domain to a visual range.
pub trait Scale {
    type Input;
    type Output;
    fn apply(&self, value: Self::Input) -> Self::Output;
}

// Thresholds used by tick step selection (sqrt(50), sqrt(10), sqrt(2)).
const E10: f64 = 7.0710678118654755;
const E5: f64 = 3.1622776601683795;
const E2: f64 = std::f64::consts::SQRT_2;

/// Position of `v` within `[d0, d1]` as a fraction. A degenerate domain yields 0.5 so every
/// value lands on the middle of the range.
#[inline]
fn normalize(v: f64, d0: f64, d1: f64) -> f64 {
    let span = d1 - d0;
    if span == 0.0 { 0.5 } else { (v - d0) / span }
}

#[inline]
fn lerp(t: f64, r0: f64, r1: f64) -> f64 {
    r0 + t * (r1 - r0)
}

/// Linear mapping of `domain` onto `range`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        lerp(normalize(v, self.domain.0, self.domain.1), self.range.0, self.range.1)
    }

    /// Inverse mapping from range back to domain.
    pub fn invert(&self, px: f64) -> f64 {
        lerp(normalize(px, self.range.0, self.range.1), self.domain.0, self.domain.1)
    }

    /// Extend the domain outward so both ends fall on round tick values.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        let reversed = stop < start;
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }
        let mut prestep = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count as f64);
            if prestep == Some(step) {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
        self.domain = if reversed { (stop, start) } else { (start, stop) };
        self
    }

    /// Roughly `count` round values spanning the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count as f64)
    }

    /// Decimal places needed to tell adjacent ticks apart.
    pub fn tick_precision(&self, count: usize) -> usize {
        let step = tick_step(self.domain.0, self.domain.1, count as f64).abs();
        if step == 0.0 || !step.is_finite() {
            return 0;
        }
        let exponent = (step.log10() + 1e-9).floor();
        if exponent < 0.0 { (-exponent) as usize } else { 0 }
    }

    /// Tick labels formatted with [`LinearScale::tick_precision`] decimals.
    pub fn tick_labels(&self, count: usize) -> Vec<(f64, String)> {
        let precision = self.tick_precision(count);
        self.ticks(count).into_iter().map(|v| (v, format!("{:.*}", precision, v))).collect()
    }
}

impl Scale for LinearScale {
    type Input = f64;
    type Output = f64;
    fn apply(&self, value: f64) -> f64 {
        self.map(value)
    }
}

/// Calendar-day scale: linear over days since the common era.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub start: NaiveDate,
    pub end: NaiveDate,
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(start: NaiveDate, end: NaiveDate, range: (f64, f64)) -> Self {
        let linear = LinearScale::new((day_number(start), day_number(end)), range);
        Self { start, end, linear }
    }

    #[inline]
    pub fn map(&self, date: NaiveDate) -> f64 {
        self.linear.map(day_number(date))
    }

    pub fn range(&self) -> (f64, f64) {
        self.linear.range
    }

    /// Every calendar day in `[start, end]`.
    pub fn day_ticks(&self) -> Vec<NaiveDate> {
        let (mut d, end) = if self.start <= self.end { (self.start, self.end) } else { (self.end, self.start) };
        let mut out = Vec::new();
        while d <= end {
            out.push(d);
            match d.checked_add_days(Days::new(1)) {
                Some(next) => d = next,
                None => break,
            }
        }
        out
    }
}

impl Scale for TimeScale {
    type Input = NaiveDate;
    type Output = f64;
    fn apply(&self, value: NaiveDate) -> f64 {
        self.map(value)
    }
}

#[inline]
fn day_number(d: NaiveDate) -> f64 {
    d.num_days_from_ce() as f64
}

/// Square-root scale: equal steps in the output correspond to equal steps in sqrt(input),
/// so a radius mapped through it gives a circle area linear in the input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SqrtScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let t = normalize(signed_sqrt(v), signed_sqrt(self.domain.0), signed_sqrt(self.domain.1));
        lerp(t, self.range.0, self.range.1)
    }
}

impl Scale for SqrtScale {
    type Input = f64;
    type Output = f64;
    fn apply(&self, value: f64) -> f64 {
        self.map(value)
    }
}

#[inline]
fn signed_sqrt(v: f64) -> f64 {
    if v < 0.0 { -(-v).sqrt() } else { v.sqrt() }
}

/// Sequential color scale: normalizes the domain to `t` and feeds an interpolator.
/// `t` is not clamped; cyclic interpolators wrap it themselves.
#[derive(Clone, Copy, Debug)]
pub struct SequentialScale {
    pub domain: (f64, f64),
    pub interpolator: fn(f64) -> Rgb,
}

impl SequentialScale {
    pub fn new(domain: (f64, f64), interpolator: fn(f64) -> Rgb) -> Self {
        Self { domain, interpolator }
    }

    #[inline]
    pub fn map(&self, v: f64) -> Rgb {
        (self.interpolator)(normalize(v, self.domain.0, self.domain.1))
    }
}

impl Scale for SequentialScale {
    type Input = f64;
    type Output = Rgb;
    fn apply(&self, value: f64) -> Rgb {
        self.map(value)
    }
}

// ---- tick helpers -----------------------------------------------------------

/// Returns (i1, i2, inc). A negative `inc` means the step is `1 / -inc`, which keeps
/// fractional steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (i1, i2, inc) = if power < 0.0 {
        let f = 10f64.powf(-power) / factor;
        let mut i1 = (start * f).round();
        let mut i2 = (stop * f).round();
        if i1 / f < start { i1 += 1.0; }
        if i2 / f > stop { i2 -= 1.0; }
        (i1, i2, -f)
    } else {
        let f = 10f64.powf(power) * factor;
        let mut i1 = (start / f).round();
        let mut i2 = (stop / f).round();
        if i1 * f < start { i1 += 1.0; }
        if i2 * f > stop { i2 -= 1.0; }
        (i1, i2, f)
    };
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    let inc = tick_spec(start, stop, count).2;
    if inc.is_finite() { inc } else { 0.0 }
}

fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reversed = stop < start;
    let inc = if reversed { tick_increment(stop, start, count) } else { tick_increment(start, stop, count) };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reversed { -step } else { step }
}

fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reversed = stop < start;
    let (lo, hi) = if reversed { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count);
    if !(i2 >= i1) || !inc.is_finite() {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0) as usize;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reversed {
        out.reverse();
    }
    out
}
