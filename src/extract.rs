//! Dominant colors of an image.
//!
//! Pixels are sampled with a fixed stride, then counted in a histogram
//! of HSB buckets: 12 hues × 4 saturations × 4 brightnesses for
//! chromatic colors and 8 brightness levels for grays.  Each bucket
//! accumulates the channels of its pixels as integers, so that the
//! histograms of the chunks processed in parallel can be merged in any
//! order with the very same result.

use log::{debug, warn};
use rayon::prelude::*;
use rgb::RGBA;
use crate::{hsb::unit, Hsb, Palette, RGBColor, PALETTE_LEN};

/// Default upper bound on the number of pixels visited.
pub const DEFAULT_MAX_SAMPLES: usize = 16_384;

/// Default alpha below which a pixel is considered transparent and
/// ignored.
pub const DEFAULT_MIN_ALPHA: f64 = 0.1;

const HUE_BINS: usize = 12;
const SATURATION_BINS: usize = 4;
const BRIGHTNESS_BINS: usize = 4;
const GRAY_BINS: usize = 8;
const CHROMATIC_BUCKETS: usize = HUE_BINS * SATURATION_BINS * BRIGHTNESS_BINS;
const BUCKETS: usize = CHROMATIC_BUCKETS + GRAY_BINS;
/// Colors with a saturation or brightness below this are grays.
const ACHROMATIC: f64 = 0.1;
/// Fixed-point scale of the accumulated channels.
const SCALE: f64 = (1u64 << 24) as f64;

/// Sum of the channels (in 1/`SCALE` units) of the pixels in a bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Bucket {
    count: u64,
    sum: [u64; 4],
}

impl Bucket {
    #[inline]
    fn add(&mut self, q: [u64; 4]) {
        self.count += 1;
        for (s, x) in self.sum.iter_mut().zip(q) { *s += x }
    }

    fn merge(&mut self, other: &Bucket) {
        self.count += other.count;
        for (s, x) in self.sum.iter_mut().zip(other.sum) { *s += x }
    }

    /// Mean color of the bucket.  Must not be empty.
    fn mean(&self) -> RGBA<f64> {
        let n = self.count as f64 * SCALE;
        let [r, g, b, a] = self.sum.map(|s| s as f64 / n);
        RGBA { r, g, b, a }
    }
}

#[derive(Clone, Debug)]
struct Histogram {
    buckets: Vec<Bucket>, // Invariant: length = BUCKETS
    /// Every sample, whatever its alpha.
    all: Bucket,
}

impl Default for Histogram {
    fn default() -> Self {
        Histogram { buckets: vec![Bucket::default(); BUCKETS],
                    all: Bucket::default() }
    }
}

#[inline]
fn bin(x: f64, n: usize) -> usize { ((x * n as f64) as usize).min(n - 1) }

/// Index of the histogram bucket of `c`.
fn bucket_of(c: RGBA<f64>) -> usize {
    let hsb = Hsb::from_rgb(c);
    if hsb.s < ACHROMATIC || hsb.b < ACHROMATIC {
        CHROMATIC_BUCKETS + bin(hsb.b, GRAY_BINS)
    } else {
        // Bins are centered on red, 30° wide.
        let hue = (hsb.h + 15.) % 360. / 360.;
        (bin(hue, HUE_BINS) * SATURATION_BINS + bin(hsb.s, SATURATION_BINS))
            * BRIGHTNESS_BINS + bin(hsb.b, BRIGHTNESS_BINS)
    }
}

#[inline]
fn quantize(c: RGBA<f64>) -> [u64; 4] {
    [c.r, c.g, c.b, c.a].map(|x| (unit(x) * SCALE).round() as u64)
}

impl Histogram {
    fn add(mut self, c: RGBA<f64>, min_alpha: f64) -> Self {
        let q = quantize(c);
        self.all.add(q);
        if unit(c.a) >= min_alpha {
            let [r, g, b, a] = q.map(|x| x as f64 / SCALE);
            let rgba = RGBA { r, g, b, a };
            self.buckets[bucket_of(rgba)].add(q);
        }
        self
    }

    fn merge(mut self, other: Histogram) -> Self {
        for (b, o) in self.buckets.iter_mut().zip(&other.buckets) {
            b.merge(o)
        }
        self.all.merge(&other.all);
        self
    }

    /// The `n` most populated buckets, by decreasing count; ties go to
    /// the lower bucket index.
    fn most_frequent(&self, n: usize) -> Vec<&Bucket> {
        let mut idx: Vec<usize> = (0 .. BUCKETS)
            .filter(|&i| self.buckets[i].count > 0).collect();
        idx.sort_by(|&i, &j| self.buckets[j].count.cmp(&self.buckets[i].count)
                    .then(i.cmp(&j)));
        idx.into_iter().take(n).map(|i| &self.buckets[i]).collect()
    }
}

/// Extraction of the dominant colors of a pixel buffer.
///
/// Created by [`Extract::new`] with the default parameters, which
/// [`Palette::from_image`] uses.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use chameleon::Extract;
/// let mut pixels = vec![RGB8::new(200, 30, 30); 90];
/// pixels.extend([RGB8::new(20, 20, 200); 10]);
/// let p = Extract::new(&pixels).palette();
/// assert_eq!(p[0], RGB8::new(200, 30, 30));
/// assert_eq!(p[1], RGB8::new(20, 20, 200));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Extract<'a, P> {
    pixels: &'a [P],
    flat: bool,
    max_samples: usize,
    min_alpha: f64,
}

impl<'a, P> Extract<'a, P>
where P: RGBColor + Sync {
    /// Extraction over `pixels` with the default parameters.
    pub fn new(pixels: &'a [P]) -> Self {
        Extract { pixels, flat: false, max_samples: DEFAULT_MAX_SAMPLES,
                  min_alpha: DEFAULT_MIN_ALPHA }
    }

    /// Map the resulting colors to their nearest flat colors.
    pub fn flat(mut self, flat: bool) -> Self {
        self.flat = flat;
        self
    }

    /// Visit at most `n` pixels (at least one).
    pub fn max_samples(mut self, n: usize) -> Self {
        self.max_samples = n.max(1);
        self
    }

    /// Ignore pixels whose alpha is below `a`.
    pub fn min_alpha(mut self, a: f64) -> Self {
        self.min_alpha = unit(a);
        self
    }

    fn stride(&self) -> usize {
        self.pixels.len().div_ceil(self.max_samples).max(1)
    }

    fn histogram(&self, min_alpha: f64) -> Histogram {
        self.pixels.par_iter()
            .step_by(self.stride())
            .fold(Histogram::default, |h, p| h.add(p.to_rgba(), min_alpha))
            .reduce(Histogram::default, Histogram::merge)
    }

    fn clear() -> P { P::from_rgba(RGBA::new(0., 0., 0., 0.)) }

    /// Return the centers of the five most frequent color buckets, most
    /// frequent first.
    ///
    /// If fewer than five buckets are populated, the found colors are
    /// repeated in order.  An image without any opaque pixel is
    /// analyzed ignoring alpha and an empty buffer gives five
    /// transparent colors.
    pub fn palette(&self) -> Palette<P> {
        let mut hist = self.histogram(self.min_alpha);
        if hist.all.count == 0 {
            warn!("empty pixel buffer, returning a transparent palette");
            return Palette::new(std::array::from_fn(|_| Self::clear()))
        }
        if hist.buckets.iter().all(|b| b.count == 0) {
            warn!("no pixel with alpha ≥ {}, ignoring transparency",
                  self.min_alpha);
            hist = self.histogram(0.);
        }
        let top = hist.most_frequent(PALETTE_LEN);
        debug!("sampled {} of {} pixels (stride {}), {} buckets kept: {:?}",
               hist.all.count, self.pixels.len(), self.stride(), top.len(),
               top.iter().map(|b| b.count).collect::<Vec<_>>());
        let colors = std::array::from_fn(|i| {
            let c = P::from_rgba(top[i % top.len()].mean());
            if self.flat { c.to_flat() } else { c }
        });
        Palette::new(colors)
    }

    /// Return the mean color of the sampled pixels, transparent pixels
    /// included.  An empty buffer gives a transparent color.
    pub fn average(&self) -> P {
        let hist = self.histogram(self.min_alpha);
        if hist.all.count == 0 {
            return Self::clear()
        }
        let c = P::from_rgba(hist.all.mean());
        if self.flat { c.to_flat() } else { c }
    }
}
