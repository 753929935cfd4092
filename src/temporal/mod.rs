//! Interval algebra over temporal k-core membership windows.
//!
//! All times are half-open `[ts, te)`. The collection type [`Intervals`]
//! has a *canonical form*: sorted by start ascending, pairwise disjoint,
//! and non-adjacent (no element's end equals the next element's start).
//! Canonical form is guaranteed on the output of [`Intervals::combine`]
//! and is a documented precondition of [`Intervals::intersection`] and
//! [`Intervals::subtract`]; it is not enforced by the raw constructors.

use serde::Serialize;
use std::fmt;

/// Timestamp in whatever discrete unit the index producer used.
pub type Time = u64;

/// Vertex identifier; an index into the vertex table.
pub type VertexId = usize;

/// A half-open time range `[ts, te)` with `ts <= te`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    pub ts: Time,
    pub te: Time,
}

impl Interval {
    pub fn new(ts: Time, te: Time) -> Self {
        debug_assert!(ts <= te, "interval start {} exceeds end {}", ts, te);
        Interval { ts, te }
    }

    /// Structural containment: `self` covers every point of `other`.
    pub fn contains(&self, other: &Interval) -> bool {
        self.ts <= other.ts && other.te <= self.te
    }

    /// Point membership under half-open semantics.
    pub fn contains_point(&self, t: Time) -> bool {
        self.ts <= t && t < self.te
    }

    /// Bounding interval of two intervals (min of starts, max of ends).
    /// Only meaningful when the two are known to overlap or touch.
    pub fn combine(&self, other: &Interval) -> Interval {
        Interval {
            ts: self.ts.min(other.ts),
            te: self.te.max(other.te),
        }
    }

    /// True iff the two ranges share any point.
    pub fn overlaps(a: &Interval, b: &Interval) -> bool {
        a.ts < b.te && b.ts < a.te
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.ts, self.te)
    }
}

/// An ordered sequence of intervals with value semantics: every operation
/// returns a new `Intervals`, never mutating its operands.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Intervals {
    intervals: Vec<Interval>,
}

impl Intervals {
    pub fn new() -> Self {
        Intervals::default()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    /// Stable merge of the two sequences by start. Building block for
    /// [`Intervals::combine`]; does not collapse overlaps, so the result
    /// is generally not canonical.
    pub fn concat(a: &Intervals, b: &Intervals) -> Intervals {
        let (xs, ys) = (&a.intervals, &b.intervals);
        let mut merged = Vec::with_capacity(xs.len() + ys.len());
        let (mut i, mut j) = (0, 0);
        while i < xs.len() && j < ys.len() {
            if ys[j].ts < xs[i].ts {
                merged.push(ys[j]);
                j += 1;
            } else {
                merged.push(xs[i]);
                i += 1;
            }
        }
        merged.extend_from_slice(&xs[i..]);
        merged.extend_from_slice(&ys[j..]);
        Intervals { intervals: merged }
    }

    /// Set union in canonical form. Adjacent intervals (one's end equal to
    /// the next's start) are merged, never left as two elements. Inputs
    /// must each be sorted by start; they need not be disjoint.
    ///
    /// Commutative and associative.
    pub fn combine(a: &Intervals, b: &Intervals) -> Intervals {
        debug_assert!(a.is_sorted() && b.is_sorted());
        let mut result: Vec<Interval> = Vec::new();
        for interval in Intervals::concat(a, b).intervals {
            match result.last_mut() {
                Some(last) if last.te >= interval.ts => last.te = last.te.max(interval.te),
                _ => result.push(interval),
            }
        }
        Intervals { intervals: result }
    }

    /// Canonical set intersection of two canonical sequences. Zero-length
    /// intersections (intervals touching at a single point) are dropped.
    ///
    /// Commutative.
    pub fn intersection(a: &Intervals, b: &Intervals) -> Intervals {
        debug_assert!(a.is_canonical() && b.is_canonical());
        let (xs, ys) = (&a.intervals, &b.intervals);
        let mut result = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < xs.len() && j < ys.len() {
            let left = xs[i].ts.max(ys[j].ts);
            let right = xs[i].te.min(ys[j].te);
            if left < right {
                result.push(Interval::new(left, right));
            }
            if xs[i].te < ys[j].te {
                i += 1;
            } else {
                j += 1;
            }
        }
        Intervals { intervals: result }
    }

    /// Canonical set difference `a \ b` of two canonical sequences.
    ///
    /// Not commutative. A cursor walks each `a` interval left to right;
    /// segments not covered by the current `b` interval are emitted, and
    /// whatever remains of `a` once `b` is exhausted is emitted in full.
    pub fn subtract(a: &Intervals, b: &Intervals) -> Intervals {
        debug_assert!(a.is_canonical() && b.is_canonical());
        let (xs, ys) = (&a.intervals, &b.intervals);
        let mut result = Vec::new();
        let (mut i, mut j) = (0, 0);
        let mut cur_ts: Time = 0;
        while i < xs.len() && j < ys.len() {
            cur_ts = cur_ts.max(xs[i].ts);
            if cur_ts >= xs[i].te {
                // current a-interval fully consumed
                i += 1;
            } else if xs[i].te <= ys[j].ts {
                // a ends before b begins: emit the rest of a
                result.push(Interval::new(cur_ts, xs[i].te));
                i += 1;
            } else if cur_ts < ys[j].ts {
                // uncovered prefix of a before b begins
                result.push(Interval::new(cur_ts, ys[j].ts));
                cur_ts = ys[j].te;
                j += 1;
            } else if cur_ts <= ys[j].te {
                // cursor inside b: skip past it
                cur_ts = ys[j].te;
                j += 1;
            } else {
                j += 1;
            }
        }
        while i < xs.len() {
            cur_ts = cur_ts.max(xs[i].ts);
            if cur_ts < xs[i].te {
                result.push(Interval::new(cur_ts, xs[i].te));
            }
            i += 1;
        }
        Intervals { intervals: result }
    }

    /// True iff any element contains the point. Linear scan; the index
    /// layer owns the binary-search fast path.
    pub fn contains_point(&self, t: Time) -> bool {
        self.intervals.iter().any(|iv| iv.contains_point(t))
    }

    /// True iff some element structurally contains `interval`.
    pub fn contains(&self, interval: &Interval) -> bool {
        self.intervals.iter().any(|iv| iv.contains(interval))
    }

    /// True iff any element shares a point with `interval`.
    pub fn overlaps(&self, interval: &Interval) -> bool {
        self.intervals.iter().any(|iv| Interval::overlaps(iv, interval))
    }

    fn is_sorted(&self) -> bool {
        self.intervals.windows(2).all(|w| w[0].ts <= w[1].ts)
    }

    /// Canonical form check: each interval non-empty, sorted by start,
    /// pairwise disjoint, and non-adjacent. Zero-length intervals cover no
    /// point and have no place in a minimal point-set representation; a
    /// sequence containing one would also let `subtract` emit an adjacent
    /// pair around it.
    pub fn is_canonical(&self) -> bool {
        self.intervals.iter().all(|iv| iv.ts < iv.te)
            && self.intervals.windows(2).all(|w| w[0].te < w[1].ts)
    }
}

impl From<Vec<Interval>> for Intervals {
    fn from(intervals: Vec<Interval>) -> Self {
        Intervals { intervals }
    }
}

impl FromIterator<Interval> for Intervals {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Intervals {
            intervals: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Intervals {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
