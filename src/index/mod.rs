//! Precomputed temporal k-core index: per vertex and per core order k,
//! the maximal disjoint time windows during which the vertex belonged to
//! the k-core. Loaded once from a text file, then queried read-only.

use crate::temporal::{Interval, Time, VertexId};
use crate::{HoraeError, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Display;
use std::fs;
use std::mem;
use std::path::Path;
use tracing::{debug, info};

/// Smallest tracked core order. Every vertex trivially belongs to the
/// 0-core and 1-core, so level storage starts at k = 2.
pub const MIN_CORE: usize = 2;

/// Summary of a loaded index, as reported by `horae show`.
#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    pub num_vertices: usize,
    pub num_levels: usize,
    pub num_intervals: usize,
    pub heap_bytes: usize,
}

/// Read-only temporal k-core membership index.
///
/// Maps `vertex -> (k -> interval list)` for `k >= 2`. Each per-(vertex, k)
/// list is canonical: sorted ascending by start, pairwise disjoint and
/// non-adjacent. The validating constructor rejects anything else, which is
/// what makes the binary search in [`CoreIndex::search`] sound.
#[derive(Debug, Clone)]
pub struct CoreIndex {
    // outer: vertex id, middle: k - MIN_CORE, inner: sorted intervals
    data: Vec<Vec<Vec<Interval>>>,
}

impl CoreIndex {
    /// Builds an index from pre-assembled per-vertex, per-k interval lists,
    /// validating that every list is canonical.
    pub fn new(data: Vec<Vec<Vec<Interval>>>) -> Result<Self> {
        for (vertex, levels) in data.iter().enumerate() {
            for (level, intervals) in levels.iter().enumerate() {
                validate_canonical(intervals).map_err(|reason| {
                    HoraeError::InvalidIndex(format!(
                        "vertex {} k={}: {}",
                        vertex,
                        level + MIN_CORE,
                        reason
                    ))
                })?;
            }
        }
        Ok(CoreIndex { data })
    }

    /// Loads an index from the whitespace-separated text format:
    ///
    /// ```text
    /// <num_vertices>
    /// <vertex_id> <num_k_levels>
    ///   <num_intervals>
    ///     <interval_start> <interval_end> ...
    /// ```
    ///
    /// Vertex ids may appear in any order but each exactly once. Truncated
    /// input, non-numeric tokens, out-of-range or re-declared vertex ids,
    /// and non-canonical interval lists are all decode errors; a partially
    /// populated index is never returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading core index from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let mut tokens = TokenReader::new(&contents);

        let num_vertices: usize = tokens.next("vertex count")?;
        let mut data = vec![Vec::new(); num_vertices];
        let mut seen = vec![false; num_vertices];
        for _ in 0..num_vertices {
            let vertex: VertexId = tokens.next("vertex id")?;
            if vertex >= num_vertices {
                return Err(HoraeError::Parse(format!(
                    "vertex id {} out of range (index declares {} vertices)",
                    vertex, num_vertices
                )));
            }
            if seen[vertex] {
                return Err(HoraeError::Parse(format!(
                    "vertex id {} declared twice",
                    vertex
                )));
            }
            seen[vertex] = true;
            let num_levels: usize = tokens.next("level count")?;
            let mut levels = Vec::with_capacity(num_levels);
            for _ in 0..num_levels {
                let num_intervals: usize = tokens.next("interval count")?;
                let mut intervals = Vec::with_capacity(num_intervals);
                for _ in 0..num_intervals {
                    let ts: Time = tokens.next("interval start")?;
                    let te: Time = tokens.next("interval end")?;
                    intervals.push(Interval { ts, te });
                }
                levels.push(intervals);
            }
            data[vertex] = levels;
        }
        info!("Loaded {} vertices", num_vertices);

        Self::new(data)
    }

    pub fn num_vertices(&self) -> usize {
        self.data.len()
    }

    /// Number of tracked core orders for a vertex (levels k = 2..2+n).
    pub fn num_levels(&self, vertex: VertexId) -> usize {
        self.data.get(vertex).map_or(0, Vec::len)
    }

    /// The canonical interval list for (vertex, k), if tracked.
    pub fn intervals(&self, vertex: VertexId, k: usize) -> Option<&[Interval]> {
        let levels = self.data.get(vertex)?;
        levels.get(k.checked_sub(MIN_CORE)?).map(Vec::as_slice)
    }

    /// Total interval count across all vertices and core orders.
    pub fn num_intervals(&self) -> usize {
        self.data
            .iter()
            .flat_map(|levels| levels.iter())
            .map(Vec::len)
            .sum()
    }

    /// Was `vertex` in the k-core for the entire window `[ts, te]`?
    ///
    /// Binary search over the canonical interval list: find the interval
    /// with the greatest start not exceeding `ts`; the window is satisfied
    /// iff that interval's end reaches `te`. A window that straddles two
    /// maximal intervals is by definition not continuous membership and
    /// correctly answers false. Unknown vertex, `k` below 2 or beyond the
    /// tracked levels, and windows outside the covered range answer false
    /// rather than erroring.
    pub fn search(&self, vertex: VertexId, k: usize, ts: Time, te: Time) -> bool {
        let Some(intervals) = self.intervals(vertex, k) else {
            return false;
        };
        let idx = intervals.partition_point(|iv| iv.ts <= ts);
        if idx == 0 {
            return false;
        }
        intervals[idx - 1].te >= te
    }

    /// All vertices in the k-core for the entire window `[ts, te]`,
    /// ascending by vertex id.
    pub fn search_all(&self, k: usize, ts: Time, te: Time) -> BTreeSet<VertexId> {
        debug!("Scanning all vertices for {}-core in [{}, {}]", k, ts, te);
        (0..self.data.len())
            .filter(|&vertex| self.search(vertex, k, ts, te))
            .collect()
    }

    /// Approximate resident size of the interval table in bytes.
    pub fn heap_size(&self) -> usize {
        let mut bytes = self.data.capacity() * mem::size_of::<Vec<Vec<Interval>>>();
        for levels in &self.data {
            bytes += levels.capacity() * mem::size_of::<Vec<Interval>>();
            for intervals in levels {
                bytes += intervals.capacity() * mem::size_of::<Interval>();
            }
        }
        bytes
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            num_vertices: self.num_vertices(),
            num_levels: self.data.iter().map(Vec::len).sum(),
            num_intervals: self.num_intervals(),
            heap_bytes: self.heap_size(),
        }
    }
}

fn validate_canonical(intervals: &[Interval]) -> std::result::Result<(), String> {
    for iv in intervals {
        if iv.ts >= iv.te {
            return Err(format!("interval {} is empty or inverted", iv));
        }
    }
    for w in intervals.windows(2) {
        if w[0].te >= w[1].ts {
            return Err(format!(
                "intervals {} and {} are out of order, overlapping, or adjacent",
                w[0], w[1]
            ));
        }
    }
    Ok(())
}

/// Whitespace-delimited token cursor over the index file contents.
struct TokenReader<'a> {
    tokens: std::str::SplitWhitespace<'a>,
    consumed: usize,
}

impl<'a> TokenReader<'a> {
    fn new(contents: &'a str) -> Self {
        TokenReader {
            tokens: contents.split_whitespace(),
            consumed: 0,
        }
    }

    fn next<T>(&mut self, what: &str) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: Display,
    {
        let token = self.tokens.next().ok_or_else(|| {
            HoraeError::Parse(format!(
                "unexpected end of file: expected {} after {} tokens",
                what, self.consumed
            ))
        })?;
        self.consumed += 1;
        token.parse().map_err(|e| {
            HoraeError::Parse(format!("invalid {} {:?}: {}", what, token, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(ts: Time, te: Time) -> Interval {
        Interval::new(ts, te)
    }

    fn sample_index() -> CoreIndex {
        // vertex 0: k=2 -> [1,4) [6,10); k=3 -> [6,10)
        // vertex 1: k=2 -> [2,20)
        // vertex 2: no tracked levels
        CoreIndex::new(vec![
            vec![vec![iv(1, 4), iv(6, 10)], vec![iv(6, 10)]],
            vec![vec![iv(2, 20)]],
            vec![],
        ])
        .unwrap()
    }

    #[test]
    fn test_search_window_inside_interval() {
        let index = sample_index();
        assert!(index.search(0, 2, 6, 9));
        assert!(index.search(0, 2, 6, 10));
    }

    #[test]
    fn test_search_window_past_interval_end() {
        let index = sample_index();
        assert!(!index.search(0, 2, 6, 11));
    }

    #[test]
    fn test_search_window_before_first_interval() {
        let index = sample_index();
        assert!(!index.search(0, 2, 0, 2));
    }

    #[test]
    fn test_search_window_straddling_two_maximal_intervals() {
        let index = sample_index();
        // [3, 8] crosses the gap between [1,4) and [6,10)
        assert!(!index.search(0, 2, 3, 8));
    }

    #[test]
    fn test_search_window_in_gap_between_intervals() {
        let index = sample_index();
        assert!(!index.search(0, 2, 4, 6));
    }

    #[test]
    fn test_search_untracked_arguments_answer_false() {
        let index = sample_index();
        assert!(!index.search(9, 2, 6, 9)); // unknown vertex
        assert!(!index.search(0, 1, 6, 9)); // k below MIN_CORE
        assert!(!index.search(0, 5, 6, 9)); // k beyond tracked levels
        assert!(!index.search(2, 2, 6, 9)); // vertex with no levels
    }

    #[test]
    fn test_last_vertex_is_queryable() {
        let index = CoreIndex::new(vec![vec![], vec![vec![iv(6, 10)]]]).unwrap();
        assert!(index.search(1, 2, 6, 9));
    }

    #[test]
    fn test_search_all_matches_single_vertex_search() {
        let index = sample_index();
        let hits = index.search_all(2, 6, 9);
        for vertex in 0..index.num_vertices() {
            assert_eq!(hits.contains(&vertex), index.search(vertex, 2, 6, 9));
        }
        assert_eq!(hits.into_iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_new_rejects_overlapping_intervals() {
        let err = CoreIndex::new(vec![vec![vec![iv(1, 5), iv(4, 8)]]]).unwrap_err();
        assert!(matches!(err, HoraeError::InvalidIndex(_)));
    }

    #[test]
    fn test_new_rejects_adjacent_intervals() {
        assert!(CoreIndex::new(vec![vec![vec![iv(1, 4), iv(4, 8)]]]).is_err());
    }

    #[test]
    fn test_new_rejects_unsorted_intervals() {
        assert!(CoreIndex::new(vec![vec![vec![iv(6, 10), iv(1, 4)]]]).is_err());
    }

    #[test]
    fn test_new_rejects_zero_length_intervals() {
        assert!(CoreIndex::new(vec![vec![vec![iv(5, 5)]]]).is_err());
    }

    #[test]
    fn test_accessors() {
        let index = sample_index();
        assert_eq!(index.num_vertices(), 3);
        assert_eq!(index.num_levels(0), 2);
        assert_eq!(index.num_levels(2), 0);
        assert_eq!(index.num_intervals(), 4);
        assert_eq!(index.intervals(0, 3), Some(&[iv(6, 10)][..]));
        assert_eq!(index.intervals(0, 4), None);
        assert_eq!(index.intervals(0, 1), None);
        let stats = index.stats();
        assert_eq!(stats.num_vertices, 3);
        assert_eq!(stats.num_levels, 3);
        assert_eq!(stats.num_intervals, 4);
        assert!(stats.heap_bytes > 0);
    }
}
