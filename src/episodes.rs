//! Episode filename sequencer used by `yazi-bulk-rename`.
//!
//! Yazi's bulk rename pairs the n-th line of the new-name buffer with the n-th selected
//! file. When the selection is listed in plain lexical order (`1, 10, 11, 12, 2, 3, ...`)
//! the names have to follow the same "base number, then its decade" order to line up.
//!
//! Ordering rule for an inclusive range `[start, end]`:
//! - walk `i` ascending; emit `i` unless it was already emitted
//! - right after `i`, sweep the decade window `[i * 10, i * 10 + 10)` and emit every
//!   not-yet-emitted member that lies inside `[start, end]`
//!
//! ```rust
//! use yazikit::episodes::render_episode_names;
//!
//! let out = render_episode_names(1, 12, "mp4");
//! assert!(out.starts_with("01.mp4\n10.mp4\n11.mp4\n12.mp4\n02.mp4"));
//! ```
//!
//! The computation never fails: an inverted range yields nothing and window arithmetic
//! that would overflow `i64` is skipped (such a window cannot intersect the range).

use std::collections::HashSet;

/// Width of the decade window swept after each base number.
pub const DECADE_WINDOW: i64 = 10;
/// Minimum digit count of a rendered episode number.
pub const PAD_WIDTH: usize = 2;

/// Inclusive range of episode numbers. `start > end` is allowed and means "empty".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeRange {
    pub start: i64,
    pub end: i64,
}

impl EpisodeRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn contains(&self, n: i64) -> bool {
        self.start <= n && n <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of integers in the range. The full `i64` span saturates at `u64::MAX`.
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.end.abs_diff(self.start).saturating_add(1)
        }
    }

    /// Members of the decade window of `i` that fall inside this range, as an
    /// inclusive `(lo, hi)` pair. `None` when the window misses the range.
    fn window_of(&self, i: i64) -> Option<(i64, i64)> {
        let lo = i.checked_mul(DECADE_WINDOW)?;
        let hi = lo.saturating_add(DECADE_WINDOW - 1);
        let lo = lo.max(self.start);
        let hi = hi.min(self.end);
        (lo <= hi).then_some((lo, hi))
    }

    /// Episode numbers in rename order.
    pub fn order(&self) -> Vec<i64> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut seen: HashSet<i64> = HashSet::new();
        let mut order = Vec::new();
        for i in self.start..=self.end {
            if seen.insert(i) {
                order.push(i);
            }
            if let Some((lo, hi)) = self.window_of(i) {
                for j in lo..=hi {
                    if seen.insert(j) {
                        order.push(j);
                    }
                }
            }
        }
        order
    }
}

/// Episode numbers of `[start, end]` in rename order.
pub fn episode_order(start: i64, end: i64) -> Vec<i64> {
    EpisodeRange::new(start, end).order()
}

/// `7, "mkv"` -> `07.mkv`. Wider numbers are kept whole.
pub fn episode_name(n: i64, extension: &str) -> String {
    format!("{:0width$}.{}", n, extension, width = PAD_WIDTH)
}

pub fn episode_names(start: i64, end: i64, extension: &str) -> Vec<String> {
    episode_order(start, end)
        .into_iter()
        .map(|n| episode_name(n, extension))
        .collect()
}

/// Newline-joined names, ready to paste into the bulk rename buffer.
pub fn render_episode_names(start: i64, end: i64, extension: &str) -> String {
    episode_names(start, end, extension).join("\n")
}
