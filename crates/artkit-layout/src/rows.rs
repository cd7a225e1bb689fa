//! Grouping shapes into rows by vertical proximity.
//!
//! Greedy, order-dependent clustering: tallest shapes seed rows first, and
//! every shape joins the first existing row whose vertical span overlaps its
//! own. O(n·k) with k the number of rows so far; not globally optimal
//! interval clustering, but stable and cheap.

use smallvec::{smallvec, SmallVec};

use artkit_core::Rect;

/// A row of shapes sharing a vertical span.
#[derive(Debug, Clone, PartialEq)]
pub struct RowCluster {
    /// Top of the row's span (union of member spans).
    pub top: f64,
    /// Bottom of the row's span.
    pub bottom: f64,
    /// Indices into the caller's slice, in placement order.
    pub members: SmallVec<[usize; 8]>,
}

impl RowCluster {
    fn seed(index: usize, rect: &Rect) -> Self {
        Self {
            top: rect.top,
            bottom: rect.bottom,
            members: smallvec![index],
        }
    }

    fn overlaps(&self, rect: &Rect) -> bool {
        rect.bottom <= self.top && rect.top >= self.bottom
    }

    fn insert(&mut self, index: usize, rect: &Rect) {
        self.top = self.top.max(rect.top);
        self.bottom = self.bottom.min(rect.bottom);
        self.members.push(index);
    }
}

/// Clusters rectangles into rows by vertical-span overlap.
///
/// Candidates are taken tallest-first (original index breaks ties) and each
/// joins the first overlapping row in creation order — a shape whose span
/// touches several rows still lands in exactly one.
pub fn cluster_rows(rects: &[Rect]) -> Vec<RowCluster> {
    let normalized: Vec<Rect> = rects.iter().map(|r| r.normalized()).collect();

    let mut order: Vec<usize> = (0..normalized.len()).collect();
    order.sort_by(|&a, &b| {
        normalized[b]
            .height()
            .total_cmp(&normalized[a].height())
            .then(a.cmp(&b))
    });

    let mut clusters: Vec<RowCluster> = Vec::new();
    for index in order {
        let rect = &normalized[index];
        match clusters.iter_mut().find(|c| c.overlaps(rect)) {
            Some(cluster) => cluster.insert(index, rect),
            None => clusters.push(RowCluster::seed(index, rect)),
        }
    }
    clusters
}
