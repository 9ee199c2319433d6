use ndarray::Array2;

/// One connected region of a binary band mask.
#[derive(Clone, Debug)]
pub struct Region {
    /// Number of pixels in the region (zeroth spatial moment).
    pub area: usize,
    /// Sum of the column indices of all pixels (first-order moment M10).
    pub col_sum: u64,
}

impl Region {
    /// Horizontal centroid, M10 / M00.
    pub fn cx(&self) -> f64 {
        self.col_sum as f64 / self.area as f64
    }
}

/// Find the connected regions of a binary mask using two-pass labeling
/// with union-find. Uses 4-connectivity (left and upper neighbors).
///
/// Returns regions sorted by area descending (largest first).
pub fn connected_regions(mask: &Array2<bool>) -> Vec<Region> {
    let (h, w) = mask.dim();
    if h == 0 || w == 0 {
        return Vec::new();
    }

    let mut labels = Array2::<u32>::zeros((h, w));
    let mut next_label: u32 = 1;
    // Union-find parent array. Index 0 unused; labels start at 1.
    let mut parent: Vec<u32> = vec![0; h * w / 2 + 2];

    // Pass 1: assign provisional labels.
    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] {
                continue;
            }

            let up = if row > 0 { labels[[row - 1, col]] } else { 0 };
            let left = if col > 0 { labels[[row, col - 1]] } else { 0 };

            match (up > 0, left > 0) {
                (false, false) => {
                    if next_label as usize >= parent.len() {
                        parent.resize(parent.len() * 2, 0);
                    }
                    parent[next_label as usize] = next_label;
                    labels[[row, col]] = next_label;
                    next_label += 1;
                }
                (true, false) => {
                    labels[[row, col]] = up;
                }
                (false, true) => {
                    labels[[row, col]] = left;
                }
                (true, true) => {
                    let smaller = up.min(left);
                    let larger = up.max(left);
                    labels[[row, col]] = smaller;
                    if smaller != larger {
                        union(&mut parent, smaller, larger);
                    }
                }
            }
        }
    }

    // Flatten parent references.
    for i in 1..next_label as usize {
        parent[i] = find(&parent, i as u32);
    }

    // Pass 2: resolve labels and accumulate moments.
    let mut stats_map = std::collections::HashMap::<u32, Region>::new();

    for row in 0..h {
        for col in 0..w {
            let lbl = labels[[row, col]];
            if lbl == 0 {
                continue;
            }
            let root = parent[lbl as usize];

            let entry = stats_map.entry(root).or_insert(Region {
                area: 0,
                col_sum: 0,
            });
            entry.area += 1;
            entry.col_sum += col as u64;
        }
    }

    let mut regions: Vec<Region> = stats_map.into_values().collect();
    regions.sort_unstable_by(|a, b| b.area.cmp(&a.area));
    regions
}

fn find(parent: &[u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        x = parent[x as usize];
    }
    x
}

fn union(parent: &mut [u32], a: u32, b: u32) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        // Merge larger root into smaller root to keep labels consistent.
        let (small, big) = if ra < rb { (ra, rb) } else { (rb, ra) };
        parent[big as usize] = small;
    }
}
