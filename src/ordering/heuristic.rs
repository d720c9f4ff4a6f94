//! Sampled edge orderings for graphs too large for full enumeration.

use rand::Rng;

use crate::models::Edge;

/// Builds the sampled orderings (as edge indices) for a large edge set:
/// ascending weight, descending weight, then `samples` random shuffles.
///
/// Weight ties keep input order. The shuffles are drawn from `rng`, so a
/// seeded generator reproduces the same orderings.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_postman::models::Edge;
/// use u_postman::ordering::heuristic_orders;
///
/// let edges = vec![Edge::new(0, 0, 1, 3.0), Edge::new(1, 1, 2, 1.0), Edge::new(2, 2, 0, 2.0)];
/// let mut rng = StdRng::seed_from_u64(42);
/// let orders = heuristic_orders(&edges, 10, &mut rng);
/// assert_eq!(orders.len(), 12);
/// assert_eq!(orders[0], vec![1, 2, 0]);
/// assert_eq!(orders[1], vec![0, 2, 1]);
/// ```
pub fn heuristic_orders<R: Rng>(edges: &[Edge], samples: usize, rng: &mut R) -> Vec<Vec<usize>> {
    let n = edges.len();
    let mut orders = Vec::with_capacity(samples + 2);

    let mut ascending: Vec<usize> = (0..n).collect();
    ascending.sort_by(|&i, &j| edges[i].weight().total_cmp(&edges[j].weight()));
    let mut descending: Vec<usize> = (0..n).collect();
    descending.sort_by(|&i, &j| edges[j].weight().total_cmp(&edges[i].weight()));
    orders.push(ascending);
    orders.push(descending);

    for _ in 0..samples {
        let mut perm: Vec<usize> = (0..n).collect();
        // Fisher-Yates shuffle
        for i in (1..perm.len()).rev() {
            let j = rng.random_range(0..=i);
            perm.swap(i, j);
        }
        orders.push(perm);
    }

    orders
}
