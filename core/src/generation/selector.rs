use crate::model::ClusterHeadAssignment;
use crate::prelude::{ensure_positive, NetworkResult};
use rand::Rng;

/// Picks `count` cluster heads uniformly from `[0, count)`, independently per
/// position. No distance or energy awareness.
pub fn select_heads_with<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> NetworkResult<ClusterHeadAssignment> {
    let count = ensure_positive(count)?;
    let heads = (0..count).map(|_| rng.gen_range(0..count)).collect();
    Ok(ClusterHeadAssignment::new(heads))
}

pub fn select_heads(count: usize) -> NetworkResult<ClusterHeadAssignment> {
    select_heads_with(&mut rand::thread_rng(), count)
}
