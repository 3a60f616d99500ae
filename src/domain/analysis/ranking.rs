//! Ranking helpers shared by the scoring strategies.

use serde::{Deserialize, Serialize};

/// An alternative's place in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// 1-based rank; 1 is best.
    pub rank: usize,
    /// Position of the alternative in the caller's input order.
    pub index: usize,
    pub name: String,
    pub score: f64,
}

/// Orders alternative indices by descending score.
///
/// The sort is stable: among equal scores, the alternative listed first in
/// the input ranks higher.
pub fn order_by_score(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order
}

/// Converts an ordering into the 1-based rank of every alternative.
pub fn ranks_from_order(order: &[usize]) -> Vec<usize> {
    let mut ranks = vec![0; order.len()];
    for (position, &index) in order.iter().enumerate() {
        ranks[index] = position + 1;
    }
    ranks
}

/// Builds the ranked list for an ordering.
pub fn ranked_alternatives(
    order: &[usize],
    names: &[String],
    scores: &[f64],
) -> Vec<RankedAlternative> {
    order
        .iter()
        .enumerate()
        .map(|(position, &index)| RankedAlternative {
            rank: position + 1,
            index,
            name: names[index].clone(),
            score: scores[index],
        })
        .collect()
}
