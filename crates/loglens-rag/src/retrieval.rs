//! Diversity-aware re-ranking of retrieved chunks

use loglens_core::RetrievedChunk;

/// Maximal marginal relevance selection.
///
/// Greedily picks `top_k` chunks from `candidates`, trading relevance to the
/// query against similarity to already-selected chunks. `lambda` of 1.0 is
/// pure relevance, 0.0 pure diversity. Candidates without a stored embedding
/// fall back to their retrieval score for relevance and contribute no
/// redundancy penalty.
pub fn mmr_rerank(
    query: &[f32],
    mut candidates: Vec<RetrievedChunk>,
    lambda: f32,
    top_k: usize,
) -> Vec<RetrievedChunk> {
    let mut selected: Vec<RetrievedChunk> = Vec::new();

    while selected.len() < top_k && !candidates.is_empty() {
        let mut best_idx = 0;
        let mut best_score = f32::NEG_INFINITY;

        for (i, candidate) in candidates.iter().enumerate() {
            let relevance = candidate
                .embedding
                .as_deref()
                .map(|e| cosine_similarity(query, e))
                .unwrap_or(candidate.score);

            let redundancy = selected
                .iter()
                .filter_map(|s| match (&candidate.embedding, &s.embedding) {
                    (Some(a), Some(b)) => Some(cosine_similarity(a, b)),
                    _ => None,
                })
                .fold(0.0f32, f32::max);

            let score = lambda * relevance - (1.0 - lambda) * redundancy;
            if score > best_score {
                best_score = score;
                best_idx = i;
            }
        }

        selected.push(candidates.remove(best_idx));
    }

    selected
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}
