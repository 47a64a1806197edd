use rand::{
    rngs::StdRng,
    seq::index::sample,
    RngCore,
    SeedableRng,
};
use sha2::{Digest, Sha256};

use crate::bits::BitArray;

/// Deterministic generator seeded by arbitrary text.
/// Each instance owns its state, nothing is shared between instances.
pub struct TextSeededRng(StdRng);

impl TextSeededRng {
    pub fn new(text: &str) -> Self {
        let seed: [u8; 32] = Sha256::digest(text.as_bytes()).into();
        Self(StdRng::from_seed(seed))
    }

    pub fn random_bits(&mut self, width: usize) -> BitArray {
        let mut bytes = vec![0; (width + 7) / 8];
        self.0.fill_bytes(&mut bytes);
        BitArray::from_bytes(&bytes, width)
    }

    /// Picks `amount` distinct items in random order.
    /// Returns `None` if there are not enough items.
    pub fn sample_distinct<'a, T>(
        &mut self,
        items: &'a [T],
        amount: usize,
    ) -> Option<Vec<&'a T>> {
        if amount > items.len() {
            return None;
        };
        let picked = sample(&mut self.0, items.len(), amount)
            .into_iter()
            .map(|index| &items[index])
            .collect();
        Some(picked)
    }
}
