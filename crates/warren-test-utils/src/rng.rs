use rand::RngCore;

/// An RNG that returns the same word forever.
///
/// With `FixedRng::zero()` every bounded draw lands on its lower bound,
/// so a Fisher-Yates shuffle always swaps with index 0.
#[derive(Clone, Copy, Debug)]
pub struct FixedRng(pub u64);

impl FixedRng {
    pub fn zero() -> Self {
        Self(0)
    }
}

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = self.0.to_le_bytes();
        for (i, b) in dest.iter_mut().enumerate() {
            *b = bytes[i % 8];
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;

    #[test]
    fn zero_shuffle_rotates_left() {
        let mut v = [0, 1, 2, 3];
        v.shuffle(&mut FixedRng::zero());
        assert_eq!(v, [1, 2, 3, 0]);
    }
}
