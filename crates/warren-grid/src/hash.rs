//! Grid fingerprinting for determinism checks.
//!
//! Uses FNV-1a for a fast, deterministic hash of grid contents. The hash
//! is not cryptographically secure; it exists so tests and callers can
//! compare two grids (or a grid against a recorded value) cheaply.

use crate::grid::Grid;

impl Grid {
    /// 64-bit FNV-1a hash of the grid's shape and contents.
    ///
    /// The byte stream is `width` and `height` as little-endian `u32`s
    /// followed by one kind byte per cell in row-major order, so grids with
    /// equal cells but different shapes never collide trivially.
    pub fn fingerprint(&self) -> u64 {
        let shape = self
            .width()
            .to_le_bytes()
            .into_iter()
            .chain(self.height().to_le_bytes());
        let cells = self.cells().iter().map(|&kind| kind as u8);
        shape
            .chain(cells)
            .fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
                (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Dimensions, Grid};
    use warren_core::{CellKind, Position};

    #[test]
    fn identical_grids_share_fingerprint() {
        let a = Grid::new(Dimensions::new(7, 7).unwrap());
        let b = Grid::new(Dimensions::new(7, 7).unwrap());
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn single_cell_change_alters_fingerprint() {
        let a = Grid::new(Dimensions::new(7, 7).unwrap());
        let mut b = a.clone();
        b.set(Position::new(3, 3), CellKind::Path).unwrap();
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn matches_reference_fnv1a() {
        // 7x7 all-wall grid: bytes 07 00 00 00 07 00 00 00 then 49 zeros.
        let g = Grid::new(Dimensions::new(7, 7).unwrap());
        let mut bytes = vec![7, 0, 0, 0, 7, 0, 0, 0];
        bytes.extend(std::iter::repeat(0u8).take(49));
        let mut expected: u64 = 0xcbf29ce484222325;
        for b in bytes {
            expected ^= b as u64;
            expected = expected.wrapping_mul(0x100000001b3);
        }
        assert_eq!(g.fingerprint(), expected);
    }

    #[test]
    fn shape_is_part_of_fingerprint() {
        let wide = Grid::new(Dimensions::new(9, 7).unwrap());
        let tall = Grid::new(Dimensions::new(7, 9).unwrap());
        assert_eq!(wide.cells(), tall.cells());
        assert_ne!(wide.fingerprint(), tall.fingerprint());
    }
}
