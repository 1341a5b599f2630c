//! yz-bench: shared inputs for the criterion benches.

use yz_core::Hand;

/// Deterministic pseudo-random hands (xorshift64), no rand dependency.
pub fn gen_hand_samples(n: usize) -> Vec<Hand> {
    let mut x: u64 = 0x1234_5678_9ABC_DEF0;
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let mut d = [0u8; 5];
        for die in &mut d {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            *die = (x % 6) as u8 + 1;
        }
        if let Ok(hand) = Hand::try_from(d) {
            out.push(hand);
        }
    }
    out
}
