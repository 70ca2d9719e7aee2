//! yz-bench: shared fixtures for the criterion benches.

use yz_core::Hand;

/// `n` pseudo-random hands from a fixed xorshift64 stream, left unsorted
/// (straights are positional).
pub fn hand_samples(n: usize) -> Vec<Hand> {
    let mut x: u64 = 0x1234_5678_9ABC_DEF0;
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let mut d = [0u8; 5];
        for v in d.iter_mut() {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            *v = (x % 6) as u8 + 1;
        }
        if let Ok(hand) = Hand::try_from(d) {
            out.push(hand);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_deterministic() {
        let a = hand_samples(64);
        assert_eq!(a.len(), 64);
        assert_eq!(a, hand_samples(64));
    }
}
