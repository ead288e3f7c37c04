use tracing::trace;

pub struct Solution;

impl Solution {
    /// Plants up to `n` flowers into `flowerbed` (`0` empty, `1` planted)
    /// without any two flowers being adjacent, returning whether all `n` fit.
    ///
    /// The bed is mutated in place: every planting made is written back,
    /// and planting stops once `n` flowers are in.
    pub fn can_place_flowers(flowerbed: &mut [i32], n: i32) -> bool {
        let n = match usize::try_from(n) {
            Ok(0) | Err(_) => return true,
            Ok(n) => n,
        };

        let len = flowerbed.len();
        if len == 1 && n == 1 {
            let empty = flowerbed[0] == 0;
            if empty {
                flowerbed[0] = 1;
            }
            return empty;
        }

        if n >= len {
            return false;
        }

        let mut planted = 0;
        for i in 0..len {
            if flowerbed[i] != 0 {
                continue;
            }

            let prev_empty = i == 0 || flowerbed[i - 1] == 0;
            let next_empty = i == len - 1 || flowerbed[i + 1] == 0;

            if prev_empty && next_empty {
                flowerbed[i] = 1;
                planted += 1;
                trace!(plot = i, planted, "planted flower");

                if planted == n {
                    return true;
                }
            }
        }

        false
    }
}
