/// Greatest common divisor, by the Euclidean algorithm.
pub(crate) fn gcd(mut n: u64, mut m: u64) -> u64 {
    while m != 0 {
        (n, m) = (m, n % m);
    }
    n
}

pub(crate) fn is_coprime(n: u64, m: u64) -> bool {
    gcd(n, m) == 1
}

/// Returns the smallest integer >= 2 that is coprime with `n`.
///
/// Scans candidates `2..n` in order; when the scan exhausts without a
/// match (only `n == 2` once `n == 1` is special-cased), `n + 1` is
/// always coprime with `n`.
pub(crate) fn min_coprime(n: u64) -> u64 {
    if n == 1 {
        return 2;
    }
    for candidate in 2..n {
        if is_coprime(candidate, n) {
            return candidate;
        }
    }
    n + 1
}
