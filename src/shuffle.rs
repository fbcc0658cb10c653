use rand::Rng;

/// Returns a uniformly random permutation of `choices` (Fisher–Yates).
///
/// Walks `i` from the last index down to 1, draws `j` from `0..=i` and swaps.
/// The input slice is left untouched.
pub fn shuffle_choices<R: Rng + ?Sized>(choices: &[String], rng: &mut R) -> Vec<String> {
    let mut out = choices.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}
