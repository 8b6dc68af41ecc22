//! Prime form reduction.

use crate::error::SetError;

/// Transpose an ordering so that it starts at 0.
///
/// The ordering is sorted first, then its lowest pitch is subtracted from
/// every element.
///
/// # Examples
/// ```
/// use pcset_core::reduce_to_prime;
///
/// assert_eq!(reduce_to_prime(&[7, 10, 14]).unwrap(), vec![0, 3, 7]);
/// ```
pub fn reduce_to_prime(ordering: &[i32]) -> Result<Vec<i32>, SetError> {
    let mut sorted = ordering.to_vec();
    sorted.sort_unstable();
    let lowest = *sorted.first().ok_or(SetError::EmptySet)?;
    Ok(sorted.into_iter().map(|pc| pc - lowest).collect())
}

/// Render a prime form as concatenated digits, e.g. `[0, 3, 7]` as `"037"`.
pub fn prime_digits(prime: &[i32]) -> String {
    prime.iter().map(|pc| pc.to_string()).collect()
}
