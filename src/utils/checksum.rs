//! Adler-32 checksum used to derive short keys from URLs.
//!
//! Fast and short, not collision resistant: two different URLs may share a
//! key, in which case the later write wins.

/// Largest prime below 2^16.
const MOD_ADLER: u32 = 65_521;

/// Largest n such that 255n(n+1)/2 + (n+1)(MOD_ADLER-1) fits in a u32,
/// i.e. how many bytes can be summed before reducing.
const NMAX: usize = 5_552;

/// Computes the Adler-32 checksum of `data`.
pub fn adler32(data: &[u8]) -> u32 {
    let mut a: u32 = 1;
    let mut b: u32 = 0;

    for chunk in data.chunks(NMAX) {
        for &byte in chunk {
            a += u32::from(byte);
            b += a;
        }
        a %= MOD_ADLER;
        b %= MOD_ADLER;
    }

    (b << 16) | a
}

/// Returns the short key for a URL: its Adler-32 checksum in decimal.
///
/// # Examples
///
/// ```
/// use hashlink::utils::checksum::hash_url;
///
/// assert_eq!(hash_url("https://example.com"), "1203504933");
/// ```
pub fn hash_url(url: &str) -> String {
    adler32(url.as_bytes()).to_string()
}
