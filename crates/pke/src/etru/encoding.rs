//! Byte messages as polynomials over Z[ω].

use etru_algorithms::{EisensteinInteger, Polynomial};
use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{Error, Result};

/// How message bytes map onto polynomial coefficients.
///
/// The two encodings are not interchangeable: a ciphertext must be decoded
/// with the encoding that produced it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageEncoding {
    /// The message read as one big-endian integer, written in base 7 and
    /// mapped onto the digit set `0, 1, -1, ω, -ω, 1+ω, -1-ω`.
    ///
    /// Every digit is its own residue modulo a norm-7 `p`, so this encoding
    /// survives decryption exactly.
    #[default]
    DigitSet,

    /// Consecutive byte pairs packed as `x + yω`.
    ///
    /// Leading and trailing NUL bytes are not preserved. Coefficients only
    /// survive decryption when `p` is large enough to hold them as residues.
    BytePairs,
}

impl MessageEncoding {
    /// Encodes a message into an unbounded coefficient stream
    pub fn encode(self, message: &[u8]) -> Result<Vec<EisensteinInteger>> {
        match self {
            MessageEncoding::DigitSet => encode_digits(message),
            MessageEncoding::BytePairs => Ok(encode_pairs(message)),
        }
    }

    /// Encodes a message that must fit in a single block of `capacity`
    /// coefficients
    pub fn encode_block(self, message: &[u8], capacity: usize) -> Result<Polynomial> {
        let coeffs = self.encode(message)?;
        if coeffs.len() > capacity {
            return Err(Error::Overflow {
                capacity,
                required: coeffs.len(),
            });
        }
        Ok(Polynomial::new(coeffs))
    }

    /// Recovers the message bytes from decrypted coefficients
    pub fn decode(self, coeffs: &[EisensteinInteger]) -> Result<Vec<u8>> {
        match self {
            MessageEncoding::DigitSet => decode_digits(coeffs),
            MessageEncoding::BytePairs => decode_pairs(coeffs),
        }
    }
}

fn encode_digits(message: &[u8]) -> Result<Vec<EisensteinInteger>> {
    match message.first() {
        None => return Ok(Vec::new()),
        Some(0) => {
            return Err(Error::Encoding(
                "a leading NUL byte has no digit-set representation".into(),
            ))
        }
        Some(_) => {}
    }

    Ok(BigUint::from_bytes_be(message)
        .to_radix_be(7)
        .into_iter()
        .map(|d| EisensteinInteger::DIGITS[usize::from(d)])
        .collect())
}

fn digit_value(c: &EisensteinInteger) -> Result<u8> {
    EisensteinInteger::DIGITS
        .iter()
        .position(|d| d == c)
        .map(|i| i as u8)
        .ok_or_else(|| Error::Encoding(format!("coefficient {} is outside the digit set", c)))
}

fn decode_digits(coeffs: &[EisensteinInteger]) -> Result<Vec<u8>> {
    let digits = coeffs.iter().map(digit_value).collect::<Result<Vec<u8>>>()?;
    if digits.is_empty() {
        return Ok(Vec::new());
    }

    let value = BigUint::from_radix_be(&digits, 7)
        .ok_or_else(|| Error::Encoding("invalid base-7 digit string".into()))?;
    if value.is_zero() {
        return Ok(Vec::new());
    }
    Ok(value.to_bytes_be())
}

fn encode_pairs(message: &[u8]) -> Vec<EisensteinInteger> {
    let start = message.iter().position(|&b| b != 0);
    let end = message.iter().rposition(|&b| b != 0);
    let body: &[u8] = match (start, end) {
        (Some(s), Some(e)) => &message[s..=e],
        _ => &[],
    };

    body.chunks(2)
        .map(|pair| {
            let x = i64::from(pair[0]);
            let y = pair.get(1).copied().map_or(0, i64::from);
            EisensteinInteger::new(x, y)
        })
        .collect()
}

fn decode_pairs(coeffs: &[EisensteinInteger]) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(2 * coeffs.len());
    for c in coeffs {
        for v in [c.x, c.y] {
            let byte = u8::try_from(v).map_err(|_| {
                Error::Encoding(format!("coefficient {} does not hold a byte pair", c))
            })?;
            bytes.push(byte);
        }
    }

    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    bytes.truncate(end);
    Ok(bytes)
}
