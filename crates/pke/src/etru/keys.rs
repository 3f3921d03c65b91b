//! ETRU key records and their byte format.
//!
//! Layout, all integers little-endian:
//! `magic[4] || n:u32 || p:(i64,i64) || q:(i64,i64)` followed by each
//! polynomial as `len:u32 || len × (i64,i64)`. Public keys carry `h`,
//! private keys carry `f` then `f_p`.

use core::fmt;

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use etru_algorithms::{EisensteinInteger, Polynomial};
use etru_api::{Result as ApiResult, ResultExt, Serialize, SerializeSecret};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error, Result};

const PUBLIC_KEY_MAGIC: [u8; 4] = *b"ETPK";
const PRIVATE_KEY_MAGIC: [u8; 4] = *b"ETSK";

// magic, n, p, q
const HEADER_LEN: usize = 4 + 4 + 2 * 16;

/// ETRU public key: the ring parameters and `h = p·f_q·g mod (R, q)`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicKey {
    /// Ring dimension
    pub n: usize,
    /// Small modulus
    pub p: EisensteinInteger,
    /// Large modulus
    pub q: EisensteinInteger,
    /// Public polynomial
    pub h: Polynomial,
}

/// ETRU private key: the ring parameters, `f` and `f_p = f⁻¹ mod (R, p)`
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrivateKey {
    /// Ring dimension
    pub n: usize,
    /// Small modulus
    pub p: EisensteinInteger,
    /// Large modulus
    pub q: EisensteinInteger,
    /// Private polynomial
    pub f: Polynomial,
    /// Inverse of `f` modulo `(R, p)`
    pub f_p: Polynomial,
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("n", &self.n)
            .field("p", &self.p)
            .field("q", &self.q)
            .finish_non_exhaustive()
    }
}

fn malformed(reason: impl Into<String>) -> Error {
    Error::MalformedKey(reason.into())
}

fn check_params(n: usize, p: EisensteinInteger, q: EisensteinInteger) -> Result<()> {
    if n == 0 {
        return Err(malformed("ring dimension is zero"));
    }
    if p.is_zero() {
        return Err(malformed("small modulus p is zero"));
    }
    if q.is_zero() {
        return Err(malformed("large modulus q is zero"));
    }
    Ok(())
}

fn check_polynomial(name: &str, poly: &Polynomial, n: usize) -> Result<()> {
    if poly.is_empty() {
        return Err(malformed(format!("{} has no coefficients", name)));
    }
    if poly.len() > n {
        return Err(malformed(format!(
            "{} has {} coefficients but N is {}",
            name,
            poly.len(),
            n
        )));
    }
    Ok(())
}

impl PublicKey {
    /// Checks the record for structural consistency
    pub fn validate(&self) -> Result<()> {
        check_params(self.n, self.p, self.q)?;
        check_polynomial("h", &self.h, self.n)
    }

    fn encoded_len(&self) -> usize {
        HEADER_LEN + poly_len(&self.h)
    }

    fn read(bytes: &[u8]) -> Result<Self> {
        let mut reader = KeyReader::new(bytes);
        let (n, p, q) = reader.header(PUBLIC_KEY_MAGIC)?;
        let h = reader.polynomial(n)?;
        reader.finish()?;

        let key = Self { n, p, q, h };
        key.validate()?;
        Ok(key)
    }
}

impl PrivateKey {
    /// Checks the record for structural consistency
    pub fn validate(&self) -> Result<()> {
        check_params(self.n, self.p, self.q)?;
        check_polynomial("f", &self.f, self.n)?;
        check_polynomial("f_p", &self.f_p, self.n)
    }

    fn encoded_len(&self) -> usize {
        HEADER_LEN + poly_len(&self.f) + poly_len(&self.f_p)
    }

    fn read(bytes: &[u8]) -> Result<Self> {
        let mut reader = KeyReader::new(bytes);
        let (n, p, q) = reader.header(PRIVATE_KEY_MAGIC)?;
        let f = reader.polynomial(n)?;
        let f_p = reader.polynomial(n)?;
        reader.finish()?;

        let key = Self { n, p, q, f, f_p };
        key.validate()?;
        Ok(key)
    }
}

impl Serialize for PublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Self::read(bytes).with_context("ETRU public key")
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        put_header(&mut buf, PUBLIC_KEY_MAGIC, self.n, self.p, self.q);
        put_polynomial(&mut buf, &self.h);
        buf
    }
}

impl SerializeSecret for PrivateKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Self::read(bytes).with_context("ETRU private key")
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        // Sized up front so the buffer never reallocates and leaves copies behind
        let mut buf = Zeroizing::new(Vec::with_capacity(self.encoded_len()));
        put_header(&mut buf, PRIVATE_KEY_MAGIC, self.n, self.p, self.q);
        put_polynomial(&mut buf, &self.f);
        put_polynomial(&mut buf, &self.f_p);
        buf
    }
}

fn poly_len(poly: &Polynomial) -> usize {
    4 + 16 * poly.len()
}

fn put_u32(buf: &mut Vec<u8>, value: u32) {
    let mut word = [0u8; 4];
    LittleEndian::write_u32(&mut word, value);
    buf.extend_from_slice(&word);
}

fn put_element(buf: &mut Vec<u8>, e: EisensteinInteger) {
    let mut words = [0u8; 16];
    LittleEndian::write_i64(&mut words[..8], e.x);
    LittleEndian::write_i64(&mut words[8..], e.y);
    buf.extend_from_slice(&words);
    words.zeroize();
}

fn put_header(
    buf: &mut Vec<u8>,
    magic: [u8; 4],
    n: usize,
    p: EisensteinInteger,
    q: EisensteinInteger,
) {
    buf.extend_from_slice(&magic);
    put_u32(buf, n as u32);
    put_element(buf, p);
    put_element(buf, q);
}

fn put_polynomial(buf: &mut Vec<u8>, poly: &Polynomial) {
    put_u32(buf, poly.len() as u32);
    for &c in poly.as_coeffs_slice() {
        put_element(buf, c);
    }
}

/// Cursor over an encoded key
struct KeyReader<'a> {
    bytes: &'a [u8],
}

impl<'a> KeyReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    fn u32(&mut self) -> Result<u32> {
        self.bytes
            .read_u32::<LittleEndian>()
            .map_err(|_| malformed("truncated key encoding"))
    }

    fn element(&mut self) -> Result<EisensteinInteger> {
        let x = self.bytes.read_i64::<LittleEndian>();
        let y = self.bytes.read_i64::<LittleEndian>();
        match (x, y) {
            (Ok(x), Ok(y)) => Ok(EisensteinInteger::new(x, y)),
            _ => Err(malformed("truncated key encoding")),
        }
    }

    fn header(
        &mut self,
        magic: [u8; 4],
    ) -> Result<(usize, EisensteinInteger, EisensteinInteger)> {
        let mut tag = [0u8; 4];
        std::io::Read::read_exact(&mut self.bytes, &mut tag)
            .map_err(|_| malformed("truncated key encoding"))?;
        if tag != magic {
            return Err(malformed("unexpected key tag"));
        }

        let n = self.u32()? as usize;
        let p = self.element()?;
        let q = self.element()?;
        check_params(n, p, q)?;
        Ok((n, p, q))
    }

    fn polynomial(&mut self, n: usize) -> Result<Polynomial> {
        let len = self.u32()? as usize;
        // Bound the allocation before trusting the length prefix
        if len > n {
            return Err(malformed(format!(
                "polynomial has {} coefficients but N is {}",
                len, n
            )));
        }

        let mut coeffs = Vec::with_capacity(len);
        for _ in 0..len {
            coeffs.push(self.element()?);
        }
        Ok(Polynomial::new(coeffs))
    }

    fn finish(self) -> Result<()> {
        if !self.bytes.is_empty() {
            return Err(malformed(format!(
                "{} trailing bytes after key",
                self.bytes.len()
            )));
        }
        Ok(())
    }
}
