// Parser combinators using nom for fixed-width binary fields

use nom::{
    bytes::complete::take,
    number::complete::{le_f32, le_f64, le_u16, le_u32, le_u8},
    IResult,
};

/// Take exactly `count` bytes
pub fn take_bytes(count: usize, input: &[u8]) -> IResult<&[u8], &[u8]> {
    take(count)(input)
}

/// Decode bytes as Latin-1, one character per byte.
///
/// Every byte value maps to a code point, so this never fails.
pub fn latin1_to_string(bytes: &[u8]) -> String {
    if !bytes.is_ascii() {
        tracing::debug!("Non-ASCII bytes in string field, decoding as Latin-1: {:02X?}", bytes);
    }
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Parse a fixed-width Latin-1 string field, keeping only the bytes before
/// the first NUL. Whatever follows the NUL is discarded, even if it is not NUL.
pub fn parse_latin1_cstring(len: usize) -> impl Fn(&[u8]) -> IResult<&[u8], String> {
    move |input: &[u8]| {
        let (input, bytes) = take_bytes(len, input)?;
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Ok((input, latin1_to_string(&bytes[..end])))
    }
}

/// Parse a single byte
pub fn parse_u8(input: &[u8]) -> IResult<&[u8], u8> {
    le_u8(input)
}

/// Parse a u16 little-endian
pub fn parse_u16_le(input: &[u8]) -> IResult<&[u8], u16> {
    le_u16(input)
}

/// Parse a u32 little-endian
pub fn parse_u32_le(input: &[u8]) -> IResult<&[u8], u32> {
    le_u32(input)
}

/// Parse an IEEE-754 single little-endian
pub fn parse_f32_le(input: &[u8]) -> IResult<&[u8], f32> {
    le_f32(input)
}

/// Parse an IEEE-754 double little-endian
pub fn parse_f64_le(input: &[u8]) -> IResult<&[u8], f64> {
    le_f64(input)
}

/// Parse an array of elements using a parser
pub fn parse_array<'a, O, F>(
    count_val: usize,
    mut parser: F,
) -> impl FnMut(&'a [u8]) -> IResult<&'a [u8], Vec<O>>
where
    F: FnMut(&'a [u8]) -> IResult<&'a [u8], O>,
{
    move |mut input: &'a [u8]| {
        let mut results = Vec::with_capacity(count_val);
        for _ in 0..count_val {
            let (remaining, value) = parser(input)?;
            results.push(value);
            input = remaining;
        }
        Ok((input, results))
    }
}
