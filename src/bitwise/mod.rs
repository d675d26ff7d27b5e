// Binary parsing primitives for fixed-layout little-endian records

pub mod parser;

pub use parser::{
    latin1_to_string, parse_array, parse_f32_le, parse_f64_le, parse_latin1_cstring, parse_u16_le,
    parse_u32_le, parse_u8, take_bytes,
};
