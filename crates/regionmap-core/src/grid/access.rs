//! Bit access for packed 1 bpp rows
//!
//! Cells are packed MSB-to-LSB within each 32-bit word: cell 0 of a row
//! occupies bit 31 of the row's first word.

/// Get a 1-bit cell value from a packed row.
///
/// # Panics
///
/// Panics if `x` lies beyond the row's words.
#[inline]
pub fn get_data_bit(line: &[u32], x: u32) -> bool {
    (line[(x >> 5) as usize] >> (31 - (x & 31))) & 1 == 1
}

/// Set a 1-bit cell value in a packed row.
///
/// # Panics
///
/// Panics if `x` lies beyond the row's words.
#[inline]
pub fn set_data_bit(line: &mut [u32], x: u32, val: bool) {
    let word = &mut line[(x >> 5) as usize];
    let bit = 0x8000_0000u32 >> (x & 31);
    if val {
        *word |= bit;
    } else {
        *word &= !bit;
    }
}
