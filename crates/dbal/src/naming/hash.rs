//! Generated identifier names
//!
//! Indexes and constraints declared without a name get one derived from the
//! columns they cover. The derivation must be stable across processes: the
//! name generated while defining a schema has to match the one generated while
//! introspecting it.

/// Length bound used when the caller does not supply one
pub const DEFAULT_MAX_IDENTIFIER_LENGTH: usize = 30;

const CRC32_POLYNOMIAL: u32 = 0xEDB8_8320;

const CRC32_TABLE: [u32; 256] = build_crc32_table();

const fn build_crc32_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 == 1 {
                (crc >> 1) ^ CRC32_POLYNOMIAL
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// CRC-32 (IEEE 802.3) checksum of `data`
pub fn crc32(data: &[u8]) -> u32 {
    !data.iter().fold(!0u32, |crc, &byte| {
        CRC32_TABLE[((crc ^ byte as u32) & 0xFF) as usize] ^ (crc >> 8)
    })
}

/// Derive an identifier from `columns`
///
/// Each column name is checksummed independently and rendered as eight hex
/// digits; the result is `prefix_<hashes>`, truncated to `max_length`
/// characters and upper-cased (ASCII only, so the length bound holds).
/// Different column lists may still collide.
pub fn generate_identifier_name<S: AsRef<str>>(
    columns: &[S],
    prefix: &str,
    max_length: usize,
) -> String {
    let hash: String = columns
        .iter()
        .map(|column| format!("{:08x}", crc32(column.as_ref().as_bytes())))
        .collect();

    format!("{}_{}", prefix, hash)
        .chars()
        .take(max_length)
        .collect::<String>()
        .to_ascii_uppercase()
}
