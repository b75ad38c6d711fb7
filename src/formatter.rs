/// Preprocessor constant holding the number of bytes in the generated array.
pub const ROOTCA_LIST_LEN_MACRO: &str = "IOTC_ROOTCA_LIST_BYTE_LENGTH";

pub const BYTES_PER_LINE: usize = 16;

const INDENT: &str = "    ";

// "0x00, "
const ENTRY_WIDTH: usize = 6;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Renders `data` as a C array definition named `array_name`.
///
/// The initializer holds `BYTES_PER_LINE` entries per line, each line
/// indented by four spaces, e.g.
///
/// ```text
/// unsigned char foo[ IOTC_ROOTCA_LIST_BYTE_LENGTH ] = {
///     0x00, 0x01, 0x02 };
/// ```
pub fn convert_to_c_array(data: &[u8], array_name: &str) -> String {
    let lines = (data.len() + BYTES_PER_LINE - 1) / BYTES_PER_LINE;
    let mut out = String::with_capacity(
        64 + array_name.len() + data.len() * ENTRY_WIDTH + lines * INDENT.len(),
    );

    out.push_str(&format!(
        "unsigned char {}[ {} ] = {{\n{}",
        array_name, ROOTCA_LIST_LEN_MACRO, INDENT
    ));

    for (i, line) in format_initializer_lines(data).enumerate() {
        if i > 0 {
            out.push_str(",\n");
            out.push_str(INDENT);
        }
        out.push_str(&line);
    }

    out.push_str(" };");
    out
}

/// Yields the body of each initializer line: up to `BYTES_PER_LINE` entries
/// joined by `", "`, without indentation or the separator between lines.
pub fn format_initializer_lines(data: &[u8]) -> impl Iterator<Item = String> + '_ {
    data.chunks(BYTES_PER_LINE).map(|chunk| {
        let mut line = String::with_capacity(chunk.len() * ENTRY_WIDTH);
        for (i, byte) in chunk.iter().enumerate() {
            if i > 0 {
                line.push_str(", ");
            }
            push_hex_byte(&mut line, *byte);
        }
        line
    })
}

// Same text as `format!("0x{:02x}", byte)`.
fn push_hex_byte(out: &mut String, byte: u8) {
    out.push_str("0x");
    out.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
    out.push(HEX_DIGITS[usize::from(byte & 0x0f)] as char);
}
