//! Embeds a binary file, usually a PEM bundle of trusted root certificates,
//! into a generated C header/source pair.
//!
//! The pipeline is [`load_file`], then [`Generated::new`] (which formats the
//! bytes with [`convert_to_c_array`]), then [`emit`].
//!
//! ```no_run
//! use std::path::Path;
//! use create_buffer::{emit, load_file, Generated, Mode, OutputFiles};
//!
//! let data = load_file(Path::new("res/trusted_RootCA_certs/roots.pem"))?;
//! let files = OutputFiles::new(Path::new("src/libiotc/tls/certs"), "iotc_RootCA_list");
//! let generated = Generated::new(&data, "iotc_RootCA_list", &files);
//! emit(Mode::Pretend, &files, &generated, &mut std::io::stdout())?;
//! # Ok::<(), create_buffer::Error>(())
//! ```

mod emitter;
mod error;
mod formatter;
mod reader;

pub use emitter::{
    create_c_file, create_h_file, emit, Generated, Mode, OutputFiles, DEFAULT_OUT_PATH,
};
pub use error::Error;
pub use formatter::{
    convert_to_c_array, format_initializer_lines, BYTES_PER_LINE, ROOTCA_LIST_LEN_MACRO,
};
pub use reader::load_file;

use std::io::Write;
use std::path::Path;

/// Runs the whole pipeline for one input file.
pub fn run<W: Write>(
    file_name: &Path,
    array_name: &str,
    out_path: &Path,
    mode: Mode,
    out: &mut W,
) -> Result<(), Error> {
    let data = load_file(file_name)?;
    let files = OutputFiles::new(out_path, array_name);
    let generated = Generated::new(&data, array_name, &files);
    emit(mode, &files, &generated, out)
}
