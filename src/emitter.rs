use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::formatter::{convert_to_c_array, ROOTCA_LIST_LEN_MACRO};
use crate::Error;

/// Output directory used when none is given on the command line.
pub const DEFAULT_OUT_PATH: &str = "./src/libiotc";

const LICENSE_BANNER: &str = "\
/* Copyright 2018-2019 Google LLC
 *
 * This is part of the Google Cloud IoT Device SDK for Embedded C,
 * it is licensed under the BSD 3-Clause license; you may not use this file
 * except in compliance with the License.
 *
 * You may obtain a copy of the License at:
 *  https://opensource.org/licenses/BSD-3-Clause
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an \"AS IS\" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */
";

const USAGE_COMMENT: &str = r"/* generated by create_buffer.py from a PEM file. Example:
 * ./create_buffer.py --file_name res/trusted_RootCA_certs/roots.pem
 *    --array_name iotc_RootCA_list --out_path src/libiotc/tls/certs --no-pretend
 *
 * The buffer is terminated with '\n' for consistency with POSIX filesystem reads
 */
";

const CPP_BEGIN: &str = "#ifdef __cplusplus\nextern \"C\" {\n#endif";
const CPP_END: &str = "#ifdef __cplusplus\n}\n#endif";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Print the generated text, leave the filesystem alone.
    Pretend,
    /// Write `<name>.h` and `<name>.c`, overwriting existing files.
    Write,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputFiles {
    pub header: PathBuf,
    pub source: PathBuf,
}

impl OutputFiles {
    pub fn new(out_path: &Path, array_name: &str) -> Self {
        Self {
            header: out_path.join(format!("{}.h", array_name)),
            source: out_path.join(format!("{}.c", array_name)),
        }
    }
}

/// Header and source text for one array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    pub header: String,
    pub source: String,
}

impl Generated {
    pub fn new(data: &[u8], array_name: &str, files: &OutputFiles) -> Self {
        Self {
            header: create_h_file(data.len(), array_name),
            source: create_c_file(data, array_name, &files.header),
        }
    }
}

pub fn create_h_file(data_len: usize, array_name: &str) -> String {
    let guard = array_name.to_uppercase();
    let mut out = String::with_capacity(LICENSE_BANNER.len() + 512 + 2 * array_name.len());

    out.push_str(LICENSE_BANNER);
    out.push_str("\n\n");
    out.push_str(&format!("#ifndef __{0}_H__\n#define __{0}_H__\n\n", guard));
    out.push_str(CPP_BEGIN);
    out.push_str("\n\n");
    out.push_str(&format!(
        "#ifndef {0}\n#define {0} {1}\n#endif /* {0} */\n\n",
        ROOTCA_LIST_LEN_MACRO, data_len
    ));
    out.push_str(&format!(
        "extern unsigned char {}[ {} ];\n\n",
        array_name, ROOTCA_LIST_LEN_MACRO
    ));
    out.push_str(CPP_END);
    out.push_str("\n\n");
    out.push_str(&format!("#endif /* __{}_H__ */\n", guard));
    out
}

/// Builds the source file. Only the file name of `header_path` ends up in the
/// `#include` line; a file name that is not valid UTF-8 is written lossily,
/// with U+FFFD in place of the invalid bytes.
pub fn create_c_file(data: &[u8], array_name: &str, header_path: &Path) -> String {
    let header_name = header_path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let array = convert_to_c_array(data, array_name);
    let mut out = String::with_capacity(
        LICENSE_BANNER.len() + USAGE_COMMENT.len() + array.len() + 128,
    );

    out.push_str(LICENSE_BANNER);
    out.push('\n');
    out.push_str(CPP_BEGIN);
    out.push_str("\n\n");
    out.push_str(&format!("#include \"{}\"\n\n", header_name));
    out.push_str(USAGE_COMMENT);
    out.push_str(&array);
    out.push_str("\n\n");
    out.push_str(CPP_END);
    out.push('\n');
    out
}

/// Sends the generated pair to its destination.
///
/// In [`Mode::Write`] the destination path is reported on `out` before each
/// file is written. The two writes are independent: a failure on the source
/// leaves an already written header in place.
pub fn emit<W: Write>(
    mode: Mode,
    files: &OutputFiles,
    generated: &Generated,
    out: &mut W,
) -> Result<(), Error> {
    match mode {
        Mode::Write => {
            write_to_file(&files.header, &generated.header, out)?;
            write_to_file(&files.source, &generated.source, out)?;
        }
        Mode::Pretend => {
            writeln!(out, "{}", generated.header).map_err(|e| Error::io("<stdout>", e))?;
            writeln!(out, "{}", generated.source).map_err(|e| Error::io("<stdout>", e))?;
        }
    }
    Ok(())
}

fn write_to_file<W: Write>(path: &Path, contents: &str, out: &mut W) -> Result<(), Error> {
    writeln!(out, "writing to: {}", path.display()).map_err(|e| Error::io("<stdout>", e))?;
    fs::write(path, contents).map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}
