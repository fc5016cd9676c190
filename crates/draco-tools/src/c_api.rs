//! C entry point for embedding the encoder run.
//!
//! ```c
//! int status = draco_tools_compress("cube.obj", NULL); /* writes cube.obj.drc */
//! ```

use std::ffi::CStr;
use std::io;
use std::os::raw::{c_char, c_int};

use tracing::warn;

use crate::error::EXIT_FAILURE;
use crate::pipeline::EncoderPipeline;
use crate::request::EncodingRequest;

fn path_arg(ptr: *const c_char) -> Option<Option<String>> {
    if ptr.is_null() {
        return Some(None);
    }
    // SAFETY: the caller passes a valid NUL-terminated string.
    let s = unsafe { CStr::from_ptr(ptr) };
    s.to_str().ok().map(|s| Some(s.to_string()))
}

/// Encodes `input` with default options and writes the result to `output`
/// (or `<input>.drc` when `output` is null or empty). Reports go to stdout.
///
/// Returns 0 on success and -1 on failure, including a null or non-UTF-8
/// `input`.
#[no_mangle]
pub extern "C" fn draco_tools_compress(input: *const c_char, output: *const c_char) -> c_int {
    let input = match path_arg(input) {
        Some(Some(input)) => input,
        _ => {
            warn!("draco_tools_compress called without a valid input path");
            return EXIT_FAILURE;
        }
    };
    let output = match path_arg(output) {
        Some(output) => output,
        None => {
            warn!("draco_tools_compress called with a non UTF-8 output path");
            return EXIT_FAILURE;
        }
    };

    let mut request = EncodingRequest::new(input);
    if let Some(output) = output {
        request = request.with_output_path(output);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    EncoderPipeline::new().run(&request, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::fs;
    use std::ptr;

    #[test]
    fn test_null_input_fails() {
        assert_eq!(draco_tools_compress(ptr::null(), ptr::null()), -1);
    }

    #[test]
    fn test_compress_to_default_path() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tri.obj");
        fs::write(&input, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();

        let c_input = CString::new(input.to_str().unwrap()).unwrap();
        let empty = CString::new("").unwrap();
        assert_eq!(draco_tools_compress(c_input.as_ptr(), empty.as_ptr()), 0);

        let encoded = fs::read(dir.path().join("tri.obj.drc")).unwrap();
        assert_eq!(&encoded[..5], b"DRACO");
    }
}
