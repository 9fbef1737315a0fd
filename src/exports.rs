use crate::config::{HistogramOptions, ReportMode};
use crate::error::HistogramError;
use crate::run::{exit_code, run};
use core::ffi::{c_char, CStr};
use std::borrow::Cow;

/// Number of decimals used by [`positional_histogram_run`] in frequency mode.
const EXPORT_PRECISION: usize = 4;

/// Builds a positional histogram of the file at `input` and writes the text report to `output`.
///
/// # Arguments
///
/// * `input` - Null terminated path of the file to analyze.
/// * `output` - Null terminated path of the report to create (truncated if it exists).
/// * `block_size` - Number of positions per block, must be at least 1.
/// * `charset_size` - Number of byte values tracked per position, must be at least 1.
/// * `sorted` - Non-zero to order every block by count, largest first.
/// * `show_frequency` - Non-zero to report percentages instead of counts.
///
/// # Returns
///
/// `0` on success, otherwise the exit code of the error. See
/// [`crate::error::HistogramError::exit_code`].
///
/// # Safety
///
/// `input` and `output` must be null or point to valid null terminated strings.
/// A null pointer is treated as an empty path.
#[no_mangle]
pub unsafe extern "C" fn positional_histogram_run(
    input: *const c_char,
    output: *const c_char,
    block_size: usize,
    charset_size: usize,
    sorted: bool,
    show_frequency: bool,
) -> i32 {
    let input = path_from_ptr(input);
    let output = path_from_ptr(output);

    // Same checks as the string options, in the same order.
    let result = if input.is_empty() {
        Err(HistogramError::MissingInput)
    } else if output.is_empty() {
        Err(HistogramError::MissingOutput)
    } else {
        let mut options = HistogramOptions::new(&*input, &*output);
        options.block_size = block_size;
        options.charset_size = charset_size;
        options.sorted = sorted;
        if show_frequency {
            options.mode = ReportMode::Frequency {
                precision: EXPORT_PRECISION,
            };
        }
        run(&options)
    };

    exit_code(&result)
}

unsafe fn path_from_ptr<'a>(ptr: *const c_char) -> Cow<'a, str> {
    if ptr.is_null() {
        return "".into();
    }

    CStr::from_ptr(ptr).to_string_lossy()
}
