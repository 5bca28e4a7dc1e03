//! The fixed-column manager line format.
//!
//! Backoff reports in the simulation log are positional: the two-character
//! manager identifier sits at character columns [33, 35) and the time field
//! runs from column 40 to the end of the line. Columns are character
//! positions, so a multi-byte character never splits a field mid-codepoint.

use crate::error::{FilterError, Result};
use crate::models::ManagerSample;

/// First character column of the manager identifier.
pub const ID_START: usize = 33;
/// One past the last character column of the manager identifier.
pub const ID_END: usize = 35;
/// First character column of the time field.
pub const TIME_START: usize = 40;

/// Extract the manager id and raw time field from a manager line.
///
/// Returns [`FilterError::LineTooShort`] when the line has no character at
/// column [`TIME_START`], i.e. when either field would be truncated or empty.
/// `line_number` is 1-based and only used for the error message.
pub fn parse_manager_line(line: &str, line_number: u64) -> Result<ManagerSample> {
    let too_short = || FilterError::LineTooShort {
        line_number,
        length: line.chars().count(),
    };

    let id_start = byte_pos(line, ID_START).ok_or_else(too_short)?;
    let id_end = byte_pos(line, ID_END).ok_or_else(too_short)?;
    let time_start = byte_pos(line, TIME_START).ok_or_else(too_short)?;

    Ok(ManagerSample {
        id: line[id_start..id_end].to_string(),
        raw_time: line[time_start..].to_string(),
    })
}

/// Parse a raw time field as seconds.
///
/// Surrounding whitespace is ignored. Returns
/// [`FilterError::InvalidTimeValue`] when the remainder is not a valid
/// floating-point number.
pub fn parse_seconds(manager_id: &str, raw_time: &str) -> Result<f64> {
    raw_time
        .trim()
        .parse::<f64>()
        .map_err(|_| FilterError::InvalidTimeValue {
            manager_id: manager_id.to_string(),
            value: raw_time.to_string(),
        })
}

/// Byte offset of the character at character position `char_pos`.
///
/// `None` when the line holds fewer than `char_pos + 1` characters.
fn byte_pos(line: &str, char_pos: usize) -> Option<usize> {
    line.char_indices().nth(char_pos).map(|(idx, _)| idx)
}
