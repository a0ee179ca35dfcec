use std::io::Write;

use crate::colouring::ColourAssignment;

/// Write one `<node id><colour>` line per coloured node,
/// ascending by node id. Ids come straight from the
/// assignment, so sparse id spaces keep their meaning.
///
/// A line that fails to write is reported and skipped.
/// Returns the number of lines written.
pub fn write_colouring(writer: &mut impl Write, assignment: &ColourAssignment) -> usize {
    let mut written = 0;

    for (node, colour) in assignment {
        if let Err(write_error) = writeln!(writer, "{}{}", node, colour) {
            eprintln!("Error writing entry for node {}: {}", node, write_error);
            continue;
        }
        written += 1;
    }

    written
}
