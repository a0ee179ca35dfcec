//! Parser for interference graphs encoded as
//! comma-separated adjacency records, one node per line.

use std::io::BufRead;

use crate::{
    debug::ParseDiagnostic,
    graph::{Graph, NodeId},
    Error,
};

use super::{Input, ParseResult};

/// Parse one adjacency record: the node id followed by a
/// possibly empty comma-separated neighbour list.
fn parse_record(input: Input<'_>) -> ParseResult<'_, (NodeId, Vec<NodeId>)> {
    use nom::{
        character::complete::{char, u32},
        multi::many0,
        sequence::{pair, preceded},
    };

    pair(u32, many0(preceded(char(','), u32)))(input)
}

/// Build the graph from the input records.
///
/// A record that fails to parse is reported as a diagnostic
/// and skipped; whether that aborts the run is up to the
/// caller. A structurally empty record ends the run.
pub fn parse_adjacency_input<B: BufRead>(
    input: B,
) -> Result<(Graph, Vec<ParseDiagnostic>), Error> {
    use nom::combinator::all_consuming;

    let mut graph = Graph::new();
    let mut diagnostics = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        if line.is_empty() {
            return Err(Error::EmptyRecord(line_number));
        }

        match all_consuming(parse_record)(&line) {
            Ok((_, (node, neighbours))) => graph.set_node(node, neighbours),
            Err(_) => diagnostics.push(ParseDiagnostic::new(line_number, &line)),
        };
    }

    Ok((graph, diagnostics))
}

#[cfg(test)]
mod test {
    use std::io::BufReader;

    use crate::Error;

    use super::*;

    #[test]
    fn test_parse_record() -> Result<(), Error> {
        let record = "1,2,3,4";
        let parsed = parse_record(record)?.1;
        assert_eq!((1, vec![2, 3, 4]), parsed);

        Ok(())
    }

    #[test]
    fn test_parse_record_without_neighbours() -> Result<(), Error> {
        let record = "17";
        let parsed = parse_record(record)?.1;
        assert_eq!((17, vec![]), parsed);

        Ok(())
    }

    #[test]
    fn test_parse_adjacency_input() -> Result<(), Error> {
        let records = "1,2,3,4
2,4,1
3,1
4,1,2
";
        let buf = BufReader::new(records.as_bytes());
        let (parsed, diagnostics) = parse_adjacency_input(buf)?;

        let mut graph = Graph::new();
        graph.set_node(1, vec![2, 3, 4]);
        graph.set_node(2, vec![4, 1]);
        graph.set_node(3, vec![1]);
        graph.set_node(4, vec![1, 2]);

        assert_eq!(graph, parsed);
        assert!(diagnostics.is_empty());

        Ok(())
    }

    #[test]
    fn test_malformed_record_is_reported() -> Result<(), Error> {
        let records = "1,2\n2,x,1\n3,1\n";
        let buf = BufReader::new(records.as_bytes());
        let (parsed, diagnostics) = parse_adjacency_input(buf)?;

        assert_eq!(2, parsed.size());
        assert!(parsed.neighbours(2).is_empty());
        assert_eq!(1, diagnostics.len());
        assert_eq!(2, diagnostics[0].line);

        Ok(())
    }

    #[test]
    fn test_trailing_garbage_is_reported() -> Result<(), Error> {
        let records = "1,2,\n2,1\n";
        let buf = BufReader::new(records.as_bytes());
        let (parsed, diagnostics) = parse_adjacency_input(buf)?;

        assert_eq!(1, parsed.size());
        assert_eq!(1, diagnostics.len());
        assert_eq!(1, diagnostics[0].line);

        Ok(())
    }

    #[test]
    fn test_last_record_wins() -> Result<(), Error> {
        let records = "5,1,2\n5,3\n";
        let buf = BufReader::new(records.as_bytes());
        let (parsed, diagnostics) = parse_adjacency_input(buf)?;

        assert_eq!(1, parsed.size());
        assert_eq!(vec![3], parsed.neighbours(5));
        assert!(diagnostics.is_empty());

        Ok(())
    }

    #[test]
    fn test_empty_record_is_fatal() {
        let records = "1,2\n\n3,1\n";
        let buf = BufReader::new(records.as_bytes());
        let result = parse_adjacency_input(buf);

        assert!(matches!(result, Err(Error::EmptyRecord(2))));
    }
}
