//! Command line handling and input file wiring.

use std::{env, fs::File, io::BufReader, path::PathBuf};

use crate::{debug::ParseDiagnostic, graph::Graph, parser::parse_adjacency_input, Error};

/// Options of a single run.
#[derive(Debug)]
pub struct Settings {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

/// The tool takes exactly the input path and the output path.
fn parse_settings(mut args: impl Iterator<Item = String>) -> Result<Settings, Error> {
    let binary = args.next().unwrap_or_else(|| "regcol".to_string());

    match (args.next(), args.next(), args.next()) {
        (Some(input), Some(output), None) => Ok(Settings {
            input_path: PathBuf::from(input),
            output_path: PathBuf::from(output),
        }),
        _ => {
            eprintln!("Usage: {} <input_file> <output_file>", binary);
            Err(Error::Usage)
        }
    }
}

/// Read the graph from the file named on the command line.
#[cfg(not(tarpaulin_include))]
pub fn read_graph() -> Result<(Graph, Vec<ParseDiagnostic>, Settings), Error> {
    let settings = parse_settings(env::args())?;

    let file = File::open(&settings.input_path).map_err(Error::InputFile)?;
    let (graph, diagnostics) = parse_adjacency_input(BufReader::new(file))?;

    Ok((graph, diagnostics, settings))
}

#[cfg(test)]
mod test {
    use super::*;

    fn args<'a>(list: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
        list.iter().map(|arg| arg.to_string())
    }

    #[test]
    fn test_both_paths_accepted() -> Result<(), Error> {
        let settings = parse_settings(args(&["regcol", "graph.txt", "colours.txt"]))?;

        assert_eq!(PathBuf::from("graph.txt"), settings.input_path);
        assert_eq!(PathBuf::from("colours.txt"), settings.output_path);

        Ok(())
    }

    #[test]
    fn test_wrong_argument_count_is_rejected() {
        assert!(matches!(parse_settings(args(&["regcol"])), Err(Error::Usage)));
        assert!(matches!(
            parse_settings(args(&["regcol", "only_input"])),
            Err(Error::Usage)
        ));
        assert!(matches!(
            parse_settings(args(&["regcol", "in", "out", "extra"])),
            Err(Error::Usage)
        ));
    }
}
