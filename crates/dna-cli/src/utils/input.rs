use super::parser::{InputSource, parse_input_token};
use crate::cli::EnergyArgs;
use crate::error::{CliError, Result};
use std::io::Read;
use tracing::{debug, warn};

pub const STDIN_LABEL: &str = "<stdin>";

/// Orders every requested input: positionals as given, then `--file`, then `--stdin`.
///
/// Stdin is read at most once; later requests for it are dropped.
pub fn collect_sources(args: &EnergyArgs) -> Result<Vec<InputSource>> {
    let mut sources = args
        .inputs
        .iter()
        .map(|token| parse_input_token(token).map_err(|e| CliError::Argument(e.to_string())))
        .collect::<Result<Vec<_>>>()?;

    sources.extend(args.files.iter().cloned().map(InputSource::File));
    if args.stdin {
        sources.push(InputSource::Stdin);
    }

    let mut seen_stdin = false;
    sources.retain(|source| {
        if *source != InputSource::Stdin {
            return true;
        }
        if seen_stdin {
            warn!("Standard input requested more than once; measuring it once.");
            return false;
        }
        seen_stdin = true;
        true
    });

    if sources.is_empty() {
        return Err(CliError::Argument(
            "No input given. Pass a sequence, --file PATH or --stdin.".to_string(),
        ));
    }
    Ok(sources)
}

/// Reads one source into a `(label, bytes)` pair ready for measurement.
pub fn read_source<R: Read>(
    source: &InputSource,
    stdin: &mut R,
    strip_trailing_newline: bool,
) -> Result<(String, Vec<u8>)> {
    match source {
        InputSource::Literal(text) => Ok((text.clone(), text.clone().into_bytes())),
        InputSource::File(path) => {
            debug!("Reading input file {:?}", path);
            let bytes = std::fs::read(path).map_err(|e| CliError::Input {
                path: path.clone(),
                source: e,
            })?;
            Ok((
                path.display().to_string(),
                finish(bytes, strip_trailing_newline),
            ))
        }
        InputSource::Stdin => {
            debug!("Reading standard input.");
            let mut bytes = Vec::new();
            stdin.read_to_end(&mut bytes)?;
            Ok((STDIN_LABEL.to_string(), finish(bytes, strip_trailing_newline)))
        }
    }
}

fn finish(bytes: Vec<u8>, strip_trailing_newline: bool) -> Vec<u8> {
    if strip_trailing_newline {
        strip_line_terminator(bytes)
    } else {
        bytes
    }
}

/// Removes one trailing `\n` or `\r\n`.
pub fn strip_line_terminator(mut bytes: Vec<u8>) -> Vec<u8> {
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(inputs: &[&str], files: &[&str], stdin: bool) -> EnergyArgs {
        EnergyArgs {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            files: files.iter().map(PathBuf::from).collect(),
            stdin,
            ..Default::default()
        }
    }

    #[test]
    fn collect_sources_orders_positionals_then_files_then_stdin() {
        let sources = collect_sources(&args(&["ACGT", "@a.txt"], &["b.txt"], true)).unwrap();
        assert_eq!(
            sources,
            vec![
                InputSource::Literal("ACGT".to_string()),
                InputSource::File(PathBuf::from("a.txt")),
                InputSource::File(PathBuf::from("b.txt")),
                InputSource::Stdin,
            ]
        );
    }

    #[test]
    fn collect_sources_reads_stdin_once() {
        let sources = collect_sources(&args(&["-", "A", "-"], &[], true)).unwrap();
        assert_eq!(
            sources,
            vec![InputSource::Stdin, InputSource::Literal("A".to_string())]
        );
    }

    #[test]
    fn collect_sources_requires_some_input() {
        let result = collect_sources(&args(&[], &[], false));
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn empty_literal_is_a_valid_input() {
        let sources = collect_sources(&args(&[""], &[], false)).unwrap();
        assert_eq!(sources, vec![InputSource::Literal(String::new())]);
    }

    #[test]
    fn literals_are_never_stripped() {
        let mut stdin = std::io::empty();
        let (label, bytes) =
            read_source(&InputSource::Literal("ACGT\n".into()), &mut stdin, true).unwrap();
        assert_eq!(label, "ACGT\n");
        assert_eq!(bytes, b"ACGT\n");
    }

    #[test]
    fn stdin_is_stripped_of_one_line_terminator() {
        let mut stdin = &b"ACGT\r\n"[..];
        let (label, bytes) = read_source(&InputSource::Stdin, &mut stdin, true).unwrap();
        assert_eq!(label, STDIN_LABEL);
        assert_eq!(bytes, b"ACGT");
    }

    #[test]
    fn file_content_is_read_as_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seq.bin");
        std::fs::write(&path, [0xffu8, b'A', b'\n', b'\n']).unwrap();
        let mut stdin = std::io::empty();

        let (_, stripped) = read_source(&InputSource::File(path.clone()), &mut stdin, true).unwrap();
        assert_eq!(stripped, vec![0xff, b'A', b'\n']);

        let (_, raw) = read_source(&InputSource::File(path), &mut stdin, false).unwrap();
        assert_eq!(raw.len(), 4);
    }

    #[test]
    fn missing_file_reports_its_path() {
        let mut stdin = std::io::empty();
        let result = read_source(
            &InputSource::File(PathBuf::from("/definitely/not/here.txt")),
            &mut stdin,
            true,
        );
        assert!(matches!(result, Err(CliError::Input { .. })));
    }

    #[test]
    fn strip_line_terminator_leaves_lone_carriage_return() {
        assert_eq!(strip_line_terminator(b"A\r".to_vec()), b"A\r");
        assert_eq!(strip_line_terminator(b"\n".to_vec()), b"");
        assert_eq!(strip_line_terminator(Vec::new()), b"");
    }
}
