use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. Rejection of an input line by the grammar is not an error;
/// see `parsers::Verdict`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read input file '{}': {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("input file '{}' contains no lines", .0.display())]
    EmptyInput(PathBuf),
    #[error("cannot open output file '{}': {source}", path.display())]
    OpenOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write output file '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no address left to assign to identifier '{0}'")]
    AddressOverflow(String),
    #[error("token stream is not terminated by a single end-of-input marker")]
    MalformedTokenStream,
    #[error("parser read past the end-of-input marker")]
    ExhaustedInput,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_text() {
        assert_eq!(
            Error::EmptyInput(PathBuf::from("in.txt")).to_string(),
            "input file 'in.txt' contains no lines"
        );

        let e = Error::OpenOutput {
            path: PathBuf::from("out/x.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(e.to_string(), "cannot open output file 'out/x.txt': missing");

        assert_eq!(
            Error::AddressOverflow(String::from("total")).to_string(),
            "no address left to assign to identifier 'total'"
        );
        assert_eq!(
            Error::MalformedTokenStream.to_string(),
            "token stream is not terminated by a single end-of-input marker"
        );
    }
}
