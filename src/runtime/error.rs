use std::process::ExitCode;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("File at {:?} not found.", path)]
    FileNotFound { path: std::path::PathBuf },

    #[error("File at {:?} is invalid{}.", path, Error::format_msg_as_detail(msg))]
    FileNotValid {
        path: std::path::PathBuf,
        msg: Option<String>,
    },

    #[error("Failed parsing {}{}", context, Error::format_msg_as_detail(msg))]
    ParseError {
        context: String,
        msg: Option<String>,
    },

    #[error("Can only encode windows of up to 32 bases in 64 bits, got {length}. Please reduce k")]
    LengthExceeded { length: usize },

    #[error("Window of {length} bases starting at {start} runs past the end of a sequence of length {available}")]
    WindowOutOfBounds {
        start: usize,
        length: usize,
        available: usize,
    },

    #[error("Can not allocate memory for a table of {buckets} buckets. Please try a smaller table size")]
    TableAllocation { buckets: usize },

    #[error("Can not open output {:?}", path)]
    OutputSink {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Primer '{primer}' is not a sequence of A, C, G and T")]
    InvalidPrimer { primer: String },
}

impl Error {
    #[cold]
    pub fn file_not_found<P: AsRef<std::path::Path>>(path: P) -> Self {
        Error::FileNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[cold]
    pub fn file_not_valid<P: AsRef<std::path::Path>, M: Into<String>>(
        path: P,
        msg: Option<M>,
    ) -> Self {
        Error::FileNotValid {
            path: path.as_ref().to_path_buf(),
            msg: msg.map(|m| m.into()),
        }
    }

    #[cold]
    pub fn parse_error<C: Into<String>, M: Into<String>>(context: C, msg: Option<M>) -> Self {
        Error::ParseError {
            context: context.into(),
            msg: msg.map(|m| m.into()),
        }
    }

    #[cold]
    pub fn length_exceeded(length: usize) -> Self {
        Error::LengthExceeded { length }
    }

    #[cold]
    pub fn window_out_of_bounds(start: usize, length: usize, available: usize) -> Self {
        Error::WindowOutOfBounds {
            start,
            length,
            available,
        }
    }

    #[cold]
    pub fn table_allocation(buckets: usize) -> Self {
        Error::TableAllocation { buckets }
    }

    #[cold]
    pub fn output_sink<P: AsRef<std::path::Path>>(path: P, source: std::io::Error) -> Self {
        Error::OutputSink {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    #[cold]
    pub fn invalid_primer<P: Into<String>>(primer: P) -> Self {
        Error::InvalidPrimer {
            primer: primer.into(),
        }
    }

    pub fn format_msg_as_detail(msg: &Option<String>) -> String {
        match msg {
            Some(m) => format!(" ({})", m),
            None => String::new(),
        }
    }

    ///////////////////////////////
    /// Process exit status for this error
    pub fn exit_status(&self) -> u8 {
        match self {
            Error::TableAllocation { .. } => EXIT_TABLE_ALLOCATION,
            Error::FileNotFound { .. } | Error::FileNotValid { .. } => EXIT_INPUT_UNREADABLE,
            Error::OutputSink { .. } => EXIT_OUTPUT_UNWRITABLE,
            _ => EXIT_FAILURE,
        }
    }
}

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_TABLE_ALLOCATION: u8 = 3;
pub const EXIT_INPUT_UNREADABLE: u8 = 4;
pub const EXIT_OUTPUT_UNWRITABLE: u8 = 5;

///////////////////////////////
/// Map a failed command to an exit code, using the first runtime error found in the chain
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    let status = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .map(Error::exit_status)
        .unwrap_or(EXIT_FAILURE);
    ExitCode::from(status)
}
