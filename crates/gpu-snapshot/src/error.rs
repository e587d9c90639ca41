use thiserror::Error;

/// Errors raised when marshaling native data into snapshot types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("buffer too short: need {needed} bytes, got {got}")]
    Truncated { needed: usize, got: usize },

    #[error("field `{field}` holds {value:#04x}, expected a bool (0 or 1)")]
    InvalidBool { field: &'static str, value: u8 },

    #[error("clip_size {0} exceeds the clip stack capacity")]
    ClipOverflow(u8),

    #[error("unknown command type {0}")]
    UnknownCommand(u8),

    #[error("unknown vertex buffer format {0}")]
    UnknownVertexFormat(u8),

    #[error("buffer length {len} is not a multiple of the {stride}-byte stride")]
    MisalignedBuffer { len: usize, stride: usize },

    #[error("index range ends at {end} but the buffer holds {len} indices")]
    IndexOutOfRange { end: usize, len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
