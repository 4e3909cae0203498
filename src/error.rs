/// Machine-checkable failure categories.
///
/// Input-validation failures (`InvalidRange`, `InvalidGridSize`,
/// `InvalidQuantile`, `EmptySurface`, `InvalidSignal`) are raised before any
/// computation starts; `Io` and `Render` cover the file/bitmap glue around the
/// pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A (min, max) window with non-finite bounds or min >= max.
    InvalidRange,
    /// A grid axis with fewer than 2 samples.
    InvalidGridSize,
    /// A fault quantile outside [0, 1].
    InvalidQuantile,
    /// A surface with no grid rows to slice.
    EmptySurface,
    /// A degenerate time-series request (non-positive duration, < 2 samples,
    /// or a signal that does not match its analytic bank).
    InvalidSignal,
    /// File read/write failures (including malformed surface JSON).
    Io,
    /// Bitmap rendering failures.
    Render,
}

impl ErrorKind {
    /// Process exit code for this kind.
    ///
    /// 2 = invalid input, 3 = no data, 4 = computation/render failure.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::InvalidRange
            | ErrorKind::InvalidGridSize
            | ErrorKind::InvalidQuantile
            | ErrorKind::InvalidSignal
            | ErrorKind::Io => 2,
            ErrorKind::EmptySurface => 3,
            ErrorKind::Render => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
