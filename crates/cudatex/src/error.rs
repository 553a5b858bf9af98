use thiserror::Error;

/// Source location of a runtime call, captured for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// Enclosing function path; empty when capture was not possible.
    pub function: &'static str,
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    /// Capture the caller's file and line.
    ///
    /// The enclosing function name is not recoverable on this path and is
    /// left empty; the [`cuda_check!`](crate::cuda_check) macro captures
    /// it as well.
    #[track_caller]
    pub fn here() -> Self {
        let loc = std::panic::Location::caller();
        Self {
            function: "",
            file: loc.file(),
            line: loc.line(),
        }
    }
}

/// Top-level error type for the interop layer.
#[derive(Debug, Error)]
pub enum GpuError {
    /// A native runtime call returned a non-success status. Carries the
    /// runtime's own description of the code plus the exact call site,
    /// so a failure correlates with one specific native call.
    #[error("GPU API call error: {description} ({file}:{line}, {function})")]
    ApiCall {
        code: i32,
        description: String,
        function: &'static str,
        file: &'static str,
        line: u32,
    },

    /// A device memory descriptor failed host-side validation.
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),
}

pub type Result<T> = std::result::Result<T, GpuError>;
