use thiserror::Error;

/// Errors reported by the generator catalog, sampling and persistence layers.
///
/// Allocation failure has no variant: the global allocator aborts the process.
#[derive(Debug, Error)]
pub enum RngError {
    /// No generator of that name exists in the catalog.
    #[error("unknown generator type `{name}`")]
    NotFound {
        /// The name that was looked up.
        name: String,
    },

    /// State was copied between generators of different types.
    #[error("generator type mismatch: expected `{expected}`, found `{found}`")]
    TypeMismatch {
        /// Type of the destination generator.
        expected: &'static str,
        /// Type of the source generator.
        found: &'static str,
    },

    /// `uniform_int` was asked for zero outcomes or for more outcomes than the generator can produce.
    #[error("invalid n = {n}: must lie in 1 ..= {size}")]
    InvalidRange {
        /// The requested number of outcomes.
        n: u64,
        /// Number of distinct raw values the generator produces.
        size: u128,
    },

    /// Reading or writing serialized state failed.
    #[error("generator state I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, RngError>;

#[cfg(test)] mod tests {
    use super::*;

    #[test] fn messages_name_the_offending_values() {
        let e = RngError::NotFound { name: "mt19938".into() };
        assert!(e.to_string().contains("mt19938"));
        let e = RngError::InvalidRange { n: 40000, size: 32767 };
        assert!(e.to_string().contains("40000"));
        assert!(e.to_string().contains("32767"));
        let e = RngError::TypeMismatch { expected: "taus", found: "ranlux" };
        assert!(e.to_string().contains("taus") && e.to_string().contains("ranlux"));
    }

    #[test] fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short");
        let e: RngError = io.into();
        assert!(matches!(e, RngError::Io(_)));
    }
}
