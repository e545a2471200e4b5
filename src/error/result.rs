//! Result type alias for gloom operations.

use super::context::ErrorContext;
use super::gloom_error::GloomError;

/// Type alias for Results using GloomError.
pub type GloomResult<T> = Result<T, GloomError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    fn context(self, ctx: ErrorContext) -> GloomResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> GloomResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<GloomError>,
{
    fn context(self, ctx: ErrorContext) -> GloomResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> GloomResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;

    #[test]
    fn test_context_on_gloom_result() {
        let result: GloomResult<()> = Err(NetworkError::Timeout {
            operation: "GitHub request".to_string(),
        }
        .into());
        let err = result.context(ErrorContext::new("load_more")).unwrap_err();
        assert_eq!(err.context().unwrap().operation, "load_more");
    }

    #[test]
    fn test_with_context_is_lazy() {
        let ok: Result<u8, std::io::Error> = Ok(1);
        let value = ok
            .with_context(|| panic!("context closure must not run on Ok"))
            .unwrap();
        assert_eq!(value, 1);
    }

    #[test]
    fn test_context_on_io_result() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        let err = result
            .with_context(|| ErrorContext::new("open log").with_component("logging"))
            .unwrap_err();
        assert_eq!(err.context().unwrap().component.as_deref(), Some("logging"));
    }
}
