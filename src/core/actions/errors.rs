use std::error::Error;
use std::fmt;

pub type BackendError = Box<dyn Error + Send + Sync + 'static>;

#[derive(Debug)]
pub enum GeneratorError {
    /// A generator or combinator was built or invoked with settings it
    /// cannot work with, such as zero workers.
    InvalidConfiguration(String),
    /// The admission line was already full; nothing was queued.
    QueueFull,
    /// Failure reported by a backend, passed through untouched.
    Failure(BackendError),
    /// Every branch of a race failed.
    RaceExhausted(Vec<GeneratorError>),
}

impl GeneratorError {
    pub fn failure(err: impl Into<BackendError>) -> Self {
        Self::Failure(err.into())
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(reason) => write!(f, "invalid configuration: {}", reason),
            Self::QueueFull => write!(f, "admission queue full"),
            Self::Failure(err) => write!(f, "generator failure: {}", err),
            Self::RaceExhausted(errors) => {
                write!(f, "all {} race branches failed", errors.len())?;
                for err in errors {
                    write!(f, "; {}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl Error for GeneratorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Failure(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", GeneratorError::InvalidConfiguration("no workers".into())),
            "invalid configuration: no workers"
        );
        assert_eq!(format!("{}", GeneratorError::QueueFull), "admission queue full");
        assert_eq!(
            format!("{}", GeneratorError::failure(StubError {})),
            "generator failure: StubError"
        );
    }

    #[test]
    fn test_race_exhausted_lists_branches() {
        let err = GeneratorError::RaceExhausted(vec![
            GeneratorError::failure("gpu lost"),
            GeneratorError::QueueFull,
        ]);

        assert_eq!(
            format!("{}", err),
            "all 2 race branches failed; generator failure: gpu lost; admission queue full"
        );
    }

    #[test]
    fn test_failure_exposes_backend_error_as_source() {
        let err = GeneratorError::failure(StubError {});

        let source = err.source().expect("failure has a source");
        assert!(source.downcast_ref::<StubError>().is_some());
        assert!(GeneratorError::QueueFull.source().is_none());
    }
}
