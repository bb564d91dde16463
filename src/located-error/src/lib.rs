use std::{fmt::Display, panic::Location};

use anyhow::{Context, Result};

pub mod prelude {
    extern crate anyhow;
    pub use anyhow::{anyhow, bail, Context, Result};

    extern crate thiserror;
    pub use thiserror::Error;

    pub use super::{LocatedError, LocatedOption};
}

/// Format a caller location as `[file:line:column]`.
fn located<C: Display>(caller: &Location<'_>, context: C) -> String {
    format!("[{}:{}:{}] {context}", caller.file(), caller.line(), caller.column())
}

/// Attach context and the caller's source location to a failing `Result`.
pub trait LocatedError<T, E> {
    /// Wrap the error value with `context`, prefixed by the location at which it was called.
    fn loc<C>(self, context: C) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static;

    /// Same as `loc()`, but `f` is only evaluated once an error does occur.
    fn with_loc<C, F>(self, f: F) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> LocatedError<T, E> for Result<T, E>
where
    E: Display + Send + Sync + 'static,
    Result<T, E>: Context<T, E>,
{
    #[track_caller]
    fn loc<C>(self, context: C) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static
    {
        let caller = Location::caller();
        self.with_context(|| located(caller, context))
    }

    #[track_caller]
    fn with_loc<C, F>(self, f: F) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C
    {
        let caller = Location::caller();
        self.with_context(|| located(caller, f()))
    }
}

/// Turn a `None` into a located error.
pub trait LocatedOption<T> {
    /// Convert `None` into an error carrying `context` and the location at which it was called.
    fn loc<C>(self, context: C) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static;

    /// Same as `loc()`, but `f` is only evaluated once `None` is encountered.
    fn with_loc<C, F>(self, f: F) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> LocatedOption<T> for Option<T> {
    #[track_caller]
    fn loc<C>(self, context: C) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static
    {
        let caller = Location::caller();
        self.with_context(|| located(caller, context))
    }

    #[track_caller]
    fn with_loc<C, F>(self, f: F) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C
    {
        let caller = Location::caller();
        self.with_context(|| located(caller, f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;
    use std::fs::File;

    #[derive(Error, Debug)]
    pub enum LoadError {
        #[error(transparent)]
        Io(#[from] anyhow::Error),

        #[error("Pedigree contains no individual")]
        EmptyPedigree,
    }

    fn open_pedigree(file: &str) -> Result<File, LoadError> {
        Ok(File::open(file).loc(format!("Failed to open pedigree file: '{file}'"))?)
    }

    fn load_pedigree() -> Result<File> {
        open_pedigree("missing-family/").with_loc(|| "While loading pedigree")
    }

    fn run_inference() -> Result<File> {
        load_pedigree().with_loc(|| LoadError::EmptyPedigree)
    }

    fn run() -> Result<File> {
        run_inference().with_loc(|| "While running inference")
    }

    #[test]
    fn error_chain_matches_callers() {
        let err = run().expect_err("Opening a missing directory should fail");
        let mut chain = err.chain();
        for result in [run(), run_inference(), load_pedigree()] {
            let expected = result.expect_err("Each layer should fail").to_string();
            let got      = chain.next().expect("Missing chain link").to_string();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn location_prefix() {
        let err = load_pedigree().expect_err("Opening a missing directory should fail");
        let msg = err.to_string();
        assert!(msg.starts_with(&format!("[{}:", file!())), "{msg}");
        assert!(msg.ends_with("While loading pedigree"), "{msg}");
    }

    #[test]
    fn lazy_context_is_not_evaluated_on_success() {
        let ok: Result<u8, LoadError> = Ok(1);
        let value = ok.with_loc(|| -> String { panic!("context evaluated on success") });
        assert_eq!(value.ok(), Some(1));
    }

    #[test]
    fn missing_option() {
        let parent: Option<&str> = None;
        let err = parent.loc(LoadError::EmptyPedigree).expect_err("None should fail");
        assert!(err.to_string().ends_with("Pedigree contains no individual"));
        assert_eq!(Some("James").loc("unreachable").ok(), Some("James"));
    }
}
