use articula_derive::articula_error;
use std::borrow::Cow;

#[articula_error]
pub enum SampleError {
    #[error("IO failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal fault{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn failing_io() -> Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
}

#[test]
fn question_mark_converts_source_errors() {
    fn run() -> Result<(), SampleError> {
        failing_io()?;
        Ok(())
    }

    let err = run().expect_err("io error should propagate");
    assert!(matches!(err, SampleError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "IO failure: missing");
}

#[test]
fn context_on_source_result_wraps_and_annotates() {
    let err = failing_io().context("reading dataset").expect_err("should fail");
    assert_eq!(err.to_string(), "IO failure (reading dataset): missing");
}

#[test]
fn context_on_own_result_replaces_context() {
    let result: Result<(), SampleError> =
        Err(SampleError::Rejected { message: "not a candidate".into(), context: None });

    let err = result.context("step 2").expect_err("should stay an error");
    assert_eq!(err.to_string(), "Rejected (step 2): not a candidate");
}

#[test]
fn strings_convert_into_internal_variant() {
    let from_static: SampleError = "boom".into();
    let from_owned: SampleError = String::from("bang").into();

    assert!(matches!(from_static, SampleError::Internal { .. }));
    assert_eq!(from_owned.to_string(), "Internal fault: bang");
}
