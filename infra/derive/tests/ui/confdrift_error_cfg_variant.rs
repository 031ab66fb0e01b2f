use std::borrow::Cow;

#[confdrift_derive::confdrift_error]
#[derive(Debug)]
pub enum GatedError {
    #[cfg(any())]
    #[error("Never compiled{}: {source}", format_context(.context))]
    Never { source: std::fmt::Error, context: Option<Cow<'static, str>> },

    #[error("Always present{}: {message}", format_context(.context))]
    Present { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = GatedError::Present { message: "here".into(), context: None };
    assert_eq!(err.to_string(), "Always present: here");
}
