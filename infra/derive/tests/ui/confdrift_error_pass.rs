use confdrift_derive::confdrift_error;
use std::borrow::Cow;

#[confdrift_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing key{}: {key}", format_context(.context))]
    MissingKey { key: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse_port(raw: &str) -> Result<u16, DemoError> {
    raw.parse::<u16>().context(format!("port value '{raw}'"))
}

fn main() {
    let err = parse_port("eighty").unwrap_err();
    assert!(matches!(err, DemoError::Parse { context: Some(_), .. }));

    let missing: Result<(), DemoError> =
        Err(DemoError::MissingKey { key: "yarn.a".into(), context: None });
    let missing = missing.context("lookup").unwrap_err();
    assert_eq!(missing.to_string(), "Missing key (lookup): yarn.a");

    let internal: DemoError = String::from("oops").into();
    assert!(matches!(internal, DemoError::Internal { .. }));
}
