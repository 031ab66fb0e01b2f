use std::borrow::Cow;

/// Errors raised by a verification run.
///
/// Everything except [`EngineError::Drift`] is a bootstrap failure: the comparison never
/// started.
#[confdrift_derive::confdrift_error]
pub enum EngineError {
    /// The fixture could not be set up (document not found, class not loadable).
    #[error("Bootstrap failed{}: {message}", format_context(.context))]
    Bootstrap { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Fixture contract error{}: {source}", format_context(.context))]
    Contract { source: confdrift_contract::ContractError, context: Option<Cow<'static, str>> },

    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("XML error{}: {source}", format_context(.context))]
    Xml { source: xml::reader::Error, context: Option<Cow<'static, str>> },

    /// Well-formed XML that is not a defaults document.
    #[error("Malformed defaults document{}: {message}", format_context(.context))]
    MalformedDocument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The verdict holds fatal violations; the message lists every one of them.
    #[error("Configuration drift detected{}:\n{message}", format_context(.context))]
    Drift { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal engine error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl From<confdrift_kernel::resources::ResourceError> for EngineError {
    fn from(err: confdrift_kernel::resources::ResourceError) -> Self {
        Self::Bootstrap { message: err.to_string().into(), context: None }
    }
}
