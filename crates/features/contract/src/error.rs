use std::borrow::Cow;

/// Errors raised while assembling a fixture.
#[confdrift_derive::confdrift_error]
pub enum ContractError {
    /// An exemption that would match nothing useful (empty key, empty prefix).
    #[error("Invalid exemption{}: {message}", format_context(.context))]
    InvalidExemption { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid collision filter{}: {message}", format_context(.context))]
    InvalidFilter { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The fixture violates one of its construction invariants.
    #[error("Invalid fixture{}: {message}", format_context(.context))]
    InvalidFixture { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A constants class could not enumerate its bindings.
    #[error("Binding source error{}: {message}", format_context(.context))]
    BindingSource { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal contract error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
