mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `answer_error::ErrorKind` trait for the given struct.
///
/// The information of the error is customized using the `error` attribute:
///
/// ```ignore
/// use answer_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = "unexpected end of input",
///     labels = ["add something here"],
///     help = "an answer cannot end with an operator",
/// )]
/// pub struct UnexpectedEof;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error, and used in log output.       |
/// | `labels`    | An array of label texts, one for each span of the error, in order.           |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// Each tag accepts an expression. The expressions are evaluated with `self` in scope, so fields
/// are accessed as `self.field`. The generated code refers to the `ariadne` and `answer_error`
/// crates, so both must be dependencies of the deriving crate.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    quote! { #target }.into()
}
