//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input type, so
//! dispatch in `main` is a plain match with no boxing.

use wordbank_config::Config;
use wordbank_core::TextEncoding;

mod convert;
mod info;
mod init;
mod version;
mod word_list;

pub use convert::{ConvertInput, ConvertStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use version::VersionStrategy;
pub use word_list::{WordListArgs, WordListInput, WordListKind, WordListStrategy};

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Resolve input/output encodings: flag, then config, then UTF-8.
///
/// `excel` forces UTF-8 with a BOM regardless of `output_encoding`.
fn resolve_encodings(
    config: &Config,
    encoding: Option<&str>,
    output_encoding: Option<&str>,
    excel: bool,
) -> anyhow::Result<(TextEncoding, TextEncoding)> {
    let input = encoding.map_or_else(
        || config.defaults.input_encoding(),
        |label| Ok(TextEncoding::from_label(label)?),
    )?;

    let output = if excel {
        TextEncoding::utf8_sig()
    } else {
        output_encoding.map_or_else(
            || config.defaults.output_encoding(),
            |label| Ok(TextEncoding::from_label(label)?),
        )?
    };

    Ok((input, output))
}
