//! Diagnostic codes.
//!
//! The leading letter and first digit give the family, which decides what
//! happens to the method a diagnostic is attached to.

use std::fmt;
use std::str::FromStr;

/// What a code's family means for generation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CodeFamily {
    /// `E1xxx`: the declaration is unusable and its method is dropped.
    Declaration,
    /// `W2xxx`: reported, generation proceeds.
    Template,
    /// `E9xxx`: trouble in the compiler itself.
    Internal,
}

macro_rules! error_codes {
    ($( $family:ident { $( $(#[doc = $doc:literal])* $code:ident, )* } )*) => {
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
        pub enum ErrorCode {
            $( $( $(#[doc = $doc])* $code, )* )*
        }

        impl ErrorCode {
            /// Every code, in numeric order.
            pub const ALL: &[ErrorCode] = &[$( $( ErrorCode::$code, )* )*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( $( ErrorCode::$code => stringify!($code), )* )*
                }
            }

            pub fn family(self) -> CodeFamily {
                match self {
                    $( $( ErrorCode::$code => CodeFamily::$family, )* )*
                }
            }
        }
    };
}

error_codes! {
    Declaration {
        /// Method name starts with the reserved prefix
        E1001,
        /// Parameter name starts with the reserved prefix
        E1002,
        /// Logging method does not return void
        E1003,
        /// Logging method is not static
        E1004,
        /// Logging method is not partial
        E1005,
        /// Logging method already has a body
        E1006,
        /// Logging method is generic
        E1007,
        /// First parameter is not a logger
        E1008,
        /// Parameter passed by reference or as `params`
        E1009,
        /// No severity: neither a constant nor a level parameter
        E1010,
    }
    Template {
        /// Argument has no placeholder in the template
        W2001,
        /// Template names no such argument
        W2002,
        /// Exception parameter named in the template
        W2003,
        /// Level parameter named in the template
        W2004,
        /// Logger parameter named in the template
        W2005,
        /// Template repeats the severity at its start
        W2006,
        /// Unterminated placeholder in the template
        W2007,
        /// Parameter type renders differently per host culture
        W2008,
        /// Event id reused within one container
        W2009,
    }
    Internal {
        /// Internal compiler error
        E9001,
        /// Error limit reached
        E9002,
    }
}

impl ErrorCode {
    pub fn is_declaration_error(self) -> bool {
        self.family() == CodeFamily::Declaration
    }

    pub fn is_warning(self) -> bool {
        self.family() == CodeFamily::Template
    }

    pub fn is_internal_error(self) -> bool {
        self.family() == CodeFamily::Internal
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `"w2001"` parses.
impl FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
