//! Stable error codes.
//!
//! The first digit names the phase that raises the code: `E0xxx` lexer,
//! `E1xxx` parser, `E9xxx` driver.

use std::fmt;

/// Phase an [`ErrorCode`] belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Lexer,
    Parser,
    Driver,
}

macro_rules! error_codes {
    ($($(#[$doc:meta])* $code:ident => $phase:ident, $description:literal;)*) => {
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub enum ErrorCode {
            $($(#[$doc])* $code,)*
        }

        impl ErrorCode {
            /// Every code, in numeric order.
            pub const ALL: &[ErrorCode] = &[$(ErrorCode::$code),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ErrorCode::$code => stringify!($code),)*
                }
            }

            /// One-line summary of what the code reports.
            pub fn description(&self) -> &'static str {
                match self {
                    $(ErrorCode::$code => $description,)*
                }
            }

            pub fn phase(&self) -> Phase {
                match self {
                    $(ErrorCode::$code => Phase::$phase,)*
                }
            }
        }
    };
}

error_codes! {
    E0001 => Lexer, "unterminated string literal";
    E0002 => Lexer, "unterminated block comment";
    E0003 => Lexer, "malformed vector literal";

    /// Symbol is unknown or has no behavior in this position
    E1001 => Parser, "symbol cannot be used here";
    /// `expect` found a different token
    E1002 => Parser, "unexpected token";
    E1003 => Parser, "invalid assignment target";
    E1004 => Parser, "expected a field name";
    /// Expression statement is neither an assignment nor a call
    E1005 => Parser, "bad expression statement";
    E1006 => Parser, "invalid builtin number";
    E1007 => Parser, "nesting too deep";
    E1008 => Parser, "syntax error";

    /// Input file could not be read
    E9001 => Driver, "could not read input";
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
