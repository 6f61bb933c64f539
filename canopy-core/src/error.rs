//! Error types for the canopy core library.
//!
//! Defines the structural error enum exposed by the public API, its stable
//! machine-readable codes, and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! error_codes {
    (
        $(#[$code_meta:meta])*
        $Code:ident for $Error:ident {
            $(
                $(#[$variant_meta:meta])*
                $Variant:ident $( { $($fields:tt)* } )? => $code:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$code_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $Code {
            $(
                $(#[$variant_meta])*
                $Variant,
            )+
        }

        impl $Code {
            /// Returns the stable machine-readable identifier for this code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$Variant => $code,)+
                }
            }
        }

        impl fmt::Display for $Code {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $Error {
            #[doc = concat!("Retrieves the stable [`", stringify!($Code), "`] for this error.")]
            #[must_use]
            pub const fn code(&self) -> $Code {
                match self {
                    $(Self::$Variant $( { $($fields)* } )? => $Code::$Variant,)+
                }
            }
        }
    };
}

/// A structural error raised while computing a spanning forest.
///
/// Both strategies reject a malformed graph before selecting any edge, so a
/// computation either fails with one of these variants or runs to
/// completion. Disconnected graphs, multigraphs, self-loops, and negative
/// or zero weights are all normal inputs, not errors; an empty graph yields
/// an empty zero-weight forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// An edge referenced a vertex the graph does not enumerate.
    #[error("edge endpoint {vertex} is not a vertex of the graph")]
    UnknownEndpoint {
        /// Rendering of the offending endpoint.
        vertex: Arc<str>,
    },
    /// An edge carried a NaN or infinite weight, breaking the total order
    /// the strategies sort and extract by.
    #[error("edge ({source}, {target}) has non-finite weight")]
    NonFiniteWeight {
        /// Rendering of the edge's first endpoint.
        r#source: Arc<str>,
        /// Rendering of the edge's second endpoint.
        target: Arc<str>,
    },
}

error_codes! {
    /// Stable codes describing [`MstError`] variants.
    MstErrorCode for MstError {
        /// An edge referenced a vertex the graph does not enumerate.
        UnknownEndpoint { .. } => "UNKNOWN_ENDPOINT",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight { .. } => "NON_FINITE_WEIGHT",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, MstError>;
