//! Identity-provider token verification

mod token;

pub use token::{Identity, IdentityClaims, IdentityTokenService};
