pub mod current;
pub mod gate;
pub mod lookup;
pub mod token;

pub use current::CurrentAccount;
pub use gate::{authenticate, Gate, PublicMatch, PublicPaths};
pub use lookup::{AccountLookup, LookupError};
pub use token::{Claims, TokenError, TokenService};
