// Client for the movie review program: instruction encoding, PDA derivation
// and transaction submission
pub mod config;
pub mod error;
pub mod instruction;
pub mod network;
pub mod pda;
pub mod state;
pub mod transactions;
pub mod wallet;

pub use error::ReviewClientError;
pub use network::Network;
pub use wallet::Wallet;
