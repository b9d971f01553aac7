use solana_program::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};

/// A network connection paired with the identity that signs and pays for
/// every transaction sent through it.
pub struct Wallet<N> {
    pub network: N,
    pub keypair: Keypair,
}

impl<N> Wallet<N> {
    pub fn new(network: N, keypair: Keypair) -> Self {
        Self { network, keypair }
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }
}
