/*
[INPUT]:  Wallet provider capability and session state
[OUTPUT]: Connected accounts and verified sign-ins
[POS]:    Auth layer - wallet login flow
[UPDATE]: When the login flow or provider abstraction changes
*/

pub mod local_wallet;
pub mod session;
pub mod wallet;

pub use local_wallet::LocalWalletProvider;
pub use session::{SessionState, SignInReceipt, WalletSession};
pub use wallet::{MockWalletProvider, WalletProvider};
