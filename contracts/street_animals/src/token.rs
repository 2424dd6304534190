use soroban_sdk::{token, Address, Env};

/// Moves `amount` of `token_address` from `from` to `to`.
///
/// `from` must have authorized the transfer, unless it is the contract itself.
pub fn transfer(env: &Env, token_address: &Address, from: &Address, to: &Address, amount: &i128) {
    let client = token::Client::new(env, token_address);
    client.transfer(from, to, amount);
}
