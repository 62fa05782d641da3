/// Chain id of a locally run base chain (dev node).
pub const LOCAL_BASE_CHAIN_ID: u64 = 1337;
/// Chain id of the rollup a local dev setup deploys on top of [`LOCAL_BASE_CHAIN_ID`].
pub const LOCAL_ROLLUP_CHAIN_ID: u64 = 412346;

/// Rollup to pair with when the caller does not request one, keyed by the chain
/// the wallet reports. Rollup ids map to themselves.
pub const DEFAULT_ROLLUP_BY_CHAIN: &[(u64, u64)] = &[
    // Ethereum mainnet -> Arbitrum One
    (1, 42161),
    // Sepolia -> Arbitrum Sepolia
    (11155111, 421614),
    (LOCAL_BASE_CHAIN_ID, LOCAL_ROLLUP_CHAIN_ID),
    (42161, 42161),
    (421614, 421614),
    (LOCAL_ROLLUP_CHAIN_ID, LOCAL_ROLLUP_CHAIN_ID),
];

pub fn default_rollup_chain_id(wallet_chain_id: u64) -> Option<u64> {
    DEFAULT_ROLLUP_BY_CHAIN
        .iter()
        .find(|(chain_id, _)| *chain_id == wallet_chain_id)
        .map(|(_, rollup_chain_id)| *rollup_chain_id)
}
