//! Definitions of the Solidity constructors whose arguments the scripts encode

use alloy_sol_types::sol;

sol! {
    contract VaultContract {
        constructor(address strategy, string name, string symbol);
    }

    contract StrategyContract {
        constructor(
            address want,
            address output,
            uint256 pid,
            address keeper,
            address strategist,
            address unirouter,
            address vault,
            address harvester,
            address masterchef
        );
    }
}
