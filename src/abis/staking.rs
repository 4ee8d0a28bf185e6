use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IFixedStaking {
        function fixedAPY() external view returns (uint8);
        function totalAmountStaked() external view returns (uint256);
    }
}
