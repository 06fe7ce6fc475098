#[macro_export]
macro_rules! assert_custom_error {
    ($error:expr, $matcher:expr) => {
        $crate::assert_custom_error_ix!(0, $error, $matcher)
    };
}

#[macro_export]
macro_rules! assert_custom_error_ix {
    ($ix:expr, $error:expr, $matcher:expr) => {
        match $error {
            solana_program_test::BanksClientError::TransactionError(
                solana_sdk::transaction::TransactionError::InstructionError(
                    ix,
                    solana_sdk::instruction::InstructionError::Custom(x),
                ),
            ) => {
                assert_eq!(ix, $ix, "expected error in instruction {}", $ix);
                assert_eq!(
                    x, $matcher as u32,
                    "expected error {:?}, got custom error {}",
                    $matcher, x
                );
            }
            _ => panic!("unexpected error: {:?}", $error),
        }
    };
}
