//! Wrapper error definitions.

use odra::prelude::*;

/// Save wrapper errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WrapperError {
    // Access errors (1xx)
    Unauthorized = 100,
    Paused = 101,
    ReentrantCall = 102,

    // Validation errors (2xx)
    InvalidAddress = 200,
    InvalidToken = 201,
    InvalidSpender = 202,
    LengthMismatch = 203,
    VaultMismatch = 204,
    InvalidConfig = 205,
    AccountingTokenNotSet = 206,

    // Token errors (3xx)
    TransferFailed = 300,
    ApprovalFailed = 301,

    // Slippage errors (4xx)
    MintSlippage = 400,
    SwapSlippage = 401,
    WithdrawSlippage = 402,
}

impl WrapperError {
    pub const fn message(&self) -> &'static str {
        match self {
            // Access
            WrapperError::Unauthorized => "Unauthorized: caller is not owner",
            WrapperError::Paused => "Operation blocked: contract paused",
            WrapperError::ReentrantCall => "Reentrant call",

            // Validation
            WrapperError::InvalidAddress => "Invalid address",
            WrapperError::InvalidToken => "Invalid token",
            WrapperError::InvalidSpender => "Invalid spender",
            WrapperError::LengthMismatch => "Feeder pool and feeder asset lists differ in length",
            WrapperError::VaultMismatch => "Vault is not the configured vault",
            WrapperError::InvalidConfig => "Invalid configuration parameter",
            WrapperError::AccountingTokenNotSet => "Accounting token not configured",

            // Token
            WrapperError::TransferFailed => "Token transfer failed",
            WrapperError::ApprovalFailed => "Token approval failed",

            // Slippage
            WrapperError::MintSlippage => "Minted amount below minimum",
            WrapperError::SwapSlippage => "Swapped amount below minimum",
            WrapperError::WithdrawSlippage => "Withdrawn amount below minimum",
        }
    }
}

impl core::fmt::Display for WrapperError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<WrapperError> for OdraError {
    fn from(error: WrapperError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}
