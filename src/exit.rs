// src/exit.rs
//! Process exit codes for `refgraph`.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RefGraphExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (I/O, malformed config).
    Error = 1,
    /// Input validation failed (malformed document, unknown node, bad path).
    InvalidInput = 2,
}

impl RefGraphExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for RefGraphExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
