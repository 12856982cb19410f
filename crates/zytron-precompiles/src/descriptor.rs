//! precompile descriptor
//!
//! binds one operation's registry address to its kernel and applies the
//! calling convention around it: shape check, fixed-width output buffer,
//! status interpretation.

use std::{fmt, sync::Arc};

use alloy_primitives::{Address, Bytes};

use crate::{
    context::CallContext,
    encoder::PrecompileOutput,
    error::{InputError, Result},
    kernel::NativeKernel,
    operation::Operation,
    status::{self, KernelOutcome},
};

/// one precompiled contract
#[derive(Clone)]
pub struct Precompile {
    operation: Operation,
    address: Address,
    kernel: Arc<dyn NativeKernel>,
}

impl Precompile {
    pub fn new(operation: Operation, kernel: Arc<dyn NativeKernel>) -> Self {
        Self {
            operation,
            address: operation.address(),
            kernel,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// fixed registry address
    pub fn address(&self) -> Address {
        self.address
    }

    /// gas to charge before [`Self::execute`]
    ///
    /// input that fails the shape check costs nothing and never reaches the
    /// kernel; `execute` will reject it.
    pub fn required_gas(&self, input: &[u8]) -> u64 {
        if check_input(self.operation, input).is_err() {
            return 0;
        }
        self.kernel.required_gas(input)
    }

    /// run the kernel on `input`
    ///
    /// the context is forwarded host metadata and does not influence the result.
    pub fn execute(&self, input: &[u8], _ctx: &CallContext) -> Result<PrecompileOutput> {
        let span = tracing::debug_span!(
            "precompile",
            op = %self.operation,
            address = %self.address,
            input_len = input.len()
        );
        let _enter = span.enter();

        if let Err(e) = check_input(self.operation, input) {
            tracing::warn!("rejected before kernel call: {}", e);
            return Err(e.into());
        }

        let mut buf = vec![0u8; self.operation.output().width()];
        let code = self.kernel.execute(input, &mut buf);

        match status::decode(self.operation, code) {
            Ok(KernelOutcome::Accepted) if self.operation.is_predicate() => {
                tracing::debug!("proof accepted");
                Ok(PrecompileOutput::Verdict(true))
            }
            Ok(KernelOutcome::Accepted) => Ok(PrecompileOutput::Buffer(Bytes::from(buf))),
            Ok(KernelOutcome::Rejected) => {
                tracing::debug!("proof rejected");
                Ok(PrecompileOutput::Verdict(false))
            }
            Err(e) => {
                tracing::warn!(status = code, "kernel call failed: {}", e);
                Err(e)
            }
        }
    }

    /// [`Self::execute`] followed by encoding, as the host returns it
    pub fn call(&self, input: &[u8], ctx: &CallContext) -> Result<Bytes> {
        self.execute(input, ctx).map(PrecompileOutput::into_bytes)
    }
}

impl fmt::Debug for Precompile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Precompile")
            .field("operation", &self.operation)
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// structural check run before any kernel call
pub fn check_input(operation: Operation, input: &[u8]) -> std::result::Result<(), InputError> {
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    let expected = operation.min_input_len();
    if input.len() < expected {
        return Err(InputError::TooShort {
            expected,
            got: input.len(),
        });
    }
    Ok(())
}
