//! native kernel capabilities
//!
//! a kernel is the pair (gas estimator, executor) for one operation. the
//! executor receives the input and an output buffer of the operation's
//! fixed width (empty for predicates) and answers with a raw status byte;
//! the bridge interprets that byte, the kernel never sees bridge types.

use std::{fmt, sync::Arc};

use crate::operation::Operation;

/// a native cryptographic routine reachable from the bridge
///
/// implementations must be pure: the same input always yields the same gas,
/// status and output, and no call observes another.
pub trait NativeKernel: Send + Sync {
    /// gas units required for `input`; never fails
    fn required_gas(&self, input: &[u8]) -> u64;

    /// run the kernel, filling `output` on success
    fn execute(&self, input: &[u8], output: &mut [u8]) -> u8;
}

pub type GasFn = fn(&[u8]) -> u64;
pub type ExecFn = fn(&[u8], &mut [u8]) -> u8;

/// capability record of plain function pointers
#[derive(Clone, Copy)]
pub struct KernelFns {
    pub gas: GasFn,
    pub exec: ExecFn,
}

impl KernelFns {
    pub const fn new(gas: GasFn, exec: ExecFn) -> Self {
        Self { gas, exec }
    }
}

impl fmt::Debug for KernelFns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KernelFns")
            .field("gas", &(self.gas as *const ()))
            .field("exec", &(self.exec as *const ()))
            .finish()
    }
}

impl NativeKernel for KernelFns {
    fn required_gas(&self, input: &[u8]) -> u64 {
        (self.gas)(input)
    }

    fn execute(&self, input: &[u8], output: &mut [u8]) -> u8 {
        (self.exec)(input, output)
    }
}

impl<K: NativeKernel + ?Sized> NativeKernel for Arc<K> {
    fn required_gas(&self, input: &[u8]) -> u64 {
        (**self).required_gas(input)
    }

    fn execute(&self, input: &[u8], output: &mut [u8]) -> u8 {
        (**self).execute(input, output)
    }
}

/// one optional kernel per operation, assembled once at startup
#[derive(Clone, Default)]
pub struct KernelSet {
    kernels: [Option<Arc<dyn NativeKernel>>; Operation::ALL.len()],
}

impl KernelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// install (or replace) the kernel for `operation`
    pub fn with(mut self, operation: Operation, kernel: impl NativeKernel + 'static) -> Self {
        self.kernels[operation.index()] = Some(Arc::new(kernel));
        self
    }

    /// install a shared kernel for `operation`
    pub fn with_shared(mut self, operation: Operation, kernel: Arc<dyn NativeKernel>) -> Self {
        self.kernels[operation.index()] = Some(kernel);
        self
    }

    pub fn get(&self, operation: Operation) -> Option<&Arc<dyn NativeKernel>> {
        self.kernels[operation.index()].as_ref()
    }

    pub fn contains(&self, operation: Operation) -> bool {
        self.get(operation).is_some()
    }

    /// operations that have a kernel
    pub fn operations(&self) -> impl Iterator<Item = Operation> + '_ {
        Operation::ALL.into_iter().filter(|op| self.contains(*op))
    }

    /// overlay `other` on top of `self`
    pub fn merge(mut self, other: KernelSet) -> Self {
        for (slot, kernel) in self.kernels.iter_mut().zip(other.kernels) {
            if kernel.is_some() {
                *slot = kernel;
            }
        }
        self
    }
}

impl fmt::Debug for KernelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.operations()).finish()
    }
}
