//! Error policy and diagnostics around the raw marshal calls
//!
//! The [`Marshal`] trait always returns `Result`. A [`Codec`] sits on top and
//! decides what a caller sees when a record fails part-way: the
//! partially filled value plus the error ([`ErrorPolicy::NotifyAndContinue`])
//! or just the error ([`ErrorPolicy::Propagate`]). Either way the failure is
//! traced and handed to an optional diagnostic sink.

use std::any::type_name;
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use super::codec::Marshal;
use super::{Error, Pdu, PduBody, Result};
use crate::pdus::AnyPdu;

/// What a failed marshal or unmarshal hands back to the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorPolicy {
    /// Report the error and return whatever was produced before it
    #[default]
    NotifyAndContinue,
    /// Return the error alone
    Propagate,
}

/// Codec configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodecConfig {
    /// Failure handling
    pub error_policy: ErrorPolicy,
    /// Emit a `warn` event for every failure
    pub trace_errors: bool,
    /// Protocol versions accepted by [`Codec::decode_any`]
    pub accepted_versions: RangeInclusive<u8>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            error_policy: ErrorPolicy::NotifyAndContinue,
            trace_errors: true,
            accepted_versions: 5..=6,
        }
    }
}

impl CodecConfig {
    /// Propagate errors instead of returning partial values
    #[must_use]
    pub fn propagating() -> Self {
        Self {
            error_policy: ErrorPolicy::Propagate,
            ..Self::default()
        }
    }
}

/// Direction of a failed call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Writing a record
    Marshal,
    /// Reading a record
    Unmarshal,
}

/// Failure report passed to a diagnostic sink
#[derive(Debug, Clone, Copy)]
pub struct Diagnostic<'a> {
    /// Direction of the call
    pub operation: Operation,
    /// Type name of the top-level record
    pub record: &'static str,
    /// Underlying error
    pub error: &'a Error,
}

/// Callback receiving every failure a [`Codec`] observes
pub type DiagnosticSink = Arc<dyn Fn(&Diagnostic<'_>) + Send + Sync>;

/// Value produced by a [`Codec`] call, with the error that cut it short
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    /// Produced value; partially filled when `error` is set
    pub value: T,
    /// Failure, if any
    pub error: Option<Error>,
}

impl<T> Outcome<T> {
    /// Whether the call ran to completion
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Drop the partial value if there was an error
    pub fn into_result(self) -> Result<T> {
        match self.error {
            None => Ok(self.value),
            Some(error) => Err(error),
        }
    }
}

/// Policy-aware front end for marshalling
#[derive(Clone, Default)]
pub struct Codec {
    config: CodecConfig,
    sink: Option<DiagnosticSink>,
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec")
            .field("config", &self.config)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

impl Codec {
    /// Create a codec
    #[must_use]
    pub fn new(config: CodecConfig) -> Self {
        Self { config, sink: None }
    }

    /// Install a diagnostic sink
    #[must_use]
    pub fn with_sink<F>(mut self, sink: F) -> Self
    where
        F: Fn(&Diagnostic<'_>) + Send + Sync + 'static,
    {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Marshal `value` into a fresh buffer
    #[instrument(level = "trace", skip_all, fields(record = type_name::<T>()))]
    pub fn marshal<T: Marshal>(&self, value: &T) -> Result<Outcome<Vec<u8>>> {
        let mut bytes = Vec::with_capacity(value.marshalled_size());
        let result = value.marshal(&mut bytes);
        self.settle(Operation::Marshal, type_name::<T>(), bytes, result)
    }

    /// Marshal a PDU, filling in its header length first
    #[instrument(level = "trace", skip_all, fields(pdu_type = %T::PDU_TYPE))]
    pub fn marshal_pdu<T: PduBody>(&self, pdu: &mut Pdu<T>) -> Result<Outcome<Vec<u8>>> {
        let mut bytes = Vec::with_capacity(pdu.marshalled_size());
        let result = pdu.marshal_with_auto_length(&mut bytes);
        self.settle(Operation::Marshal, type_name::<Pdu<T>>(), bytes, result)
    }

    /// Unmarshal a `T` from the front of `bytes`
    #[instrument(level = "trace", skip_all, fields(record = type_name::<T>(), len = bytes.len()))]
    pub fn unmarshal<T: Marshal + Default>(&self, bytes: &[u8]) -> Result<Outcome<T>> {
        let mut value = T::default();
        let result = if bytes.is_empty() {
            Err(Error::EmptyInput)
        } else {
            let mut buf = bytes;
            value.unmarshal_from(&mut buf)
        };
        self.settle(Operation::Unmarshal, type_name::<T>(), value, result)
    }

    /// Decode one PDU of any supported type
    ///
    /// The value is `None` when the header itself could not be read or names
    /// a type or version this crate does not decode.
    #[instrument(level = "trace", skip_all, fields(len = bytes.len()))]
    pub fn decode_any(&self, bytes: &[u8]) -> Result<Outcome<Option<AnyPdu>>> {
        let (value, result) = AnyPdu::decode_partial(bytes, &self.config.accepted_versions);
        if let Some(pdu) = &value {
            debug!(pdu_type = %pdu.pdu_type(), ok = result.is_ok(), "Decoded PDU");
        }
        self.settle(Operation::Unmarshal, type_name::<AnyPdu>(), value, result)
    }

    fn settle<T>(
        &self,
        operation: Operation,
        record: &'static str,
        value: T,
        result: Result<()>,
    ) -> Result<Outcome<T>> {
        let Err(error) = result else {
            return Ok(Outcome { value, error: None });
        };

        if self.config.trace_errors {
            warn!(
                record,
                ?operation,
                policy = ?self.config.error_policy,
                %error,
                "DIS marshalling failed"
            );
        }
        if let Some(sink) = &self.sink {
            sink(&Diagnostic {
                operation,
                record,
                error: &error,
            });
        }

        match self.config.error_policy {
            ErrorPolicy::NotifyAndContinue => Ok(Outcome {
                value,
                error: Some(error),
            }),
            ErrorPolicy::Propagate => Err(error),
        }
    }
}
