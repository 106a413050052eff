//! In-flight daemon calls.
//!
//! A [`PendingCall`] keeps the target [`RemoteResource`] alive until the
//! daemon answers. Completing the call decodes the reply, hands the outcome
//! to the callback and then lets the resource go. Dropping a call that never
//! completed lets the resource go without running the callback.

use crate::{CodecConfig, Error, Result};
use iotcon_wire::{RemoteResource, Reply, Request};
use std::sync::Arc;
use tracing::{debug, error};

/// Callback run once with the decoded reply or the reason it could not be
/// decoded.
pub type Callback<R> = Box<dyn FnOnce(&RemoteResource, Result<R>) + Send + 'static>;

/// One call awaiting its reply.
pub struct PendingCall<R: Reply> {
    resource: Arc<RemoteResource>,
    callback: Option<Callback<R>>,
    config: CodecConfig,
}

impl<R: Reply> PendingCall<R> {
    /// Retain `resource` for a call whose reply goes to `callback`.
    pub fn new<F>(resource: &Arc<RemoteResource>, config: CodecConfig, callback: F) -> Self
    where
        F: FnOnce(&RemoteResource, Result<R>) + Send + 'static,
    {
        PendingCall {
            resource: Arc::clone(resource),
            callback: Some(Box::new(callback)),
            config,
        }
    }

    /// Encode `request` and retain `resource` until the reply arrives.
    ///
    /// If the request cannot be encoded nothing is retained and the error is
    /// returned; the callback is dropped unrun.
    pub fn start<F>(
        resource: &Arc<RemoteResource>,
        request: &Request,
        config: CodecConfig,
        callback: F,
    ) -> Result<(Self, Vec<u8>)>
    where
        F: FnOnce(&RemoteResource, Result<R>) + Send + 'static,
    {
        let bytes = request.encode().map_err(|e| {
            error!(call = request.name(), uri = resource.uri(), error = %e, "request encode failed");
            e
        })?;
        Ok((Self::new(resource, config, callback), bytes))
    }

    /// The resource this call retains.
    pub fn resource(&self) -> &RemoteResource {
        &self.resource
    }

    /// Deliver the daemon's reply.
    pub fn complete(mut self, reply: &[u8]) {
        let outcome = self.config.decode_reply::<R>(reply);
        if let Err(e) = &outcome {
            error!(uri = self.resource.uri(), error = %e, "reply decode failed");
        }
        self.finish(outcome);
    }

    /// Report a transport failure instead of a reply.
    pub fn fail(mut self, error: Error) {
        error!(uri = self.resource.uri(), error = %error, "call failed");
        self.finish(Err(error));
    }

    fn finish(&mut self, outcome: Result<R>) {
        if let Some(callback) = self.callback.take() {
            callback(&self.resource, outcome);
        }
    }
}

impl<R: Reply> Drop for PendingCall<R> {
    fn drop(&mut self) {
        if self.callback.is_some() {
            debug!(uri = self.resource.uri(), "pending call dropped before completion");
        }
    }
}
