//! Request correlation for the course API.
//!
//! [`Trace`] opens a [`TraceId`] scope around every request. Errors built
//! while the handler runs pick the id up, and the response carries it back in
//! the `trace-id` header so a client report can be matched to the log lines.

use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{debug, warn};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Middleware giving each course request its own [`TraceId`].
///
/// Read the id inside a handler with [`TraceId::current`].
///
/// # Examples
/// ```
/// use actix_web::App;
/// use courses_backend::Trace;
///
/// let app = App::new().wrap(Trace);
/// ```
#[derive(Clone)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// The per-worker service built by [`Trace`].
pub struct TraceMiddleware<S> {
    service: S,
}

fn stamp_trace_id<B>(response: &mut ServiceResponse<B>, trace_id: TraceId) {
    match HeaderValue::from_str(&trace_id.to_string()) {
        Ok(value) => {
            response
                .headers_mut()
                .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        Err(error) => warn!(%error, %trace_id, "trace id is not a valid header value"),
    }
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = TraceId::generate();
        let started = Instant::now();
        let route = format!("{} {}", req.method(), req.path());
        let handled = self.service.call(req);
        Box::pin(TraceId::scope(trace_id, async move {
            let mut response = handled.await?;
            stamp_trace_id(&mut response, trace_id);
            debug!(
                %trace_id,
                %route,
                status = response.status().as_u16(),
                elapsed_ms = started.elapsed().as_millis(),
                "course request served"
            );
            Ok(response)
        }))
    }
}
