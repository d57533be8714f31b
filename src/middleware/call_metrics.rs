/// Per-call metrics: gRPC method, elapsed time, response size and final
/// `grpc-status`.
///
/// A unary response streams its message as data frames and carries the status
/// in the trailers, so the response body is wrapped and the call is recorded
/// when that body ends. Error responses are trailers-only: the status sits in
/// the headers and the body is empty.
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;

use bytes::Buf;
use http::{HeaderMap, Request as HttpRequest, Response as HttpResponse};
use http_body::{Body, Frame, SizeHint};
use tower::{Layer, Service};

/// Running totals across every call seen by one layer.
#[derive(Debug, Default)]
pub struct CallStats {
    calls: AtomicU64,
    failures: AtomicU64,
    response_bytes: AtomicU64,
}

impl CallStats {
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Calls that ended with a non-zero `grpc-status` or a body/transport error.
    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    /// Sum of the data frame bytes of every response body.
    pub fn response_bytes(&self) -> u64 {
        self.response_bytes.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CallMetricsLayer {
    stats: Arc<CallStats>,
}

impl CallMetricsLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> Arc<CallStats> {
        self.stats.clone()
    }
}

impl<S> Layer<S> for CallMetricsLayer {
    type Service = CallMetrics<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CallMetrics {
            inner,
            stats: self.stats.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CallMetrics<S> {
    inner: S,
    stats: Arc<CallStats>,
}

impl<S, ReqBody, ResBody> Service<HttpRequest<ReqBody>> for CallMetrics<S>
where
    S: Service<HttpRequest<ReqBody>, Response = HttpResponse<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = HttpResponse<MeteredBody<ResBody>>;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: HttpRequest<ReqBody>) -> Self::Future {
        let mut inner = self.inner.clone();
        std::mem::swap(&mut self.inner, &mut inner);

        let mut record = CallRecord {
            method: req.uri().path().to_string(),
            started: Instant::now(),
            bytes: 0,
            grpc_status: None,
            failed: false,
            stats: self.stats.clone(),
            finished: false,
        };

        Box::pin(async move {
            match inner.call(req).await {
                Ok(response) => {
                    record.grpc_status = grpc_status(response.headers()).map(str::to_string);
                    Ok(response.map(|body| MeteredBody {
                        inner: Box::pin(body),
                        record,
                    }))
                }
                Err(e) => {
                    record.failed = true;
                    record.finish();
                    Err(e)
                }
            }
        })
    }
}

struct CallRecord {
    method: String,
    started: Instant,
    bytes: u64,
    grpc_status: Option<String>,
    failed: bool,
    stats: Arc<CallStats>,
    finished: bool,
}

impl CallRecord {
    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;

        let failed = self.failed || self.grpc_status.as_deref().is_some_and(|s| s != "0");
        let total_calls = self.stats.calls.fetch_add(1, Ordering::Relaxed) + 1;
        let total_bytes = self
            .stats
            .response_bytes
            .fetch_add(self.bytes, Ordering::Relaxed)
            + self.bytes;
        if failed {
            self.stats.failures.fetch_add(1, Ordering::Relaxed);
        }

        let elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        if failed {
            tracing::warn!(
                method = %self.method,
                grpc_status = self.grpc_status.as_deref().unwrap_or("none"),
                response_bytes = self.bytes,
                elapsed_ms,
                "gRPC call failed"
            );
        } else {
            tracing::info!(
                method = %self.method,
                grpc_status = self.grpc_status.as_deref().unwrap_or("none"),
                response_bytes = self.bytes,
                elapsed_ms,
                total_calls,
                total_bytes,
                "gRPC call finished"
            );
        }
    }
}

// Cancelled calls drop the body before it ends.
impl Drop for CallRecord {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Response body that counts data bytes and picks up `grpc-status` from the
/// trailers.
pub struct MeteredBody<B> {
    inner: Pin<Box<B>>,
    record: CallRecord,
}

impl<B> Body for MeteredBody<B>
where
    B: Body,
{
    type Data = B::Data;
    type Error = B::Error;

    fn poll_frame(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        let this = &mut *self;
        match this.inner.as_mut().poll_frame(cx) {
            Poll::Ready(Some(Ok(frame))) => {
                if let Some(data) = frame.data_ref() {
                    this.record.bytes += data.remaining() as u64;
                }
                if let Some(status) = frame.trailers_ref().and_then(grpc_status) {
                    this.record.grpc_status = Some(status.to_string());
                }
                Poll::Ready(Some(Ok(frame)))
            }
            Poll::Ready(Some(Err(e))) => {
                this.record.failed = true;
                this.record.finish();
                Poll::Ready(Some(Err(e)))
            }
            Poll::Ready(None) => {
                this.record.finish();
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }

    fn is_end_stream(&self) -> bool {
        self.inner.is_end_stream()
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

fn grpc_status(headers: &HeaderMap) -> Option<&str> {
    headers.get("grpc-status").and_then(|v| v.to_str().ok())
}
