use std::sync::OnceLock;

use prometheus::{HistogramOpts, HistogramVec, IntCounter, Registry, TextEncoder};

struct GatewayMetrics {
    registry: Registry,
    incoming_requests: IntCounter,
    response_time: HistogramVec,
}

impl GatewayMetrics {
    fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let incoming_requests = IntCounter::new("incoming_requests", "Incoming Requests")?;
        registry.register(Box::new(incoming_requests.clone()))?;

        let response_time = HistogramVec::new(
            HistogramOpts::new("response_time", "Response Times"),
            &["status"],
        )?;
        registry.register(Box::new(response_time.clone()))?;

        Ok(Self {
            registry,
            incoming_requests,
            response_time,
        })
    }
}

fn gateway_metrics() -> &'static GatewayMetrics {
    static METRICS: OnceLock<GatewayMetrics> = OnceLock::new();

    METRICS.get_or_init(|| GatewayMetrics::new().expect("Failed registering metrics"))
}

/// Registers the request metrics; safe to call more than once.
pub fn setup() {
    gateway_metrics();
}

pub(crate) fn track_request_count_and_time(status: u16, response_time: f64) {
    let metrics = gateway_metrics();

    metrics.incoming_requests.inc();
    metrics
        .response_time
        .with_label_values(&[&status.to_string()])
        .observe(response_time);
}

/// Gateway metrics followed by the process metrics of the default registry.
pub(crate) fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut metrics = String::new();

    encoder.encode_utf8(&gateway_metrics().registry.gather(), &mut metrics)?;
    encoder.encode_utf8(&prometheus::gather(), &mut metrics)?;

    Ok(metrics)
}
