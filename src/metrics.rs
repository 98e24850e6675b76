//! Prometheus metrics for the pipeline, collector, and API server.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntGauge, Opts, Registry, TextEncoder,
};

/// All collectors registered against one private registry so binaries never
/// clash on the global default.
pub struct Metrics {
    registry: Registry,

    pub pipeline_runs_total: IntCounter,
    pub pipeline_failures_total: IntCounter,
    pub pipeline_run_duration_seconds: Histogram,
    pub initiatives_scored: IntGauge,
    pub at_risk_initiatives: IntGauge,

    pub collection_runs_total: IntCounter,
    pub collection_failures_total: IntCounter,

    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let pipeline_runs_total = IntCounter::with_opts(Opts::new(
            "pipeline_runs_total",
            "Completed scoring pipeline runs",
        ))?;
        registry.register(Box::new(pipeline_runs_total.clone()))?;

        let pipeline_failures_total = IntCounter::with_opts(Opts::new(
            "pipeline_failures_total",
            "Scoring pipeline runs that failed",
        ))?;
        registry.register(Box::new(pipeline_failures_total.clone()))?;

        let pipeline_run_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "pipeline_run_duration_seconds",
            "Wall-clock duration of one pipeline run",
        ))?;
        registry.register(Box::new(pipeline_run_duration_seconds.clone()))?;

        let initiatives_scored = IntGauge::with_opts(Opts::new(
            "initiatives_scored",
            "Initiatives scored in the most recent run",
        ))?;
        registry.register(Box::new(initiatives_scored.clone()))?;

        let at_risk_initiatives = IntGauge::with_opts(Opts::new(
            "at_risk_initiatives",
            "Initiatives below the at-risk threshold in the most recent run",
        ))?;
        registry.register(Box::new(at_risk_initiatives.clone()))?;

        let collection_runs_total = IntCounter::with_opts(Opts::new(
            "collection_runs_total",
            "Completed dataset collections",
        ))?;
        registry.register(Box::new(collection_runs_total.clone()))?;

        let collection_failures_total = IntCounter::with_opts(Opts::new(
            "collection_failures_total",
            "Dataset collections that failed",
        ))?;
        registry.register(Box::new(collection_failures_total.clone()))?;

        let http_requests_total = IntCounter::with_opts(Opts::new(
            "http_requests_total",
            "HTTP requests served",
        ))?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_requests_in_flight = IntGauge::with_opts(Opts::new(
            "http_requests_in_flight",
            "HTTP requests currently being served",
        ))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;

        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency",
        ))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            pipeline_runs_total,
            pipeline_failures_total,
            pipeline_run_duration_seconds,
            initiatives_scored,
            at_risk_initiatives,
            collection_runs_total,
            collection_failures_total,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
        })
    }

    /// Render the registry in the Prometheus text exposition format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
