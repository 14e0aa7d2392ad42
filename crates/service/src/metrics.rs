use once_cell::sync::Lazy;
use prometheus::{
    register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder,
};

// Prometheus metrics (default registry)
pub static RESTAURANTS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("bites_restaurants_created_total", "Total restaurants created")
        .expect("register restaurants_created_total")
});

pub static REVIEWS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("bites_reviews_created_total", "Total reviews created")
        .expect("register reviews_created_total")
});

pub static REVIEWS_DELETED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("bites_reviews_deleted_total", "Total reviews deleted")
        .expect("register reviews_deleted_total")
});

/// Multi-key writes that left the store inconsistent, by write group.
pub static PARTIAL_WRITES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "bites_partial_writes_total",
        "Multi-key writes where only some of the keys were written",
        &["kind"]
    )
    .expect("register partial_writes_total")
});

pub fn record_partial_write(kind: &str) {
    PARTIAL_WRITES_TOTAL.with_label_values(&[kind]).inc();
}

pub fn encode_metrics() -> (u16, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (500, format!("metrics encode error: {e}"));
    }
    (200, String::from_utf8(buffer).unwrap_or_default())
}
