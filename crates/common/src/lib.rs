//! Shared building blocks for the bites workspace: logging setup and the
//! JSON envelopes every HTTP response is wrapped in.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn success_envelope_wraps_data() {
        let body = serde_json::to_value(types::ApiSuccess::new(vec![1, 2])).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], serde_json::json!([1, 2]));
    }

    #[test]
    fn failure_envelope_carries_code_and_message() {
        let body = serde_json::to_value(types::ApiFailure::new("NOT_FOUND", "restaurant not found")).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "restaurant not found");
    }
}
