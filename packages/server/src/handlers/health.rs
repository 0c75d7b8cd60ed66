/// Liveness check.
pub async fn root() -> &'static str {
    "Video Upload API is running"
}
