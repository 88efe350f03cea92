use serde::Serialize;

/// Liveness body for `GET /health`.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}
