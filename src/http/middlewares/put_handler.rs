use tracing::debug;

use crate::http::{middlewares::Plugin, params::parse_pairs, req::Request};

/// PUT 请求的 body 按表单格式解析为 body 参数
#[derive(Debug, Default, Clone, Copy)]
pub struct PutHandler;

impl PutHandler {
    pub const NAME: &'static str = "put_handler";

    pub fn new() -> Self {
        Self
    }
}

impl Plugin for PutHandler {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn pre_dispatch(&self, request: &mut dyn Request) {
        if !request.is_put() {
            return;
        }
        let Some(body) = request.raw_body() else {
            return;
        };
        let pairs = parse_pairs(body);
        debug!(count = pairs.len(), "marshal PUT body into params");
        for (k, v) in &pairs {
            request.set_post(k, v);
        }
    }
}
