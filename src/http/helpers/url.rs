use tracing::trace;

use crate::http::{
    front::FrontController,
    params::{ParamMap, encode_segment},
    router::RouteError,
};

/// 基于前端控制器的 URL 生成
pub struct UrlHelper<'a> {
    front: &'a FrontController,
}

impl<'a> UrlHelper<'a> {
    pub fn new(front: &'a FrontController) -> Self {
        Self { front }
    }

    /// 拼接 `/[base]/[module]/controller/action/key/value...`
    ///
    /// controller / module 缺省时取当前请求上的值，再缺省取配置默认值；
    /// module 等于默认模块时省略。
    pub fn simple(
        &self,
        action: &str,
        controller: Option<&str>,
        module: Option<&str>,
        params: Option<&ParamMap>,
    ) -> String {
        let config = self.front.config();
        let request = self.front.request();

        let controller = controller
            .or_else(|| request.and_then(|r| r.controller_name()))
            .unwrap_or(&config.default_controller);
        let module = module
            .or_else(|| request.and_then(|r| r.module_name()))
            .unwrap_or(&config.default_module);

        let mut url = format!("{controller}/{action}");
        if module != config.default_module {
            url = format!("{module}/{url}");
        }
        let base_url = self.front.base_url();
        if !base_url.is_empty() {
            url = format!("{base_url}/{url}");
        }

        if let Some(params) = params.filter(|p| !p.is_empty()) {
            let pairs: Vec<String> = params
                .iter()
                .flat_map(|(k, v)| [encode_segment(k), encode_segment(v)])
                .collect();
            url.push('/');
            url.push_str(&pairs.join("/"));
        }

        let url = format!("/{}", url.trim_start_matches('/'));
        trace!(%url, "simple url");
        url
    }

    /// 与 `simple` 相同
    pub fn direct(
        &self,
        action: &str,
        controller: Option<&str>,
        module: Option<&str>,
        params: Option<&ParamMap>,
    ) -> String {
        self.simple(action, controller, module, params)
    }

    /// 通过路由表生成，name 为空时使用默认路由
    pub fn url(&self, params: &ParamMap, name: Option<&str>) -> Result<String, RouteError> {
        let path = self.front.router().assemble(params, name, true)?;
        Ok(format!("{}/{}", self.front.base_url(), path))
    }
}
