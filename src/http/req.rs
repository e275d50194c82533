use std::fmt::Debug;

use crate::http::{
    params::ParamMap,
    protocol::{
        header::{HeaderKey, HeaderMap},
        method::HttpMethod,
    },
};

/// 分发流程消费的请求能力
///
/// 前端控制器、URL helper 和插件都只依赖这个 trait，
/// 真实请求与测试替身都可以注入。
pub trait Request: Send + Sync + Debug {
    // --- method ---
    fn method(&self) -> &str;

    // --- 参数组 ---
    fn query(&self, key: &str) -> Option<&str>;
    fn query_all(&self) -> &ParamMap;
    fn post(&self, key: &str) -> Option<&str>;
    fn post_all(&self) -> &ParamMap;
    fn set_post(&mut self, key: &str, value: &str);
    fn cookie(&self, key: &str) -> Option<&str>;
    fn cookies(&self) -> &ParamMap;

    // --- headers / body ---
    fn header(&self, name: &str) -> Option<&str>;
    fn headers(&self) -> &HeaderMap;
    fn raw_body(&self) -> Option<&str>;

    // --- 位置 ---
    fn request_uri(&self) -> Option<&str>;
    fn path_info(&self) -> Option<&str>;
    fn base_url(&self) -> Option<&str>;

    // --- 用户参数与分发坐标 ---
    fn params(&self) -> &ParamMap;
    fn set_param(&mut self, key: &str, value: &str);
    fn module_name(&self) -> Option<&str>;
    fn set_module_name(&mut self, name: &str);
    fn controller_name(&self) -> Option<&str>;
    fn set_controller_name(&mut self, name: &str);
    fn action_name(&self) -> Option<&str>;
    fn set_action_name(&mut self, name: &str);

    /// 按用户参数、query、post 的顺序查找
    fn param(&self, key: &str) -> Option<&str> {
        self.params()
            .get(key)
            .map(String::as_str)
            .or_else(|| self.query(key))
            .or_else(|| self.post(key))
    }

    /// 解析后的 method，非标准方法返回 None
    fn http_method(&self) -> Option<HttpMethod> {
        HttpMethod::from_str(self.method())
    }

    fn is_get(&self) -> bool {
        HttpMethod::GET.matches(self.method())
    }

    fn is_post(&self) -> bool {
        HttpMethod::POST.matches(self.method())
    }

    fn is_put(&self) -> bool {
        HttpMethod::PUT.matches(self.method())
    }

    fn is_head(&self) -> bool {
        HttpMethod::HEAD.matches(self.method())
    }

    fn is_options(&self) -> bool {
        HttpMethod::OPTIONS.matches(self.method())
    }

    fn is_delete(&self) -> bool {
        HttpMethod::DELETE.matches(self.method())
    }

    fn is_patch(&self) -> bool {
        HttpMethod::PATCH.matches(self.method())
    }

    fn is_xml_http_request(&self) -> bool {
        self.header(HeaderKey::XRequestedWith.as_str()) == Some("XMLHttpRequest")
    }
}
