use std::sync::Arc;

use derivative::Derivative;
use tracing::{debug, warn};

use crate::http::{
    params::{ParamMap, to_param_map},
    protocol::{
        header::{HeaderKey, HeaderMap},
        method::HttpMethod,
    },
    req::Request,
    superglobals::{Mirror, Scope},
};

/// 可完全控制的请求测试替身
///
/// 所有字段只在显式调用 setter 后才有值：request URI 和 path info
/// 不会从进程环境中推导。query 与 cookie 的每次变更都会写穿到
/// 注入的 [`Mirror`]，post 参数则不会。
#[derive(Clone, Derivative)]
#[derivative(Debug, Default)]
pub struct MockRequest {
    query: ParamMap,
    post: ParamMap,
    raw_body: Option<String>,
    headers: HeaderMap,
    cookies: ParamMap,
    #[derivative(Default(value = "HttpMethod::GET.to_str().to_string()"))]
    method: String,
    request_uri: Option<String>,
    path_info: Option<String>,
    base_url: Option<String>,
    params: ParamMap,
    module: Option<String>,
    controller: Option<String>,
    action: Option<String>,
    #[derivative(Debug = "ignore")]
    mirror: Option<Arc<dyn Mirror>>,
}

impl MockRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建带镜像的请求
    ///
    /// 构造时不写镜像，第一次 query / cookie 变更才会写入。
    pub fn with_mirror(mirror: Arc<dyn Mirror>) -> Self {
        Self {
            mirror: Some(mirror),
            ..Self::default()
        }
    }

    fn sync(&self, scope: Scope) {
        if let Some(mirror) = &self.mirror {
            let values = match scope {
                Scope::Query => &self.query,
                Scope::Cookie => &self.cookies,
            };
            mirror.write(scope, values);
        }
    }

    // ---------- query ----------

    pub fn set_query<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> &mut Self {
        self.query.insert(key.into(), value.into());
        self.sync(Scope::Query);
        self
    }

    /// 整体替换 query
    pub fn set_query_all<I, K, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query = to_param_map(values);
        self.sync(Scope::Query);
        self
    }

    pub fn clear_query(&mut self) -> &mut Self {
        self.query.clear();
        self.sync(Scope::Query);
        self
    }

    // ---------- post ----------

    pub fn set_post_all<I, K, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.post = to_param_map(values);
        self
    }

    pub fn clear_post(&mut self) -> &mut Self {
        self.post.clear();
        self
    }

    // ---------- raw body ----------

    pub fn set_raw_body<S: Into<String>>(&mut self, body: S) -> &mut Self {
        self.raw_body = Some(body.into());
        self
    }

    /// 回到未设置状态（None），不是空字符串
    pub fn clear_raw_body(&mut self) -> &mut Self {
        self.raw_body = None;
        self
    }

    // ---------- headers ----------

    pub fn set_header<V: Into<String>>(&mut self, name: &str, value: V) -> &mut Self {
        match HeaderKey::from_str(name) {
            Some(key) => {
                self.headers.insert(key, value.into());
            }
            None => warn!("ignoring header with empty name"),
        }
        self
    }

    /// 整体替换 headers
    pub fn set_headers<I, K, V>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.headers.clear();
        for (name, value) in headers {
            self.set_header(name.as_ref(), value);
        }
        self
    }

    pub fn clear_headers(&mut self) -> &mut Self {
        self.headers.clear();
        self
    }

    // ---------- cookies ----------

    pub fn set_cookie<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> &mut Self {
        self.cookies.insert(key.into(), value.into());
        self.sync(Scope::Cookie);
        self
    }

    /// 整体替换 cookies
    pub fn set_cookies<I, K, V>(&mut self, cookies: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.cookies = to_param_map(cookies);
        self.sync(Scope::Cookie);
        self
    }

    pub fn clear_cookies(&mut self) -> &mut Self {
        self.cookies.clear();
        self.sync(Scope::Cookie);
        self
    }

    // ---------- method ----------

    /// 按原样保存，不做大小写规范化
    pub fn set_method(&mut self, method: &str) -> &mut Self {
        self.method = method.to_string();
        self
    }

    // ---------- 位置 ----------

    pub fn set_request_uri<S: Into<String>>(&mut self, uri: S) -> &mut Self {
        self.request_uri = Some(uri.into());
        self
    }

    pub fn set_path_info<S: Into<String>>(&mut self, path_info: S) -> &mut Self {
        self.path_info = Some(path_info.into());
        self
    }

    pub fn set_base_url<S: Into<String>>(&mut self, base_url: S) -> &mut Self {
        self.base_url = Some(base_url.into());
        self
    }

    // ---------- 用户参数 ----------

    pub fn set_params<I, K, V>(&mut self, params: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in params {
            self.params.insert(k.into(), v.into());
        }
        self
    }

    pub fn clear_params(&mut self) -> &mut Self {
        self.params.clear();
        self
    }

    // ---------- builder ----------

    pub fn module(mut self, name: &str) -> Self {
        self.module = Some(name.to_string());
        self
    }

    pub fn controller(mut self, name: &str) -> Self {
        self.controller = Some(name.to_string());
        self
    }

    pub fn action(mut self, name: &str) -> Self {
        self.action = Some(name.to_string());
        self
    }

    /// 恢复所有默认值，镜像同步为空表
    pub fn reset(&mut self) -> &mut Self {
        let mirror = self.mirror.take();
        *self = Self {
            mirror,
            ..Self::default()
        };
        self.sync(Scope::Query);
        self.sync(Scope::Cookie);
        debug!("mock request reset");
        self
    }
}

impl Request for MockRequest {
    fn method(&self) -> &str {
        &self.method
    }

    fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    fn query_all(&self) -> &ParamMap {
        &self.query
    }

    fn post(&self, key: &str) -> Option<&str> {
        self.post.get(key).map(String::as_str)
    }

    fn post_all(&self) -> &ParamMap {
        &self.post
    }

    fn set_post(&mut self, key: &str, value: &str) {
        self.post.insert(key.to_string(), value.to_string());
    }

    fn cookie(&self, key: &str) -> Option<&str> {
        self.cookies.get(key).map(String::as_str)
    }

    fn cookies(&self) -> &ParamMap {
        &self.cookies
    }

    fn header(&self, name: &str) -> Option<&str> {
        let key = HeaderKey::from_str(name)?;
        self.headers.get(&key).map(String::as_str)
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn raw_body(&self) -> Option<&str> {
        self.raw_body.as_deref()
    }

    fn request_uri(&self) -> Option<&str> {
        self.request_uri.as_deref()
    }

    fn path_info(&self) -> Option<&str> {
        self.path_info.as_deref()
    }

    fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn params(&self) -> &ParamMap {
        &self.params
    }

    fn set_param(&mut self, key: &str, value: &str) {
        self.params.insert(key.to_string(), value.to_string());
    }

    fn module_name(&self) -> Option<&str> {
        self.module.as_deref()
    }

    fn set_module_name(&mut self, name: &str) {
        self.module = Some(name.to_string());
    }

    fn controller_name(&self) -> Option<&str> {
        self.controller.as_deref()
    }

    fn set_controller_name(&mut self, name: &str) {
        self.controller = Some(name.to_string());
    }

    fn action_name(&self) -> Option<&str> {
        self.action.as_deref()
    }

    fn set_action_name(&mut self, name: &str) {
        self.action = Some(name.to_string());
    }
}
