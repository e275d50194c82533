use crate::http::{
    front::FrontConfig,
    params::{ParamMap, encode_segment},
    router::{Route, RouteError},
};

pub const MODULE_KEY: &str = "module";
pub const CONTROLLER_KEY: &str = "controller";
pub const ACTION_KEY: &str = "action";

/// 默认路由 `:module/:controller/:action/*`
#[derive(Clone, Debug)]
pub struct ModuleRoute {
    defaults: ParamMap,
}

impl ModuleRoute {
    pub fn new(default_module: &str, default_controller: &str, default_action: &str) -> Self {
        let mut defaults = ParamMap::new();
        defaults.insert(MODULE_KEY.to_string(), default_module.to_string());
        defaults.insert(CONTROLLER_KEY.to_string(), default_controller.to_string());
        defaults.insert(ACTION_KEY.to_string(), default_action.to_string());
        Self { defaults }
    }

    pub fn from_config(config: &FrontConfig) -> Self {
        Self::new(
            &config.default_module,
            &config.default_controller,
            &config.default_action,
        )
    }

    fn default_of(&self, key: &str) -> &str {
        self.defaults.get(key).map(String::as_str).unwrap_or_default()
    }
}

impl Route for ModuleRoute {
    fn assemble(&self, data: &ParamMap, encode: bool) -> Result<String, RouteError> {
        let enc = |s: &str| if encode { encode_segment(s) } else { s.to_string() };

        let mut params = data.clone();
        // 只有显式给出且不同于默认模块时才输出 module 段
        let module = params
            .shift_remove(MODULE_KEY)
            .filter(|m| m != self.default_of(MODULE_KEY));
        let controller = params
            .shift_remove(CONTROLLER_KEY)
            .unwrap_or_else(|| self.default_of(CONTROLLER_KEY).to_string());
        let action = params
            .shift_remove(ACTION_KEY)
            .unwrap_or_else(|| self.default_of(ACTION_KEY).to_string());

        let mut url = String::new();
        for (k, v) in &params {
            url.push('/');
            url.push_str(&enc(k));
            url.push('/');
            url.push_str(&enc(v));
        }

        if !url.is_empty() || action != self.default_of(ACTION_KEY) {
            url = format!("/{}{}", enc(&action), url);
        }
        if !url.is_empty() || controller != self.default_of(CONTROLLER_KEY) {
            url = format!("/{}{}", enc(&controller), url);
        }
        if let Some(module) = module {
            url = format!("/{}{}", enc(&module), url);
        }

        Ok(url.trim_start_matches('/').to_string())
    }

    fn defaults(&self) -> &ParamMap {
        &self.defaults
    }
}
